//! Checker: runs the rule set over every asset directory under a root.
//!
//! Assets are independent, so they are validated in parallel with rayon
//! and collected back in enumeration order. The only writes are autofix
//! rewrites of an asset's own material files; the fix count is derived
//! from the returned reports, never from shared state.

use crate::checks::structure::{CONFIG_FILE, MESHES_DIR, SCENE_FILE};
use crate::checks::{material, mesh, metadata, naming, structure};
use crate::error::{CheckError, Result};
use crate::fix;
use crate::models::convention::Convention;
use crate::models::{AssetReport, CheckReport, Finding};
use crate::utils;
use glob::{glob_with, MatchOptions};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Immediate non-hidden subdirectories of `root`, sorted by path.
pub fn enumerate_assets(root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*", glob::Pattern::escape(&root.to_string_lossy()));
    let opts = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let mut dirs = Vec::new();
    for entry in glob_with(&pattern, opts)? {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            CheckError::io(&path, e.into_error())
        })?;
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// One checker per root; holds the convention and run switches.
pub struct Checker {
    convention: Convention,
    fix: bool,
    parallel: bool,
}

impl Checker {
    pub fn new(convention: Convention, fix: bool) -> Self {
        Self {
            convention,
            fix,
            parallel: true,
        }
    }

    pub fn parallel(mut self, on: bool) -> Self {
        self.parallel = on;
        self
    }

    /// Check every asset under `root`. A root with no assets yields an
    /// empty report.
    pub fn run(&self, root: &Path) -> Result<CheckReport> {
        let dirs = enumerate_assets(root)?;
        let check = |dir: &PathBuf| self.check_model(dir);
        let assets: Vec<AssetReport> = if self.parallel {
            dirs.par_iter().map(check).collect()
        } else {
            dirs.iter().map(check).collect()
        };
        let fixes: usize = assets.iter().map(|a| a.fixed.len()).sum();
        Ok(CheckReport {
            root: root.to_string_lossy().to_string(),
            assets,
            fixes,
        })
    }

    /// Run the full rule set against one asset directory.
    ///
    /// Hard failures are recorded on the report; each one only stops the
    /// rule group that raised it.
    pub fn check_model(&self, dir: &Path) -> AssetReport {
        let conv = &self.convention;
        let name = utils::asset_name(dir);
        let mut report = AssetReport::new(name.as_str(), dir);
        let meshes = dir.join(MESHES_DIR);

        report.findings.extend(naming::check_model_name(&name));
        collect(&mut report, structure::check_folder_structure(&name, dir, conv));
        collect(&mut report, mesh::check_obj_material_refs(&meshes));
        match material::material_files(&meshes) {
            Ok(files) => {
                for path in files {
                    match material::check_material_file(&path, conv) {
                        Ok(Some(verdict)) => self.apply_verdict(&mut report, dir, verdict),
                        Ok(None) => {}
                        Err(e) => report.failures.push(e.to_string()),
                    }
                }
            }
            Err(e) => report.failures.push(e.to_string()),
        }
        collect(&mut report, metadata::check_config(&dir.join(CONFIG_FILE), conv));
        collect(&mut report, metadata::check_scene(&dir.join(SCENE_FILE)));
        report
    }

    fn apply_verdict(&self, report: &mut AssetReport, dir: &Path, verdict: material::MaterialVerdict) {
        report.findings.extend(verdict.findings);
        if !(self.fix && verdict.fixable) {
            return;
        }
        match fix::fix_material(&verdict.path, &self.convention) {
            Ok(()) => report.fixed.push(utils::display_rel(&verdict.path, dir)),
            Err(e) => report.failures.push(e.to_string()),
        }
    }
}

fn collect(report: &mut AssetReport, found: Result<Vec<Finding>>) {
    match found {
        Ok(f) => report.findings.extend(f),
        Err(e) => report.failures.push(e.to_string()),
    }
}
