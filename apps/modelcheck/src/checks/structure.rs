//! Folder layout rules for the asset root and its `meshes/` subfolder.

use crate::checks::texture::is_valid_texture_name;
use crate::error::Result;
use crate::models::convention::Convention;
use crate::models::Finding;
use crate::utils;
use std::path::Path;

pub const MESHES_DIR: &str = "meshes";
pub const SCENE_FILE: &str = "model.sdf";
pub const CONFIG_FILE: &str = "model.config";

/// Run both layout checks. The meshes check is skipped when the folder is
/// absent, the root check already reports it.
pub fn check_folder_structure(name: &str, dir: &Path, conv: &Convention) -> Result<Vec<Finding>> {
    let mut findings = check_root_layout(dir, conv)?;
    let meshes = dir.join(MESHES_DIR);
    if meshes.is_dir() {
        findings.extend(check_meshes_layout(name, &meshes, conv)?);
    }
    Ok(findings)
}

/// Root folder holds `model.sdf`, `model.config` and `meshes/` only.
/// All existence checks run; none short-circuits another.
pub fn check_root_layout(dir: &Path, conv: &Convention) -> Result<Vec<Finding>> {
    let entries = utils::list_dir(dir)?;
    let mut findings = Vec::new();
    if entries.len() > conv.max_root_entries {
        findings.push(Finding::error(format!(
            "model folder contains {} items, at most {} allowed",
            entries.len(),
            conv.max_root_entries
        )));
    }
    let has = |name: &str, want_dir: bool| {
        entries.iter().any(|p| {
            p.file_name().map_or(false, |n| n == name)
                && if want_dir { p.is_dir() } else { p.is_file() }
        })
    };
    if !has(MESHES_DIR, true) {
        findings.push(Finding::error("model missing meshes subfolder"));
    }
    if !has(SCENE_FILE, false) {
        findings.push(Finding::error(format!("model missing {}", SCENE_FILE)));
    }
    if !has(CONFIG_FILE, false) {
        findings.push(Finding::error(format!("model missing {}", CONFIG_FILE)));
    }
    Ok(findings)
}

/// `meshes/` is a flat list of files with allowed extensions, and images
/// follow the texture naming rule.
pub fn check_meshes_layout(name: &str, meshes: &Path, conv: &Convention) -> Result<Vec<Finding>> {
    let entries = utils::list_dir(meshes)?;
    let mut findings = Vec::new();
    if entries.iter().any(|p| p.is_dir()) {
        findings.push(Finding::error("meshes folder contains subfolders"));
    }
    for path in entries.iter().filter(|p| p.is_file()) {
        let ext = utils::extension(path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if !conv.is_allowed_extension(&ext) {
            let shown = if ext.is_empty() { "(none)".to_string() } else { format!(".{}", ext) };
            findings.push(Finding::error(format!(
                "illegal extension in meshes folder: {} ({})",
                shown, file_name
            )));
        } else if conv.is_image_extension(&ext) && !is_valid_texture_name(&file_name, name, conv) {
            findings.push(Finding::error(format!("illegal texture name: {}", file_name)));
        }
    }
    Ok(findings)
}
