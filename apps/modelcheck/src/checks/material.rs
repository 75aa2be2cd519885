//! Diffuse color rule for Wavefront material (`.mtl`) files.
//!
//! A diffuse-color line carries the diffuse token (`Kd`) and no texture-map
//! token (`map_*`). Its last three fields form the RGB triple, which must
//! equal the convention default on every channel. A material that defines
//! a literal color but binds no texture map at all is a critical defect,
//! and that outcome excludes autofixing the file.

use crate::error::{CheckError, Result};
use crate::models::convention::Convention;
use crate::models::Finding;
use crate::utils;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of checking one material file.
#[derive(Debug, Clone)]
pub struct MaterialVerdict {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
    /// Mismatched, monochromatic, and texture-bound: safe for the autofix.
    pub fixable: bool,
}

/// Diffuse information gathered from one material file.
#[derive(Debug, Default, PartialEq)]
pub struct DiffuseScan {
    pub triples: Vec<[f64; 3]>,
    pub color_found: bool,
    pub map_found: bool,
}

/// The part of `line` before any `#` comment.
pub fn code(line: &str) -> &str {
    line.split('#').next().unwrap_or("")
}

/// True when one of the tokens starts with the texture-map prefix.
pub fn is_map_line(line: &str, conv: &Convention) -> bool {
    code(line)
        .split_whitespace()
        .any(|t| t.starts_with(conv.map_prefix.as_str()))
}

/// True for a literal diffuse color line (diffuse token, no map token).
pub fn is_diffuse_line(line: &str, conv: &Convention) -> bool {
    code(line).split_whitespace().any(|t| t == conv.diffuse_token) && !is_map_line(line, conv)
}

/// Whitespace fields after the diffuse token, comment excluded.
pub fn diffuse_fields<'a>(line: &'a str, conv: &Convention) -> Vec<&'a str> {
    code(line)
        .split_whitespace()
        .skip_while(|t| *t != conv.diffuse_token)
        .skip(1)
        .collect()
}

/// Scan material text. Fails when a diffuse line lacks three numeric fields.
pub fn scan_material(text: &str, path: &Path, conv: &Convention) -> Result<DiffuseScan> {
    let mut scan = DiffuseScan::default();
    for (idx, line) in text.lines().enumerate() {
        if is_map_line(line, conv) {
            scan.map_found = true;
            continue;
        }
        if !is_diffuse_line(line, conv) {
            continue;
        }
        scan.color_found = true;
        let fields = diffuse_fields(line, conv);
        if fields.len() < 3 {
            return Err(CheckError::MalformedMaterial {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: format!("expected three values after {}", conv.diffuse_token),
            });
        }
        let mut rgb = [0.0f64; 3];
        for (slot, raw) in rgb.iter_mut().zip(&fields[fields.len() - 3..]) {
            *slot = raw.parse::<f64>().map_err(|_| CheckError::MalformedMaterial {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: format!("'{}' is not a number", raw),
            })?;
        }
        scan.triples.push(rgb);
    }
    Ok(scan)
}

fn same(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::EPSILON
}

fn is_monochromatic(rgb: &[f64; 3]) -> bool {
    same(rgb[0], rgb[1]) && same(rgb[1], rgb[2])
}

/// Judge a scan: findings plus whether the autofix may rewrite the file.
pub fn judge(scan: &DiffuseScan, file_name: &str, conv: &Convention) -> (Vec<Finding>, bool) {
    let mismatch = scan
        .triples
        .iter()
        .any(|rgb| rgb.iter().any(|v| !same(*v, conv.diffuse_default)));
    let untextured = scan.color_found && !scan.map_found;
    let mut findings = Vec::new();
    if mismatch {
        findings.push(Finding::error(format!(
            "{} value in {} differs from default of {}",
            conv.diffuse_token, file_name, conv.diffuse_default
        )));
    }
    if untextured {
        findings.push(Finding::critical(format!(
            "{} defines a diffuse color but binds no texture map",
            file_name
        )));
    }
    let fixable = mismatch && !untextured && scan.triples.iter().all(is_monochromatic);
    (findings, fixable)
}

/// Check one material file. Returns `None` for vertex-color materials.
pub fn check_material_file(path: &Path, conv: &Convention) -> Result<Option<MaterialVerdict>> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    if conv.is_vertex_color_material(&stem) {
        return Ok(None);
    }
    let text = fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
    let scan = scan_material(&text, path, conv)?;
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let (findings, fixable) = judge(&scan, &file_name, conv);
    Ok(Some(MaterialVerdict {
        path: path.to_path_buf(),
        findings,
        fixable,
    }))
}

/// Material files directly inside `meshes`, in path order.
pub fn material_files(meshes: &Path) -> Result<Vec<PathBuf>> {
    if !meshes.is_dir() {
        return Ok(Vec::new());
    }
    Ok(utils::list_dir(meshes)?
        .into_iter()
        .filter(|p| p.is_file() && utils::extension(p) == "mtl")
        .collect())
}
