//! OBJ meshes must reference material libraries shipped alongside them.

use crate::error::{CheckError, Result};
use crate::models::Finding;
use crate::utils;
use std::fs;
use std::path::Path;

/// Check the `mtllib` directives of every `.obj` directly inside `meshes`.
pub fn check_obj_material_refs(meshes: &Path) -> Result<Vec<Finding>> {
    if !meshes.is_dir() {
        return Ok(Vec::new());
    }
    let mut findings = Vec::new();
    for path in utils::list_dir(meshes)? {
        if !path.is_file() || utils::extension(&path) != "obj" {
            continue;
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let text = fs::read_to_string(&path).map_err(|e| CheckError::io(&path, e))?;
        let libs: Vec<&str> = text
            .lines()
            .filter_map(|l| l.trim().strip_prefix("mtllib "))
            .flat_map(|rest| rest.split_whitespace())
            .collect();
        if libs.is_empty() {
            findings.push(Finding::warning(format!(
                "{} references no material library",
                file_name
            )));
        }
        for lib in libs {
            if !meshes.join(lib).is_file() {
                findings.push(Finding::error(format!(
                    "{} references missing material library {}",
                    file_name, lib
                )));
            }
        }
    }
    Ok(findings)
}
