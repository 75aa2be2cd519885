//! Supporting helpers: colored stderr prefixes and directory listing.

use crate::error::{CheckError, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if color_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn warn_prefix() -> String {
    if color_enabled() {
        "warning:".yellow().bold().to_string()
    } else {
        "warning:".to_string()
    }
}

pub fn note_prefix() -> String {
    if color_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if color_enabled() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Asset name: final path segment, trailing separators ignored.
pub fn asset_name(dir: &Path) -> String {
    dir.components()
        .next_back()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Direct children of `dir`, sorted by path.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| CheckError::io(dir, e))? {
        out.push(entry.map_err(|e| CheckError::io(dir, e))?.path());
    }
    out.sort();
    Ok(out)
}

/// File extension without the dot, or empty when there is none.
pub fn extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Entries of `paths` that are not existing directories, in input order.
pub fn missing_roots(paths: &[String]) -> Vec<&str> {
    paths
        .iter()
        .filter(|p| !Path::new(p.as_str()).is_dir())
        .map(String::as_str)
        .collect()
}

/// Display `path` relative to `base` when possible.
pub fn display_rel(path: &Path, base: &Path) -> String {
    pathdiff::diff_paths(path, base)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_name_strips_trailing_separator() {
        assert_eq!(asset_name(Path::new("models/Robot/")), "Robot");
        assert_eq!(asset_name(Path::new("models/Robot")), "Robot");
        assert_eq!(asset_name(Path::new("Robot")), "Robot");
    }

    #[test]
    fn test_list_dir_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        let names: Vec<_> = list_dir(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_missing_roots_checked_together() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().to_string_lossy().to_string();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "").unwrap();
        let file = file.to_string_lossy().to_string();
        let gone = dir.path().join("gone").to_string_lossy().to_string();
        let paths = vec![good, gone.clone(), file.clone()];
        assert_eq!(missing_roots(&paths), vec![gone.as_str(), file.as_str()]);
        assert!(missing_roots(&paths[..1]).is_empty());
    }

    #[test]
    fn test_display_rel() {
        let base = Path::new("/m/Robot");
        assert_eq!(display_rel(Path::new("/m/Robot/meshes/a.mtl"), base), "meshes/a.mtl");
    }
}
