//! Texture file name rule for images inside `meshes/`.

use crate::models::convention::Convention;
use std::path::Path;

/// Return whether `file_name` is a legal texture name for `asset`.
///
/// Legal when the stem's part after the last underscore is an allowed
/// suffix (case-sensitive), or when the stem equals the asset name (the
/// thumbnail exception).
pub fn is_valid_texture_name(file_name: &str, asset: &str, conv: &Convention) -> bool {
    let stem = match Path::new(file_name).file_stem().and_then(|s| s.to_str()) {
        Some(s) => s,
        None => return false,
    };
    if stem == asset {
        return true;
    }
    match stem.rsplit_once('_') {
        Some((_, suffix)) => conv.texture_suffixes.iter().any(|s| s == suffix),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_and_thumbnail() {
        let conv = Convention::default();
        assert!(is_valid_texture_name("Robot_Diffuse.png", "Robot", &conv));
        assert!(is_valid_texture_name("Robot_Arm_Normal.png", "Robot", &conv));
        assert!(is_valid_texture_name("Robot_SpecGloss.png", "Robot", &conv));
        assert!(is_valid_texture_name("Robot.png", "Robot", &conv));
    }

    #[test]
    fn test_rejects_unknown_or_missing_suffix() {
        let conv = Convention::default();
        assert!(!is_valid_texture_name("robot_diffuse.png", "Robot", &conv));
        assert!(!is_valid_texture_name("Robot_Albedo.png", "Robot", &conv));
        assert!(!is_valid_texture_name("Thumbnail.png", "Robot", &conv));
        assert!(!is_valid_texture_name("Robot_.png", "Robot", &conv));
    }

    #[test]
    fn test_suffix_set_is_configurable() {
        let conv = Convention {
            texture_suffixes: vec!["Albedo".into()],
            ..Convention::default()
        };
        assert!(is_valid_texture_name("Robot_Albedo.png", "Robot", &conv));
        assert!(!is_valid_texture_name("Robot_Diffuse.png", "Robot", &conv));
    }
}
