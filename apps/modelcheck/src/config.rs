//! Configuration discovery and effective settings resolution.
//!
//! modelcheck reads `modelcheck.toml|yaml|yml` from the starting directory
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `level`: `info`
//! - `fix`: false
//! - `parallel`: true
//! - `[convention]`: see `models::convention::Convention::default`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::models::convention::Convention;
use crate::models::Severity;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["modelcheck.toml", "modelcheck.yaml", "modelcheck.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `modelcheck.toml|yaml`.
pub struct ModelcheckConfig {
    pub output: Option<String>,
    pub level: Option<String>,
    pub fix: Option<bool>,
    pub parallel: Option<bool>,
    #[serde(default)]
    pub convention: Option<Convention>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub config_path: Option<PathBuf>,
    pub output: String,
    pub level: Severity,
    pub fix: bool,
    pub parallel: bool,
    pub convention: Convention,
}

/// Walk upward from `start` looking for a config file.
///
/// Stops at the first directory holding one, or at a `.git` directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let abs = fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    let mut cur = abs.as_path();
    loop {
        for name in CONFIG_NAMES {
            let p = cur.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load a config file, choosing the parser by extension.
pub fn load_config(path: &Path) -> Result<ModelcheckConfig, String> {
    let s = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.to_string_lossy(), e))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&s)
            .map_err(|e| format!("{} is not valid YAML: {}", path.to_string_lossy(), e))
    } else {
        toml::from_str(&s)
            .map_err(|e| format!("{} is not valid TOML: {}", path.to_string_lossy(), e))
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// `cli_config` names a config file explicitly; otherwise one is searched
/// for upward from `start` (default: current dir).
pub fn resolve_effective(
    start: Option<&str>,
    cli_config: Option<&str>,
    cli_output: Option<&str>,
    cli_level: Option<&str>,
    cli_fix: Option<bool>,
    cli_parallel: Option<bool>,
) -> Result<Effective, String> {
    let config_path = match cli_config {
        Some(p) => {
            let p = PathBuf::from(p);
            if !p.is_file() {
                return Err(format!("config file not found: {}", p.to_string_lossy()));
            }
            Some(p)
        }
        None => find_config(Path::new(start.unwrap_or("."))),
    };
    let cfg = match config_path.as_ref() {
        Some(p) => load_config(p)?,
        None => ModelcheckConfig::default(),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if output != "human" && output != "json" {
        return Err(format!("unknown output mode '{}' (expected human|json)", output));
    }
    let level = match cli_level.map(|s| s.to_string()).or(cfg.level) {
        Some(s) => s.parse::<Severity>()?,
        None => Severity::Info,
    };
    let fix = cli_fix.or(cfg.fix).unwrap_or(false);
    let parallel = cli_parallel.or(cfg.parallel).unwrap_or(true);

    Ok(Effective {
        config_path,
        output,
        level,
        fix,
        parallel,
        convention: cfg.convention.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("modelcheck.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
level = "warning"
fix = true
[convention]
texture_suffixes = ["Diffuse", "Normal", "Rough", "Metal"]
vertex_color_suffixes = ["Col", "VColor"]
    "#
        )
        .unwrap();
        fs::create_dir_all(root.join("models/Robot")).unwrap();

        let start = root.join("models/Robot");
        let eff = resolve_effective(start.to_str(), None, None, None, None, None).unwrap();
        assert_eq!(eff.output, "json");
        assert_eq!(eff.level, Severity::Warning);
        assert!(eff.fix);
        assert!(eff.parallel);
        assert_eq!(eff.convention.texture_suffixes.len(), 4);
        assert!(eff.convention.is_vertex_color_material("TreeVColor"));
        assert_eq!(eff.convention.diffuse_default, 0.8);
    }

    #[test]
    fn test_load_yaml_and_cli_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("modelcheck.yaml"),
            "output: json\nlevel: error\nfix: true\nparallel: false\n",
        )
        .unwrap();
        let eff = resolve_effective(
            root.to_str(),
            None,
            Some("human"),
            Some("critical"),
            Some(false),
            None,
        )
        .unwrap();
        assert_eq!(eff.output, "human");
        assert_eq!(eff.level, Severity::Critical);
        assert!(!eff.fix);
        assert!(!eff.parallel);
    }

    #[test]
    fn test_defaults_when_no_config_and_git_boundary() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("modelcheck.toml"), "fix = true\n").unwrap();
        let repo = root.join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        let eff = resolve_effective(repo.to_str(), None, None, None, None, None).unwrap();
        assert!(eff.config_path.is_none());
        assert_eq!(eff.output, "human");
        assert_eq!(eff.level, Severity::Info);
        assert!(!eff.fix);
        assert_eq!(eff.convention.max_root_entries, 3);
    }

    #[test]
    fn test_explicit_config_and_errors() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let cfg = root.join("custom.toml");
        fs::write(&cfg, "[convention]\nmax_root_entries = 5\n").unwrap();
        let eff = resolve_effective(None, cfg.to_str(), None, None, None, None).unwrap();
        assert_eq!(eff.convention.max_root_entries, 5);

        let missing = root.join("nope.toml");
        assert!(resolve_effective(None, missing.to_str(), None, None, None, None).is_err());
        assert!(resolve_effective(root.to_str(), None, Some("xml"), None, None, None).is_err());
        assert!(resolve_effective(root.to_str(), None, None, Some("loud"), None, None).is_err());

        fs::write(root.join("modelcheck.toml"), "fix = [").unwrap();
        assert!(resolve_effective(root.to_str(), None, None, None, None, None).is_err());
    }
}
