//! Autofix for mismatched diffuse colors in material files.
//!
//! Every numeric field after the diffuse token is replaced with the
//! convention default, printed with as many decimals as the line's last
//! field had. Spacing and trailing comments are kept. The file is read
//! whole, rewritten in memory, and replaced atomically through a temporary
//! file in the same directory; on failure the original is left untouched.

use crate::checks::material::{code, diffuse_fields, is_diffuse_line};
use crate::error::{CheckError, Result};
use crate::models::convention::Convention;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

fn field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S+").expect("valid field regex"))
}

/// Decimal digits of a plain decimal field; exponent and integer forms
/// count as zero.
fn decimals(field: &str) -> usize {
    if field.contains(['e', 'E']) {
        return 0;
    }
    field
        .split_once('.')
        .map(|(_, frac)| frac.chars().take_while(|c| c.is_ascii_digit()).count())
        .unwrap_or(0)
}

fn rewrite_line(line: &str, conv: &Convention) -> String {
    let fields = diffuse_fields(line, conv);
    let precision = fields.last().map_or(0, |f| decimals(f)).max(1);
    let value = format!("{:.*}", precision, conv.diffuse_default);

    let body = code(line);
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    let mut after_token = false;
    for m in field_re().find_iter(body) {
        let tok = m.as_str();
        out.push_str(&body[last..m.start()]);
        if after_token && tok.parse::<f64>().is_ok() {
            out.push_str(&value);
        } else {
            out.push_str(tok);
        }
        if tok == conv.diffuse_token {
            after_token = true;
        }
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

/// Rewrite all diffuse-color lines of `text`. Other lines and all line
/// terminators pass through unchanged.
pub fn rewrite_diffuse(text: &str, conv: &Convention) -> String {
    let mut out = String::with_capacity(text.len());
    for chunk in text.split_inclusive('\n') {
        let body = chunk.trim_end_matches(['\n', '\r']);
        let ending = &chunk[body.len()..];
        if is_diffuse_line(body, conv) {
            out.push_str(&rewrite_line(body, conv));
        } else {
            out.push_str(body);
        }
        out.push_str(ending);
    }
    out
}

/// Rewrite the diffuse colors of the material at `path` in place.
pub fn fix_material(path: &Path, conv: &Convention) -> Result<()> {
    let original = fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
    let fixed = rewrite_diffuse(&original, conv);
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| CheckError::io(dir, e))?;
    tmp.write_all(fixed.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| CheckError::io(tmp.path(), e))?;
    let perms = fs::metadata(path)
        .map_err(|e| CheckError::io(path, e))?
        .permissions();
    fs::set_permissions(tmp.path(), perms).map_err(|e| CheckError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| CheckError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::material::check_material_file;
    use tempfile::tempdir;

    #[test]
    fn test_preserves_six_decimals() {
        let conv = Convention::default();
        let out = rewrite_diffuse("Kd 0.500000 0.500000 0.500000\nmap_Kd a.png\n", &conv);
        assert_eq!(out, "Kd 0.800000 0.800000 0.800000\nmap_Kd a.png\n");
    }

    #[test]
    fn test_precision_follows_last_field() {
        let conv = Convention::default();
        assert_eq!(rewrite_diffuse("Kd 0.5 0.5 0.5000", &conv), "Kd 0.8000 0.8000 0.8000");
        assert_eq!(rewrite_diffuse("  Kd 1 1 1\r\n", &conv), "  Kd 0.8 0.8 0.8\r\n");
    }

    #[test]
    fn test_other_lines_untouched() {
        let conv = Convention::default();
        let text = "newmtl Robot_1\nNs 96.078431\nKa 1.0 1.0 1.0\nKd 0.64 0.64 0.64\nmap_Kd Robot_Diffuse.png\n";
        let out = rewrite_diffuse(text, &conv);
        assert_eq!(
            out,
            "newmtl Robot_1\nNs 96.078431\nKa 1.0 1.0 1.0\nKd 0.80 0.80 0.80\nmap_Kd Robot_Diffuse.png\n"
        );
    }

    #[test]
    fn test_fix_in_place_is_idempotent() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("Robot.mtl");
        fs::write(&p, "Kd 0.500000 0.500000 0.500000\nmap_Kd Robot_Diffuse.png\n").unwrap();
        let conv = Convention::default();
        fix_material(&p, &conv).unwrap();
        let after = fs::read_to_string(&p).unwrap();
        assert_eq!(after, "Kd 0.800000 0.800000 0.800000\nmap_Kd Robot_Diffuse.png\n");
        let v = check_material_file(&p, &conv).unwrap().unwrap();
        assert!(v.findings.is_empty());
        assert!(!v.fixable);
    }

    #[test]
    fn test_exponent_fields_rewritten_whole() {
        let conv = Convention::default();
        assert_eq!(
            rewrite_diffuse("Kd 5e-1 5e-1 5e-1\n", &conv),
            "Kd 0.8 0.8 0.8\n"
        );
        assert_eq!(rewrite_diffuse("Kd 0.50 0.50 5.0E-1", &conv), "Kd 0.8 0.8 0.8");

        let dir = tempdir().unwrap();
        let p = dir.path().join("Robot.mtl");
        fs::write(&p, "Kd 5e-1 5e-1 5e-1\nmap_Kd Robot_Diffuse.png\n").unwrap();
        let before = check_material_file(&p, &conv).unwrap().unwrap();
        assert!(before.fixable);
        fix_material(&p, &conv).unwrap();
        let after = check_material_file(&p, &conv).unwrap().unwrap();
        assert!(after.findings.is_empty());
    }

    #[test]
    fn test_spacing_and_comment_kept() {
        let conv = Convention::default();
        assert_eq!(
            rewrite_diffuse("\tKd  0.500\t0.500 0.500   # gray 2\n", &conv),
            "\tKd  0.800\t0.800 0.800   # gray 2\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_fix_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let p = dir.path().join("Robot.mtl");
        fs::write(&p, "Kd 0.5 0.5 0.5\nmap_Kd a.png\n").unwrap();
        fs::set_permissions(&p, fs::Permissions::from_mode(0o640)).unwrap();
        fix_material(&p, &Convention::default()).unwrap();
        let mode = fs::metadata(&p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_fix_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("Gone.mtl");
        assert!(fix_material(&p, &Convention::default()).is_err());
        assert!(!p.exists());
    }
}
