//! Shared data models for check results and the packaging convention.

pub mod convention;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Finding severity. Variants are declared least to most critical so the
/// derived `Ord` ranks `Critical` highest.
pub enum Severity {
    Info,
    Warning,
    Error,
    /// Guaranteed visual defect, e.g. a literal color with no texture bound.
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" | "err" => Ok(Severity::Error),
            "critical" | "crit" => Ok(Severity::Critical),
            other => Err(format!(
                "unknown severity '{}' (expected info|warning|error|critical)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single convention violation.
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }
}

#[derive(Debug, Clone, Serialize)]
/// Everything learned about one asset directory.
///
/// A report exists for every enumerated directory, even when `findings` is
/// empty. `failures` holds hard failures (malformed template or I/O); each
/// one stops only the rule group that raised it.
pub struct AssetReport {
    pub name: String,
    pub path: String,
    pub findings: Vec<Finding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixed: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

impl AssetReport {
    pub fn new(name: impl Into<String>, path: &Path) -> Self {
        Self {
            name: name.into(),
            path: path.to_string_lossy().to_string(),
            findings: Vec::new(),
            fixed: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Findings at or above `level`, most severe first. Ties keep discovery order.
    pub fn findings_at(&self, level: Severity) -> Vec<&Finding> {
        let mut out: Vec<&Finding> = self
            .findings
            .iter()
            .filter(|f| f.severity >= level)
            .collect();
        out.sort_by(|a, b| b.severity.cmp(&a.severity));
        out
    }

    pub fn is_clean_at(&self, level: Severity) -> bool {
        self.failures.is_empty() && !self.findings.iter().any(|f| f.severity >= level)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts computed from a finished run.
pub struct RunTotals {
    pub assets: usize,
    pub findings: usize,
    pub fixes: usize,
    pub clean: usize,
    pub failures: usize,
}

#[derive(Debug, Clone, Serialize)]
/// Result of checking one root directory.
pub struct CheckReport {
    pub root: String,
    pub assets: Vec<AssetReport>,
    /// Number of material files rewritten by the autofix.
    pub fixes: usize,
}

impl CheckReport {
    /// Compute totals, counting only findings at or above `level`.
    pub fn totals(&self, level: Severity) -> RunTotals {
        let mut totals = RunTotals {
            assets: self.assets.len(),
            fixes: self.fixes,
            ..RunTotals::default()
        };
        for a in &self.assets {
            totals.findings += a.findings.iter().filter(|f| f.severity >= level).count();
            if !a.failures.is_empty() {
                totals.failures += 1;
            }
            if a.is_clean_at(level) {
                totals.clean += 1;
            }
        }
        totals
    }

    /// True when any finding is at least `Error` or any asset failed.
    pub fn has_errors(&self) -> bool {
        self.assets
            .iter()
            .any(|a| !a.failures.is_empty() || a.findings.iter().any(|f| f.severity >= Severity::Error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_severity_order_and_parse() {
        assert!(Severity::Critical > Severity::Error);
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warning));
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn test_findings_at_sorts_most_severe_first() {
        let mut r = AssetReport::new("Robot", &PathBuf::from("models/Robot"));
        r.findings.push(Finding::warning("w1"));
        r.findings.push(Finding::error("e1"));
        r.findings.push(Finding::critical("c1"));
        r.findings.push(Finding::error("e2"));
        let msgs: Vec<_> = r
            .findings_at(Severity::Error)
            .iter()
            .map(|f| f.message.as_str())
            .collect();
        assert_eq!(msgs, vec!["c1", "e1", "e2"]);
        assert!(!r.is_clean_at(Severity::Critical));
    }

    #[test]
    fn test_totals_respect_level() {
        let mut a = AssetReport::new("Robot", &PathBuf::from("m/Robot"));
        a.findings.push(Finding::warning("author email missing"));
        let b = AssetReport::new("Table", &PathBuf::from("m/Table"));
        let report = CheckReport {
            root: "m".into(),
            assets: vec![a, b],
            fixes: 2,
        };
        let all = report.totals(Severity::Info);
        assert_eq!(all.assets, 2);
        assert_eq!(all.findings, 1);
        assert_eq!(all.clean, 1);
        assert_eq!(all.fixes, 2);
        let errors_only = report.totals(Severity::Error);
        assert_eq!(errors_only.findings, 0);
        assert_eq!(errors_only.clean, 2);
        assert!(!report.has_errors());
    }
}
