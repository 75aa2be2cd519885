//! Output rendering for check reports.
//!
//! Supports `human` (default) and `json` outputs. Only findings at or above
//! the requested level are shown and counted; hard failures always are.

use crate::models::{AssetReport, CheckReport, Severity};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn severity_tag(sev: Severity, color: bool) -> String {
    let tag = format!("⟦{}⟧", sev);
    if !color {
        return tag;
    }
    match sev {
        Severity::Critical => tag.magenta().bold().to_string(),
        Severity::Error => tag.red().bold().to_string(),
        Severity::Warning => tag.yellow().bold().to_string(),
        Severity::Info => tag.blue().bold().to_string(),
    }
}

fn compose_asset(a: &AssetReport, level: Severity, color: bool, out: &mut String) {
    if a.is_clean_at(level) {
        let ok = if color { "OK".green().to_string() } else { "OK".to_string() };
        out.push_str(&format!("✔ {} {}\n", a.name, ok));
    } else {
        let name = if color { a.name.clone().bold().to_string() } else { a.name.clone() };
        out.push_str(&format!("✖ {}\n", name));
        for f in a.findings_at(level) {
            out.push_str(&format!("    {} {}\n", severity_tag(f.severity, color), f.message));
        }
        for e in &a.failures {
            let tag = if color { "⟦failed⟧".red().bold().to_string() } else { "⟦failed⟧".to_string() };
            out.push_str(&format!("    {} {}\n", tag, e));
        }
    }
    for file in &a.fixed {
        let tag = if color { "fixed:".green().to_string() } else { "fixed:".to_string() };
        out.push_str(&format!("    {} {}\n", tag, file));
    }
}

/// Compose the human report for one root (pure) for testing purposes.
pub fn compose_human(report: &CheckReport, level: Severity, color: bool) -> String {
    let mut out = String::new();
    let header = format!("── {} ──", report.root);
    if color {
        out.push_str(&format!("{}\n", header.bold()));
    } else {
        out.push_str(&format!("{}\n", header));
    }
    for a in &report.assets {
        compose_asset(a, level, color, &mut out);
    }
    let t = report.totals(level);
    let summary = format!(
        "— Summary — assets={} findings={} fixes={} clean={} failures={}",
        t.assets, t.findings, t.fixes, t.clean, t.failures
    );
    if color {
        out.push_str(&format!("{}\n", summary.bold()));
    } else {
        out.push_str(&format!("{}\n", summary));
    }
    out
}

/// Compose the JSON document for all roots (pure) for testing purposes.
pub fn compose_check_json(reports: &[CheckReport], level: Severity) -> JsonVal {
    let roots: Vec<_> = reports
        .iter()
        .map(|r| {
            let assets: Vec<_> = r
                .assets
                .iter()
                .map(|a| {
                    json!({
                        "name": a.name,
                        "path": a.path,
                        "ok": a.is_clean_at(level),
                        "findings": a.findings_at(level),
                        "fixed": a.fixed,
                        "failures": a.failures,
                    })
                })
                .collect();
            json!({
                "root": r.root,
                "assets": assets,
                "summary": r.totals(level),
            })
        })
        .collect();
    json!({ "level": level, "roots": roots })
}

/// Print check results in the requested format.
pub fn print_check(reports: &[CheckReport], output: &str, level: Severity) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_check_json(reports, level)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            for r in reports {
                print!("{}", compose_human(r, level, color));
            }
        }
    }
}
