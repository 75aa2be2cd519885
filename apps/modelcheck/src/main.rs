//! modelcheck CLI binary entry point.
//! Resolves configuration, checks each root, and prints results.

use clap::Parser;
use modelcheck::check::Checker;
use modelcheck::cli::{Cli, Commands};
use modelcheck::models::CheckReport;
use modelcheck::{config, output, utils};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            paths,
            fix,
            level,
            output,
            config: config_path,
            serial,
        } => {
            let eff = match config::resolve_effective(
                None,
                config_path.as_deref(),
                output.as_deref(),
                level.as_deref(),
                if fix { Some(true) } else { None },
                if serial { Some(false) } else { None },
            ) {
                Ok(eff) => eff,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let human = eff.output != "json";
            if human {
                match eff.config_path.as_ref() {
                    Some(p) => eprintln!(
                        "{} Using config {}",
                        utils::info_prefix(),
                        p.to_string_lossy()
                    ),
                    None => eprintln!(
                        "{} No modelcheck.toml found; using defaults.",
                        utils::note_prefix()
                    ),
                }
                if eff.fix {
                    eprintln!(
                        "{} Autofix enabled; mismatched gray diffuse colors will be rewritten.",
                        utils::warn_prefix()
                    );
                }
            }

            // Reject bad roots before any root is checked or fixed.
            let missing = utils::missing_roots(&paths);
            if !missing.is_empty() {
                for path in missing {
                    eprintln!("{} Model folder not found: {}", utils::error_prefix(), path);
                }
                std::process::exit(2);
            }

            let mut reports: Vec<CheckReport> = Vec::new();
            let mut unreadable = false;
            for path in &paths {
                let root = Path::new(path);
                // Fresh checker per root; nothing carries over between roots.
                let checker = Checker::new(eff.convention.clone(), eff.fix).parallel(eff.parallel);
                match checker.run(root) {
                    Ok(r) => {
                        if human {
                            for a in r.assets.iter().filter(|a| !a.fixed.is_empty()) {
                                for f in &a.fixed {
                                    eprintln!("{} fixed {}/{}", utils::info_prefix(), a.path, f);
                                }
                            }
                        }
                        reports.push(r);
                    }
                    Err(e) => {
                        eprintln!("{} {}", utils::error_prefix(), e);
                        unreadable = true;
                    }
                }
            }
            output::print_check(&reports, &eff.output, eff.level);
            if unreadable {
                std::process::exit(2);
            }
            if reports.iter().any(|r| r.has_errors()) {
                std::process::exit(1);
            }
        }
    }
}
