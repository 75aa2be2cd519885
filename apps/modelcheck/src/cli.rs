//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "modelcheck",
    version,
    about = "Check 3D model folders against the asset packaging convention",
    long_about = "modelcheck — validate model folders (naming, layout, materials, metadata) and optionally fix mismatched diffuse colors.\n\nConfiguration precedence: CLI > modelcheck.toml > defaults.",
    after_help = "Examples:\n  modelcheck check models/\n  modelcheck check models/ more_models/ --level warning\n  modelcheck check models/ --fix --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current modelcheck version."
    )]
    Version,
    /// Check model folders
    #[command(
        about = "Check model folders",
        long_about = "Every immediate subdirectory of each PATH is checked as one model. Each PATH is reported separately.",
        after_help = "Examples:\n  modelcheck check ~/models\n  modelcheck check ~/models --fix"
    )]
    Check {
        #[arg(required = true, value_name = "PATH", help = "Folders whose subdirectories are models")]
        paths: Vec<String>,
        #[arg(short = 'f', long, action = clap::ArgAction::SetTrue, help = "Rewrite mismatched gray diffuse colors to the default (experimental)")]
        fix: bool,
        #[arg(short = 'l', long, help = "Lowest severity to report: info|warning|error|critical (default: info)")]
        level: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Path to a config file (default: discover modelcheck.toml)")]
        config: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Check models one at a time")]
        serial: bool,
    },
}
