//! modelcheck core library.
//!
//! This crate exposes programmatic APIs for checking folders of 3D model
//! assets against a packaging convention, and for fixing the one class of
//! violation that is safe to fix automatically.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `check`: The checker that runs every rule over each model folder.
//! - `checks`: Individual rules (naming, layout, textures, materials, metadata).
//! - `fix`: Diffuse color autofix for material files.
//! - `models`: Severity, findings, reports, and the convention settings.
//! - `output`: Human/JSON printers.
//! - `error`: Hard failures distinct from findings.
//! - `utils`: Supporting helpers.
pub mod check;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod fix;
pub mod models;
pub mod output;
pub mod utils;
