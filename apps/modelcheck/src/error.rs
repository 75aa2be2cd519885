//! Hard failures raised while checking one asset.
//!
//! These are distinct from findings: a finding is a convention violation in
//! an otherwise readable asset, a `CheckError` means a file could not be
//! read, written, or interpreted against the expected template.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not well-formed XML: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },
    #[error("{path} is missing required <{node}> node")]
    MissingNode { path: PathBuf, node: String },
    #[error("{path}: <{node}> holds non-numeric value '{value}'")]
    MalformedNode {
        path: PathBuf,
        node: String,
        value: String,
    },
    #[error("invalid asset root pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("{path}:{line}: {reason}")]
    MalformedMaterial {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl CheckError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CheckError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
