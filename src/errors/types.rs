use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid severity: {0} (expected critical, high, or medium)")]
    InvalidSeverity(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported ledger format: {} (expected .json, .yaml, or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("No checklist item at position {0}")]
    ChecklistIndex(usize),

    #[error("Ledger failed consistency checks: {0} finding(s)")]
    Inconsistent(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
