//! On-disk ledger files.
//!
//! A ledger exported with `mobaudit export` can be fed back to any
//! subcommand via `--ledger`; the serialization format is inferred from the
//! file extension.

use std::path::Path;

use tracing::info;

use crate::errors::LedgerError;
use crate::models::AuditLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFormat {
    Json,
    Yaml,
}

impl LedgerFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, LedgerError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(LedgerFormat::Json),
            Some("yaml") | Some("yml") => Ok(LedgerFormat::Yaml),
            _ => Err(LedgerError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, LedgerError> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(LedgerFormat::Json),
            "yaml" | "yml" => Ok(LedgerFormat::Yaml),
            other => Err(LedgerError::InvalidArgument(format!(
                "unknown format '{other}' (expected json or yaml)"
            ))),
        }
    }
}

pub async fn load_ledger(path: &Path) -> Result<AuditLedger, LedgerError> {
    let content = tokio::fs::read_to_string(path).await?;
    let ledger = match LedgerFormat::from_path(path)? {
        LedgerFormat::Json => serde_json::from_str(&content)?,
        LedgerFormat::Yaml => serde_yaml::from_str(&content)?,
    };
    info!(path = %path.display(), "Loaded ledger");
    Ok(ledger)
}

pub async fn save_ledger(
    ledger: &AuditLedger,
    path: &Path,
    format: LedgerFormat,
) -> Result<(), LedgerError> {
    let content = match format {
        LedgerFormat::Json => {
            let mut json = serde_json::to_string_pretty(ledger)?;
            json.push('\n');
            json
        }
        LedgerFormat::Yaml => serde_yaml::to_string(ledger)?,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, content).await?;
    info!(path = %path.display(), "Ledger written");
    Ok(())
}

/// Resolve the working ledger: an on-disk file when `--ledger` was given,
/// the built-in dataset otherwise.
pub async fn resolve_ledger(path: Option<&Path>) -> Result<AuditLedger, LedgerError> {
    match path {
        Some(path) => load_ledger(path).await,
        None => Ok(crate::dataset::builtin_ledger()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::LedgerFormat;

    #[test]
    fn format_inferred_from_extension() {
        assert_eq!(
            LedgerFormat::from_path(Path::new("audit.json")).unwrap(),
            LedgerFormat::Json
        );
        assert_eq!(
            LedgerFormat::from_path(Path::new("audit.yml")).unwrap(),
            LedgerFormat::Yaml
        );
        assert!(LedgerFormat::from_path(Path::new("audit.toml")).is_err());
    }
}
