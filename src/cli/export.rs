use std::path::Path;

use crate::cli::commands::ExportArgs;
use crate::errors::LedgerError;
use crate::store::{self, LedgerFormat};

pub async fn handle_export(
    args: ExportArgs,
    ledger_path: Option<&Path>,
) -> Result<(), LedgerError> {
    let ledger = store::resolve_ledger(ledger_path).await?;
    let format = match &args.format {
        Some(name) => LedgerFormat::from_name(name)?,
        None => LedgerFormat::from_path(&args.output)?,
    };
    store::save_ledger(&ledger, &args.output, format).await?;
    println!("Ledger exported to {}", args.output.display());
    Ok(())
}
