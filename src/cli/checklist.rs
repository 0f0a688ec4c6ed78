use std::path::Path;

use tracing::info;

use crate::cli::commands::ChecklistArgs;
use crate::cli::render::render_checklist_line;
use crate::errors::LedgerError;
use crate::store::{self, LedgerFormat};

pub async fn handle_checklist(
    args: ChecklistArgs,
    ledger_path: Option<&Path>,
) -> Result<(), LedgerError> {
    let mut ledger = store::resolve_ledger(ledger_path).await?;

    let change = args
        .mark
        .map(|n| (n, true))
        .or_else(|| args.unmark.map(|n| (n, false)));

    if let Some((position, tested)) = change {
        // Issue records are immutable; only the checklist flags can change,
        // and only on an on-disk ledger.
        let path = ledger_path.ok_or_else(|| {
            LedgerError::InvalidArgument(
                "marking checklist items requires --ledger; export the built-in dataset first"
                    .to_string(),
            )
        })?;
        let index = position
            .checked_sub(1)
            .ok_or(LedgerError::ChecklistIndex(position))?;
        if !ledger.set_checklist_tested(index, tested) {
            return Err(LedgerError::ChecklistIndex(position));
        }
        store::save_ledger(&ledger, path, LedgerFormat::from_path(path)?).await?;
        info!(item = position, tested, "Checklist updated");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(ledger.checklist())?);
        return Ok(());
    }

    println!("Verification checklist:");
    for (index, item) in ledger.checklist().iter().enumerate() {
        println!("{}", render_checklist_line(index, item));
    }
    let done = ledger.checklist().iter().filter(|i| i.tested).count();
    println!("\n{}/{} conditions verified", done, ledger.checklist().len());
    Ok(())
}
