use std::path::Path;

use console::style;

use crate::cli::commands::LintArgs;
use crate::errors::LedgerError;
use crate::lint::lint;
use crate::store;

pub async fn handle_lint(args: LintArgs, ledger_path: Option<&Path>) -> Result<(), LedgerError> {
    let ledger = store::resolve_ledger(ledger_path).await?;
    let report = lint(&ledger);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for finding in &report.findings {
            println!("{} {}", style("✗").red(), style(finding).red());
        }
        for note in &report.notes {
            println!("{} {}", style("·").dim(), style(note).dim());
        }
        if report.is_clean() {
            println!("{} ledger is consistent", style("✓").green());
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(LedgerError::Inconsistent(report.findings.len()))
    }
}
