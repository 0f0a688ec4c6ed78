use std::path::Path;

use tracing::info;

use crate::cli::commands::ReportArgs;
use crate::errors::LedgerError;
use crate::reporting::assembler::{assemble_report, write_report};
use crate::reporting::html::format_html_report;
use crate::store;

pub async fn handle_report(
    args: ReportArgs,
    ledger_path: Option<&Path>,
) -> Result<(), LedgerError> {
    let ledger = store::resolve_ledger(ledger_path).await?;

    match (&args.output, &args.html) {
        (Some(output), html) => {
            write_report(&ledger, output, html.as_deref()).await?;
        }
        (None, Some(html_path)) => {
            let html = format_html_report(&ledger);
            tokio::fs::write(html_path, &html).await?;
            info!(path = %html_path.display(), "HTML report generated");
        }
        (None, None) => {
            print!("{}", assemble_report(&ledger));
        }
    }
    Ok(())
}
