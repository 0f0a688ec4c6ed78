use std::path::Path;

use crate::cli::commands::ListArgs;
use crate::cli::render::render_issue_line;
use crate::errors::LedgerError;
use crate::models::Severity;
use crate::store;

pub async fn handle_list(args: ListArgs, ledger_path: Option<&Path>) -> Result<(), LedgerError> {
    let ledger = store::resolve_ledger(ledger_path).await?;
    let severity = args
        .severity
        .as_deref()
        .map(str::parse::<Severity>)
        .transpose()?;
    let issues = ledger.list_issues(severity);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    for issue in &issues {
        println!("{}", render_issue_line(issue));
    }
    match severity {
        Some(tier) => println!("\n{} {} issue(s)", issues.len(), tier),
        None => println!("\n{} issue(s) detailed", issues.len()),
    }
    Ok(())
}
