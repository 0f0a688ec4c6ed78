use std::path::Path;

use console::style;

use crate::cli::commands::SummaryArgs;
use crate::cli::render::render_severity_badge;
use crate::errors::LedgerError;
use crate::models::Severity;
use crate::store;

pub async fn handle_summary(
    args: SummaryArgs,
    ledger_path: Option<&Path>,
) -> Result<(), LedgerError> {
    let ledger = store::resolve_ledger(ledger_path).await?;
    let summary = ledger.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} — audited {}\n",
        style(&ledger.metadata.target_app).bold(),
        ledger.metadata.audit_date
    );
    for tier in Severity::tiers() {
        let detailed = summary.count_by_severity.get(&tier).copied().unwrap_or(0);
        println!(
            "{} {} detailed / {} declared",
            render_severity_badge(tier),
            detailed,
            summary.declared.count_for(tier),
        );
    }
    println!(
        "\nTotal declared: {} ({} detailed in this ledger)",
        summary.declared.total, summary.detailed_total
    );
    println!("Overall grade: {}", style(&summary.declared.grade).bold());
    Ok(())
}
