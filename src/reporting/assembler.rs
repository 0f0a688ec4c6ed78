use std::path::Path;

use tracing::info;

use crate::errors::LedgerError;
use crate::models::{AuditLedger, Severity};
use crate::reporting::formatter::{
    format_checklist_markdown, format_issue_markdown, format_summary_markdown, format_tier_heading,
};
use crate::reporting::html::format_html_report;

/// Assemble the full audit document as markdown: severity-tier sections in
/// descending urgency, the summary block, then the verification checklist.
pub fn assemble_report(ledger: &AuditLedger) -> String {
    let mut sections = Vec::new();

    sections.push(format!(
        "# Mobile Usability Audit — {}\n\n- Assessment Date: {}\n- Source: {}\n",
        ledger.metadata.target_app, ledger.metadata.audit_date, ledger.metadata.source_report,
    ));

    for tier in Severity::tiers() {
        let issues = ledger.tier(tier);
        if issues.is_empty() {
            continue;
        }
        let mut section = format_tier_heading(tier);
        section.push('\n');
        for issue in issues {
            section.push_str(&format_issue_markdown(issue));
            section.push('\n');
        }
        sections.push(section.trim_end().to_string() + "\n");
    }

    sections.push(format_summary_markdown(ledger));
    sections.push(format_checklist_markdown(ledger.checklist()));

    sections.join("\n---\n\n")
}

/// Render the document and write it to `output`; optionally also write the
/// HTML rendering next to it.
pub async fn write_report(
    ledger: &AuditLedger,
    output: &Path,
    html_output: Option<&Path>,
) -> Result<(), LedgerError> {
    let report = assemble_report(ledger);
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(output, &report).await?;
    info!(path = %output.display(), "Audit report assembled");

    if let Some(html_path) = html_output {
        let html = format_html_report(ledger);
        tokio::fs::write(html_path, &html).await?;
        info!(path = %html_path.display(), "HTML report generated");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn report_orders_tiers_by_descending_urgency() {
        let report = assemble_report(&dataset::builtin_ledger());
        let critical = report.find("## Critical").unwrap();
        let high = report.find("## High").unwrap();
        let medium = report.find("## Medium").unwrap();
        assert!(critical < high && high < medium);
    }

    #[test]
    fn report_carries_tier_effort_estimates() {
        let report = assemble_report(&dataset::builtin_ledger());
        assert!(report.contains("## Critical (est. fix effort: 1-2 days)"));
        assert!(report.contains("## High (est. fix effort: 3-5 days)"));
        assert!(report.contains("## Medium (est. fix effort: 5-10 days)"));
    }

    #[test]
    fn report_ends_with_summary_and_checklist() {
        let report = assemble_report(&dataset::builtin_ledger());
        let summary = report.find("## Summary").unwrap();
        let checklist = report.find("## Verification Checklist").unwrap();
        assert!(summary < checklist);
        assert!(report.contains("- [ ] Screen reader (VoiceOver) pass"));
    }
}
