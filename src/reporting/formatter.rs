use crate::models::{AuditLedger, ChecklistItem, IssueRecord, Severity};

pub fn format_issue_markdown(issue: &IssueRecord) -> String {
    let location = issue
        .location
        .as_ref()
        .map(|loc| format!(", {}", loc))
        .unwrap_or_default();

    format!(
        "### {}. {}\n\n**Component:** {}\n**File:** `{}`{}\n\n{}\n\n**Before:**\n```html\n{}\n```\n\n**After:**\n```html\n{}\n```\n",
        issue.id,
        issue.title,
        issue.component,
        issue.target_file,
        location,
        issue.description,
        issue.proposed_fix.before,
        issue.proposed_fix.after,
    )
}

pub fn format_tier_heading(severity: Severity) -> String {
    format!(
        "## {} (est. fix effort: {})\n",
        severity.section_title(),
        severity.effort_estimate()
    )
}

/// The trailing summary block: the document's own literal counts and grade
/// next to the counts computed from the detailed list.
pub fn format_summary_markdown(ledger: &AuditLedger) -> String {
    let counts = ledger.severity_counts();
    let mut block = String::from("## Summary\n\n| Severity | Detailed | Declared |\n|---|---|---|\n");
    for tier in Severity::tiers() {
        let detailed = counts.get(&tier).copied().unwrap_or(0);
        block.push_str(&format!(
            "| {} | {} | {} |\n",
            tier.section_title(),
            detailed,
            ledger.declared.count_for(tier)
        ));
    }
    block.push_str(&format!(
        "\nTotal Issues Found: {} ({} detailed above)\n\nOverall Grade: {}\n",
        ledger.declared.total,
        ledger.issues.len(),
        ledger.declared.grade,
    ));
    block
}

pub fn format_checklist_markdown(items: &[ChecklistItem]) -> String {
    let mut block = String::from("## Verification Checklist\n\n");
    for item in items {
        let mark = if item.tested { "x" } else { " " };
        block.push_str(&format!("- [{}] {}\n", mark, item.condition));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn issue_block_includes_location_and_snippets() {
        let ledger = dataset::builtin_ledger();
        let block = format_issue_markdown(&ledger.issues[0]);
        assert!(block.contains("### 1. "));
        assert!(block.contains("`src/components/MobileActionBar.tsx`, L42 (approximate)"));
        assert!(block.contains("safe-area-inset-bottom"));
    }

    #[test]
    fn summary_block_keeps_declared_and_detailed_apart() {
        let ledger = dataset::builtin_ledger();
        let block = format_summary_markdown(&ledger);
        assert!(block.contains("Total Issues Found: 31 (12 detailed above)"));
        assert!(block.contains("Overall Grade: B+ (85/100)"));
    }

    #[test]
    fn checklist_renders_unchecked_by_default() {
        let ledger = dataset::builtin_ledger();
        let block = format_checklist_markdown(ledger.checklist());
        assert_eq!(block.matches("- [ ]").count(), 5);
        assert!(block.contains("prefers-reduced-motion enabled"));
    }
}
