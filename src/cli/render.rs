use console::style;

use crate::models::{ChecklistItem, IssueRecord, Severity};

pub fn render_severity_badge(severity: Severity) -> String {
    match severity {
        Severity::Critical => style(" CRITICAL ").on_red().white().bold().to_string(),
        Severity::High => style(" HIGH ").red().bold().to_string(),
        Severity::Medium => style(" MEDIUM ").yellow().bold().to_string(),
    }
}

/// One issue as a styled terminal line: badge, id, title, then the target
/// file dimmed.
pub fn render_issue_line(issue: &IssueRecord) -> String {
    let location = issue
        .location
        .as_ref()
        .map(|loc| format!(" {}", loc))
        .unwrap_or_default();
    format!(
        "{} #{:<2} {} {}",
        render_severity_badge(issue.severity),
        issue.id,
        issue.title,
        style(format!("({}{})", issue.target_file, location)).dim(),
    )
}

pub fn render_checklist_line(index: usize, item: &ChecklistItem) -> String {
    if item.tested {
        format!(
            "  {} {}. {}",
            style("✓").green(),
            index + 1,
            style(&item.condition).green(),
        )
    } else {
        format!(
            "  {} {}. {}",
            style("·").dim(),
            index + 1,
            item.condition,
        )
    }
}
