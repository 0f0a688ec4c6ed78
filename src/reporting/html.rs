use crate::models::{AuditLedger, IssueRecord, Severity};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "critical",
        Severity::High => "high",
        Severity::Medium => "medium",
    }
}

fn format_issue_html(issue: &IssueRecord) -> String {
    let location = issue
        .location
        .as_ref()
        .map(|loc| format!(" <span class=\"loc\">{}</span>", loc))
        .unwrap_or_default();

    format!(
        "<article class=\"issue {}\">\n<h3>{}. {}</h3>\n<p class=\"meta\"><strong>{}</strong> &mdash; <code>{}</code>{}</p>\n<p>{}</p>\n<pre class=\"before\"><code>{}</code></pre>\n<pre class=\"after\"><code>{}</code></pre>\n</article>\n",
        severity_class(issue.severity),
        issue.id,
        escape(&issue.title),
        escape(&issue.component),
        escape(&issue.target_file),
        location,
        escape(&issue.description),
        escape(&issue.proposed_fix.before),
        escape(&issue.proposed_fix.after),
    )
}

/// Standalone single-file HTML rendering of the ledger.
pub fn format_html_report(ledger: &AuditLedger) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        "<h1>Mobile Usability Audit &mdash; {}</h1>\n<p class=\"meta\">Assessment Date: {} &middot; Source: {}</p>\n",
        escape(&ledger.metadata.target_app),
        ledger.metadata.audit_date,
        escape(&ledger.metadata.source_report),
    ));

    for tier in Severity::tiers() {
        let issues = ledger.tier(tier);
        if issues.is_empty() {
            continue;
        }
        body.push_str(&format!(
            "<h2 class=\"{}\">{} <small>est. fix effort: {}</small></h2>\n",
            severity_class(tier),
            tier.section_title(),
            tier.effort_estimate(),
        ));
        for issue in issues {
            body.push_str(&format_issue_html(issue));
        }
    }

    let counts = ledger.severity_counts();
    body.push_str("<h2>Summary</h2>\n<table><tr><th>Severity</th><th>Detailed</th><th>Declared</th></tr>\n");
    for tier in Severity::tiers() {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            tier.section_title(),
            counts.get(&tier).copied().unwrap_or(0),
            ledger.declared.count_for(tier),
        ));
    }
    body.push_str(&format!(
        "</table>\n<p>Total Issues Found: {} ({} detailed). Overall Grade: {}</p>\n",
        ledger.declared.total,
        ledger.issues.len(),
        escape(&ledger.declared.grade),
    ));

    body.push_str("<h2>Verification Checklist</h2>\n<ul class=\"checklist\">\n");
    for item in ledger.checklist() {
        let state = if item.tested { "done" } else { "pending" };
        body.push_str(&format!(
            "<li class=\"{}\">{}</li>\n",
            state,
            escape(&item.condition)
        ));
    }
    body.push_str("</ul>\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>Mobile Usability Audit &mdash; {}</title>\n<style>\nbody {{ font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }}\nh2.critical {{ color: #b91c1c; }}\nh2.high {{ color: #c2410c; }}\nh2.medium {{ color: #a16207; }}\npre {{ background: #f1f5f9; padding: 0.5rem; overflow-x: auto; }}\npre.before {{ border-left: 3px solid #b91c1c; }}\npre.after {{ border-left: 3px solid #15803d; }}\ntable {{ border-collapse: collapse; }}\ntd, th {{ border: 1px solid #cbd5e1; padding: 0.25rem 0.75rem; }}\n.checklist li.done {{ text-decoration: line-through; }}\n.loc {{ color: #64748b; }}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(&ledger.metadata.target_app),
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn html_report_escapes_markup_snippets() {
        let html = format_html_report(&dataset::builtin_ledger());
        assert!(html.contains("&lt;nav className="));
        assert!(!html.contains("<nav className="));
    }

    #[test]
    fn html_report_has_all_tiers_and_checklist() {
        let html = format_html_report(&dataset::builtin_ledger());
        assert!(html.contains("<h2 class=\"critical\">"));
        assert!(html.contains("Overall Grade: B+ (85/100)"));
        assert_eq!(html.matches("<li class=\"pending\">").count(), 5);
    }
}
