//! The built-in audit dataset.
//!
//! Encodes the 2026-08 mobile-usability audit of the Arcana web client: the
//! 12 issues the report details in full, the report's own stated totals
//! (which count 31 issues overall; the other 19 live only in the prose
//! report and are deliberately not reproduced here), and the post-fix
//! verification checklist.

use chrono::NaiveDate;

use crate::models::{
    AuditLedger, ChecklistItem, DeclaredSummary, FixSnippet, IssueRecord, LedgerMetadata, LineRef,
    Severity,
};

fn issue(
    id: u32,
    severity: Severity,
    component: &str,
    target_file: &str,
    location: Option<LineRef>,
    title: &str,
    description: &str,
    before: &str,
    after: &str,
) -> IssueRecord {
    IssueRecord {
        id,
        severity,
        component: component.to_string(),
        target_file: target_file.to_string(),
        location,
        title: title.to_string(),
        description: description.to_string(),
        proposed_fix: FixSnippet {
            before: before.to_string(),
            after: after.to_string(),
        },
    }
}

/// The ledger as published by the audit. Records are ordered severity-major,
/// discovery-order-minor, and ids are assigned in that order.
pub fn builtin_ledger() -> AuditLedger {
    AuditLedger {
        metadata: LedgerMetadata {
            target_app: "Arcana web client".to_string(),
            audit_date: NaiveDate::from_ymd_opt(2026, 8, 14).expect("valid date"),
            source_report: "mobile-ux-audit-report.md".to_string(),
        },
        declared: DeclaredSummary {
            total: 31,
            critical: 3,
            high: 6,
            medium: 3,
            grade: "B+ (85/100)".to_string(),
        },
        issues: detailed_issues(),
        checklist: verification_checklist(),
    }
}

fn detailed_issues() -> Vec<IssueRecord> {
    vec![
        issue(
            1,
            Severity::Critical,
            "MobileActionBar",
            "src/components/MobileActionBar.tsx",
            Some(LineRef::approx(42)),
            "Bottom action bar sits under the home indicator",
            "The bar is fixed to the bottom edge with no safe-area inset, so on \
             notched devices the draw/shuffle buttons are partially covered by \
             the home indicator and intermittently miss taps.",
            r#"<nav className="fixed bottom-0 inset-x-0 h-14 bg-slate-900">"#,
            r#"<nav className="fixed bottom-0 inset-x-0 min-h-14 bg-slate-900 pb-[env(safe-area-inset-bottom)]">"#,
        ),
        issue(
            2,
            Severity::Critical,
            "Card",
            "src/components/Card.tsx",
            Some(LineRef::approx(118)),
            "Card collapse chevron is a 24px touch target",
            "The collapse toggle renders a bare 24x24 icon with no padding, \
             well under the 44x44 minimum. Users repeatedly tap the card body \
             instead and trigger the flip animation.",
            r#"<ChevronIcon className="h-6 w-6" onClick={onCollapse} />"#,
            r#"<span className="inline-flex h-11 w-11 items-center justify-center"><ChevronIcon className="h-6 w-6" onClick={onCollapse} /></span>"#,
        ),
        issue(
            3,
            Severity::Critical,
            "Card",
            "src/components/Card.tsx",
            Some(LineRef::approx_range(112, 120)),
            "Card collapse toggle is invisible to assistive tech",
            "The toggle is a div with an onClick handler: no button role, no \
             accessible name, no expanded state. Screen-reader users cannot \
             collapse or restore a card at all.",
            r#"<div className="card-collapse" onClick={onCollapse}>"#,
            r#"<button type="button" className="card-collapse" aria-expanded={!collapsed} aria-label="Collapse card details" onClick={onCollapse}>"#,
        ),
        issue(
            4,
            Severity::High,
            "Modal",
            "src/components/Modal.tsx",
            Some(LineRef::approx(37)),
            "Modals overflow narrow viewports",
            "Dialogs use a fixed 480px width, wider than a 375px screen; the \
             interpretation modal clips its close button off the right edge.",
            r#"<div className="modal-panel w-[480px] rounded-xl">"#,
            r#"<div className="modal-panel w-full max-w-[480px] mx-4 rounded-xl">"#,
        ),
        issue(
            5,
            Severity::High,
            "AudioControls",
            "src/components/AudioControls.tsx",
            Some(LineRef::approx(64)),
            "Playback buttons are 32px touch targets",
            "Play/pause and skip are h-8 w-8 icon buttons packed 4px apart; on \
             phones the pause tap frequently lands on skip and loses the \
             narration position.",
            r#"<button className="h-8 w-8 rounded-full" onClick={togglePlay}>"#,
            r#"<button className="h-11 w-11 rounded-full" onClick={togglePlay}>"#,
        ),
        issue(
            6,
            Severity::High,
            "UserMenu",
            "src/components/UserMenu.tsx",
            Some(LineRef::approx(51)),
            "User menu rows are 28px tall on touch devices",
            "Dropdown rows use py-1 text rows sized for a pointer; Sign out \
             and Account settings are adjacent and routinely mis-tapped.",
            r#"<li className="px-3 py-1 text-sm" onClick={item.action}>"#,
            r#"<li className="px-3 py-2.5 min-h-11 text-sm" onClick={item.action}>"#,
        ),
        issue(
            7,
            Severity::High,
            "ReadingBoard",
            "src/components/ReadingBoard.tsx",
            Some(LineRef::approx(88)),
            "Three-card spread overflows at 375px",
            "The spread grid is a fixed three-column layout with 24px gutters; \
             at 375px each card gets ~100px and the board scrolls sideways, \
             hiding the third card of every reading.",
            r#"<div className="grid grid-cols-3 gap-6">"#,
            r#"<div className="grid grid-cols-1 sm:grid-cols-3 gap-3 sm:gap-6">"#,
        ),
        issue(
            8,
            Severity::High,
            "Journal",
            "src/components/Journal.tsx",
            Some(LineRef::approx(29)),
            "Journal sidebar leaves 95px for entries on phones",
            "The entry list keeps its fixed 280px sidebar at every width; on a \
             375px screen the editor column is unusable. The sidebar should \
             collapse into the existing drawer below the md breakpoint.",
            r#"<aside className="w-[280px] border-r border-slate-800">"#,
            r#"<aside className="hidden md:block md:w-[280px] border-r border-slate-800">"#,
        ),
        issue(
            9,
            Severity::High,
            "AccountPage",
            "src/pages/AccountPage.tsx",
            Some(LineRef::approx(73)),
            "Account settings grid never collapses",
            "The two-column settings grid holds its shape below 768px, so \
             form labels and inputs shrink to half-width and inputs truncate \
             their placeholder text.",
            r#"<div className="grid grid-cols-2 gap-8">"#,
            r#"<div className="grid grid-cols-1 md:grid-cols-2 gap-8">"#,
        ),
        issue(
            10,
            Severity::Medium,
            "AudioControls",
            "src/components/AudioControls.tsx",
            Some(LineRef::approx_range(58, 79)),
            "Playback controls lack accessible names",
            "The icon-only playback buttons expose no aria-label and the seek \
             bar is a styled div rather than a slider, so narration controls \
             read as \"button\" three times over.",
            r#"<button className="h-11 w-11 rounded-full" onClick={togglePlay}>"#,
            r#"<button className="h-11 w-11 rounded-full" aria-label={playing ? "Pause narration" : "Play narration"} onClick={togglePlay}>"#,
        ),
        issue(
            11,
            Severity::Medium,
            "Journal",
            "src/components/Journal.tsx",
            Some(LineRef::approx(102)),
            "Entry grid jumps from one column to four",
            "The journal grid has no intermediate breakpoint: one column up to \
             md, then four. At 768px each entry card is ~160px wide and the \
             date/title pair wraps onto three lines.",
            r#"<div className="grid grid-cols-1 md:grid-cols-4 gap-4">"#,
            r#"<div className="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">"#,
        ),
        issue(
            12,
            Severity::Medium,
            "CardGalleryPage",
            "src/pages/CardGalleryPage.tsx",
            Some(LineRef::approx(41)),
            "Gallery artwork touches the screen edges",
            "The gallery container is centered with no horizontal padding, so \
             on phones the outer card images sit flush against the viewport \
             edge and partially under the curved screen corners.",
            r#"<main className="max-w-7xl mx-auto">"#,
            r#"<main className="max-w-7xl mx-auto px-4 sm:px-6">"#,
        ),
    ]
}

fn verification_checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::pending("iPhone SE (375px viewport)"),
        ChecklistItem::pending("Pixel 8 (393px viewport)"),
        ChecklistItem::pending("iPad portrait (768px viewport)"),
        ChecklistItem::pending("prefers-reduced-motion enabled"),
        ChecklistItem::pending("Screen reader (VoiceOver) pass"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_matches_report_structure() {
        let ledger = builtin_ledger();
        assert_eq!(ledger.issues.len(), 12);
        assert_eq!(ledger.checklist.len(), 5);
        assert_eq!(ledger.declared.grade, "B+ (85/100)");
    }

    #[test]
    fn ids_follow_severity_then_discovery_order() {
        let ledger = builtin_ledger();
        for (i, issue) in ledger.issues.iter().enumerate() {
            assert_eq!(issue.id as usize, i + 1);
        }
        let ranks: Vec<u8> = ledger.issues.iter().map(|i| i.severity.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }
}
