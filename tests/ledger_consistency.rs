use std::collections::HashSet;

use mobaudit::dataset::builtin_ledger;
use mobaudit::lint::lint;
use mobaudit::models::Severity;

#[test]
fn test_every_record_has_a_known_tier() {
    let ledger = builtin_ledger();
    for issue in &ledger.issues {
        assert!(matches!(
            issue.severity,
            Severity::Critical | Severity::High | Severity::Medium
        ));
    }
}

#[test]
fn test_detailed_critical_issues_match_declared_count() {
    let ledger = builtin_ledger();
    let critical = ledger.tier(Severity::Critical);
    assert_eq!(critical.len(), 3);
    assert_eq!(critical.len(), ledger.declared.critical);

    // The three critical entries are the safe-area bar and the two Card
    // collapse defects.
    assert_eq!(critical[0].component, "MobileActionBar");
    assert_eq!(critical[1].component, "Card");
    assert_eq!(critical[2].component, "Card");
}

#[test]
fn test_detailed_high_issues_match_declared_count() {
    let ledger = builtin_ledger();
    let high = ledger.tier(Severity::High);
    assert_eq!(high.len(), 6);
    assert_eq!(high.len(), ledger.declared.high);

    let components: Vec<&str> = high.iter().map(|i| i.component.as_str()).collect();
    assert_eq!(
        components,
        [
            "Modal",
            "AudioControls",
            "UserMenu",
            "ReadingBoard",
            "Journal",
            "AccountPage"
        ]
    );
}

#[test]
fn test_detailed_medium_issues_match_declared_count() {
    let ledger = builtin_ledger();
    let medium = ledger.tier(Severity::Medium);
    assert_eq!(medium.len(), 3);
    assert_eq!(medium.len(), ledger.declared.medium);

    let components: Vec<&str> = medium.iter().map(|i| i.component.as_str()).collect();
    assert_eq!(components, ["AudioControls", "Journal", "CardGalleryPage"]);
}

#[test]
fn test_declared_total_covers_detailed_records_without_being_exhaustive() {
    let ledger = builtin_ledger();
    assert!(ledger.declared.total >= ledger.issues.len());
    assert_eq!(ledger.declared.total, 31);
    assert_eq!(ledger.issues.len(), 12);
}

#[test]
fn test_checklist_has_five_distinct_conditions() {
    let ledger = builtin_ledger();
    assert_eq!(ledger.checklist().len(), 5);

    let conditions: HashSet<&str> = ledger
        .checklist()
        .iter()
        .map(|item| item.condition.as_str())
        .collect();
    assert_eq!(conditions.len(), 5);
    assert!(ledger.checklist().iter().all(|item| !item.tested));
}

#[test]
fn test_ids_are_unique_and_severity_ordered() {
    let ledger = builtin_ledger();

    let ids: HashSet<u32> = ledger.issues.iter().map(|i| i.id).collect();
    assert_eq!(ids.len(), ledger.issues.len());

    for pair in ledger.issues.windows(2) {
        assert!(pair[0].severity.rank() <= pair[1].severity.rank());
        if pair[0].severity == pair[1].severity {
            assert!(pair[0].id < pair[1].id);
        }
    }
}

#[test]
fn test_builtin_ledger_passes_lint() {
    let report = lint(&builtin_ledger());
    assert!(report.is_clean(), "findings: {:?}", report.findings);
    // The 19 undetailed issues are advisory only.
    assert_eq!(report.notes.len(), 1);
}
