use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::checklist::ChecklistItem;
use super::issue::{IssueRecord, Severity};

/// Audit-time context carried alongside the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerMetadata {
    /// Application the audit was run against.
    pub target_app: String,
    pub audit_date: NaiveDate,
    /// The full prose report this ledger was extracted from.
    pub source_report: String,
}

/// The audit document's own stated totals and grade.
///
/// Tracked independently of the detailed records: the source report counted
/// 31 issues but details only 12 here, so `total` may legitimately exceed
/// the length of the detailed list. Consumers must not assume the detailed
/// list is exhaustive, and nothing in this crate fabricates the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    /// Letter grade from the report, e.g. "B+ (85/100)".
    pub grade: String,
}

impl DeclaredSummary {
    pub fn count_for(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
        }
    }
}

/// Aggregate view over a ledger: computed counts next to the declared ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Number of records actually detailed in this ledger.
    pub detailed_total: usize,
    pub count_by_severity: HashMap<Severity, usize>,
    pub declared: DeclaredSummary,
}

/// The audit ledger: an ordered, immutable set of issue records plus the
/// post-fix verification checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLedger {
    pub metadata: LedgerMetadata,
    pub declared: DeclaredSummary,
    pub issues: Vec<IssueRecord>,
    pub checklist: Vec<ChecklistItem>,
}

impl AuditLedger {
    /// All records, optionally filtered to one severity tier. Ordering is
    /// severity-major, discovery-order-minor, as stored.
    pub fn list_issues(&self, severity: Option<Severity>) -> Vec<&IssueRecord> {
        self.issues
            .iter()
            .filter(|issue| severity.is_none_or(|s| issue.severity == s))
            .collect()
    }

    /// Records in one severity tier, in discovery order.
    pub fn tier(&self, severity: Severity) -> Vec<&IssueRecord> {
        self.list_issues(Some(severity))
    }

    /// Returns a map of severity tier to the count of detailed records.
    pub fn severity_counts(&self) -> HashMap<Severity, usize> {
        let mut counts = HashMap::new();
        for issue in &self.issues {
            *counts.entry(issue.severity).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            detailed_total: self.issues.len(),
            count_by_severity: self.severity_counts(),
            declared: self.declared.clone(),
        }
    }

    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    /// Flip the `tested` flag on checklist item `index` (zero-based).
    /// Returns false when the index is out of range.
    pub fn set_checklist_tested(&mut self, index: usize, tested: bool) -> bool {
        match self.checklist.get_mut(index) {
            Some(item) => {
                item.tested = tested;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset;
    use crate::models::issue::Severity;

    #[test]
    fn list_issues_filters_by_tier() {
        let ledger = dataset::builtin_ledger();
        let all = ledger.list_issues(None);
        let critical = ledger.list_issues(Some(Severity::Critical));
        assert_eq!(all.len(), 12);
        assert_eq!(critical.len(), 3);
        assert!(critical.iter().all(|i| i.severity == Severity::Critical));
    }

    #[test]
    fn summary_reports_computed_and_declared_counts() {
        let ledger = dataset::builtin_ledger();
        let summary = ledger.summary();
        assert_eq!(summary.detailed_total, 12);
        assert_eq!(summary.count_by_severity[&Severity::High], 6);
        assert_eq!(summary.declared.total, 31);
    }

    #[test]
    fn checklist_marking_respects_bounds() {
        let mut ledger = dataset::builtin_ledger();
        assert!(ledger.set_checklist_tested(0, true));
        assert!(ledger.checklist()[0].tested);
        assert!(!ledger.set_checklist_tested(99, true));
    }
}
