//! Internal-consistency checks over a ledger.
//!
//! The source document carries its own totals, so a re-encoded or
//! hand-edited ledger can drift from them. `lint` compares the detailed
//! records against the declared summary and the structural rules of the
//! document. Failures are hard errors; the gap between the declared total
//! and the detailed record count is advisory only, since the source report
//! itself details a subset of the issues it counts.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::models::{AuditLedger, Severity};

/// A failed consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    /// Stable check identifier, e.g. "counts.high".
    pub check: &'static str,
    pub message: String,
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.check, self.message)
    }
}

/// Outcome of linting one ledger.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub findings: Vec<LintFinding>,
    /// Advisory observations that do not fail the lint.
    pub notes: Vec<String>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

pub fn lint(ledger: &AuditLedger) -> LintReport {
    let mut findings = Vec::new();
    let mut notes = Vec::new();

    check_tier_counts(ledger, &mut findings);
    check_declared_total(ledger, &mut findings, &mut notes);
    check_record_order(ledger, &mut findings);
    check_checklist(ledger, &mut findings);

    LintReport { findings, notes }
}

/// Detailed per-tier counts must equal the declared summary.
fn check_tier_counts(ledger: &AuditLedger, findings: &mut Vec<LintFinding>) {
    let counts = ledger.severity_counts();
    for tier in Severity::tiers() {
        let detailed = counts.get(&tier).copied().unwrap_or(0);
        let declared = ledger.declared.count_for(tier);
        if detailed != declared {
            let check = match tier {
                Severity::Critical => "counts.critical",
                Severity::High => "counts.high",
                Severity::Medium => "counts.medium",
            };
            findings.push(LintFinding {
                check,
                message: format!(
                    "{} detailed {} issue(s) but the summary declares {}",
                    detailed, tier, declared
                ),
            });
        }
    }
}

/// The declared total may exceed the detailed list (the source report
/// details a subset) but must never undercount it.
fn check_declared_total(
    ledger: &AuditLedger,
    findings: &mut Vec<LintFinding>,
    notes: &mut Vec<String>,
) {
    let detailed = ledger.issues.len();
    let declared = ledger.declared.total;
    if declared < detailed {
        findings.push(LintFinding {
            check: "counts.total",
            message: format!(
                "declared total {} is less than the {} detailed record(s)",
                declared, detailed
            ),
        });
    } else if declared > detailed {
        notes.push(format!(
            "{} of {} declared issues are detailed here; the remaining {} live in {}",
            detailed,
            declared,
            declared - detailed,
            ledger.metadata.source_report
        ));
    }
}

/// Ids must be unique, and records must be stored severity-major with ids
/// ascending, since readers rely on document order for triage.
fn check_record_order(ledger: &AuditLedger, findings: &mut Vec<LintFinding>) {
    let mut seen = HashSet::new();
    for issue in &ledger.issues {
        if !seen.insert(issue.id) {
            findings.push(LintFinding {
                check: "records.unique_id",
                message: format!("duplicate issue id {}", issue.id),
            });
        }
    }

    for pair in ledger.issues.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.severity.rank() > b.severity.rank() {
            findings.push(LintFinding {
                check: "records.order",
                message: format!(
                    "issue {} ({}) is listed after issue {} ({})",
                    b.id, b.severity, a.id, a.severity
                ),
            });
        } else if a.severity == b.severity && a.id >= b.id {
            findings.push(LintFinding {
                check: "records.order",
                message: format!(
                    "issue ids {} and {} are out of discovery order within {}",
                    a.id, b.id, a.severity
                ),
            });
        }
    }
}

/// The verification checklist is fixed at five distinct conditions.
fn check_checklist(ledger: &AuditLedger, findings: &mut Vec<LintFinding>) {
    if ledger.checklist.len() != 5 {
        findings.push(LintFinding {
            check: "checklist.size",
            message: format!("expected 5 checklist items, found {}", ledger.checklist.len()),
        });
    }

    let mut conditions = HashSet::new();
    for item in &ledger.checklist {
        if !conditions.insert(item.condition.as_str()) {
            findings.push(LintFinding {
                check: "checklist.distinct",
                message: format!("duplicate checklist condition '{}'", item.condition),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::models::ChecklistItem;

    #[test]
    fn builtin_ledger_is_clean() {
        let report = lint(&dataset::builtin_ledger());
        assert!(report.is_clean(), "unexpected findings: {:?}", report.findings);
    }

    #[test]
    fn undetailed_remainder_is_advisory_not_failing() {
        let report = lint(&dataset::builtin_ledger());
        assert_eq!(report.notes.len(), 1);
        assert!(report.notes[0].contains("12 of 31"));
    }

    #[test]
    fn mismatched_tier_count_is_reported() {
        let mut ledger = dataset::builtin_ledger();
        ledger.declared.high = 7;
        let report = lint(&ledger);
        assert!(report.findings.iter().any(|f| f.check == "counts.high"));
    }

    #[test]
    fn declared_total_must_cover_detailed_records() {
        let mut ledger = dataset::builtin_ledger();
        ledger.declared.total = 10;
        let report = lint(&ledger);
        assert!(report.findings.iter().any(|f| f.check == "counts.total"));
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut ledger = dataset::builtin_ledger();
        ledger.issues[5].id = ledger.issues[4].id;
        let report = lint(&ledger);
        assert!(report.findings.iter().any(|f| f.check == "records.unique_id"));
    }

    #[test]
    fn misplaced_tier_breaks_order() {
        let mut ledger = dataset::builtin_ledger();
        let last = ledger.issues.pop().unwrap();
        ledger.issues.insert(0, last);
        let report = lint(&ledger);
        assert!(report.findings.iter().any(|f| f.check == "records.order"));
    }

    #[test]
    fn duplicate_checklist_condition_is_reported() {
        let mut ledger = dataset::builtin_ledger();
        ledger.checklist[4] = ChecklistItem::pending("iPhone SE (375px viewport)");
        let report = lint(&ledger);
        assert!(report.findings.iter().any(|f| f.check == "checklist.distinct"));
    }
}
