use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Severity tier for an audit issue, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    /// Returns a numeric rank where lower values indicate higher urgency.
    /// Critical = 0, High = 1, Medium = 2.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
        }
    }

    /// The audit's fix-effort estimate for the whole tier.
    pub fn effort_estimate(&self) -> &'static str {
        match self {
            Severity::Critical => "1-2 days",
            Severity::High => "3-5 days",
            Severity::Medium => "5-10 days",
        }
    }

    /// Section heading used for this tier in the rendered document.
    pub fn section_title(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
        }
    }

    /// All tiers in document order.
    pub fn tiers() -> [Severity; 3] {
        [Severity::Critical, Severity::High, Severity::Medium]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_title())
    }
}

impl FromStr for Severity {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            other => Err(LedgerError::InvalidSeverity(other.to_string())),
        }
    }
}

/// Approximate location of an issue in the audited source file.
///
/// Line numbers were recorded at audit time and may have drifted since;
/// `approximate` marks the ones the auditor flagged as such. Staleness is a
/// property of the document, not an error condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRef {
    pub start: u32,
    /// Inclusive end line for a range; absent for a single line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
    #[serde(default)]
    pub approximate: bool,
}

impl LineRef {
    pub fn line(start: u32) -> Self {
        LineRef { start, end: None, approximate: false }
    }

    pub fn approx(start: u32) -> Self {
        LineRef { start, end: None, approximate: true }
    }

    pub fn approx_range(start: u32, end: u32) -> Self {
        LineRef { start, end: Some(end), approximate: true }
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "L{}-L{}", self.start, end)?,
            None => write!(f, "L{}", self.start)?,
        }
        if self.approximate {
            f.write_str(" (approximate)")?;
        }
        Ok(())
    }
}

/// Illustrative one-line markup change. The snippets show intent; they are
/// not guaranteed to apply cleanly against the current source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixSnippet {
    pub before: String,
    pub after: String,
}

/// A single mobile-usability issue recorded by the audit.
///
/// Records are immutable once published; a re-audit supersedes the whole
/// ledger rather than amending individual entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Sequence number, unique within the ledger, ordered severity-major.
    pub id: u32,
    pub severity: Severity,
    /// Audited UI component the issue belongs to.
    pub component: String,
    /// External file the fix applies to.
    pub target_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LineRef>,
    pub title: String,
    pub description: String,
    pub proposed_fix: FixSnippet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_rank_orders_tiers() {
        assert!(Severity::Critical.rank() < Severity::High.rank());
        assert!(Severity::High.rank() < Severity::Medium.rank());
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("CRITICAL".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!("high".parse::<Severity>().unwrap(), Severity::High);
        assert!("blocker".parse::<Severity>().is_err());
    }

    #[test]
    fn line_ref_display_marks_approximate_ranges() {
        assert_eq!(LineRef::line(42).to_string(), "L42");
        assert_eq!(LineRef::approx(42).to_string(), "L42 (approximate)");
        assert_eq!(
            LineRef::approx_range(112, 120).to_string(),
            "L112-L120 (approximate)"
        );
    }
}
