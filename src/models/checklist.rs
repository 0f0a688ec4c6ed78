use serde::{Deserialize, Serialize};

/// A manual verification condition to re-test after the fixes land.
///
/// Checklist items are the only mutable part of a ledger: `tested` starts
/// false and is flipped as each device/condition pass completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Device or condition under test, e.g. "iPhone SE (375px viewport)".
    pub condition: String,
    #[serde(default)]
    pub tested: bool,
}

impl ChecklistItem {
    pub fn pending(condition: &str) -> Self {
        ChecklistItem { condition: condition.to_string(), tested: false }
    }
}
