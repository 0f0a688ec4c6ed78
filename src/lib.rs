//! Mobile usability audit ledger for the Arcana web client.
//!
//! The ledger is a static, ordered set of [`models::IssueRecord`]s grouped
//! by severity tier, plus the post-fix verification checklist. The crate
//! renders the audit document, serializes the ledger to JSON/YAML, and
//! checks its internal consistency; it does not implement or patch any of
//! the audited components.

pub mod cli;
pub mod dataset;
pub mod errors;
pub mod lint;
pub mod models;
pub mod reporting;
pub mod store;
