pub mod checklist;
pub mod issue;
pub mod ledger;

pub use checklist::*;
pub use issue::*;
pub use ledger::*;
