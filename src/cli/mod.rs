pub mod checklist;
pub mod commands;
pub mod export;
pub mod lint;
pub mod list;
pub mod render;
pub mod report;
pub mod summary;

pub use commands::{Cli, Commands};
