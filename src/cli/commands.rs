use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mobaudit",
    version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIMESTAMP"), ")"),
    about = "Mobile usability audit ledger and report generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Operate on an exported ledger file (.json/.yaml) instead of the
    /// built-in dataset
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List audit issues, optionally filtered by severity tier
    List(ListArgs),
    /// Show computed and declared issue counts and the overall grade
    Summary(SummaryArgs),
    /// Render the full audit document as markdown (and optionally HTML)
    Report(ReportArgs),
    /// Show or update the post-fix verification checklist
    Checklist(ChecklistArgs),
    /// Serialize the ledger to a JSON or YAML file
    Export(ExportArgs),
    /// Run internal-consistency checks over the ledger
    Lint(LintArgs),
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Severity tier: critical, high, medium
    #[arg(short, long)]
    pub severity: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    /// Write the markdown report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a standalone HTML rendering to this path
    #[arg(long)]
    pub html: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct ChecklistArgs {
    /// Mark item N (1-based) as tested; requires --ledger
    #[arg(long, value_name = "N")]
    pub mark: Option<usize>,

    /// Clear the tested flag on item N (1-based); requires --ledger
    #[arg(long, value_name = "N", conflicts_with = "mark")]
    pub unmark: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ExportArgs {
    /// Destination file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Serialization format: json, yaml (inferred from the extension when
    /// omitted)
    #[arg(short, long)]
    pub format: Option<String>,
}

#[derive(Args, Clone)]
pub struct LintArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
