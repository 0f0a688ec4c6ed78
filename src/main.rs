use clap::Parser;
use mobaudit::{cli, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let ledger_path = cli.ledger.as_deref();
    let result = match cli.command {
        cli::Commands::List(args) => cli::list::handle_list(args, ledger_path).await,
        cli::Commands::Summary(args) => cli::summary::handle_summary(args, ledger_path).await,
        cli::Commands::Report(args) => cli::report::handle_report(args, ledger_path).await,
        cli::Commands::Checklist(args) => cli::checklist::handle_checklist(args, ledger_path).await,
        cli::Commands::Export(args) => cli::export::handle_export(args, ledger_path).await,
        cli::Commands::Lint(args) => cli::lint::handle_lint(args, ledger_path).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                errors::LedgerError::InvalidSeverity(_)
                | errors::LedgerError::InvalidArgument(_)
                | errors::LedgerError::UnsupportedFormat(_)
                | errors::LedgerError::ChecklistIndex(_) => 2,
                errors::LedgerError::Inconsistent(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
