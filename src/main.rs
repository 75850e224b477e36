use clap::Parser;
use std::path::PathBuf;
use std::process;

use bill_split::{init_logger, run, ReportKind};

/// Validates a bill-split ledger document and prints a CSV report.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// JSON ledger document
    input: PathBuf,

    /// Report to write to stdout
    #[arg(long, value_enum, default_value_t = ReportKind::Allocations)]
    report: ReportKind,

    /// CSV group roster (name,quantity[,ratio]) replacing the document's groups
    #[arg(long)]
    groups: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = run(
        &cli.input,
        cli.groups.as_deref(),
        cli.report,
        std::io::stdout(),
    ) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
