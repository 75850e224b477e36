use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::{
    csv_utils::{read_group_roster, write_csv},
    report::{allocation_rows, group_rows, ReportKind},
    Ledger, LedgerDocument, Result,
};

/// Loads and validates a ledger document, then writes the requested report.
///
/// # Arguments
/// * `input_path` - Path to the JSON ledger document
/// * `roster_path` - Optional CSV group roster replacing the document's groups
/// * `report` - Which report to produce
/// * `writer` - Where to write the report (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The document or roster cannot be read or decoded
/// * A group or payment breaks the ledger invariants
/// * Writing to the output fails
pub fn run<P, W>(
    input_path: P,
    roster_path: Option<&Path>,
    report: ReportKind,
    writer: W,
) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut document = LedgerDocument::load(input_path)?;
    if let Some(roster_path) = roster_path {
        document.groups = read_group_roster(roster_path)?;
    }

    let ledger = Ledger::try_from(document)?;
    let pending = ledger.payments().iter().filter(|p| p.is_pending()).count();
    if pending > 0 {
        warn!(pending, "some payments have no amount yet");
    }
    info!(
        groups = ledger.groups().len(),
        payments = ledger.payments().len(),
        ?report,
        "writing report"
    );

    match report {
        ReportKind::Allocations => write_csv(writer, allocation_rows(&ledger))?,
        ReportKind::Groups => write_csv(writer, group_rows(&ledger))?,
    }
    Ok(())
}
