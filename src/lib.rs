mod csv_utils;
mod document;
mod dto;
mod error;
mod ledger;
mod logger;
mod report;
mod runner;
mod stores;

pub use csv_utils::{read_csv, read_group_roster, write_csv};
pub use document::LedgerDocument;
pub use dto::{Group, Payment};
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use logger::init_logger;
pub use report::{allocation_rows, group_rows, AllocationRow, GroupRow, ReportKind};
pub use runner::run;
