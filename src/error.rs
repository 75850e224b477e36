//! Errors for the bill splitting data model.
//!
//! Contains error variants for:
//! - Group validation (empty name, non-positive ratio)
//! - Allocation vector alignment with the group list
//! - Out-of-range group or payment indices
//! - I/O and decoding failures at the JSON/CSV boundaries

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("group name must not be empty")]
    EmptyGroupName,

    #[error("group `{group}` has non-positive ratio {ratio}")]
    NonPositiveRatio { group: String, ratio: Decimal },

    #[error("group `{group}` weight overflows")]
    WeightOverflow { group: String },

    #[error("payment `{payment}` allocates {found} groups, expected {expected}")]
    AllocationLengthMismatch {
        payment: String,
        expected: usize,
        found: usize,
    },

    #[error("group index {index} out of range ({len} groups)")]
    GroupIndexOutOfRange { index: usize, len: usize },

    #[error("payment index {index} out of range ({len} payments)")]
    PaymentIndexOutOfRange { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
