//! Report rows derived from a [`Ledger`], ready for CSV output.

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::Ledger;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// One row per payment and group with non-zero units
    #[default]
    Allocations,
    /// One row per group with its weight and total units
    Groups,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AllocationRow<'a> {
    pub payment: &'a str,
    pub group: &'a str,
    pub units: u32,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct GroupRow<'a> {
    pub group: &'a str,
    pub quantity: u32,
    pub ratio: Decimal,
    pub weight: Option<Decimal>,
    pub units: u64,
}

/// Allocation rows in payment order, then group order.
pub fn allocation_rows(ledger: &Ledger) -> impl Iterator<Item = AllocationRow<'_>> {
    ledger.payments().iter().flat_map(move |payment| {
        ledger
            .groups()
            .iter()
            .zip(&payment.quantity_by_group_index)
            .filter(|(_, units)| **units > 0)
            .map(move |(group, &units)| AllocationRow {
                payment: &payment.description,
                group: &group.name,
                units,
            })
    })
}

pub fn group_rows(ledger: &Ledger) -> impl Iterator<Item = GroupRow<'_>> {
    ledger
        .groups()
        .iter()
        .zip(ledger.units_by_group())
        .map(|(group, units)| GroupRow {
            group: &group.name,
            quantity: group.quantity,
            ratio: group.ratio.normalize(),
            weight: group.weight().map(|weight| weight.normalize()),
            units,
        })
}
