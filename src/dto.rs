use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A participant or cost-sharing bucket. `quantity` is how many shares the
/// group counts as, `ratio` scales every one of those shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default = "default_ratio", with = "rust_decimal::serde::float")]
    pub ratio: Decimal,
}

/// A single expense. `quantity_by_group_index[i]` is the number of units
/// attributed to the group at position `i` of the ledger's group list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub description: String,
    /// `None` while the amount has not been entered yet.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    #[serde(alias = "countByGroupIndex")]
    pub quantity_by_group_index: Vec<u32>,
}

fn default_quantity() -> u32 {
    1
}

fn default_ratio() -> Decimal {
    Decimal::ONE
}

impl Group {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            ratio: default_ratio(),
        }
    }

    pub fn with_ratio(mut self, ratio: Decimal) -> Self {
        self.ratio = ratio;
        self
    }

    /// `quantity × ratio`, or `None` when the product does not fit a `Decimal`.
    pub fn weight(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.ratio)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyGroupName);
        }
        if self.ratio <= Decimal::ZERO {
            return Err(Error::NonPositiveRatio {
                group: self.name.clone(),
                ratio: self.ratio,
            });
        }
        if self.weight().is_none() {
            return Err(Error::WeightOverflow {
                group: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl Payment {
    pub fn new(
        description: impl Into<String>,
        amount: Option<Decimal>,
        quantity_by_group_index: Vec<u32>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            quantity_by_group_index,
        }
    }

    /// A payment with no amount and no units for any of `group_count` groups.
    pub fn pending(description: impl Into<String>, group_count: usize) -> Self {
        Self::new(description, None, vec![0; group_count])
    }

    pub fn is_pending(&self) -> bool {
        self.amount.is_none()
    }

    pub fn units_for(&self, group_index: usize) -> Option<u32> {
        self.quantity_by_group_index.get(group_index).copied()
    }

    pub fn total_units(&self) -> u64 {
        self.quantity_by_group_index
            .iter()
            .map(|&units| u64::from(units))
            .sum()
    }

    /// Checks that the allocation vector covers exactly `group_count` groups.
    pub fn validate(&self, group_count: usize) -> Result<()> {
        let found = self.quantity_by_group_index.len();
        if found != group_count {
            return Err(Error::AllocationLengthMismatch {
                payment: self.description.clone(),
                expected: group_count,
                found,
            });
        }
        Ok(())
    }
}
