//! Payment storage.
//!
//! Every stored payment's allocation vector is treated as one row of a
//! payments × groups matrix, so group columns can be appended or dropped
//! across all rows at once.

use rust_decimal::Decimal;

use crate::{Error, Payment, Result};

#[derive(Debug, Default, Clone)]
pub struct PaymentsStore {
    payments: Vec<Payment>,
}

impl PaymentsStore {
    pub fn new() -> Self {
        Self {
            payments: Vec::new(),
        }
    }

    /// Validates the allocation against `group_count` and appends the payment.
    pub fn push(&mut self, payment: Payment, group_count: usize) -> Result<usize> {
        payment.validate(group_count)?;
        self.payments.push(payment);
        Ok(self.payments.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<Payment> {
        self.get(index)?;
        Ok(self.payments.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&Payment> {
        self.payments.get(index).ok_or(Error::PaymentIndexOutOfRange {
            index,
            len: self.payments.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Payment> {
        let len = self.payments.len();
        self.payments
            .get_mut(index)
            .ok_or(Error::PaymentIndexOutOfRange { index, len })
    }

    pub fn set_amount(&mut self, index: usize, amount: Option<Decimal>) -> Result<()> {
        self.get_mut(index)?.amount = amount;
        Ok(())
    }

    /// Appends a zero-unit column to every payment.
    pub fn push_column(&mut self) {
        for payment in &mut self.payments {
            payment.quantity_by_group_index.push(0);
        }
    }

    /// Drops column `group_index` from every payment. The caller must have
    /// checked the index against the group count.
    pub fn remove_column(&mut self, group_index: usize) {
        for payment in &mut self.payments {
            payment.quantity_by_group_index.remove(group_index);
        }
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn as_slice(&self) -> &[Payment] {
        &self.payments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Payment> {
        self.payments.iter()
    }
}
