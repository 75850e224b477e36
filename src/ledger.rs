use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::stores::{GroupsStore, PaymentsStore};
use crate::{Error, Group, Payment, Result};

/// Groups and payments of one bill, kept aligned: every payment's
/// allocation vector has exactly one entry per group, in group order.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    groups: GroupsStore,
    payments: PaymentsStore,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            groups: GroupsStore::new(),
            payments: PaymentsStore::new(),
        }
    }

    /// Builds a ledger from already-ordered parts, validating every record.
    pub fn from_parts(
        groups: impl IntoIterator<Item = Group>,
        payments: impl IntoIterator<Item = Payment>,
    ) -> Result<Self> {
        let mut ledger = Self::new();
        for group in groups {
            ledger.groups.push(group)?;
        }
        for payment in payments {
            ledger.payments.push(payment, ledger.groups.len())?;
        }
        debug!(
            groups = ledger.groups.len(),
            payments = ledger.payments.len(),
            "ledger built"
        );
        Ok(ledger)
    }

    /// Appends a group. Existing payments attribute zero units to it.
    pub fn add_group(&mut self, group: Group) -> Result<usize> {
        let index = self.groups.push(group)?;
        self.payments.push_column();
        info!(index, name = %self.groups.get(index)?.name, "group added");
        Ok(index)
    }

    /// Removes a group along with its column in every payment. Later groups
    /// shift down by one position.
    pub fn remove_group(&mut self, index: usize) -> Result<Group> {
        let group = self.groups.remove(index)?;
        self.payments.remove_column(index);
        info!(index, name = %group.name, "group removed");
        Ok(group)
    }

    pub fn add_payment(&mut self, payment: Payment) -> Result<usize> {
        let index = self.payments.push(payment, self.groups.len())?;
        info!(index, pending = self.payments.get(index)?.is_pending(), "payment added");
        Ok(index)
    }

    pub fn remove_payment(&mut self, index: usize) -> Result<Payment> {
        let payment = self.payments.remove(index)?;
        info!(index, description = %payment.description, "payment removed");
        Ok(payment)
    }

    pub fn set_units(&mut self, payment: usize, group: usize, units: u32) -> Result<()> {
        let len = self.groups.len();
        let cell = self
            .payments
            .get_mut(payment)?
            .quantity_by_group_index
            .get_mut(group)
            .ok_or(Error::GroupIndexOutOfRange { index: group, len })?;
        *cell = units;
        debug!(payment, group, units, "units updated");
        Ok(())
    }

    pub fn set_amount(&mut self, payment: usize, amount: Option<Decimal>) -> Result<()> {
        self.payments.set_amount(payment, amount)?;
        debug!(payment, ?amount, "amount updated");
        Ok(())
    }

    pub fn group(&self, index: usize) -> Result<&Group> {
        self.groups.get(index)
    }

    pub fn payment(&self, index: usize) -> Result<&Payment> {
        self.payments.get(index)
    }

    pub fn groups(&self) -> &[Group] {
        self.groups.as_slice()
    }

    pub fn payments(&self) -> &[Payment] {
        self.payments.as_slice()
    }

    /// Total units attributed to each group over all payments, in group order.
    pub fn units_by_group(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.groups.len()];
        for payment in self.payments.iter() {
            for (total, &units) in totals.iter_mut().zip(&payment.quantity_by_group_index) {
                *total += u64::from(units);
            }
        }
        totals
    }

    /// Re-checks every group and every payment's alignment.
    pub fn validate(&self) -> Result<()> {
        for group in self.groups.iter() {
            group.validate()?;
        }
        for payment in self.payments.iter() {
            payment.validate(self.groups.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn trip() -> Ledger {
        Ledger::from_parts(
            [
                Group::new("Alice", 1),
                Group::new("Bob", 2),
                Group::new("Carol", 1),
            ],
            [
                Payment::new("Dinner", Some(dec!(42.5)), vec![2, 0, 1]),
                Payment::new("Taxi", None, vec![1, 1, 1]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_parts_rejects_misaligned_payment() {
        let result = Ledger::from_parts(
            [Group::new("Alice", 1)],
            [Payment::new("Dinner", Some(dec!(1)), vec![1, 1])],
        );
        assert!(matches!(
            result,
            Err(Error::AllocationLengthMismatch {
                expected: 1,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_add_group_extends_payments() {
        let mut ledger = trip();
        let index = ledger.add_group(Group::new("Dave", 1)).unwrap();

        assert_eq!(index, 3);
        assert_eq!(ledger.payment(0).unwrap().quantity_by_group_index, vec![2, 0, 1, 0]);
        assert_eq!(ledger.payment(1).unwrap().quantity_by_group_index, vec![1, 1, 1, 0]);
        assert!(ledger.validate().is_ok());
    }

    #[test]
    fn test_add_invalid_group_leaves_payments_untouched() {
        let mut ledger = trip();
        assert!(ledger.add_group(Group::new("", 1)).is_err());
        assert_eq!(ledger.groups().len(), 3);
        assert_eq!(ledger.payment(0).unwrap().quantity_by_group_index.len(), 3);
    }

    #[test]
    fn test_remove_group_drops_column() {
        let mut ledger = trip();
        let removed = ledger.remove_group(0).unwrap();

        assert_eq!(removed.name, "Alice");
        assert_eq!(ledger.group(0).unwrap().name, "Bob");
        assert_eq!(ledger.payment(0).unwrap().quantity_by_group_index, vec![0, 1]);
        assert_eq!(ledger.payment(1).unwrap().quantity_by_group_index, vec![1, 1]);
    }

    #[test]
    fn test_remove_group_out_of_range() {
        let mut ledger = trip();
        assert!(matches!(
            ledger.remove_group(3),
            Err(Error::GroupIndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(ledger.payment(0).unwrap().quantity_by_group_index.len(), 3);
    }

    #[test]
    fn test_add_payment_checks_group_count() {
        let mut ledger = trip();
        assert!(ledger
            .add_payment(Payment::new("Hotel", Some(dec!(300)), vec![1, 1]))
            .is_err());
        assert_eq!(
            ledger
                .add_payment(Payment::new("Hotel", Some(dec!(300)), vec![1, 1, 1]))
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_set_units() {
        let mut ledger = trip();
        ledger.set_units(0, 1, 5).unwrap();
        assert_eq!(ledger.payment(0).unwrap().units_for(1), Some(5));

        assert!(matches!(
            ledger.set_units(0, 3, 1),
            Err(Error::GroupIndexOutOfRange { .. })
        ));
        assert!(matches!(
            ledger.set_units(2, 0, 1),
            Err(Error::PaymentIndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_failed_set_units_leaves_allocations_unchanged() {
        let mut ledger = trip();
        assert!(matches!(
            ledger.set_units(1, 7, 9),
            Err(Error::GroupIndexOutOfRange { index: 7, len: 3 })
        ));
        assert_eq!(ledger.payment(1).unwrap().quantity_by_group_index, vec![1, 1, 1]);
        assert!(ledger.validate().is_ok());
    }

    #[test]
    fn test_set_amount_distinguishes_pending_from_zero() {
        let mut ledger = trip();
        ledger.set_amount(1, Some(Decimal::ZERO)).unwrap();
        assert!(!ledger.payment(1).unwrap().is_pending());
        ledger.set_amount(0, None).unwrap();
        assert!(ledger.payment(0).unwrap().is_pending());
    }

    #[test]
    fn test_remove_payment() {
        let mut ledger = trip();
        assert_eq!(ledger.remove_payment(0).unwrap().description, "Dinner");
        assert_eq!(ledger.payments().len(), 1);
    }

    #[test]
    fn test_units_by_group() {
        let ledger = trip();
        assert_eq!(ledger.units_by_group(), vec![3, 1, 2]);
        assert_eq!(Ledger::new().units_by_group(), Vec::<u64>::new());
    }

    #[derive(Debug, Clone)]
    enum Op {
        AddGroup,
        RemoveGroup(usize),
        AddPayment(Vec<u32>),
        SetUnits(usize, usize, u32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::AddGroup),
            (0usize..8).prop_map(Op::RemoveGroup),
            prop::collection::vec(0u32..10, 0..8).prop_map(Op::AddPayment),
            (0usize..8, 0usize..8, 0u32..10).prop_map(|(p, g, u)| Op::SetUnits(p, g, u)),
        ]
    }

    proptest! {
        #[test]
        fn allocations_stay_aligned(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut ledger = Ledger::new();
            for (idx, op) in ops.into_iter().enumerate() {
                // Failed operations must leave the ledger unchanged and aligned
                let _ = match op {
                    Op::AddGroup => ledger.add_group(Group::new(format!("g{idx}"), 1)).map(|_| ()),
                    Op::RemoveGroup(i) => ledger.remove_group(i).map(|_| ()),
                    Op::AddPayment(units) => ledger
                        .add_payment(Payment::new(format!("p{idx}"), None, units))
                        .map(|_| ()),
                    Op::SetUnits(p, g, u) => ledger.set_units(p, g, u),
                };
                prop_assert!(ledger.validate().is_ok());
            }

            let total: u64 = ledger.units_by_group().iter().sum();
            let expected: u64 = ledger.payments().iter().map(Payment::total_units).sum();
            prop_assert_eq!(total, expected);
        }
    }
}
