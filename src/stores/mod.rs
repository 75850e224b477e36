//! Storage layer for the ledger. Provides ordered, in-memory storage for:
//! - Groups, whose positions define the allocation columns ([`GroupsStore`])
//! - Payments and their allocation vectors ([`PaymentsStore`])
//!
//! The stores only guard their own contents; keeping the two aligned is the
//! job of [`crate::Ledger`].

mod groups;
mod payments;

pub use groups::GroupsStore;
pub use payments::PaymentsStore;
