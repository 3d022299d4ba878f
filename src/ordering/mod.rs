//! Ordered collection manager.
//!
//! Keeps the `order` field of the active (non-archived) records of a flat
//! collection contiguous: after every operation the active orders are
//! exactly `1..=active_count`, with no gaps and no duplicates. Archived
//! records keep whatever `order` they had when they were archived.
//!
//! Every operation takes the full collection by value and returns a new
//! full collection. Nothing here performs I/O; persisting the result is the
//! caller's job (see [`crate::service`]).

mod normalize;
mod operations;
mod validation;

pub use normalize::{active_count, highest_active_order, normalize};
pub use operations::{archive, restore, upsert};
pub use validation::{checked_upsert, order_range, validate_order, OrderError};

/// The minimal record shape the manager works on.
///
/// Anything else a record carries is opaque to the manager and is moved
/// through untouched.
pub trait Ordered {
    /// Stable identifier of the record.
    fn id(&self) -> &str;

    /// Display position. Only meaningful while the record is active.
    fn order(&self) -> u32;

    fn set_order(&mut self, order: u32);

    fn is_archived(&self) -> bool;

    fn set_archived(&mut self, archived: bool);
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;
