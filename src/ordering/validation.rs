//! Strict order validation.
//!
//! The manager operations clamp out-of-range orders silently. Editors that
//! want to tell the user instead go through [`validate_order`] or
//! [`checked_upsert`], which reject anything the clamp would have changed.

use std::ops::RangeInclusive;
use thiserror::Error;

use super::normalize::active_count;
use super::operations::upsert;
use super::Ordered;

/// Error type for order validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order is required and must be a positive number")]
    Missing,

    #[error("Invalid order {requested}. Must be between {min} and {max}")]
    OutOfRange { requested: u32, min: u32, max: u32 },
}

/// Range of orders a record may ask for.
///
/// `entering` is true when the record is not yet part of the active set
/// (a new record or a restore): it may also take the slot after the last
/// one. A record that is already active can only move within
/// `1..=active_count`.
#[must_use]
pub fn order_range(active_count: u32, entering: bool) -> RangeInclusive<u32> {
    let max = if entering {
        active_count.saturating_add(1)
    } else {
        active_count.max(1)
    };
    1..=max
}

/// Validate a requested order against `range`.
///
/// # Returns
///
/// The requested order if it lies inside `range`, otherwise the reason it
/// was rejected. `0` stands for "no order given".
pub fn validate_order(requested: u32, range: &RangeInclusive<u32>) -> Result<u32, OrderError> {
    if requested == 0 {
        return Err(OrderError::Missing);
    }
    if !range.contains(&requested) {
        return Err(OrderError::OutOfRange {
            requested,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(requested)
}

/// [`upsert`] that rejects an active record whose requested order is out
/// of range instead of clamping it.
///
/// Archived records carry no meaningful order and are never rejected.
pub fn checked_upsert<T: Ordered>(list: Vec<T>, record: T) -> Result<Vec<T>, OrderError> {
    if !record.is_archived() {
        let entering = !list
            .iter()
            .any(|existing| existing.id() == record.id() && !existing.is_archived());
        let range = order_range(active_count(&list), entering);
        validate_order(record.order(), &range)?;
    }
    Ok(upsert(list, record))
}
