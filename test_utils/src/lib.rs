//! Utility helpers for tests.
//!
//! Shared constructors and scenario drivers for exercising a towed cart over
//! the flat sandbox host.
pub mod scenario;

pub use scenario::{drive_straight, hitched_cart, DRIVER};

/// Assert that `value` lies within `[low, high]`.
///
/// # Panics
/// Panics with a helpful message if `value` falls outside the range.
pub fn assert_within(value: f64, low: f64, high: f64) {
    assert!(
        (low..=high).contains(&value),
        "{value} not within [{low}, {high}]"
    );
}
