//! Bounds of the working array's bar heights.
//!
//! Algorithms only permute values, so an array generated within these
//! bounds stays within them for the whole run.

/// Smallest bar height a generator may produce.
pub const MIN_HEIGHT: u32 = 10;

/// Largest bar height a generator may produce.
pub const MAX_HEIGHT: u32 = 380;

/// True if every value lies within `[MIN_HEIGHT, MAX_HEIGHT]`.
pub fn in_bounds(values: &[u32]) -> bool {
    values.iter().all(|v| (MIN_HEIGHT..=MAX_HEIGHT).contains(v))
}

/// True if the values are in non-decreasing order.
pub fn is_sorted(values: &[u32]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
