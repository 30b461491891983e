//! Membership tests over materialized sequences.

use std::cmp::Ordering;

/// Whether `key` occurs anywhere in `items`. O(n), no ordering required.
pub fn linear_contains<T: PartialEq>(items: &[T], key: &T) -> bool {
    items.iter().any(|item| item == key)
}

/// Whether `key` occurs in `sorted`, by half-interval elimination. O(log n).
///
/// `sorted` must be in ascending order. This is not checked; an unsorted
/// slice yields an unspecified (but never panicking) answer.
pub fn binary_contains<T: Ord>(sorted: &[T], key: &T) -> bool {
    let mut low = 0;
    let mut high = sorted.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match key.cmp(&sorted[mid]) {
            Ordering::Less => high = mid,
            Ordering::Greater => low = mid + 1,
            Ordering::Equal => return true,
        }
    }
    false
}
