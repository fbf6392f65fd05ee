use crate::error::{MedianError, Result};
use crate::sort;

/// Median of the combined multiset of `a` and `b`.
///
/// Neither input needs to be sorted. The two sequences are concatenated and the
/// result is sorted with [`sort::sort`] (selection sort unless the `std-sort`
/// feature is enabled).
pub fn median_of_two(a: &[i64], b: &[i64]) -> Result<f64> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    merged.extend_from_slice(a);
    merged.extend_from_slice(b);
    sort::sort(&mut merged);
    median_of_sorted_slice(&merged)
}

/// Median of a single slice that is already in non-decreasing order.
pub(crate) fn median_of_sorted_slice(sorted: &[i64]) -> Result<f64> {
    debug_assert!(sort::is_sorted(sorted));
    let len = sorted.len();
    if len == 0 {
        return Err(MedianError::EmptyInput);
    }
    let mid = len / 2;
    log::trace!("median of {} sorted values, middle index {}", len, mid);
    if len % 2 == 0 {
        Ok(mean(sorted[mid - 1], sorted[mid]))
    } else {
        Ok(sorted[mid] as f64)
    }
}

/// Floating-point mean of two integers. Each side is widened before the add so
/// the sum can't overflow and the fraction is kept.
pub(crate) fn mean(x: i64, y: i64) -> f64 {
    (x as f64 + y as f64) / 2.0
}
