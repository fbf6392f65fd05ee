use std::{fmt, str::FromStr};

use crate::error::{MedianError, Result};
use crate::median::{mean, median_of_sorted_slice};
use crate::sort;

/// How the median is located. All strategies return the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Concatenate and selection sort.
    #[default]
    Selection,
    /// Concatenate and `slice::sort_unstable`.
    Standard,
    /// Sort each input on its own, then binary search for the partition.
    Partition,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Selection, Strategy::Standard, Strategy::Partition];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Selection => "selection",
            Strategy::Standard => "standard",
            Strategy::Partition => "partition",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = MedianError;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MedianError::UnknownStrategy(s.to_owned()))
    }
}

pub fn median_with(strategy: Strategy, a: &[i64], b: &[i64]) -> Result<f64> {
    log::debug!(
        "median of {} + {} values using {} strategy",
        a.len(),
        b.len(),
        strategy
    );
    match strategy {
        Strategy::Selection => {
            let mut merged = [a, b].concat();
            sort::selection_sort(&mut merged);
            median_of_sorted_slice(&merged)
        }
        Strategy::Standard => {
            let mut merged = [a, b].concat();
            merged.sort_unstable();
            median_of_sorted_slice(&merged)
        }
        Strategy::Partition => {
            let mut a = a.to_vec();
            let mut b = b.to_vec();
            sort::selection_sort(&mut a);
            sort::selection_sort(&mut b);
            partition_search(&a, &b)
        }
    }
}

/// Median of two sequences that are each already sorted, in
/// O(log(min(m, n))) steps.
pub fn median_of_sorted(a: &[i64], b: &[i64]) -> Result<f64> {
    if !sort::is_sorted(a) || !sort::is_sorted(b) {
        return Err(MedianError::Unsorted);
    }
    partition_search(a, b)
}

/// Finds a cut `i` in the shorter input and `j` in the longer one such that
/// the `(m + n + 1) / 2` values left of the cuts are all <= the values right
/// of them. `i64::MIN`/`i64::MAX` stand in for the missing neighbours at the
/// ends, which is safe because at least one real value is always on each side
/// that contributes to the result.
fn partition_search(a: &[i64], b: &[i64]) -> Result<f64> {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (m, n) = (short.len(), long.len());
    if m + n == 0 {
        return Err(MedianError::EmptyInput);
    }
    let half = (m + n + 1) / 2;
    let (mut lo, mut hi) = (0, m);
    loop {
        let i = (lo + hi) / 2;
        let j = half - i;
        let short_left = if i == 0 { i64::MIN } else { short[i - 1] };
        let short_right = if i == m { i64::MAX } else { short[i] };
        let long_left = if j == 0 { i64::MIN } else { long[j - 1] };
        let long_right = if j == n { i64::MAX } else { long[j] };
        if short_left > long_right {
            hi = i - 1;
        } else if long_left > short_right {
            lo = i + 1;
        } else {
            log::trace!("partition found at short[{}] / long[{}]", i, j);
            let left = short_left.max(long_left);
            if (m + n) % 2 == 1 {
                return Ok(left as f64);
            }
            return Ok(mean(left, short_right.min(long_right)));
        }
    }
}
