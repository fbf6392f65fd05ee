//! Median of two integer sequences.
//!
//! ```
//! assert_eq!(median::median_of_two(&[1, 3], &[2]), Ok(2.0));
//! assert_eq!(median::median_of_two(&[1, 2], &[3, 4]), Ok(2.5));
//! ```

mod error;
mod median;
pub mod sort;
mod strategy;

pub use error::{MedianError, Result};
pub use median::median_of_two;
pub use strategy::{median_of_sorted, median_with, Strategy};
