pub mod calc;
pub mod sort;
