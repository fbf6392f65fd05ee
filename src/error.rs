#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MedianError {
    /// Both input sequences are empty, so there is no median.
    #[error("Cannot take the median of two empty sequences")]
    EmptyInput,
    /// A strategy name that matches none of the known strategies.
    #[error("Unknown median strategy `{0}`, expected one of: selection, standard, partition")]
    UnknownStrategy(String),
    /// An input handed to the sorted-input partition search is out of order.
    #[error("Input sequence is not sorted in non-decreasing order")]
    Unsorted,
}

pub type Result<T> = std::result::Result<T, MedianError>;
