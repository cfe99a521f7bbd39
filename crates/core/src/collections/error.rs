use thiserror::Error;

/// Result type for container operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Container contract violations.
///
/// These indicate a caller bug (an unchecked position, a pop from an empty
/// queue, a corrupt serialized sequence), never an expected domain outcome.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// Positional access outside `[1, size]`.
    #[error("position {position} is out of range (size {size})")]
    OutOfRange { position: usize, size: usize },

    /// `remove_first` on a queue with no elements.
    #[error("queue is empty")]
    EmptyQueue,

    /// A sequence handed to an ordered list is not sorted under its comparator.
    #[error("element at position {position} is out of order")]
    OutOfOrder { position: usize },
}
