//! Generic collections with 1-based positional access.
//!
//! Positions follow a single convention across this module: the first element
//! lives at position `1`, the last at `size()`. [`OrderedList::locate_index`]
//! may also return `size() + 1`, the insertion boundary past the end, so callers
//! must confirm an occupant before treating a located position as a match.

pub mod comparator;
pub mod error;
pub mod ordered_list;
pub mod queue;

pub use comparator::{ByKey, Comparator, NaturalOrder};
pub use error::{CollectionError, CollectionResult};
pub use ordered_list::OrderedList;
pub use queue::Queue;

/// Translate a 1-based position into a slice index, bounds-checked against `size`.
pub(crate) fn index_of(position: usize, size: usize) -> CollectionResult<usize> {
    if position == 0 || position > size {
        return Err(CollectionError::OutOfRange { position, size });
    }
    Ok(position - 1)
}
