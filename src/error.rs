//! Error types for group operations.

use thiserror::Error;

/// Errors reported when an index or range does not fit a group.
///
/// Returned by the checked operations ([`Group::try_flip`],
/// [`Group::try_draw_at`]); the unchecked ones panic with the same message.
///
/// [`Group::try_flip`]: crate::Group::try_flip
/// [`Group::try_draw_at`]: crate::Group::try_draw_at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Index falls outside the group after normalization.
    #[error("index {index} out of range for group of {len} cards")]
    IndexOutOfRange {
        /// The index as supplied by the caller.
        index: isize,
        /// Length of the group.
        len: usize,
    },
    /// Range start lies after its end.
    #[error("range start {start} is after range end {end}")]
    InvertedRange {
        /// Normalized start of the range.
        start: usize,
        /// Normalized end of the range.
        end: usize,
    },
}
