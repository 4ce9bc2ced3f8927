use thiserror::Error;

/// The arguments given to a [`Tree`](crate::Tree) operation were unusable.
///
/// Inserting a key that is already present or deleting a key that isn't are
/// not errors; both are no-ops.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A key was required but none was given.
    #[error("a key is required")]
    MissingKey,

    /// The maximum of an inclusive range is less than its minimum.
    #[error("range maximum is less than its minimum")]
    ReversedRange,

    /// A sequence of keys had a missing element.
    #[error("missing key at index {index}")]
    MissingElement {
        /// Position of the missing element in the input.
        index: usize,
    },

    /// A sequence of keys wasn't strictly ascending.
    #[error("key at index {index} is not greater than the key before it")]
    NotAscending {
        /// Position of the first out-of-order key in the input.
        index: usize,
    },
}
