//! Error types for the radix sort.
//!
//! Every variant is raised while validating a [`SortConfig`](crate::SortConfig)
//! or the input, before the first pass runs. The pass loop itself cannot fail.

/// Errors raised when a sort cannot be started.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SortError {
    /// A radix below 2 has no digits to bucket by.
    #[error("radix must be at least 2, got {0}")]
    InvalidRadix(u32),

    /// The bucket table would exceed [`MAX_RADIX`](crate::MAX_RADIX) queues.
    #[error("radix {radix} exceeds the maximum of {max} buckets")]
    RadixTooLarge { radix: u32, max: u32 },

    /// At least one digit place has to be processed.
    #[error("digit length must be at least 1")]
    InvalidLength,

    /// The place value for the most significant digit does not fit in `u32`.
    ///
    /// Wrapping here would silently corrupt digit extraction, so the sort is
    /// refused instead.
    #[error("place value {radix}^{place} does not fit in a u32")]
    PlaceValueOverflow { radix: u32, place: u32 },

    /// An input value has more base-`radix` digits than `length` covers.
    #[error("value {value} at index {index} needs more than {length} base-{radix} digits")]
    ValueOutOfRange {
        value: u32,
        index: usize,
        radix: u32,
        length: u32,
    },
}
