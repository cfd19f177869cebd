//! Sort configuration.
//!
//! ```
//! use queue_radix_sort::{RangeCheck, SortConfig};
//!
//! let config = SortConfig::new(16, 4).range_check(RangeCheck::Unchecked);
//! assert_eq!(config.radix(), 16);
//!
//! // Derive the digit length from the largest value to be sorted.
//! let config = SortConfig::for_max_value(99_999, 10).unwrap();
//! assert_eq!(config.length(), 5);
//! ```

use crate::digits::{digits_needed, DigitPlan};
use crate::error::SortError;

/// Largest accepted radix. One bucket queue is allocated per digit value.
pub const MAX_RADIX: u32 = 1 << 20;

/// Default radix when none is given.
pub const DEFAULT_RADIX: u32 = 10;

/// Default digit length when none is given.
pub const DEFAULT_LENGTH: u32 = 5;

/// What to do with keys that need more digits than `length` covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeCheck {
    /// Scan the input first and fail with
    /// [`SortError::ValueOutOfRange`] on the first uncovered key.
    #[default]
    Strict,
    /// Skip the scan. Digits above `length` are ignored and the output is
    /// not sorted by them.
    Unchecked,
}

/// Radix, digit length and range policy for a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    radix: u32,
    length: u32,
    range_check: RangeCheck,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig::new(DEFAULT_RADIX, DEFAULT_LENGTH)
    }
}

impl SortConfig {
    /// Configure `length` passes in base `radix`. Validation is deferred to
    /// [`SortConfig::plan`].
    pub fn new(radix: u32, length: u32) -> Self {
        SortConfig {
            radix,
            length,
            range_check: RangeCheck::Strict,
        }
    }

    /// Configure the smallest length that covers every key up to `max`.
    pub fn for_max_value(max: u32, radix: u32) -> Result<Self, SortError> {
        Ok(SortConfig::new(radix, digits_needed(max, radix)?))
    }

    pub fn range_check(mut self, range_check: RangeCheck) -> Self {
        self.range_check = range_check;
        self
    }

    pub fn with_radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn range_policy(&self) -> RangeCheck {
        self.range_check
    }

    /// Validate the configuration into a [`DigitPlan`].
    pub fn plan(&self) -> Result<DigitPlan, SortError> {
        DigitPlan::new(self.radix, self.length)
    }
}
