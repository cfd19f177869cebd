//! Digit extraction for a fixed radix.
//!
//! A [`DigitPlan`] is a validated `(radix, length)` pair with every place
//! value `radix^p` computed up front using exact integer exponentiation.
//! Digit extraction during a pass is then one division and one remainder,
//! with no chance of a rounded or wrapped divisor.

use crate::config::MAX_RADIX;
use crate::error::SortError;

/// Exact `radix^place`, or `None` if it does not fit in a `u32`.
#[inline]
pub fn place_value(radix: u32, place: u32) -> Option<u32> {
    radix.checked_pow(place)
}

/// Number of base-`radix` digits needed to write `value`.
///
/// Zero takes one digit. Uses integer division only, so exact powers of the
/// radix land on the right side of the boundary.
pub fn digits_needed(value: u32, radix: u32) -> Result<u32, SortError> {
    if radix < 2 {
        return Err(SortError::InvalidRadix(radix));
    }

    let mut digits = 1;
    let mut rest = value / radix;
    while rest > 0 {
        digits += 1;
        rest /= radix;
    }
    Ok(digits)
}

/// Validated radix and digit length with precomputed place values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitPlan {
    radix: u32,
    place_values: Vec<u32>,
    /// `radix^length`, or `None` when that exceeds `u32::MAX` (every key fits).
    limit: Option<u32>,
}

impl DigitPlan {
    /// Validate `radix` and `length` and precompute `radix^0 .. radix^(length-1)`.
    pub fn new(radix: u32, length: u32) -> Result<Self, SortError> {
        if radix < 2 {
            return Err(SortError::InvalidRadix(radix));
        }
        if radix > MAX_RADIX {
            return Err(SortError::RadixTooLarge {
                radix,
                max: MAX_RADIX,
            });
        }
        if length == 0 {
            return Err(SortError::InvalidLength);
        }

        let place_values = (0..length)
            .map(|place| place_value(radix, place).ok_or(SortError::PlaceValueOverflow { radix, place }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DigitPlan {
            radix,
            place_values,
            limit: place_value(radix, length),
        })
    }

    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Number of digit places, i.e. the number of passes.
    #[inline]
    pub fn length(&self) -> u32 {
        self.place_values.len() as u32
    }

    #[inline]
    pub fn place_values(&self) -> &[u32] {
        &self.place_values
    }

    /// Exclusive upper bound on keys this plan sorts correctly.
    #[inline]
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Digit of `key` at digit place `place` (0 = least significant).
    #[inline]
    pub fn digit(&self, key: u32, place: usize) -> usize {
        ((key / self.place_values[place]) % self.radix) as usize
    }

    /// Whether `key` is fully covered by `length` digits.
    #[inline]
    pub fn covers(&self, key: u32) -> bool {
        self.limit.map_or(true, |limit| key < limit)
    }

    /// Reject the first key that needs more digits than the plan covers.
    pub fn check_range<I>(&self, keys: I) -> Result<(), SortError>
    where
        I: IntoIterator<Item = u32>,
    {
        match keys.into_iter().enumerate().find(|&(_, key)| !self.covers(key)) {
            Some((index, value)) => Err(SortError::ValueOutOfRange {
                value,
                index,
                radix: self.radix,
                length: self.length(),
            }),
            None => Ok(()),
        }
    }
}
