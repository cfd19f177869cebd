//! Radix sort over linked digit queues.
//!
//! This crate implements the LSD radix sort from Knuth's TAOCP 5.2.5:
//! - **Algorithm R**: one pass per digit place, appending every item to the
//!   queue for its digit ([`RadixSorter`], [`radix_sort`])
//! - **Algorithm H**: hooking the queues together into a single chain
//!   between passes ([`queue::hookup`])
//!
//! Nodes live in an index-based arena and queues link them by index, so a
//! pass can never lose, duplicate or cycle items. An array-backed variant
//! ([`counting`]) and comparison-sort [`baseline`]s are provided for
//! cross-checking and timing.
//!
//! ```
//! use queue_radix_sort::{RadixSorter, SortConfig};
//!
//! let sorter = RadixSorter::new(SortConfig::new(2, 4)).unwrap();
//! assert_eq!(sorter.sort(&[5, 1, 15, 0, 8]).unwrap(), vec![0, 1, 5, 8, 15]);
//! ```

pub mod arena;
pub mod baseline;
mod config;
pub mod counting;
pub mod digits;
mod engine;
mod error;
pub mod input;
pub mod queue;

pub use arena::Item;
pub use config::{RangeCheck, SortConfig, DEFAULT_LENGTH, DEFAULT_RADIX, MAX_RADIX};
pub use digits::{digits_needed, DigitPlan};
pub use engine::{radix_sort, RadixSorter};
pub use error::SortError;
pub use input::InputGenerator;
