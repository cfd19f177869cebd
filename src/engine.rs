//! LSD radix sort over linked bucket queues (Knuth's Algorithm R).
//!
//! One pass per digit place, least significant first:
//! 1. **Distribute**: append every item to the queue for its digit at this place
//! 2. **Hook up**: concatenate the queues in digit order ([`hookup`])
//!
//! The first pass distributes straight from the input. Every later pass
//! walks the chain left by the previous hook-up. Because each pass is a
//! stable bucket sort, after the last pass the chain is sorted by the full
//! key.
//!
//! Complexity: O(length * (n + radix)) time, O(n + radix) extra space.

use tracing::{debug, trace};

use crate::arena::{Item, NodeArena, Walk};
use crate::config::{RangeCheck, SortConfig};
use crate::digits::DigitPlan;
use crate::error::SortError;
use crate::queue::{hookup, BucketQueue, Chain};

/// Sort `inputs` ascending with `length` passes in base `radix`.
///
/// Every value must be below `radix^length`; a value that is not fails
/// with [`SortError::ValueOutOfRange`].
///
/// ```
/// let sorted = queue_radix_sort::radix_sort(&[23, 4, 17, 9, 30], 10, 2).unwrap();
/// assert_eq!(sorted, vec![4, 9, 17, 23, 30]);
/// ```
pub fn radix_sort(inputs: &[u32], radix: u32, length: u32) -> Result<Vec<u32>, SortError> {
    RadixSorter::new(SortConfig::new(radix, length))?.sort(inputs)
}

/// Where the pass loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    Distributing(usize),
    Concatenated(usize),
    Done,
}

/// A validated radix sort configuration, reusable across inputs.
#[derive(Debug, Clone)]
pub struct RadixSorter {
    plan: DigitPlan,
    range_check: RangeCheck,
}

impl RadixSorter {
    /// Validate `config`. Fails on a radix below 2 or above
    /// [`MAX_RADIX`](crate::MAX_RADIX), a zero length, or a most
    /// significant place value that overflows `u32`.
    pub fn new(config: SortConfig) -> Result<Self, SortError> {
        Ok(RadixSorter {
            plan: config.plan()?,
            range_check: config.range_policy(),
        })
    }

    #[inline]
    pub fn plan(&self) -> &DigitPlan {
        &self.plan
    }

    /// Sort plain integers ascending.
    pub fn sort(&self, inputs: &[u32]) -> Result<Vec<u32>, SortError> {
        let items = self.sort_items(inputs.iter().map(|&key| Item::from(key)))?;
        Ok(items.into_iter().map(|item| item.value).collect())
    }

    /// Sort records by key. Records with equal keys keep their input order.
    pub fn sort_items<V, I>(&self, items: I) -> Result<Vec<Item<V>>, SortError>
    where
        I: IntoIterator<Item = Item<V>>,
    {
        self.sort_items_inspect(items, |_, _| {})
    }

    /// Like [`RadixSorter::sort_items`], calling `inspect` after every pass
    /// with the digit place just processed and the chain it produced.
    pub fn sort_items_inspect<V, I, F>(&self, items: I, mut inspect: F) -> Result<Vec<Item<V>>, SortError>
    where
        I: IntoIterator<Item = Item<V>>,
        F: FnMut(u32, Walk<'_, V>),
    {
        let mut items: Vec<Item<V>> = items.into_iter().collect();
        if self.range_check == RangeCheck::Strict {
            self.plan.check_range(items.iter().map(|item| item.key))?;
        }

        let n = items.len();
        let radix = self.plan.radix();
        let length = self.plan.place_values().len();
        debug!(radix, length, n, "starting radix sort");

        let mut arena = NodeArena::with_capacity(n);
        let mut queues = vec![BucketQueue::new(); radix as usize];
        let mut chain = Chain::default();
        let mut phase = Phase::NotStarted;

        loop {
            phase = match phase {
                Phase::NotStarted => Phase::Distributing(0),
                Phase::Distributing(0) => {
                    for item in std::mem::take(&mut items) {
                        let digit = self.plan.digit(item.key, 0);
                        let id = arena.insert(item);
                        queues[digit].append(&mut arena, id);
                    }
                    Phase::Concatenated(0)
                }
                Phase::Distributing(place) => {
                    queues.iter_mut().for_each(BucketQueue::clear);
                    let mut cursor = chain.head;
                    while let Some(id) = cursor {
                        let digit = self.plan.digit(arena.key(id), place);
                        queues[digit].append(&mut arena, id);
                        // append only rewrote the previous rear, so `id` still
                        // points at the rest of the old chain
                        cursor = arena.next(id);
                    }
                    Phase::Concatenated(place)
                }
                Phase::Concatenated(place) => {
                    chain = hookup(&queues, &mut arena);
                    debug_assert_eq!(chain.len, n, "pass {} lost or duplicated items", place);
                    trace!(
                        place,
                        occupied = queues.iter().filter(|q| !q.is_empty()).count(),
                        "pass hooked up"
                    );
                    inspect(place as u32, arena.walk(chain.head));

                    if place + 1 == length {
                        Phase::Done
                    } else {
                        Phase::Distributing(place + 1)
                    }
                }
                Phase::Done => break,
            };
        }

        debug!(n, "radix sort finished");
        Ok(arena.into_chain(chain.head))
    }
}
