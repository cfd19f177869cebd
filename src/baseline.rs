//! Comparison-sort baselines.
//!
//! These are the reference orderings radix sort results are checked and
//! timed against: the standard library's sorts and rayon's parallel
//! pdqsort.

use rayon::prelude::*;

/// Sort a slice in-place using unstable sort (pattern-defeating quicksort).
#[inline]
pub fn sort_unstable(data: &mut [u32]) {
    data.sort_unstable();
}

/// Sort a slice in-place using the standard stable sort.
#[inline]
pub fn sort_stable(data: &mut [u32]) {
    data.sort();
}

/// Parallel unstable sort across all cores.
#[inline]
pub fn parallel_sort(data: &mut [u32]) {
    data.par_sort_unstable();
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[u32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Check `sorted` against the reference ordering of `inputs`.
///
/// Holds only when `sorted` is an ascending permutation of `inputs`.
pub fn matches_reference(inputs: &[u32], sorted: &[u32]) -> bool {
    let mut expected = inputs.to_vec();
    sort_unstable(&mut expected);
    expected == sorted
}
