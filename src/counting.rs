//! Array-backed LSD radix sort.
//!
//! Same contract as the queue-based engine (stable per pass, conserves every
//! value) but each bucket is a range of a scratch buffer located by a
//! histogram and exclusive prefix sum, instead of a linked queue.
//!
//! Complexity: O(length * (n + radix)), one scratch buffer of n values.

use crate::digits::DigitPlan;

/// Sort `data` in place using the digit places of `plan`.
///
/// Values at or above `plan.limit()` are ordered by their low `length`
/// digits only; run [`DigitPlan::check_range`] first to reject them.
pub fn sort(data: &mut [u32], plan: &DigitPlan) {
    if data.len() <= 1 {
        return;
    }

    let mut scratch = vec![0u32; data.len()];
    let mut offsets = vec![0usize; plan.radix() as usize];

    for place in 0..plan.place_values().len() {
        // Histogram of this place's digits
        offsets.fill(0);
        for &value in data.iter() {
            offsets[plan.digit(value, place)] += 1;
        }

        // Exclusive scan turns counts into bucket starts
        let mut sum = 0usize;
        for offset in offsets.iter_mut() {
            let count = *offset;
            *offset = sum;
            sum += count;
        }

        // Scatter in input order, which keeps the pass stable
        for &value in data.iter() {
            let digit = plan.digit(value, place);
            scratch[offsets[digit]] = value;
            offsets[digit] += 1;
        }

        data.copy_from_slice(&scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::is_sorted;
    use rand::Rng;

    fn plan(radix: u32, length: u32) -> DigitPlan {
        DigitPlan::new(radix, length).unwrap()
    }

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<u32> = vec![];
        sort(&mut data, &plan(10, 2));
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42u32];
        sort(&mut data, &plan(10, 2));
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn test_sort_examples() {
        let mut decimal = vec![23, 4, 17, 9, 30];
        sort(&mut decimal, &plan(10, 2));
        assert_eq!(decimal, vec![4, 9, 17, 23, 30]);

        let mut binary = vec![5, 1, 15, 0, 8];
        sort(&mut binary, &plan(2, 4));
        assert_eq!(binary, vec![0, 1, 5, 8, 15]);
    }

    #[test]
    fn test_sort_duplicates() {
        let mut data = vec![5, 3, 5, 1, 3, 5, 1, 1];
        sort(&mut data, &plan(3, 2));
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_all_same() {
        let mut data = vec![42u32; 100];
        sort(&mut data, &plan(10, 2));
        assert!(data.iter().all(|&x| x == 42));
    }

    #[test]
    fn test_sort_max_values() {
        let mut data = vec![u32::MAX, 0, u32::MAX / 2, 1, u32::MAX - 1];
        sort(&mut data, &plan(256, 4));
        assert_eq!(data, vec![0, 1, u32::MAX / 2, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn test_sort_large_array() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..100_000).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        sort(&mut data, &plan(256, 4));
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_sort_matches_queue_engine() {
        let mut rng = rand::thread_rng();
        let data: Vec<u32> = (0..5000).map(|_| rng.gen_range(0..1_000_000)).collect();

        let mut counted = data.clone();
        sort(&mut counted, &plan(10, 6));
        assert_eq!(counted, crate::radix_sort(&data, 10, 6).unwrap());
    }
}
