use proptest::prelude::*;
use queue_radix_sort::*;

/// Radix, length and a vector of keys that fit in `length` digits.
fn keyed_input() -> impl Strategy<Value = (u32, u32, Vec<u32>)> {
    (2u32..=40, 1u32..=4).prop_flat_map(|(radix, length)| {
        let bound = radix.pow(length);
        (
            Just(radix),
            Just(length),
            prop::collection::vec(0..bound, 0..300),
        )
    })
}

proptest! {
    #[test]
    fn prop_output_is_sorted_permutation((radix, length, data) in keyed_input()) {
        let sorted = radix_sort(&data, radix, length).unwrap();
        prop_assert!(baseline::is_sorted(&sorted));
        prop_assert!(baseline::matches_reference(&data, &sorted));
    }

    #[test]
    fn prop_sorting_sorted_is_identity((radix, length, data) in keyed_input()) {
        let once = radix_sort(&data, radix, length).unwrap();
        let twice = radix_sort(&once, radix, length).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_counting_variant_agrees((radix, length, data) in keyed_input()) {
        let plan = DigitPlan::new(radix, length).unwrap();
        let mut counted = data.clone();
        counting::sort(&mut counted, &plan);
        prop_assert_eq!(counted, radix_sort(&data, radix, length).unwrap());
    }

    #[test]
    fn prop_sort_items_matches_stable_sort(
        (radix, length, data) in keyed_input()
    ) {
        let items: Vec<Item<usize>> = data
            .iter()
            .enumerate()
            .map(|(tag, &key)| Item::new(key, tag))
            .collect();
        let mut expected = items.clone();
        expected.sort_by_key(|item| item.key);

        let sorter = RadixSorter::new(SortConfig::new(radix, length)).unwrap();
        prop_assert_eq!(sorter.sort_items(items).unwrap(), expected);
    }

    #[test]
    fn prop_each_pass_is_stable_on_low_digits(
        (radix, length, data) in keyed_input()
    ) {
        let items: Vec<Item<usize>> = data
            .iter()
            .enumerate()
            .map(|(tag, &key)| Item::new(key, tag))
            .collect();
        let sorter = RadixSorter::new(SortConfig::new(radix, length)).unwrap();
        let n = items.len();

        let mut violations = Vec::new();
        sorter
            .sort_items_inspect(items, |place, walk| {
                let low = radix.pow(place + 1);
                let seen: Vec<(u32, usize)> = walk.map(|item| (item.key % low, item.value)).collect();
                if seen.len() != n {
                    violations.push(format!("pass {} has {} items, expected {}", place, seen.len(), n));
                }
                for w in seen.windows(2) {
                    let ordered = w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1);
                    if !ordered {
                        violations.push(format!("pass {}: {:?} before {:?}", place, w[0], w[1]));
                    }
                }
            })
            .unwrap();
        prop_assert!(violations.is_empty(), "{:?}", violations);
    }

    #[test]
    fn prop_out_of_range_is_rejected(
        radix in 2u32..=16,
        length in 1u32..=3,
        data in prop::collection::vec(any::<u32>(), 1..50)
    ) {
        let limit = radix.pow(length);
        let result = radix_sort(&data, radix, length);
        match data.iter().position(|&v| v >= limit) {
            Some(index) => {
                let is_range_error = matches!(
                    result,
                    Err(SortError::ValueOutOfRange { index: i, .. }) if i == index
                );
                prop_assert!(is_range_error);
            }
            None => prop_assert!(result.is_ok()),
        }
    }

    #[test]
    fn prop_for_max_value_covers_max(max in any::<u32>(), radix in 2u32..=1000) {
        let config = SortConfig::for_max_value(max, radix).unwrap();
        let plan = config.plan().unwrap();
        prop_assert!(plan.covers(max));
        if config.length() > 1 {
            // one digit fewer would not be enough
            prop_assert!(max >= radix.pow(config.length() - 1));
        }
    }
}

#[test]
fn test_cross_check_against_reference() {
    let mut generator = InputGenerator::seeded(2024);
    for (radix, length) in [(10u32, 5u32), (2, 20), (16, 6), (3, 12)] {
        let data = generator.values(1000, radix.pow(length));
        let sorted = radix_sort(&data, radix, length).unwrap();
        assert!(
            baseline::matches_reference(&data, &sorted),
            "radix {} length {}",
            radix,
            length
        );
    }
}
