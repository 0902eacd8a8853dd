//! Property-based tests for the list algebra.

use proptest::prelude::*;

use lazy_list::List;

// =============================================================================
// Test helpers
// =============================================================================

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    return prop::collection::vec(-50i32..50, 0..40);
}

/// A vector and a split point inside it (inclusive of both ends).
fn vec_and_split() -> impl Strategy<Value = (Vec<i32>, usize)> {
    return small_vec().prop_flat_map(|v| {
        let len = v.len();
        return (Just(v), 0..=len);
    });
}

// =============================================================================
// Conversion properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn vec_round_trip(v in small_vec()) {
        prop_assert_eq!(List::from(v.clone()).to_vec(), v);
    }

    #[test]
    fn list_round_trip(v in small_vec()) {
        let list = List::from(v);
        prop_assert_eq!(List::from(list.to_vec()), list);
    }

    #[test]
    fn string_round_trip(s in "[a-z ]{0,24}") {
        prop_assert_eq!(List::from(s.as_str()).to_plain_string(), s);
    }
}

// =============================================================================
// Structural properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn take_drop_complement((v, n) in vec_and_split()) {
        let list = List::from(v);
        prop_assert_eq!(list.take(n).append(&list.drop(n)), list);
    }

    #[test]
    fn take_matches_vec((v, n) in vec_and_split()) {
        let list = List::from(v.clone());
        prop_assert_eq!(list.take(n).to_vec(), v[..n].to_vec());
        prop_assert_eq!(list.drop(n).to_vec(), v[n..].to_vec());
    }

    #[test]
    fn length_and_index(v in small_vec()) {
        let list = List::from(v.clone());
        prop_assert_eq!(list.length(), v.len());
        for (i, x) in v.iter().enumerate() {
            prop_assert_eq!(list.index(i), Ok(*x));
        }
        prop_assert!(list.index(v.len()).is_err());
    }

    #[test]
    fn reverse_matches_vec(v in small_vec()) {
        let mut expected = v.clone();
        expected.reverse();
        let list = List::from(v);
        prop_assert_eq!(list.reverse().to_vec(), expected);
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    #[test]
    fn map_filter_match_iterators(v in small_vec()) {
        let list = List::from(v.clone());
        let mapped: Vec<i32> = v.iter().map(|x| x * 3).collect();
        let kept: Vec<i32> = v.iter().copied().filter(|x| x % 2 == 0).collect();
        prop_assert_eq!(list.map(|x| x * 3).to_vec(), mapped);
        prop_assert_eq!(list.filter(|x| x % 2 == 0).to_vec(), kept);
    }

    #[test]
    fn fold_is_right_fold(v in small_vec()) {
        let list = List::from(v.clone());
        let folded = list.fold(Vec::new(), |x, mut acc| {
            acc.push(*x);
            return acc;
        });
        let mut expected = v;
        expected.reverse();
        prop_assert_eq!(folded, expected);
    }

    #[test]
    fn cycle_is_periodic(v in prop::collection::vec(-50i32..50, 1..10), i in 0usize..500) {
        let cycle = List::from(v.clone()).cycle().unwrap();
        prop_assert_eq!(cycle.index(i), Ok(v[i % v.len()]));
    }
}

// =============================================================================
// Ordering properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sort_matches_vec_sort(v in small_vec()) {
        let mut expected = v.clone();
        expected.sort();
        prop_assert_eq!(List::from(v).sort().to_vec(), expected);
    }

    #[test]
    fn sort_by_is_stable(v in prop::collection::vec((0i32..5, 0u32..1000), 0..40)) {
        let mut expected = v.clone();
        expected.sort_by_key(|pair| pair.0);
        let sorted = List::from(v).sort_by(|a, b| a.0.cmp(&b.0));
        prop_assert_eq!(sorted.to_vec(), expected);
    }

    #[test]
    fn compare_matches_vec(a in small_vec(), b in small_vec()) {
        let expected = a.cmp(&b);
        prop_assert_eq!(List::from(a).compare(&List::from(b)), expected);
    }
}

// =============================================================================
// Algebraic laws
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn flat_map_pure_is_identity(v in small_vec()) {
        let list = List::from(v);
        prop_assert_eq!(list.flat_map(|x| List::pure(*x)), list);
    }

    #[test]
    fn then_repeats_right(a in prop::collection::vec(0u8..10, 0..6), b in small_vec()) {
        let repeated: Vec<i32> = a.iter().flat_map(|_| b.iter().copied()).collect();
        let left = List::from(a);
        prop_assert_eq!(left.then(&List::from(b)).to_vec(), repeated);
    }

    #[test]
    fn append_is_associative(a in small_vec(), b in small_vec(), c in small_vec()) {
        let (a, b, c) = (List::from(a), List::from(b), List::from(c));
        prop_assert_eq!(a.append(&b).append(&c), a.append(&b.append(&c)));
    }
}
