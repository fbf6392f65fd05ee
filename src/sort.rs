/// In-place ascending selection sort.
///
/// Each pass selects the minimum of the unsorted suffix and swaps it to the
/// front of that suffix. O(n²) comparisons, at most n - 1 swaps.
pub fn selection_sort<T: Ord>(slice: &mut [T]) {
    let len = slice.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..len {
            if slice[j] < slice[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            slice.swap(i, min_index);
        }
    }
}

#[cfg(not(feature = "std-sort"))]
pub fn sort<T: Ord>(slice: &mut [T]) {
    selection_sort(slice);
}

#[cfg(feature = "std-sort")]
pub fn sort<T: Ord>(slice: &mut [T]) {
    slice.sort_unstable();
}

pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn empty_and_single() {
        let mut empty: Vec<i64> = vec![];
        selection_sort(&mut empty);
        assert!(empty.is_empty());
        let mut single = vec![7];
        selection_sort(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn reversed() {
        let mut list = (0..100).rev().collect::<Vec<i64>>();
        selection_sort(&mut list);
        assert_eq!(list, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_and_negatives() {
        let mut list = vec![3, -1, 3, 0, -7, 3, 2, -1];
        selection_sort(&mut list);
        assert_eq!(list, vec![-7, -1, -1, 0, 2, 3, 3, 3]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut list = vec![1, 1, 2, 5, 8, 13];
        let expected = list.clone();
        selection_sort(&mut list);
        assert_eq!(list, expected);
        selection_sort(&mut list);
        assert_eq!(list, expected);
    }

    #[test]
    fn matches_std_sort() {
        let mut rng = SmallRng::seed_from_u64(42);
        for len in 0..64 {
            let mut list = (0..len)
                .map(|_| rng.gen_range(-50i64..50))
                .collect::<Vec<_>>();
            let mut expected = list.clone();
            expected.sort();
            selection_sort(&mut list);
            assert!(is_sorted(&list));
            assert_eq!(list, expected);
        }
    }

    #[test]
    fn feature_sort() {
        let mut list = vec![9, 4, 4, 1, 0];
        sort(&mut list);
        assert_eq!(list, vec![0, 1, 4, 4, 9]);
    }

    #[test]
    fn check_is_sorted() {
        assert!(is_sorted::<i64>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
