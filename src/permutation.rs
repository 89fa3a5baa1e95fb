//! Lexicographic permutation generation.
//!
//! # Algorithm
//!
//! The successor of a sequence in lexicographic order is found by:
//!
//! 1. Scanning from the right for the last index `j` with `a[j] < a[j+1]`.
//!    If there is none, the sequence is non-increasing and has no successor.
//! 2. Finding the index `k > j` holding the smallest value greater than `a[j]`.
//! 3. Swapping `a[j]` and `a[k]`.
//! 4. Sorting the suffix after `j` ascending.
//!
//! # Complexity
//!
//! O(n log n) per step, at most n! steps.

use std::iter::FusedIterator;

/// Returns the lexicographic successor of `items`, or `None` if `items` is
/// already the last ordering (sorted non-increasing).
///
/// # Examples
///
/// ```
/// use u_tour::permutation::next_permutation;
///
/// assert_eq!(next_permutation(&[1, 2, 4, 3]), Some(vec![1, 3, 2, 4]));
/// assert_eq!(next_permutation(&[3, 2, 1]), None);
/// ```
pub fn next_permutation<T: Ord + Clone>(items: &[T]) -> Option<Vec<T>> {
    let j = items.windows(2).rposition(|w| w[0] < w[1])?;

    // j+1 qualifies by the choice of j; keep the leftmost index on ties
    let mut k = j + 1;
    for i in (j + 2)..items.len() {
        if items[i] > items[j] && items[i] < items[k] {
            k = i;
        }
    }

    let mut next = items.to_vec();
    next.swap(j, k);
    next[j + 1..].sort();
    Some(next)
}

/// Iterator over the lexicographic permutations of a sequence, starting with
/// the sequence itself.
///
/// Single pass: once the last ordering has been yielded the iterator stays
/// exhausted. Build a new one to start over. Duplicate elements are allowed;
/// each distinct ordering is yielded once.
///
/// # Examples
///
/// ```
/// use u_tour::permutation::LexicographicPermutations;
///
/// let mut perms = LexicographicPermutations::new(vec![1, 2, 3]);
/// assert_eq!(perms.next(), Some(vec![1, 2, 3]));
/// assert_eq!(perms.next(), Some(vec![1, 3, 2]));
/// assert_eq!(perms.count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct LexicographicPermutations<T> {
    next: Option<Vec<T>>,
}

impl<T: Ord + Clone> LexicographicPermutations<T> {
    /// Creates an iterator whose first item is `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self { next: Some(items) }
    }
}

impl<T: Ord + Clone> Iterator for LexicographicPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let current = self.next.take()?;
        self.next = next_permutation(&current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.next {
            None => (0, Some(0)),
            Some(items) => (1, factorial(items.len())),
        }
    }
}

impl<T: Ord + Clone> FusedIterator for LexicographicPermutations<T> {}

fn factorial(n: usize) -> Option<usize> {
    (2..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_is_initial_ordering() {
        let mut perms = LexicographicPermutations::new(vec![1, 2, 3, 4]);
        assert_eq!(perms.next(), Some(vec![1, 2, 3, 4]));
        assert_eq!(perms.next(), Some(vec![1, 2, 4, 3]));
    }

    #[test]
    fn test_successor_of_1243() {
        assert_eq!(next_permutation(&[1, 2, 4, 3]), Some(vec![1, 3, 2, 4]));
    }

    #[test]
    fn test_counts_all_permutations() {
        assert_eq!(LexicographicPermutations::new(vec![0, 1, 2, 3]).count(), 24);
    }

    #[test]
    fn test_stops_at_end() {
        let mut perms = LexicographicPermutations::new(vec![3, 2, 1, 0]);
        assert_eq!(perms.next(), Some(vec![3, 2, 1, 0]));
        assert_eq!(perms.next(), None);
        assert_eq!(perms.next(), None);
        assert_eq!(next_permutation(&[3, 2, 1, 0]), None);
    }

    #[test]
    fn test_strictly_increasing_sequence() {
        let all: Vec<_> = LexicographicPermutations::new(vec!['a', 'b', 'c']).collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_duplicates_terminate() {
        let all: Vec<_> = LexicographicPermutations::new(vec![1, 1, 2]).collect();
        assert_eq!(all, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
    }

    #[test]
    fn test_duplicate_tie_in_suffix() {
        // two 3s qualify as the smallest value above a[j] = 2
        assert_eq!(next_permutation(&[2, 3, 3, 1]), Some(vec![3, 1, 2, 3]));
    }

    #[test]
    fn test_trivial_sequences() {
        assert_eq!(LexicographicPermutations::<u8>::new(vec![]).count(), 1);
        assert_eq!(LexicographicPermutations::new(vec![7]).count(), 1);
    }

    #[test]
    fn test_size_hint() {
        let perms = LexicographicPermutations::new(vec![1, 2, 3, 4]);
        assert_eq!(perms.size_hint(), (1, Some(24)));
        let mut done = LexicographicPermutations::new(vec![1]);
        done.next();
        assert_eq!(done.size_hint(), (0, Some(0)));
    }

    proptest! {
        #[test]
        fn prop_distinct_elements_yield_n_factorial(n in 0usize..7) {
            let items: Vec<usize> = (0..n).collect();
            let expected = factorial(n).expect("small n");
            prop_assert_eq!(LexicographicPermutations::new(items).count(), expected);
        }

        #[test]
        fn prop_successor_is_greater(items in proptest::collection::vec(0u8..4, 0..7)) {
            if let Some(next) = next_permutation(&items) {
                prop_assert!(next > items);
                let mut a = items.clone();
                let mut b = next.clone();
                a.sort();
                b.sort();
                prop_assert_eq!(a, b);
            }
        }
    }
}
