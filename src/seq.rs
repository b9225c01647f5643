//! The sequence wrapper: a chainable surface over any finite ordered
//! collection.
//!
//! Every transformation materializes its result into a fresh `Vec` and
//! returns a new wrapper, leaving the upstream one untouched and re-iterable.
//! That is deliberate for a teaching artifact: each intermediate stage can be
//! printed, counted, and iterated again, at the cost of one pass and one
//! allocation per stage. A lazy single-pass pipeline would observe the same
//! ordering and results.

use crate::criterion::Criterion;

/// A finite ordered sequence of `E` supporting chained, order-preserving
/// transformations. Duplicates are permitted; insertion order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperSeq<E> {
    items: Vec<E>,
}

impl<E> SuperSeq<E> {
    /// Wraps any finite iterable collection.
    pub fn new(items: impl IntoIterator<Item = E>) -> Self {
        SuperSeq {
            items: items.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the backing collection directly, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Unwraps the backing collection.
    pub fn into_vec(self) -> Vec<E> {
        self.items
    }

    /// Invokes `action` once per element in traversal order. Side effects
    /// are the caller's responsibility; a panic inside `action` aborts the
    /// traversal and unwinds to the caller.
    pub fn for_each(&self, mut action: impl FnMut(&E)) {
        for item in &self.items {
            action(item);
        }
    }

    /// New sequence holding exactly the elements `criterion` accepts, in
    /// the original order. The upstream sequence is unchanged.
    pub fn filter(&self, criterion: impl Criterion<E>) -> SuperSeq<E>
    where
        E: Clone,
    {
        let mut results = Vec::new();
        for item in &self.items {
            if criterion.test(item) {
                results.push(item.clone());
            }
        }
        SuperSeq { items: results }
    }

    /// New sequence with one output per input element, same length and
    /// order. The output element type may differ from the input's.
    pub fn map<F>(&self, mut op: impl FnMut(&E) -> F) -> SuperSeq<F> {
        let mut results = Vec::with_capacity(self.items.len());
        for item in &self.items {
            results.push(op(item));
        }
        SuperSeq { items: results }
    }

    /// Applies `op` to each element and concatenates the produced sequences
    /// in input order, inner order preserved. Flattening is exactly one
    /// level deep: this is how a collection of collections (passenger lists
    /// per car) unrolls into one flat sequence.
    pub fn flat_map<F>(&self, mut op: impl FnMut(&E) -> SuperSeq<F>) -> SuperSeq<F> {
        let mut results = Vec::new();
        for item in &self.items {
            results.extend(op(item).items);
        }
        SuperSeq { items: results }
    }
}

impl<E> From<Vec<E>> for SuperSeq<E> {
    fn from(items: Vec<E>) -> Self {
        SuperSeq { items }
    }
}

impl<E> FromIterator<E> for SuperSeq<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        SuperSeq {
            items: iter.into_iter().collect(),
        }
    }
}

impl<E> IntoIterator for SuperSeq<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SuperSeq<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::assert_equal;

    fn gas_levels() -> SuperSeq<i32> {
        SuperSeq::new([6, 3, 9, 7, 6])
    }

    fn colors() -> SuperSeq<&'static str> {
        SuperSeq::new(["LightCoral", "pink", "Orange", "Gold", "plum", "Blue", "limeGreen"])
    }

    #[test]
    fn filter_keeps_order_and_duplicates() {
        let at_least_six = gas_levels().filter(|g: &i32| *g >= 6);
        assert_equal(at_least_six.iter().copied(), [6, 9, 7, 6]);
    }

    #[test]
    fn filter_long_color_names() {
        let long = colors().filter(|s: &&str| s.len() > 4);
        assert_equal(long.iter().copied(), ["LightCoral", "Orange", "limeGreen"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let once = colors().filter(|s: &&str| s.len() > 4);
        let twice = once.filter(|s: &&str| s.len() > 4);
        assert_eq!(once, twice);
    }

    #[test]
    fn map_changes_type_and_keeps_length() {
        let lengths = colors().map(|s| s.len());
        assert_eq!(lengths.len(), colors().len());
        assert_equal(lengths.iter().copied(), [10, 4, 6, 4, 4, 4, 9]);
    }

    #[test]
    fn flat_map_concatenates_inner_sequences_in_order() {
        let groups = SuperSeq::new([vec!["Fred", "Jim"], vec!["Ann"]]);
        let flat = groups.flat_map(|g| SuperSeq::new(g.clone()));
        assert_equal(flat.iter().copied(), ["Fred", "Jim", "Ann"]);
    }

    #[test]
    fn flat_map_skips_empty_inner_sequences() {
        let groups = SuperSeq::new([vec![1, 2], vec![], vec![3]]);
        let flat = groups.flat_map(|g| SuperSeq::new(g.clone()));
        assert_equal(flat.iter().copied(), [1, 2, 3]);
    }

    #[test]
    fn transformations_leave_the_source_untouched() {
        let source = colors();
        let before: Vec<&str> = source.iter().copied().collect();

        let _ = source.filter(|s: &&str| s.len() > 4);
        let _ = source.map(|s| s.to_uppercase());

        assert_equal(source.iter().copied(), before);
    }

    #[test]
    fn two_wrappers_from_one_source_are_independent() {
        let source = gas_levels();
        let low = source.filter(|g: &i32| *g < 7);
        let high = source.filter(|g: &i32| *g >= 7);

        assert_equal(low.iter().copied(), [6, 3, 6]);
        assert_equal(high.iter().copied(), [9, 7]);
        assert_equal(source.iter().copied(), [6, 3, 9, 7, 6]);
    }

    #[test]
    fn for_each_visits_in_traversal_order() {
        let mut seen = Vec::new();
        gas_levels().for_each(|g| seen.push(*g));
        assert_eq!(seen, [6, 3, 9, 7, 6]);
    }

    #[test]
    fn wrapper_composes_with_native_for_loops() {
        let mut total = 0;
        for g in &gas_levels() {
            total += g;
        }
        assert_eq!(total, 31);

        let collected: Vec<i32> = gas_levels().into_iter().collect();
        assert_eq!(collected, [6, 3, 9, 7, 6]);
    }

    #[test]
    fn empty_sequence_round_trips() {
        let empty: SuperSeq<i32> = SuperSeq::new([]);
        assert!(empty.is_empty());
        assert!(empty.filter(|_: &i32| true).is_empty());
        assert!(empty.map(|g| g * 2).is_empty());
    }
}
