//! Adapters that turn a two-argument comparator into criterion material.
//!
//! A comparator orders a *pair* of elements; a criterion judges *one*. The
//! bridge is to fix one side of the comparison: `compare_with_this` pins a
//! reference value as the comparator's first argument, and `compare_greater`
//! reads the resulting `Ordering` as a yes/no answer.

use std::cmp::Ordering;

/// Fixes `target` as the first argument of `comparator`, yielding a
/// one-argument function that rates every element against that reference.
///
/// The result is `comparator(&target, x)` — note the argument order. A
/// `Less` outcome means the *reference* orders before `x`, not the other
/// way around.
pub fn compare_with_this<E, C>(target: E, comparator: C) -> impl Fn(&E) -> Ordering
where
    C: Fn(&E, &E) -> Ordering,
{
    move |x| comparator(&target, x)
}

/// Turns a fixed-reference comparison into a criterion that accepts `x`
/// exactly when the comparison yields `Less`.
///
/// With a comparison built by [`compare_with_this`], `Less` means the
/// reference orders strictly *before* `x` — so the criterion selects the
/// elements that outrank the reference. The name follows that reading:
/// "greater" is a statement about the element, not about the sign of the
/// comparison.
pub fn compare_greater<E, C>(comparison: C) -> impl Fn(&E) -> bool
where
    C: Fn(&E) -> Ordering,
{
    move |x| comparison(x) == Ordering::Less
}
