//! Composable selection criteria.
//!
//! A criterion is a single-method boolean test over an element. Any closure
//! `Fn(&E) -> bool` is a criterion, so call sites can pass plain closures,
//! named strategy types, or the output of the combinators below without
//! caring which they got.

/// A boolean test over an element of type `E`.
///
/// Combinators build a new criterion that retains its operands by move and
/// only evaluates them when the composed criterion is invoked. `and`/`or`
/// short-circuit left-to-right, so the right operand may assume any
/// precondition the left one establishes.
pub trait Criterion<E> {
    /// Returns true when `item` satisfies the criterion.
    fn test(&self, item: &E) -> bool;

    /// Criterion that accepts exactly what `self` rejects.
    fn negate(self) -> Negate<Self>
    where
        Self: Sized,
    {
        Negate(self)
    }

    /// Criterion true iff both operands accept. `other` is not evaluated
    /// when `self` already rejected the element.
    fn and<Q>(self, other: Q) -> And<Self, Q>
    where
        Self: Sized,
        Q: Criterion<E>,
    {
        And(self, other)
    }

    /// Criterion true iff either operand accepts. `other` is not evaluated
    /// when `self` already accepted the element.
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Self: Sized,
        Q: Criterion<E>,
    {
        Or(self, other)
    }
}

impl<E, F> Criterion<E> for F
where
    F: Fn(&E) -> bool,
{
    fn test(&self, item: &E) -> bool {
        self(item)
    }
}

/// Logical complement of the wrapped criterion.
pub struct Negate<P>(P);

impl<E, P: Criterion<E>> Criterion<E> for Negate<P> {
    fn test(&self, item: &E) -> bool {
        !self.0.test(item)
    }
}

/// Short-circuiting conjunction of two criteria.
pub struct And<P, Q>(P, Q);

impl<E, P: Criterion<E>, Q: Criterion<E>> Criterion<E> for And<P, Q> {
    fn test(&self, item: &E) -> bool {
        self.0.test(item) && self.1.test(item)
    }
}

/// Short-circuiting disjunction of two criteria.
pub struct Or<P, Q>(P, Q);

impl<E, P: Criterion<E>, Q: Criterion<E>> Criterion<E> for Or<P, Q> {
    fn test(&self, item: &E) -> bool {
        self.0.test(item) || self.1.test(item)
    }
}
