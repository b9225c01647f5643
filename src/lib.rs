//! Graded examples of a functional data-transformation idiom.
//!
//! The lesson runs from hand-written loops filtering a fixed list
//! (`p1_hardcoded_loops`) through named strategy objects and generic
//! selection (`p2_criterion_objects`), composable predicates and ordering
//! adapters (`p3_combinators`), up to chained sequence pipelines
//! (`p4_pipelines`) and `Option` chaining in place of nested null checks
//! (`p5_option_chaining`). Run any step with
//! `cargo run --bin <step_name>`.
//!
//! The reusable pieces live here:
//!
//! - [`SuperSeq`] — wraps a finite ordered collection and exposes
//!   order-preserving `filter` / `map` / `flat_map` / `for_each`, each
//!   returning a new materialized sequence.
//! - [`Criterion`] — a one-argument boolean test with `negate` / `and` /
//!   `or` combinators; every `Fn(&E) -> bool` qualifies.
//! - [`compare_with_this`] / [`compare_greater`] — adapt a two-argument
//!   comparator plus a fixed reference value into criterion material.
//! - [`Car`] — the demo entity the graded steps exercise everything with.

pub mod car;
pub mod criterion;
pub mod ordering;
pub mod seq;

pub use car::Car;
pub use criterion::Criterion;
pub use ordering::{compare_greater, compare_with_this};
pub use seq::SuperSeq;
