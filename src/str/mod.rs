//! String helpers.
//!
//! Functions that take a list of candidates accept anything iterable over string slices, so both
//! `["a", "b"]` and a `Vec<String>` work. Functions with a glue argument use a single space when
//! given [`None`].

mod helpers;

mod tests;

pub use helpers::*;
