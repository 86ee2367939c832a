//! A chainable, ordered collection of [`Value`](crate::Value)s.
//!
//! # Purpose
//! [`Collection`] wraps a [`Map`](crate::Map) and exposes a fluent API for reshaping it:
//! `map`, `filter`, `sort_by`, `chunk`, `unique` and so on. Each of these returns a new
//! collection and leaves the receiver untouched, so a collection can be reused after any number
//! of transformations. The methods that do change the receiver (`shift`, `pop`, `splice`,
//! `transform`, `put`, `push`, `remove` and `forget`) take `&mut self`, so the borrow checker
//! points them out.
//!
//! # Method
//! Several methods accept a [`Retriever`] to decide what to compare or sort by. A retriever is
//! either a dot-notation field path, resolved against each value with
//! [`data_get`](crate::data::data_get), or a function of the value and its key. It's resolved
//! once into a single function before the collection is walked.

mod collection;
mod error;
mod iter;
mod ops;
mod retriever;
mod sort;


pub use collection::*;
pub use error::*;
pub use retriever::*;
