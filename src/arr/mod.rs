//! Primitive helpers over [`Map`](crate::Map)s.
//!
//! These are the building blocks used by [`data`](crate::data) and
//! [`Collection`](crate::collection::Collection), exposed for when wrapping a map in a collection
//! isn't worth it. Functions that take a map by reference return new data, the only exception is
//! [`forget`], which removes paths in place.

mod forget;
mod helpers;

mod tests;

pub use forget::*;
pub use helpers::*;
