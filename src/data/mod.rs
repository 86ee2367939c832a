//! Dot-notation access into nested data.
//!
//! A [`Path`] is a sequence of [`Segment`]s, usually parsed from a string like `"users.0.name"`.
//! The segment `*` is a wildcard: instead of naming a key it fans out over every child of the
//! current value, so `"users.*.name"` resolves to the list of every user's name.
//!
//! Paths can be resolved against anything implementing [`Accessible`], which covers [`Map`],
//! [`Value`] and [`Collection`], and can be implemented for types with named properties.
//!
//! [`Map`]: crate::Map
//! [`Value`]: crate::Value
//! [`Collection`]: crate::collection::Collection

mod accessible;
mod get;
mod path;

mod tests;

pub use accessible::*;
pub use get::*;
pub use path::*;
