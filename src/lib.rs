//! This crate is a set of helpers for working with loosely structured, ordered data: the kind of
//! nested key-value trees that come out of JSON documents, form submissions or config files.
//!
//! # Purpose
//! Rust's own collections are strongly typed, which is usually what you want. Sometimes though,
//! data arrives as a tree of maps and lists whose shape is only known at runtime, and all that's
//! needed is to pick a few values out of it, reshape it and pass it along. This crate provides
//! that layer without dragging a full query language along with it.
//!
//! # Method
//! Everything is built on a small dynamic model found in [`value`]:
//! - [`Value`]: null, bools, integers, floats, strings or a nested [`Map`].
//! - [`Map`]: an insertion-ordered mapping from [`Key`]s (integers or strings) to values. Lists
//!   are just maps with the keys `0..n`.
//!
//! On top of that sit:
//! - [`data`]: dot-notation paths (`"users.*.name"`) resolved against anything implementing
//!   [`Accessible`](data::Accessible).
//! - [`arr`]: primitive helpers over maps, including dot-notation removal with
//!   [`forget`](arr::forget).
//! - [`collection`]: [`Collection`](collection::Collection), a chainable wrapper around a map.
//!   Transformations always return a new collection, the receiver is only changed by the few
//!   methods documented as mutating it in place.
//! - [`str`](mod@str): a handful of string helpers.
//!
//! # Error Handling
//! Most operations can't fail: a missing key or path segment produces an empty result or the
//! supplied default rather than an error. Where an error is possible, it is returned as a
//! strongly typed [`Result`], using small structs that implement [`Error`](std::error::Error)
//! and enums over them for static dispatch. The [`Index`](std::ops::Index) impls are the
//! exception and panic on a missing key, just like the standard library's maps.
//!
//! # Logging
//! Places where input is silently ignored (a path that can't be forgotten, a wildcard that meets
//! a scalar) emit `tracing` events at trace level. No subscriber is installed by this crate.
//!
//! # Features
//! - `arr`: the [`arr`] and [`data`] modules.
//! - `collection`: the [`collection`] module, implies `arr`.
//! - `str`: the [`str`](mod@str) module.
//! - `json`: `serde` support, JSON conversion and JSON [`Display`](std::fmt::Display) impls.

// #![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod value;

#[cfg(feature = "arr")]
pub mod arr;
#[cfg(feature = "collection")]
pub mod collection;
#[cfg(feature = "arr")]
pub mod data;
#[cfg(feature = "str")]
pub mod str;

pub(crate) mod util;

#[doc(inline)]
pub use value::{Key, Map, Value};
