//! The dynamic data model shared by the rest of the crate: [`Value`], [`Key`] and the ordered
//! [`Map`], along with the errors raised when a value can't be used the way it was asked to be.
//!
//! Values are plain data. A [`Map`] nested in another map is stored inline as [`Value::Map`],
//! there is no sharing between trees, so cloning a value always produces an independent copy.
//!
//! The [`map!`](crate::map) and [`list!`](crate::list) macros are the easiest way to build
//! nested values by hand.
#![warn(missing_docs)]

mod cmp;
mod error;
mod iter;
mod key;
mod macros;
mod map;
mod value;

#[cfg(feature = "json")]
mod json;

mod tests;

pub use error::*;
pub use iter::*;
pub use key::*;
pub use map::*;
pub use value::*;
