use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::value::{InvalidArgument, KeyNotFound};

/// The errors returned by fallible [`Collection`](super::Collection) operations.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    KeyNotFound(KeyNotFound),
    InvalidArgument(InvalidArgument),
}
