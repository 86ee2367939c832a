use std::error::Error;
use std::fmt::{self, Display, Formatter};

use super::Key;

/// Raised by direct, single-key access to a key that isn't present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotFound {
    /// The key that was requested.
    pub key: Key,
}

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key {:?} not found in collection!", self.key.to_string())
    }
}

impl Error for KeyNotFound {}

/// Raised when an argument has a shape that the operation can't accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    /// A short description of what was wrong with the argument.
    pub reason: String,
}

impl InvalidArgument {
    pub(crate) fn new(reason: impl Into<String>) -> InvalidArgument {
        InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid argument: {}!", self.reason)
    }
}

impl Error for InvalidArgument {}
