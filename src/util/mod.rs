pub mod fmt;
pub mod panic;
#[cfg(feature = "collection")]
pub mod result;
