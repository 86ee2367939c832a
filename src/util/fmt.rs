use std::fmt::{self, Debug, Formatter};

/// Debug-formats as the contained string, without quotes or escaping. Lets map keys be printed as
/// `0` or `"name"` instead of `Int(0)` or `Str("name")`.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
