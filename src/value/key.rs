use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use super::{InvalidArgument, Value};

/// A key within a [`Map`](super::Map), either an integer or a string.
///
/// Strings that hold a canonical decimal integer are normalised to [`Key::Int`] when converted
/// with [`Key::parse`] or [`From<&str>`](Key#impl-From<%26str>-for-Key), so `"0"` and `0` address
/// the same entry. Strings like `"03"`, `"+1"` or `"-0"` aren't canonical and stay strings.
/// Constructing [`Key::Str`] directly skips this normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// An integer key, as assigned by [`Map::push`](super::Map::push).
    Int(i64),
    /// A string key.
    Str(String),
}

impl Key {
    /// Parses `raw` into a key, normalising canonical integers.
    pub fn parse(raw: &str) -> Key {
        if is_canonical_int(raw)
            && let Ok(int) = raw.parse::<i64>()
        {
            return Key::Int(int);
        }
        Key::Str(raw.to_owned())
    }

    /// Returns the integer value of this key, if it is an integer.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(int) => Some(*int),
            Key::Str(_) => None,
        }
    }

    /// Returns the string value of this key, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(string) => Some(string),
        }
    }

    /// Returns true if this key is an integer.
    pub const fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }
}

fn is_canonical_int(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    match digits.as_bytes() {
        [] => false,
        // "-0" isn't canonical.
        [b'0'] => digits.len() == raw.len(),
        [first, rest @ ..] => (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit),
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(int) => write!(f, "{int}"),
            Key::Str(string) => write!(f, "{string}"),
        }
    }
}

impl Ord for Key {
    /// Integer keys come before string keys. Integers are ordered numerically and strings
    /// lexically.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Int(a), Key::Int(b)) => a.cmp(b),
            (Key::Str(a), Key::Str(b)) => a.cmp(b),
            (Key::Int(_), Key::Str(_)) => Ordering::Less,
            (Key::Str(_), Key::Int(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match Key::parse(&value) {
            Key::Int(int) => Key::Int(int),
            Key::Str(_) => Key::Str(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::parse(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value.into())
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value.into())
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl TryFrom<&Value> for Key {
    type Error = InvalidArgument;

    /// Converts a scalar value into a key. Bools become `0` or `1`, floats are truncated and null
    /// becomes the empty string. Maps can't be used as keys.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Key::Str(String::new())),
            Value::Bool(bool) => Ok(Key::Int((*bool).into())),
            Value::Int(int) => Ok(Key::Int(*int)),
            // Saturating truncation toward zero.
            Value::Float(float) => Ok(Key::Int(*float as i64)),
            Value::Str(string) => Ok(Key::parse(string)),
            Value::Map(_) => Err(InvalidArgument::new("a map can't be used as a key")),
        }
    }
}
