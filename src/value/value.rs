use derive_more::IsVariant;

use super::{Key, Map};

/// A dynamically typed value.
///
/// The derived [`PartialEq`] is strict: two values are only equal if they are the same variant
/// with the same content, and for maps, the same entries in the same order. See
/// [`Value::loose_eq`] for equality that looks through representations.
#[derive(Debug, Clone, Default, PartialEq, IsVariant)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered map, which is also how lists are represented.
    Map(Map),
}

/// A numeric view of a value, used for arithmetic and comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub(crate) const fn as_f64(self) -> f64 {
        match self {
            Number::Int(int) => int as f64,
            Number::Float(float) => float,
        }
    }
}

impl Value {
    /// Creates an empty list.
    pub fn list() -> Value {
        Value::Map(Map::new())
    }

    /// Returns a short name for the variant, for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Map(_) => "map",
        }
    }

    /// Returns the contained bool, if this is a [`Value::Bool`].
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(bool) => Some(*bool),
            _ => None,
        }
    }

    /// Returns the contained integer, if this is a [`Value::Int`].
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(int) => Some(*int),
            _ => None,
        }
    }

    /// Returns the contained string, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(string) => Some(string),
            _ => None,
        }
    }

    /// Returns a reference to the contained map, if this is a [`Value::Map`].
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a mutable reference to the contained map, if this is a [`Value::Map`].
    pub const fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Consumes the value, returning the contained map, if this is a [`Value::Map`].
    pub fn into_map(self) -> Option<Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the numeric value of this value as an [`f64`], if it has one. Integers, floats,
    /// bools and numeric strings (surrounding whitespace allowed) are numeric.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// Returns true if [`Value::as_f64`] would return [`Some`].
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// Returns the truthiness of the value. `null`, `false`, `0`, `0.0`, `""`, `"0"` and empty
    /// maps are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(bool) => *bool,
            Value::Int(int) => *int != 0,
            Value::Float(float) => *float != 0.0,
            Value::Str(string) => !(string.is_empty() || string == "0"),
            Value::Map(map) => !map.is_empty(),
        }
    }

    pub(crate) fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(bool) => Some(Number::Int((*bool).into())),
            Value::Int(int) => Some(Number::Int(*int)),
            Value::Float(float) => Some(Number::Float(*float)),
            Value::Str(string) => parse_number(string),
            Value::Null | Value::Map(_) => None,
        }
    }
}

/// Parses a numeric string. Unlike [`str::parse`] for floats, words like `inf` or `NaN` aren't
/// numeric.
pub(crate) fn parse_number(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || !trimmed.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    match trimmed.parse::<i64>() {
        Ok(int) => Some(Number::Int(int)),
        Err(_) => trimmed.parse::<f64>().ok().map(Number::Float),
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(int) => Value::Int(int),
            Err(_) => Value::Float(value as f64),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Int(int) => Value::Int(int),
            Key::Str(string) => Value::Str(string),
        }
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    /// Creates a list, keyed `0..n`.
    fn from(value: Vec<T>) -> Self {
        Value::Map(Map::from_values(value))
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    /// Creates a list, keyed `0..n`.
    fn from(value: [T; N]) -> Self {
        Value::Map(Map::from_values(value))
    }
}
