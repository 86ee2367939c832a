use crate::{Key, Map, Value};

/// A target that paths can be resolved against: anything that can check for, read and delete
/// values by [`Key`].
///
/// Resolution dispatches on this capability rather than on concrete types. After the first
/// segment of a path, resolution continues through the [`Value`]s returned by
/// [`get_key`](Accessible::get_key), so only the outermost target needs to be a custom type.
///
/// # Examples
/// A type with named properties can expose them as keys:
/// ```
/// use support_lib::data::{data_get, Accessible};
/// use support_lib::{Key, Value};
///
/// struct Point {
///     x: Value,
///     y: Value,
/// }
///
/// impl Accessible for Point {
///     fn get_key(&self, key: &Key) -> Option<&Value> {
///         match key.as_str()? {
///             "x" => Some(&self.x),
///             "y" => Some(&self.y),
///             _ => None,
///         }
///     }
///
///     fn get_key_mut(&mut self, key: &Key) -> Option<&mut Value> {
///         match key.as_str()? {
///             "x" => Some(&mut self.x),
///             "y" => Some(&mut self.y),
///             _ => None,
///         }
///     }
///
///     fn remove_key(&mut self, key: &Key) -> Option<Value> {
///         self.get_key_mut(key).map(std::mem::take)
///     }
///
///     fn to_value(&self) -> Value {
///         support_lib::map! { "x" => self.x.clone(), "y" => self.y.clone() }
///     }
/// }
///
/// let point = Point { x: 1.into(), y: 2.into() };
/// assert_eq!(data_get(&point, "y", Value::Null), Value::Int(2));
/// ```
pub trait Accessible {
    /// Returns true if the target holds a value for `key`, even if that value is null.
    fn has_key(&self, key: &Key) -> bool {
        self.get_key(key).is_some()
    }

    /// Returns a reference to the value held for `key`.
    fn get_key(&self, key: &Key) -> Option<&Value>;

    /// Returns a mutable reference to the value held for `key`.
    fn get_key_mut(&mut self, key: &Key) -> Option<&mut Value>;

    /// Removes and returns the value held for `key`.
    fn remove_key(&mut self, key: &Key) -> Option<Value>;

    /// Returns the whole target as a value. This is what an empty path resolves to, and what a
    /// leading wildcard iterates over.
    fn to_value(&self) -> Value;
}

impl Accessible for Map {
    fn has_key(&self, key: &Key) -> bool {
        self.contains(key)
    }

    fn get_key(&self, key: &Key) -> Option<&Value> {
        self.get(key)
    }

    fn get_key_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.get_mut(key)
    }

    fn remove_key(&mut self, key: &Key) -> Option<Value> {
        self.remove(key)
    }

    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }
}

/// Only [`Value::Map`] holds keys. Every other variant behaves as an empty target.
impl Accessible for Value {
    fn get_key(&self, key: &Key) -> Option<&Value> {
        self.as_map()?.get(key)
    }

    fn get_key_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.as_map_mut()?.get_mut(key)
    }

    fn remove_key(&mut self, key: &Key) -> Option<Value> {
        self.as_map_mut()?.remove(key)
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}
