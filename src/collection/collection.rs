use std::fmt::{self, Debug, Formatter};

use super::{CollectionError, KeyNotFound};
use crate::arr;
use crate::value::Iter;
use crate::{Key, Map, Value};

/// An ordered collection of values, keyed by integers or strings.
///
/// Methods that transform the collection return a new one, so calls can be chained without
/// affecting the original:
/// ```
/// use support_lib::collection::Collection;
/// use support_lib::Value;
///
/// let numbers = Collection::from(vec![1, 2, 3, 4, 5, 6]);
/// let even_squares = numbers
///     .filter(|n, _| n.as_i64().is_some_and(|n| n % 2 == 0))
///     .map(|n, _| Value::from(n.as_i64().unwrap_or_default().pow(2)))
///     .values();
///
/// assert_eq!(even_squares, Collection::from(vec![4, 16, 36]));
/// assert_eq!(numbers.len(), 6);
/// ```
///
/// Keys travel with their values: filtering, sorting, slicing and reversing all keep the original
/// keys. Use [`values`](Collection::values) to renumber them.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Collection.
/// - `m`: The number of items in the other collection, for binary operations.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `map`, `filter`, `reject`, `slice`, `chunk`, `merge` | `O(n+m)` |
/// | `sort`, `sort_by`, `sort_keys` | `O(n log n)` |
/// | `unique`, `diff`, `diff_assoc`, `search` | `O(n*m)` |
/// | `shift`, `splice` | `O(n)` |
#[derive(Clone, Default, PartialEq)]
pub struct Collection {
    pub(crate) items: Map,
}

impl Collection {
    /// Creates a new, empty Collection.
    pub fn new() -> Collection {
        Collection::default()
    }

    /// Creates a Collection from anything convertible into a [`Value`]. A map is used as it is,
    /// null gives an empty collection and any other value is wrapped as the single item.
    pub fn make(items: impl Into<Value>) -> Collection {
        Collection {
            items: arr::wrap(items),
        }
    }

    /// Returns the underlying map.
    pub const fn all(&self) -> &Map {
        &self.items
    }

    /// Consumes the Collection, returning the underlying map.
    pub fn into_map(self) -> Map {
        self.items
    }

    /// Returns the items as a plain nested [`Value`].
    pub fn to_array(&self) -> Value {
        Value::Map(self.items.clone())
    }

    /// Returns the number of items.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of items. Same as [`len`](Collection::len).
    pub const fn count(&self) -> usize {
        self.len()
    }

    /// Returns true if the Collection holds no items.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the Collection holds at least one item.
    pub const fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns an iterator over the keys and values of the Collection, in order. Iterating
    /// doesn't consume or change the Collection, so it can be iterated any number of times.
    pub fn iter(&self) -> Iter<'_> {
        self.items.iter()
    }

    /// Returns a reference to the value for `key`.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.items.get(&key.into())
    }

    /// Returns a reference to the value for `key`, or a [`KeyNotFound`] error.
    pub fn try_get(&self, key: impl Into<Key>) -> Result<&Value, KeyNotFound> {
        let key = key.into();
        self.items.get(&key).ok_or(KeyNotFound { key })
    }

    /// Returns a reference to the value for `key`, for use with `?` in functions returning
    /// [`CollectionError`].
    pub fn get_or_err(&self, key: impl Into<Key>) -> Result<&Value, CollectionError> {
        Ok(self.try_get(key)?)
    }

    /// Returns true if the Collection holds a value for `key`, even if it's null.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.items.contains(&key.into())
    }

    /// Returns the first value.
    pub fn first(&self) -> Option<&Value> {
        self.items.first().map(|(_, v)| v)
    }

    /// Returns the last value.
    pub fn last(&self) -> Option<&Value> {
        self.items.last().map(|(_, v)| v)
    }

    /// Returns a list of the keys.
    pub fn keys(&self) -> Collection {
        Collection {
            items: Map::from_values(self.items.keys().cloned()),
        }
    }

    /// Returns a list of the values, with the keys renumbered from 0.
    pub fn values(&self) -> Collection {
        Collection {
            items: Map::from_values(self.items.values().cloned()),
        }
    }

    /// Sets the value for `key`, in place. An existing key keeps its position and its previous
    /// value is returned.
    pub fn put(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.items.insert(key, value)
    }

    /// Appends `value` under the next free integer key, in place, returning that key.
    pub fn push(&mut self, value: impl Into<Value>) -> Key {
        self.items.push(value)
    }

    /// Removes the value for `key`, in place, without treating dots as paths.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.items.remove(&key.into())
    }

    /// Removes the dot-notation `keys`, in place. See [`arr::forget`].
    pub fn forget<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        arr::forget(&mut self.items, keys);
        self
    }

    /// Removes and returns the first value, in place. Integer keys of the remaining items are
    /// renumbered from 0.
    pub fn shift(&mut self) -> Option<Value> {
        self.items.shift().map(|(_, v)| v)
    }

    /// Removes and returns the last value, in place.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop().map(|(_, v)| v)
    }

    /// Removes a window of items from the Collection, in place, putting the values of
    /// `replacement` in their place. The window is calculated as in
    /// [`slice`](Collection::slice). Returns the removed items.
    ///
    /// Integer keys are renumbered from 0 in both the Collection and the result, string keys are
    /// kept.
    pub fn splice(
        &mut self,
        offset: isize,
        length: Option<isize>,
        replacement: impl Into<Value>,
    ) -> Collection {
        let range = super::ops::window(self.len(), offset, length);
        // Placeholder keys, the renumbering below assigns the real ones.
        let inserted = arr::wrap(replacement).into_iter().map(|(_, v)| (Key::Int(0), v));

        let mut removed: Map = self.items.entries.splice(range, inserted).collect();
        removed.renumber();
        self.items.renumber();

        Collection { items: removed }
    }

    /// Replaces every value with the result of `f`, in place.
    pub fn transform<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&Value, &Key) -> Value,
    {
        self.items = self.map(f).items;
        self
    }

    /// Calls `f` with a copy of the Collection, returning the Collection itself.
    pub fn tap<F: FnOnce(Collection)>(&self, f: F) -> &Self {
        f(self.clone());
        self
    }

    /// Calls `f` with the Collection, returning the result.
    pub fn pipe<R, F: FnOnce(&Collection) -> R>(&self, f: F) -> R {
        f(self)
    }

    /// Builds a new Collection from whatever `f` produces from a copy of the items.
    pub fn tap_into<V, F>(&self, f: F) -> Collection
    where
        V: Into<Value>,
        F: FnOnce(Map) -> V,
    {
        Collection::make(f(self.items.clone()))
    }

    /// Like [`tap_into`](Collection::tap_into), with the original items merged back into the
    /// result. Useful when `f` returns extra values derived from the items.
    pub fn pass_through<V, F>(&self, f: F) -> Collection
    where
        V: Into<Value>,
        F: FnOnce(Map) -> V,
    {
        self.tap_into(f).merge(self.clone())
    }

    /// Returns a readable, multi-line rendering of the items, for debugging.
    pub fn dump(&self) -> String {
        format!("{:#?}", self.items)
    }
}

#[cfg(feature = "json")]
impl Collection {
    /// Creates a Collection from anything serializable. A struct becomes a collection of its
    /// fields, a sequence a list.
    pub fn from_serialize<T>(value: &T) -> Result<Collection, serde_json::Error>
    where
        T: serde::Serialize + ?Sized,
    {
        Value::from_serialize(value).map(Collection::make)
    }

    /// Parses a JSON document into a Collection.
    pub fn from_json(json: &str) -> Result<Collection, serde_json::Error> {
        Value::from_json(json).map(Collection::make)
    }

    /// Returns the items as a JSON-compatible [`serde_json::Value`].
    pub fn to_serializable(&self) -> serde_json::Value {
        self.items.to_serializable()
    }

    /// Encodes the items as a compact JSON string.
    pub fn to_json(&self) -> String {
        self.items.to_json()
    }
}

impl Debug for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Collection").field(&self.items).finish()
    }
}
