use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::{Iter, Key, Keys, Value, Values, ValuesMut};
use crate::util::fmt::DebugRaw;

/// An insertion-ordered map from [`Key`]s to [`Value`]s.
///
/// Entries are stored contiguously in the order they were first inserted, alongside a hash index
/// from each key to its position. Replacing the value of an existing key keeps its position.
///
/// Lists are maps whose keys are exactly `0..n`. [`Map::push`] appends with the next free
/// integer key: one past the largest non-negative integer key the map has held, or 0.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Map.
/// - `i`: The position of the entry in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `insert` | `O(1)`* |
/// | `push` | `O(1)`* |
/// | `remove` | `O(n-i)` |
/// | `shift` | `O(n)` |
/// | `pop` | `O(n)`** |
///
/// \* Amortized, as these rely on [`HashMap`] internally.
///
/// \** Popping has to find the new largest integer key.
#[derive(Clone, Default)]
pub struct Map {
    pub(crate) entries: Vec<(Key, Value)>,
    pub(crate) index: HashMap<Key, usize>,
    pub(crate) next_int: i64,
}

impl Map {
    /// Creates a new, empty Map.
    pub fn new() -> Map {
        Map::default()
    }

    /// Creates a new, empty Map with space for at least `cap` entries.
    pub fn with_cap(cap: usize) -> Map {
        Map {
            entries: Vec::with_capacity(cap),
            index: HashMap::with_capacity(cap),
            next_int: 0,
        }
    }

    /// Creates a list from the provided values, keyed `0..n`.
    pub fn from_values<I>(values: I) -> Map
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut map = Map::new();
        for value in values {
            map.push(value);
        }
        map
    }

    /// Returns the number of entries in the Map.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the Map contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the keys of this Map are exactly `0..n`, in order.
    pub fn is_list(&self) -> bool {
        self.entries.iter()
            .enumerate()
            .all(|(i, (key, _))| key.as_int().is_some_and(|int| usize::try_from(int) == Ok(i)))
    }

    /// Returns a reference to the value associated with `key`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match self.index.get(key) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Returns the entry at `position` in iteration order.
    pub fn get_index(&self, position: usize) -> Option<(&Key, &Value)> {
        self.entries.get(position).map(|(k, v)| (k, v))
    }

    /// Returns the position of `key` in iteration order.
    pub fn position(&self, key: &Key) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Returns true if there is a value associated with `key`, even if that value is null.
    pub fn contains(&self, key: &Key) -> bool {
        self.index.contains_key(key)
    }

    /// Inserts `value` under `key`. If the key already exists its value is replaced in place and
    /// the previous value returned, otherwise the entry is appended.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        if let Some(&i) = self.index.get(&key) {
            return Some(mem::replace(&mut self.entries[i].1, value));
        }

        if let Key::Int(int) = key
            && int >= self.next_int
        {
            self.next_int = int.saturating_add(1);
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Appends `value` under the next free integer key, returning that key.
    pub fn push(&mut self, value: impl Into<Value>) -> Key {
        let key = Key::Int(self.next_int);
        // The next free key can't be taken, so this always appends.
        self.insert(key.clone(), value);
        key
    }

    /// Removes the entry associated with `key`, returning it if it exists. The order of the
    /// remaining entries is preserved.
    pub fn remove_entry(&mut self, key: &Key) -> Option<(Key, Value)> {
        let position = self.index.remove(key)?;
        let entry = self.entries.remove(position);
        self.reindex_from(position);
        Some(entry)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes and returns the first entry. Remaining integer keys are renumbered from 0, string
    /// keys are left as they are.
    pub fn shift(&mut self) -> Option<(Key, Value)> {
        if self.entries.is_empty() {
            return None;
        }
        let entry = self.entries.remove(0);
        self.renumber();
        Some(entry)
    }

    /// Removes and returns the last entry. The next free integer key is recalculated from the
    /// remaining keys.
    pub fn pop(&mut self) -> Option<(Key, Value)> {
        let (key, value) = self.entries.pop()?;
        self.index.remove(&key);
        self.next_int = self.entries.iter()
            .filter_map(|(k, _)| k.as_int())
            .filter(|&int| int >= 0)
            .max()
            .map_or(0, |int| int.saturating_add(1));
        Some((key, value))
    }

    /// Returns the first entry.
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.get_index(0)
    }

    /// Returns the last entry.
    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.entries.last().map(|(k, v)| (k, v))
    }

    /// Retains only the entries for which `f` returns true, preserving their order.
    pub fn retain<F: FnMut(&Key, &Value) -> bool>(&mut self, mut f: F) {
        self.entries.retain(|(k, v)| f(k, v));
        self.reindex_from(0);
    }

    /// Removes all entries. The next free integer key is reset to 0.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.next_int = 0;
    }

    /// Returns an iterator over all entries, as references.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns an iterator over all keys, as references.
    pub fn keys(&self) -> Keys<'_> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values, as references.
    pub fn values(&self) -> Values<'_> {
        Values(self.iter())
    }

    /// Returns an iterator over all values, as mutable references. There is no mutable iterator
    /// over keys, changing them in place would invalidate the index.
    pub fn values_mut(&mut self) -> ValuesMut<'_> {
        ValuesMut(self.entries.iter_mut())
    }

    /// Consumes the Map and returns its values as a list, keyed `0..n`.
    pub fn into_list(self) -> Map {
        Map::from_values(self.into_iter().map(|(_, v)| v))
    }

    /// Renumbers integer keys sequentially from 0 in iteration order, leaving string keys as
    /// they are.
    pub(crate) fn renumber(&mut self) {
        let mut next = 0;
        for (key, _) in self.entries.iter_mut() {
            if key.is_int() {
                *key = Key::Int(next);
                next += 1;
            }
        }
        self.next_int = next;
        self.reindex_from(0);
    }

    /// Rebuilds the positions in the index for all entries from `start` onwards.
    pub(crate) fn reindex_from(&mut self, start: usize) {
        if start == 0 {
            self.index.clear();
        }
        for (i, (key, _)) in self.entries.iter().enumerate().skip(start) {
            self.index.insert(key.clone(), i);
        }
    }
}

impl PartialEq for Map {
    /// Maps are equal if they contain equal entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Debug for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| (
                DebugRaw(match k {
                    Key::Int(int) => int.to_string(),
                    Key::Str(string) => format!("{string:?}"),
                }),
                v,
            )))
            .finish()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Map {
    /// Collects entries into a Map. Later entries replace the values of earlier ones with the
    /// same key, without changing their position.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Map {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
