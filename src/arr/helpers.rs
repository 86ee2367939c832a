use std::collections::HashSet;

use super::forget;
use crate::data::Accessible;
use crate::{Key, Map, Value};

/// Applies `f` to every entry of `array`, returning the results as a list. Keys are not kept.
pub fn map<F>(array: &Map, mut f: F) -> Vec<Value>
where
    F: FnMut(&Value, &Key) -> Value,
{
    array.iter().map(|(k, v)| f(v, k)).collect()
}

/// Returns the entries of `array` for which `f` returns true, keeping their keys and order.
pub fn filter<F>(array: &Map, mut f: F) -> Map
where
    F: FnMut(&Value, &Key) -> bool,
{
    array.iter()
        .filter(|&(k, v)| f(v, k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Calls `f` for every entry of `array`, in order.
pub fn each<F>(array: &Map, mut f: F)
where
    F: FnMut(&Value, &Key),
{
    for (key, value) in array {
        f(value, key);
    }
}

/// Returns the first value of `array`, or `default` if it's empty.
pub fn first(array: &Map, default: impl Into<Value>) -> Value {
    match array.first() {
        Some((_, value)) => value.clone(),
        None => default.into(),
    }
}

/// Returns the last value of `array`, or `default` if it's empty.
pub fn last(array: &Map, default: impl Into<Value>) -> Value {
    match array.last() {
        Some((_, value)) => value.clone(),
        None => default.into(),
    }
}

/// Returns the entries of `array` whose keys are among `keys`, in the order of `array`.
pub fn only<I>(array: &Map, keys: I) -> Map
where
    I: IntoIterator,
    I::Item: Into<Key>,
{
    let keys: HashSet<Key> = keys.into_iter().map(Into::into).collect();
    filter(array, |_, key| keys.contains(key))
}

/// Returns a copy of `array` with the dot-notation `keys` removed. See [`forget`].
pub fn except<I>(array: &Map, keys: I) -> Map
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut array = array.clone();
    forget(&mut array, keys);
    array
}

/// Flattens nested maps into a single list, descending at most `depth` levels, or without limit
/// if `depth` is [`None`].
///
/// Values that aren't maps are appended as they are. A map found at the last allowed level has
/// its values appended without looking inside them. A depth of `Some(0)` flattens nothing and only
/// discards the keys.
///
/// # Examples
/// ```
/// use support_lib::arr::flatten;
/// use support_lib::{list, Value};
///
/// let nested = list![1, list![2, list![3, list![4]]]];
/// let items = nested.as_map().expect("list");
///
/// assert_eq!(Value::from(flatten(items.values(), None)), list![1, 2, 3, 4]);
/// assert_eq!(Value::from(flatten(items.values(), Some(1))), list![1, 2, list![3, list![4]]]);
/// ```
pub fn flatten<'a, I>(items: I, depth: Option<usize>) -> Vec<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut result = Vec::new();
    flatten_into(&mut result, items, depth);
    result
}

fn flatten_into<'a, I>(result: &mut Vec<Value>, items: I, depth: Option<usize>)
where
    I: IntoIterator<Item = &'a Value>,
{
    for item in items {
        match (item, depth) {
            (Value::Map(nested), Some(1)) => result.extend(nested.values().cloned()),
            (Value::Map(nested), Some(0)) => result.push(Value::Map(nested.clone())),
            (Value::Map(nested), depth) => {
                flatten_into(result, nested.values(), depth.map(|d| d - 1))
            },
            (value, _) => result.push(value.clone()),
        }
    }
}

/// Collapses a sequence of lists into a single list, one level deep. Items that aren't maps are
/// skipped.
pub fn collapse<'a, I>(items: I) -> Map
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut result = Map::new();
    for nested in items.into_iter().filter_map(Value::as_map) {
        for value in nested.values() {
            result.push(value.clone());
        }
    }
    result
}

/// Wraps `value` in a map, unless it already is one. Null becomes an empty map.
pub fn wrap(value: impl Into<Value>) -> Map {
    match value.into() {
        Value::Null => Map::new(),
        Value::Map(map) => map,
        value => Map::from_values([value]),
    }
}

/// Returns true if `value` can hold keys, i.e. it's a map.
pub const fn accessible(value: &Value) -> bool {
    matches!(value, Value::Map(_))
}

/// Returns true if `target` holds a value for `key`, even if that value is null.
pub fn exists<T: Accessible + ?Sized>(target: &T, key: impl Into<Key>) -> bool {
    target.has_key(&key.into())
}
