use std::ops::{ControlFlow, Range};

use tracing::debug;

use super::{Collection, CollectionError, InvalidArgument, Retriever};
use crate::arr;
use crate::value::Number;
use crate::{Key, Map, Value};

impl Collection {
    /// Applies `f` to every value, keeping the keys and their order.
    pub fn map<F>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> Value,
    {
        Collection {
            items: self.iter().map(|(k, v)| (k.clone(), f(v, k))).collect(),
        }
    }

    /// Keeps the items for which `f` returns true, with their keys.
    pub fn filter<F>(&self, f: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        Collection {
            items: arr::filter(&self.items, f),
        }
    }

    /// Keeps the items for which `f` returns false, with their keys. The opposite of
    /// [`filter`](Collection::filter).
    pub fn reject<F>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.filter(|value, key| !f(value, key))
    }

    /// Calls `f` for every item in order, until it returns [`ControlFlow::Break`].
    ///
    /// # Examples
    /// ```
    /// use std::ops::ControlFlow;
    /// use support_lib::collection::Collection;
    ///
    /// let mut seen = Vec::new();
    /// Collection::from(vec![1, 2, 3, 4]).each(|value, _| {
    ///     seen.push(value.clone());
    ///     if seen.len() == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(seen.len(), 2);
    /// ```
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Value, &Key) -> ControlFlow<()>,
    {
        for (key, value) in self.iter() {
            if f(value, key).is_break() {
                break;
            }
        }
        self
    }

    /// Returns true if the retrieved value of every item is truthy. An empty collection passes.
    pub fn every<'a>(&self, retriever: impl Into<Retriever<'a>>) -> bool {
        let retrieve = retriever.into().into_fn();
        self.iter().all(|(k, v)| retrieve(v, k).is_truthy())
    }

    /// Folds the items into a single value, in order.
    pub fn reduce<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &Value, &Key) -> A,
    {
        self.iter().fold(initial, |acc, (k, v)| f(acc, v, k))
    }

    /// Returns the sum of the values. See [`sum_by`](Collection::sum_by).
    pub fn sum(&self) -> Value {
        self.sum_by(Retriever::Identity)
    }

    /// Returns the sum of the retrieved value of every item.
    ///
    /// The result stays an integer while every value is one and the sum doesn't overflow,
    /// otherwise it's a float. Values that aren't numeric count as 0, and an empty collection
    /// sums to `0`.
    pub fn sum_by<'a>(&self, retriever: impl Into<Retriever<'a>>) -> Value {
        let retrieve = retriever.into().into_fn();
        let mut int: Option<i64> = Some(0);
        let mut float = 0.0;

        for (key, value) in self.iter() {
            let value = retrieve(value, key);
            let Some(number) = value.as_f64() else { continue };

            float += number;
            int = match (int, value.as_number()) {
                (Some(acc), Some(Number::Int(n))) => acc.checked_add(n),
                _ => None,
            };
        }

        match int {
            Some(int) => Value::Int(int),
            None => Value::Float(float),
        }
    }

    /// Returns the mean of the values, or 0 if the collection is empty. Values that aren't
    /// numeric count as 0.
    pub fn average(&self) -> f64 {
        average_of(&self.items)
    }

    /// Returns the mean of the values. Same as [`average`](Collection::average).
    pub fn avg(&self) -> f64 {
        self.average()
    }

    /// Returns the mean of the map held under `key`. If there is no map under `key`, the mean
    /// of the whole collection is returned instead.
    pub fn average_at(&self, key: impl Into<Key>) -> f64 {
        match self.get(key) {
            Some(Value::Map(nested)) => average_of(nested),
            _ => self.average(),
        }
    }

    /// Keeps only the items under `keys`, in their current order.
    pub fn only<I>(&self, keys: I) -> Collection
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        Collection {
            items: arr::only(&self.items, keys),
        }
    }

    /// Returns a copy without the dot-notation `keys`. See [`arr::forget`].
    pub fn except<I>(&self, keys: I) -> Collection
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Collection {
            items: arr::except(&self.items, keys),
        }
    }

    /// Keeps the items whose values are loosely equal to none of the values in `other`.
    pub fn diff(&self, other: impl Into<Value>) -> Collection {
        let other = arr::wrap(other);
        self.reject(|value, _| other.values().any(|o| value.loose_eq(o)))
    }

    /// Keeps the items that `other` doesn't hold under the same key with a loosely equal value.
    pub fn diff_assoc(&self, other: impl Into<Value>) -> Collection {
        let other = arr::wrap(other);
        self.reject(|value, key| other.get(key).is_some_and(|o| value.loose_eq(o)))
    }

    /// Appends the items of `other` to these.
    ///
    /// Integer keys from both sides are renumbered in order from 0. A string key from `other`
    /// that's already present replaces the value in its original position.
    pub fn merge(&self, other: impl Into<Value>) -> Collection {
        let mut items = Map::with_cap(self.len());
        for (key, value) in self.items.clone().into_iter().chain(arr::wrap(other)) {
            match key {
                Key::Int(_) => {
                    items.push(value);
                },
                key => {
                    items.insert(key, value);
                },
            }
        }
        Collection { items }
    }

    /// Same as [`merge`](Collection::merge).
    pub fn add(&self, other: impl Into<Value>) -> Collection {
        self.merge(other)
    }

    /// Uses the values of this collection as keys for the values of `values`, pairing them up
    /// in order.
    ///
    /// # Errors
    /// Fails with [`InvalidArgument`] if the two don't hold the same number of items, or if one
    /// of the values here is a map and can't be used as a key.
    pub fn combine(&self, values: impl Into<Value>) -> Result<Collection, CollectionError> {
        let values = arr::wrap(values);
        if values.len() != self.len() {
            debug!(
                target: "support_lib::collection",
                keys = self.len(),
                values = values.len(),
                "combine called with mismatched lengths"
            );
            return Err(InvalidArgument::new(format!(
                "combine needs as many values as keys, got {} keys and {} values",
                self.len(),
                values.len()
            )).into());
        }

        let mut items = Map::with_cap(self.len());
        for (key, value) in self.items.values().zip(values.into_iter().map(|(_, v)| v)) {
            let key = Key::try_from(key).inspect_err(|err| {
                debug!(target: "support_lib::collection", %err, "combine called with an unusable key");
            })?;
            items.insert(key, value);
        }
        Ok(Collection { items })
    }

    /// Removes items whose value duplicates an earlier one, using loose equality. The first
    /// occurrence wins and keeps its key.
    pub fn unique(&self) -> Collection {
        self.unique_by(Retriever::Identity, false)
    }

    /// Like [`unique`](Collection::unique), but values of different types are never equal.
    pub fn unique_strict(&self) -> Collection {
        self.unique_by(Retriever::Identity, true)
    }

    /// Removes items whose retrieved value duplicates that of an earlier item. With `strict`,
    /// retrieved values are compared with `==`, otherwise with [`Value::loose_eq`].
    pub fn unique_by<'a>(&self, retriever: impl Into<Retriever<'a>>, strict: bool) -> Collection {
        let retrieve = retriever.into().into_fn();
        let mut seen: Vec<Value> = Vec::new();

        self.reject(|value, key| {
            let id = retrieve(value, key);
            let duplicate = seen.iter().any(|s| if strict { *s == id } else { s.loose_eq(&id) });
            if !duplicate {
                seen.push(id);
            }
            duplicate
        })
    }

    /// Splits the items into a list of maps holding at most `size` items each, keeping their
    /// keys. Only the last chunk can be smaller. A `size` of 0 or less gives an empty collection.
    pub fn chunk(&self, size: isize) -> Collection {
        let Ok(size @ 1..) = usize::try_from(size) else {
            return Collection::new();
        };

        Collection {
            items: Map::from_values(
                self.items.entries.chunks(size)
                    .map(|chunk| chunk.iter().cloned().collect::<Map>())
            ),
        }
    }

    /// Splits the values into vectors of at most `size` values each, discarding the keys. A
    /// `size` of 0 or less gives no chunks.
    ///
    /// # Examples
    /// ```
    /// use support_lib::collection::Collection;
    /// use support_lib::Value;
    ///
    /// let chunks = Collection::from(vec![1, 2, 3, 4, 5]).chunk_to_array(2);
    /// assert_eq!(chunks, [vec![Value::Int(1), 2.into()], vec![3.into(), 4.into()], vec![5.into()]]);
    /// ```
    pub fn chunk_to_array(&self, size: isize) -> Vec<Vec<Value>> {
        let Ok(size @ 1..) = usize::try_from(size) else {
            return Vec::new();
        };

        self.items.entries.chunks(size)
            .map(|chunk| chunk.iter().map(|(_, v)| v.clone()).collect())
            .collect()
    }

    /// Flattens nested maps into a single list. See [`arr::flatten`].
    pub fn flatten(&self, depth: Option<usize>) -> Collection {
        Collection {
            items: Map::from_values(arr::flatten(self.items.values(), depth)),
        }
    }

    /// Returns a window of the items, keeping their keys.
    ///
    /// A negative `offset` counts from the end. Without a `length` the window runs to the end,
    /// a negative `length` stops that many items before the end.
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Collection {
        let range = window(self.len(), offset, length);
        Collection {
            items: self.items.entries[range].iter().cloned().collect(),
        }
    }

    /// Returns the first `limit` items, or the last `-limit` items if `limit` is negative.
    pub fn take(&self, limit: isize) -> Collection {
        if limit < 0 {
            self.slice(limit, Some(limit.saturating_neg()))
        } else {
            self.slice(0, Some(limit))
        }
    }

    /// Reverses the order of the items, keeping their keys.
    pub fn reverse(&self) -> Collection {
        Collection {
            items: self.items.entries.iter().rev().cloned().collect(),
        }
    }

    /// Returns the key of the first value equal to `needle`, using `==` if `strict` and
    /// [`Value::loose_eq`] otherwise.
    pub fn search(&self, needle: impl Into<Value>, strict: bool) -> Option<Key> {
        let needle = needle.into();
        self.search_by(|value, _| if strict { *value == needle } else { value.loose_eq(&needle) })
    }

    /// Returns the key of the first item for which `f` returns true.
    pub fn search_by<F>(&self, mut f: F) -> Option<Key>
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter().find(|&(k, v)| f(v, k)).map(|(k, _)| k.clone())
    }
}

fn average_of(items: &Map) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let sum: f64 = items.values().filter_map(Value::as_f64).sum();
    // Precision loss only matters for collections far larger than memory allows.
    #[allow(clippy::cast_precision_loss)]
    let count = items.len() as f64;
    sum / count
}

/// Resolves an offset and optional length into a range over `len` items. Out of bounds windows
/// are clamped, and a window that ends before it starts is empty.
pub(crate) fn window(len: usize, offset: isize, length: Option<isize>) -> Range<usize> {
    let from_end = |n: usize| len.saturating_sub(n);

    let start = match usize::try_from(offset) {
        Ok(offset) => offset.min(len),
        Err(_) => from_end(offset.unsigned_abs()),
    };

    let end = match length {
        None => len,
        Some(length) => match usize::try_from(length) {
            Ok(length) => start.saturating_add(length).min(len),
            Err(_) => from_end(length.unsigned_abs()),
        },
    };

    start..end.max(start)
}
