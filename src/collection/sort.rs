use std::cmp::Ordering;

use super::{Collection, Retriever};
use crate::{Key, Value};

impl Collection {
    /// Sorts the values in ascending order with [`Value::loose_cmp`]. Keys travel with their
    /// values, and equal values keep their relative order.
    pub fn sort(&self) -> Collection {
        self.sort_with(Value::loose_cmp)
    }

    /// Sorts the values with `compare`. Keys travel with their values, and equal values keep
    /// their relative order.
    pub fn sort_with<F>(&self, mut compare: F) -> Collection
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let mut entries = self.items.entries.clone();
        entries.sort_by(|(_, a), (_, b)| compare(a, b));
        Collection {
            items: entries.into_iter().collect(),
        }
    }

    /// Sorts the items by their retrieved value, compared with [`Value::loose_cmp`]. Each value
    /// is retrieved once. Items with equal retrieved values keep their relative order, in both
    /// directions.
    pub fn sort_by<'a>(&self, retriever: impl Into<Retriever<'a>>, descending: bool) -> Collection {
        let retrieve = retriever.into().into_fn();

        let mut keyed: Vec<(Value, &Key, &Value)> = self.iter()
            .map(|(k, v)| (retrieve(v, k), k, v))
            .collect();

        keyed.sort_by(|(a, ..), (b, ..)| {
            let order = a.loose_cmp(b);
            if descending { order.reverse() } else { order }
        });

        Collection {
            items: keyed.into_iter().map(|(_, k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    /// Same as [`sort_by`](Collection::sort_by) in descending order.
    pub fn sort_by_desc<'a>(&self, retriever: impl Into<Retriever<'a>>) -> Collection {
        self.sort_by(retriever, true)
    }

    /// Sorts the items by key, ascending. See [`Key`] for how integer and string keys compare.
    pub fn sort_keys(&self) -> Collection {
        self.sort_keys_by(Key::cmp)
    }

    /// Sorts the items by key, descending.
    pub fn sort_keys_desc(&self) -> Collection {
        self.sort_keys_by(|a, b| b.cmp(a))
    }

    fn sort_keys_by<F>(&self, compare: F) -> Collection
    where
        F: Fn(&Key, &Key) -> Ordering,
    {
        let mut entries = self.items.entries.clone();
        entries.sort_by(|(a, _), (b, _)| compare(a, b));
        Collection {
            items: entries.into_iter().collect(),
        }
    }
}
