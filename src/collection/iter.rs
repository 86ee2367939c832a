use std::ops::Index;

use super::Collection;
use crate::data::Accessible;
use crate::util::result::ResultExtension;
use crate::value::{IntoIter, Iter};
use crate::{Key, Map, Value};

impl IntoIterator for Collection {
    type Item = (Key, Value);

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Collection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Collection {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Map> for Collection {
    fn from(value: Map) -> Self {
        Collection { items: value }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Collection {
    fn from(value: Vec<T>) -> Self {
        Collection {
            items: Map::from_values(value),
        }
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Collection {
    fn from(value: [T; N]) -> Self {
        Collection {
            items: Map::from_values(value),
        }
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Value::Map(value.items)
    }
}

impl From<Collection> for Map {
    fn from(value: Collection) -> Self {
        value.items
    }
}

impl<K: Into<Key>> Index<K> for Collection {
    type Output = Value;

    /// Returns the value for `key`.
    ///
    /// # Panics
    /// Panics if the Collection holds no value for `key`. Use [`Collection::get`] or
    /// [`Collection::try_get`] to handle this case.
    #[track_caller]
    fn index(&self, key: K) -> &Self::Output {
        self.try_get(key).throw()
    }
}

impl Accessible for Collection {
    fn has_key(&self, key: &Key) -> bool {
        self.items.contains(key)
    }

    fn get_key(&self, key: &Key) -> Option<&Value> {
        self.items.get(key)
    }

    fn get_key_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.items.get_mut(key)
    }

    fn remove_key(&mut self, key: &Key) -> Option<Value> {
        self.items.remove(key)
    }

    fn to_value(&self) -> Value {
        self.to_array()
    }
}

#[cfg(feature = "json")]
mod json {
    use std::fmt::{self, Display, Formatter};

    use serde::{Serialize, Serializer};

    use super::Collection;

    impl Serialize for Collection {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.items.serialize(serializer)
        }
    }

    /// Formats the Collection as JSON.
    impl Display for Collection {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.items)
        }
    }
}
