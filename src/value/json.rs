use std::fmt::{self, Display, Formatter};

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value as Json;

use super::{Key, Map, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(bool) => serializer.serialize_bool(*bool),
            Value::Int(int) => serializer.serialize_i64(*int),
            Value::Float(float) => serializer.serialize_f64(*float),
            Value::Str(string) => serializer.serialize_str(string),
            Value::Map(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for Map {
    /// Lists serialize as sequences, every other map as a map with string keys.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

impl Value {
    /// Parses a JSON document into a value. Arrays become lists and object members keep their
    /// document order.
    pub fn from_json(json: &str) -> Result<Value, serde_json::Error> {
        serde_json::from_str::<Json>(json).map(Value::from)
    }

    /// Converts anything serializable into a value. Structs become maps of their fields, in
    /// declaration order.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Value, serde_json::Error> {
        serde_json::to_value(value).map(Value::from)
    }

    /// Converts the value into a [`serde_json::Value`], built only from primitives, arrays and
    /// objects. Lists become arrays, other maps become objects, and floats that JSON can't
    /// represent become null.
    pub fn to_serializable(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Bool(bool) => Json::Bool(*bool),
            Value::Int(int) => Json::from(*int),
            Value::Float(float) => serde_json::Number::from_f64(*float).map_or(Json::Null, Json::Number),
            Value::Str(string) => Json::String(string.clone()),
            Value::Map(map) => map.to_serializable(),
        }
    }

    /// Encodes the value as a compact JSON string.
    pub fn to_json(&self) -> String {
        self.to_serializable().to_string()
    }
}

impl Map {
    /// Converts the map into a [`serde_json::Value`]. See [`Value::to_serializable`].
    pub fn to_serializable(&self) -> Json {
        if self.is_list() {
            Json::Array(self.values().map(Value::to_serializable).collect())
        } else {
            Json::Object(
                self.iter()
                    .map(|(k, v)| (k.to_string(), v.to_serializable()))
                    .collect()
            )
        }
    }

    /// Encodes the map as a compact JSON string.
    pub fn to_json(&self) -> String {
        self.to_serializable().to_string()
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(bool) => Value::Bool(bool),
            Json::Number(number) => match number.as_i64() {
                Some(int) => Value::Int(int),
                None => number.as_f64().map_or(Value::Null, Value::Float),
            },
            Json::String(string) => Value::Str(string),
            Json::Array(items) => Value::Map(Map::from_values(items)),
            Json::Object(members) => Value::Map(
                members.into_iter()
                    .map(|(k, v)| (Key::from(k), Value::from(v)))
                    .collect()
            ),
        }
    }
}

impl Display for Value {
    /// Formats the value as compact JSON.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_serializable())
    }
}

impl Display for Map {
    /// Formats the map as compact JSON.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_serializable())
    }
}
