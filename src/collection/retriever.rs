use std::fmt::{self, Debug, Formatter};

use crate::data::{data_get, Path};
use crate::{Key, Value};

/// The resolved form of a [`Retriever`].
pub type RetrieverFn<'a> = Box<dyn Fn(&Value, &Key) -> Value + 'a>;

/// Describes how to derive a value from each entry of a collection, for sorting, uniqueness or
/// summing.
///
/// Strings convert into [`Retriever::Field`], so most call sites can pass a field name directly:
/// ```
/// use support_lib::collection::{Collection, Retriever};
/// use support_lib::{list, map};
///
/// let people = Collection::make(list![
///     map! { "name" => "Jo", "age" => 40 },
///     map! { "name" => "Al", "age" => 30 },
/// ]);
///
/// let by_field = people.sort_by("age", false);
/// let by_func = people.sort_by(Retriever::func(|person, _| person.clone()), false);
/// assert_eq!(by_field.values().all(), by_func.values().all());
/// ```
#[derive(Default)]
pub enum Retriever<'a> {
    /// The value itself.
    #[default]
    Identity,
    /// The value at a dot-notation path within each value, or null if it's missing.
    Field(Path),
    /// The result of calling a function with the value and its key.
    Func(RetrieverFn<'a>),
}

impl<'a> Retriever<'a> {
    /// Creates a retriever from a function of the value and its key.
    pub fn func<F>(f: F) -> Retriever<'a>
    where
        F: Fn(&Value, &Key) -> Value + 'a,
    {
        Retriever::Func(Box::new(f))
    }

    /// Creates a retriever that reads the value at `path`.
    pub fn field(path: impl Into<Path>) -> Retriever<'a> {
        Retriever::Field(path.into())
    }

    /// Resolves the retriever into a single function.
    pub fn into_fn(self) -> RetrieverFn<'a> {
        match self {
            Retriever::Identity => Box::new(|value: &Value, _: &Key| value.clone()),
            Retriever::Field(path) => Box::new(move |value: &Value, _: &Key| {
                data_get(value, &path, Value::Null)
            }),
            Retriever::Func(f) => f,
        }
    }
}

impl Debug for Retriever<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Retriever::Identity => write!(f, "Identity"),
            Retriever::Field(path) => f.debug_tuple("Field").field(&path.to_string()).finish(),
            Retriever::Func(_) => write!(f, "Func(..)"),
        }
    }
}

impl From<&str> for Retriever<'_> {
    fn from(value: &str) -> Self {
        Retriever::Field(value.into())
    }
}

impl From<String> for Retriever<'_> {
    fn from(value: String) -> Self {
        Retriever::Field(value.into())
    }
}

impl From<Path> for Retriever<'_> {
    fn from(value: Path) -> Self {
        Retriever::Field(value)
    }
}

/// [`None`] is the identity.
impl<'a, R: Into<Retriever<'a>>> From<Option<R>> for Retriever<'a> {
    fn from(value: Option<R>) -> Self {
        value.map_or(Retriever::Identity, Into::into)
    }
}
