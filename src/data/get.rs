use tracing::trace;

use super::{Accessible, Path, Segment};
use crate::arr;
use crate::Value;

/// Resolves `path` against `target`, returning the value found or `default`.
///
/// Segments are applied left to right:
/// - An empty path resolves to the whole target.
/// - A key segment descends into the value held for that key. If there is none, resolution stops
///   immediately and `default` is returned, no partial results are produced.
/// - A wildcard segment fans out over every child of the current value, resolving the rest of
///   the path against each child and collecting one result per child, in order, into a list.
///   Children missing the rest of the path contribute `default`. If the rest of the path contains
///   another wildcard, each child's result is itself a list, and these are collapsed into a
///   single list with [`arr::collapse`]. A wildcard applied to anything other than a map
///   resolves to `default`.
///
/// # Examples
/// ```
/// use support_lib::data::data_get;
/// use support_lib::{list, map, Value};
///
/// let data = map! {
///     "a" => map! { "b" => map! { "c" => 5 } },
///     "users" => list![map! { "name" => "Jo" }, map! { "name" => "Al" }],
/// };
///
/// assert_eq!(data_get(&data, "a.b.c", Value::Null), Value::Int(5));
/// assert_eq!(data_get(&data, "a.x.c", "default"), Value::from("default"));
/// assert_eq!(data_get(&data, "users.*.name", Value::Null), list!["Jo", "Al"]);
/// ```
pub fn data_get<T, P, D>(target: &T, path: P, default: D) -> Value
where
    T: Accessible + ?Sized,
    P: Into<Path>,
    D: Into<Value>,
{
    let path = path.into();
    let default = default.into();

    match path.segments().split_first() {
        None => target.to_value(),
        Some((Segment::Key(key), rest)) => match target.get_key(key) {
            Some(next) => resolve(next, rest, &default),
            None => default,
        },
        Some((Segment::Wildcard, _)) => resolve(&target.to_value(), path.segments(), &default),
    }
}

fn resolve(mut target: &Value, segments: &[Segment], default: &Value) -> Value {
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Key(key) => match target.get_key(key) {
                Some(next) => target = next,
                None => return default.clone(),
            },
            Segment::Wildcard => {
                let Value::Map(children) = target else {
                    trace!(
                        target: "support_lib::data",
                        found = target.type_name(),
                        "wildcard applied to a value that can't be iterated, using default"
                    );
                    return default.clone();
                };

                let rest = &segments[i + 1..];
                let results: Vec<Value> = children.values()
                    .map(|child| resolve(child, rest, default))
                    .collect();

                return if rest.contains(&Segment::Wildcard) {
                    Value::Map(arr::collapse(&results))
                } else {
                    Value::from(results)
                };
            },
        }
    }

    target.clone()
}
