#![cfg(test)]

use super::*;
use crate::{list, map, Key, Map, Value};

fn users() -> Value {
    map! {
        "users" => list![
            map! { "name" => "Jo", "posts" => list![map! { "id" => 1 }, map! { "id" => 2 }] },
            map! { "name" => "Al", "posts" => list![map! { "id" => 3 }] },
            map! { "posts" => list![] },
        ],
    }
}

#[test]
fn test_literal_paths() {
    let data = map! { "a" => map! { "b" => map! { "c" => 5 } } };

    assert_eq!(data_get(&data, "a.b.c", Value::Null), Value::Int(5));
    assert_eq!(data_get(&data, "a.b", Value::Null), map! { "c" => 5 });
    assert_eq!(data_get(&data, "a.x.c", "default"), Value::from("default"));
    assert_eq!(
        data_get(&data, "a.b.c.d", "default"),
        Value::from("default"),
        "Descending into a scalar should fall back to the default."
    );
}

#[test]
fn test_empty_path_returns_target() {
    let data = map! { "a" => 1 };
    assert_eq!(data_get(&data, "", Value::Null), data);
    assert_eq!(data_get(&data, None::<&str>, Value::Null), data);
    assert_eq!(data_get(&data, Path::new(), Value::Null), data);
}

#[test]
fn test_integer_segments() {
    let data = map! { "list" => list!["zero", "one"] };
    assert_eq!(data_get(&data, "list.1", Value::Null), Value::from("one"));
    assert_eq!(
        data_get(&data, "list.01", "missing"),
        Value::from("missing"),
        "Non-canonical integers are string keys."
    );
}

#[test]
fn test_stored_null_is_found() {
    let data = map! { "a" => Value::Null };
    assert_eq!(
        data_get(&data, "a", "default"),
        Value::Null,
        "A key holding null exists, so the default shouldn't be used."
    );
}

#[test]
fn test_wildcard() {
    let data = users();

    assert_eq!(
        data_get(&data, "users.*.name", "anon"),
        list!["Jo", "Al", "anon"],
        "Each child should contribute one result, missing ones the default."
    );
    assert_eq!(
        data_get(&data, "users.*.posts.*.id", Value::Null),
        list![1, 2, 3],
        "Nested wildcards should collapse one level."
    );
    assert_eq!(
        data_get(&data, "users.0.name.*", "default"),
        Value::from("default"),
        "A wildcard over a scalar resolves to the default."
    );
}

#[test]
fn test_leading_wildcard() {
    let data = list![map! { "id" => 1 }, map! { "id" => 2 }];
    assert_eq!(data_get(&data, "*.id", Value::Null), list![1, 2]);
    assert_eq!(data_get(&data, "*", Value::Null), data, "A lone wildcard yields every child.");
}

#[test]
fn test_literal_segments() {
    let data = map! { "app.name" => "demo", "*" => "star" };
    assert_eq!(data_get(&data, ["app.name"], Value::Null), Value::from("demo"));
    assert_eq!(data_get(&data, "app.name", "missing"), Value::from("missing"));
    assert_eq!(
        data_get(&data, Key::from("*"), Value::Null),
        Value::from("star"),
        "A key converted into a path is always literal."
    );
}

#[test]
fn test_path_display() {
    assert_eq!(Path::from("users.*.name").to_string(), "users.*.name");
    assert!(Path::from("users.*.name").has_wildcard());
    assert!(!Path::from(["users", "name"]).has_wildcard());
    assert_eq!(Path::from("a..b").segments()[1], Segment::Key(Key::from("")));
}

#[test]
fn test_accessible_impls() {
    let mut map: Map = [("a", 1)].into_iter().collect();
    assert!(map.has_key(&Key::from("a")));
    assert_eq!(map.remove_key(&Key::from("a")), Some(Value::Int(1)));
    assert!(!map.has_key(&Key::from("a")));

    let scalar = Value::from("text");
    assert!(!scalar.has_key(&Key::Int(0)), "Scalars hold no keys.");
    assert_eq!(data_get(&scalar, "0", "default"), Value::from("default"));
}
