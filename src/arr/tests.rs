#![cfg(test)]

use super::*;
use crate::{list, map, Key, Map, Value};

fn names() -> Map {
    [
        ("one", map! { "first_name" => "John", "last_name" => "Doe" }),
        ("two", map! { "first_name" => "Jane", "last_name" => "Doe" }),
    ].into_iter().collect()
}

fn account() -> Map {
    [
        ("name", "John Doe"),
        ("email", "john@johndoe.com"),
        ("password", "password123"),
    ].into_iter().collect()
}

#[test]
fn test_map_returns_list() {
    let full_names = map(&names(), |item, _| {
        let first = crate::data::data_get(item, "first_name", "");
        let last = crate::data::data_get(item, "last_name", "");
        format!("{} {}", first.as_str().unwrap_or_default(), last.as_str().unwrap_or_default()).into()
    });

    assert_eq!(full_names, [Value::from("John Doe"), Value::from("Jane Doe")]);
}

#[test]
fn test_filter_keeps_keys() {
    let prices: Map = [("one", 100), ("two", 200), ("three", 300)].into_iter().collect();
    let filtered = filter(&prices, |item, _| item.as_i64().is_some_and(|p| p > 100));

    assert_eq!(filtered.len(), 2);
    assert!(filtered.contains(&Key::from("two")));
    assert!(filtered.contains(&Key::from("three")));
    assert!(!filtered.contains(&Key::from("one")));
}

#[test]
fn test_each_visits_in_order() {
    let words = Map::from_values(["one", "two", "three"]);
    let mut seen = Vec::new();
    each(&words, |item, key| seen.push(format!("{key}:{}", item.as_str().unwrap_or_default())));

    assert_eq!(seen, ["0:one", "1:two", "2:three"]);
}

#[test]
fn test_first_and_last() {
    let items = Map::from_values([1, 2, 3]);
    assert_eq!(first(&items, Value::Null), Value::Int(1));
    assert_eq!(last(&items, Value::Null), Value::Int(3));
    assert_eq!(first(&Map::new(), "none"), Value::from("none"));
    assert_eq!(last(&Map::new(), "none"), Value::from("none"));
}

#[test]
fn test_only_and_except() {
    let public = only(&account(), ["email", "name"]);
    assert_eq!(
        public.keys().cloned().collect::<Vec<_>>(),
        [Key::from("name"), Key::from("email")],
        "Only should keep the order of the source map."
    );

    let public = except(&account(), ["password"]);
    assert_eq!(public.len(), 2);
    assert!(!public.contains(&Key::from("password")));
    assert_eq!(account().len(), 3, "Except shouldn't touch the source map.");
}

#[test]
fn test_forget_nested() {
    let mut value = map! { "a" => map! { "b" => 1, "c" => 2 } };
    forget(&mut value, ["a.b"]);
    assert_eq!(value, map! { "a" => map! { "c" => 2 } });
}

#[test]
fn test_forget_prefers_exact_key() {
    let mut value = map! { "a.b" => 1, "a" => map! { "b" => 2 } };
    forget(&mut value, ["a.b"]);
    assert_eq!(
        value,
        map! { "a" => map! { "b" => 2 } },
        "A literal top-level key should be removed instead of walking the path."
    );

    let mut value = map! { "a.b" => 1 };
    forget(&mut value, ["a.b"]);
    assert_eq!(value, map! {});
}

#[test]
fn test_forget_is_silent_per_path() {
    let original = map! { "a" => map! { "b" => 1 }, "s" => "scalar", "k" => 1 };

    let mut value = original.clone();
    forget(&mut value, ["x.y", "s.t", "a.b.c", "a.z", "nope"]);
    assert_eq!(value, original, "Unresolvable paths should be skipped without changes.");

    let mut value = original.clone();
    forget(&mut value, ["s.t", "k", "a.b"]);
    assert_eq!(value, map! { "a" => map! {}, "s" => "scalar" }, "Later paths should still apply.");
}

#[test]
fn test_forget_integer_segments() {
    let mut value = map! { "users" => list![map! { "name" => "Jo", "age" => 3 }] };
    forget(&mut value, ["users.0.age"]);
    assert_eq!(value, map! { "users" => list![map! { "name" => "Jo" }] });
}

#[test]
fn test_flatten_depths() {
    let nested = list!["a", list!["b", list!["c", list!["d"]]], map! { "k" => "e" }];
    let items = nested.as_map().expect("list");

    assert_eq!(flatten(items.values(), None), ["a", "b", "c", "d", "e"].map(Value::from));
    assert_eq!(
        flatten(items.values(), Some(2)),
        [Value::from("a"), "b".into(), "c".into(), list!["d"], "e".into()]
    );
    assert_eq!(flatten(items.values(), Some(0)), items.values().cloned().collect::<Vec<_>>());
    assert!(flatten(Map::new().values(), None).is_empty());
}

#[test]
fn test_collapse() {
    let lists = [list![1, 2], Value::from("skipped"), list![], map! { "k" => 3 }];
    assert_eq!(collapse(&lists), Map::from_values([1, 2, 3]));
}

#[test]
fn test_wrap() {
    assert_eq!(wrap(Value::Null), Map::new());
    assert_eq!(wrap("a"), Map::from_values(["a"]));
    assert_eq!(wrap(list![1, 2]), Map::from_values([1, 2]), "Maps shouldn't be wrapped again.");
}

#[test]
fn test_accessible_and_exists() {
    assert!(accessible(&list![]));
    assert!(!accessible(&Value::from("a")));

    let value = map! { "a" => Value::Null };
    assert!(exists(&value, "a"), "A key holding null still exists.");
    assert!(!exists(&value, "b"));
    assert!(!exists(&Value::Int(1), 0));
}
