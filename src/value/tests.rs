#![cfg(test)]

use std::cmp::Ordering;

use super::*;
use crate::{list, map};

#[test]
fn test_key_normalisation() {
    assert_eq!(Key::from("0"), Key::Int(0), "Canonical integers should become integer keys.");
    assert_eq!(Key::from("-12"), Key::Int(-12), "Negative integers are canonical too.");
    assert_eq!(Key::from("03"), Key::Str("03".into()), "Leading zeros aren't canonical.");
    assert_eq!(Key::from("-0"), Key::Str("-0".into()), "Negative zero isn't canonical.");
    assert_eq!(Key::from("+1"), Key::Str("+1".into()), "Explicit plus signs aren't canonical.");
    assert_eq!(Key::from(""), Key::Str("".into()));
    assert_eq!(
        Key::from("99999999999999999999"),
        Key::Str("99999999999999999999".into()),
        "Integers that don't fit in an i64 should stay strings."
    );
}

#[test]
fn test_key_from_value() {
    assert_eq!(Key::try_from(&Value::Bool(true)), Ok(Key::Int(1)));
    assert_eq!(Key::try_from(&Value::Float(2.9)), Ok(Key::Int(2)));
    assert_eq!(Key::try_from(&Value::Null), Ok(Key::Str(String::new())));
    assert_eq!(Key::try_from(&Value::from("7")), Ok(Key::Int(7)));
    assert!(Key::try_from(&list![1]).is_err(), "Maps can't be keys.");
}

#[test]
fn test_push_uses_next_free_key() {
    let mut map = Map::new();
    assert_eq!(map.push("a"), Key::Int(0));
    map.insert(5, "b");
    assert_eq!(map.push("c"), Key::Int(6), "Push should continue after the largest integer key.");
    map.insert("name", "d");
    map.insert(-3, "e");
    assert_eq!(map.push("f"), Key::Int(7), "String and negative keys don't affect push.");

    map.remove(&Key::Int(7));
    assert_eq!(map.push("g"), Key::Int(8), "Removing a key doesn't free it for push.");
}

#[test]
fn test_insert_replaces_in_place() {
    let mut map: Map = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    assert_eq!(map.insert("b", 20), Some(Value::Int(2)));
    assert_eq!(
        map.keys().cloned().collect::<Vec<_>>(),
        [Key::from("a"), Key::from("b"), Key::from("c")],
        "Replacing a value shouldn't move its entry."
    );
    assert_eq!(map.get(&Key::from("b")), Some(&Value::Int(20)));
}

#[test]
fn test_remove_preserves_order() {
    let mut map: Map = [("a", 1), ("b", 2), ("c", 3), ("d", 4)].into_iter().collect();
    assert_eq!(map.remove(&Key::from("b")), Some(Value::Int(2)));
    assert_eq!(map.remove(&Key::from("b")), None);

    assert_eq!(map.values().cloned().collect::<Vec<_>>(), [Value::Int(1), Value::Int(3), Value::Int(4)]);
    assert_eq!(map.position(&Key::from("d")), Some(2), "Positions after a removal should shift down.");
    assert_eq!(map.get(&Key::from("d")), Some(&Value::Int(4)));
}

#[test]
fn test_shift_renumbers_and_pop_resets() {
    let mut map = Map::from_values([10, 20, 30]);
    map.insert("name", "x");

    assert_eq!(map.shift(), Some((Key::Int(0), Value::Int(10))));
    assert_eq!(
        map.keys().cloned().collect::<Vec<_>>(),
        [Key::Int(0), Key::Int(1), Key::from("name")],
        "Shifting should renumber integer keys from 0."
    );

    assert_eq!(map.pop(), Some((Key::from("name"), Value::from("x"))));
    assert_eq!(map.pop(), Some((Key::Int(1), Value::Int(30))));
    assert_eq!(map.push(40), Key::Int(1), "Popping should recalculate the next free key.");

    let mut empty = Map::new();
    assert_eq!(empty.shift(), None);
    assert_eq!(empty.pop(), None);
}

#[test]
fn test_is_list() {
    assert!(Map::new().is_list(), "An empty map is a list.");
    assert!(Map::from_values(["a", "b"]).is_list());

    let mut map = Map::from_values(["a", "b"]);
    map.remove(&Key::Int(0));
    assert!(!map.is_list(), "A gap at the start isn't a list.");

    let reversed: Map = [(1, "a"), (0, "b")].into_iter().collect();
    assert!(!reversed.is_list(), "Out of order keys aren't a list.");
}

#[test]
fn test_truthiness() {
    for falsy in [Value::Null, false.into(), 0.into(), 0.0.into(), "".into(), "0".into(), list![]] {
        assert!(!falsy.is_truthy(), "{falsy:?} should be falsy.");
    }
    for truthy in [true.into(), 1.into(), (-0.5).into(), "0.0".into(), " ".into(), list![0]] {
        assert!(truthy.is_truthy(), "{truthy:?} should be truthy.");
    }
}

#[test]
fn test_loose_eq() {
    assert!(Value::Int(1).loose_eq(&Value::Float(1.0)));
    assert!(Value::Int(1).loose_eq(&"1".into()));
    assert!(Value::from("1e1").loose_eq(&"10".into()), "Numeric strings compare numerically.");
    assert!(!Value::from("abc").loose_eq(&0.into()));
    assert!(!Value::from("abc").loose_eq(&"ABC".into()));
    assert!(Value::Null.loose_eq(&"".into()));
    assert!(!Value::Null.loose_eq(&"0".into()));
    assert!(Value::Null.loose_eq(&false.into()));
    assert!(Value::Bool(true).loose_eq(&"yes".into()));
    assert!(
        map! { "a" => 1, "b" => "2" }.loose_eq(&map! { "b" => 2, "a" => 1.0 }),
        "Maps are loosely equal regardless of order."
    );
    assert_ne!(map! { "a" => 1, "b" => 2 }, map! { "b" => 2, "a" => 1 }, "Strict equality is ordered.");
}

#[test]
fn test_loose_cmp() {
    assert_eq!(Value::Int(2).loose_cmp(&Value::Float(10.0)), Ordering::Less);
    assert_eq!(Value::from("10").loose_cmp(&"9".into()), Ordering::Greater, "Numeric strings compare numerically.");
    assert_eq!(Value::from("apple").loose_cmp(&"banana".into()), Ordering::Less);
    assert_eq!(Value::Null.loose_cmp(&false.into()), Ordering::Less);
    assert_eq!(Value::from("a").loose_cmp(&999.into()), Ordering::Greater, "Strings rank after numbers.");
    assert_eq!(list![1, 2].loose_cmp(&list![3]), Ordering::Greater, "Longer maps rank higher.");
}

#[test]
fn test_loose_cmp_numbers_exactly() {
    let big = 2f64.powi(53);
    assert_eq!(Value::Int((1 << 53) + 1).loose_cmp(&Value::Float(big)), Ordering::Greater, "Integers shouldn't be rounded to floats.");
    assert_eq!(Value::Float(big).loose_cmp(&Value::Int((1 << 53) + 1)), Ordering::Less);
    assert_eq!(Value::Int(1 << 53).loose_cmp(&Value::Float(big)), Ordering::Equal);
    assert_eq!(Value::Int(i64::MAX).loose_cmp(&Value::Float(9.3e18)), Ordering::Less);
    assert_eq!(Value::Int(i64::MIN).loose_cmp(&Value::Float(f64::NEG_INFINITY)), Ordering::Greater);
    assert_eq!(Value::Int(-3).loose_cmp(&Value::Float(-2.5)), Ordering::Less);
    assert_eq!(Value::Int(2).loose_cmp(&Value::Float(2.5)), Ordering::Less);
    assert_eq!(Value::Int(0).loose_cmp(&Value::Float(-0.0)), Ordering::Equal);
    assert!(!Value::Int((1 << 53) + 1).loose_eq(&Value::Float(big)));
}

#[test]
fn test_loose_cmp_nan() {
    let nan = Value::Float(f64::NAN);
    assert_eq!(nan.loose_cmp(&nan), Ordering::Equal);
    assert_eq!(nan.loose_cmp(&Value::Float(f64::INFINITY)), Ordering::Greater, "NaN should rank above every number.");
    assert_eq!(Value::Int(i64::MAX).loose_cmp(&nan), Ordering::Less);
    assert_eq!(Value::from("1e3").loose_cmp(&nan), Ordering::Less);
    assert_eq!(nan.loose_cmp(&"a".into()), Ordering::Less, "Strings still rank after numbers.");
    assert!(nan.loose_eq(&nan));
    assert!(!nan.loose_eq(&Value::Int(0)));
}

#[test]
fn test_key_order() {
    assert!(Key::Int(3) < Key::Int(10));
    assert!(Key::Int(10) < Key::from("2a"), "Integer keys should come before string keys.");
    assert!(Key::Int(3) < Key::from("2a"));
    assert!(Key::from("10a") < Key::from("2a"), "String keys compare lexically.");
}

#[test]
fn test_macros() {
    let value = map! {
        "name" => "Jo",
        "tags" => list!["a", "b"],
        3 => Value::Null,
    };
    let map = value.as_map().expect("map! should build a map");

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&Key::Int(3)), Some(&Value::Null));
    assert_eq!(map.get(&Key::from("tags")), Some(&Value::from(vec!["a", "b"])));
    assert_eq!(map! {}, Value::list());
}

#[test]
fn test_debug_format() {
    let value = map! { "a" => 1, 0 => "x" };
    assert_eq!(format!("{:?}", value.as_map().expect("map")), r#"{"a": Int(1), 0: Str("x")}"#);
}

#[cfg(feature = "json")]
mod json {
    use super::*;

    #[derive(serde::Serialize)]
    struct User {
        name: &'static str,
        age: u32,
        tags: Vec<&'static str>,
    }

    #[test]
    fn test_json_round_trip() {
        let value = Value::from_json(r#"{"b":[1,2.5,"x"],"a":{"0":null,"k":true}}"#)
            .expect("valid json");

        assert_eq!(
            value,
            map! {
                "b" => list![1, 2.5, "x"],
                "a" => map! { 0 => Value::Null, "k" => true },
            },
            "Object members should keep document order and numeric keys should normalise."
        );
        assert_eq!(value.to_json(), r#"{"b":[1,2.5,"x"],"a":{"0":null,"k":true}}"#);
        assert_eq!(value.to_string(), value.to_json(), "Display should be the JSON encoding.");
    }

    #[test]
    fn test_from_serialize() {
        let user = User { name: "Jo", age: 30, tags: vec!["admin"] };
        assert_eq!(
            Value::from_serialize(&user).expect("serializable"),
            map! { "name" => "Jo", "age" => 30, "tags" => list!["admin"] },
            "Struct fields should become map entries in declaration order."
        );
    }

    #[test]
    fn test_non_list_serializes_as_object() {
        let mut map = Map::from_values(["a", "b"]);
        map.remove(&Key::Int(0));
        assert_eq!(map.to_json(), r#"{"1":"b"}"#);
        assert_eq!(Value::Float(f64::NAN).to_json(), "null", "NaN has no JSON representation.");
    }
}
