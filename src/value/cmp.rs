use std::cmp::Ordering;

use super::value::{parse_number, Number};
use super::Value;

impl Value {
    /// Compares two values by what they represent rather than how they're stored.
    ///
    /// - Numbers compare numerically across integers, floats and numeric strings, so `1`, `1.0`
    ///   and `"1"` are all equal. `NaN` is only equal to `NaN`.
    /// - Non-numeric strings are only equal to identical strings.
    /// - A bool is equal to any value with the same truthiness.
    /// - Null is equal to the empty string and to any other falsy value except `"0"`.
    /// - Maps are equal if they hold the same keys with loosely equal values, in any order.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, Value::Str(string)) | (Value::Str(string), Value::Null) => string.is_empty(),
            (Value::Null, value) | (value, Value::Null) => !value.is_truthy(),
            (Value::Bool(bool), value) | (value, Value::Bool(bool)) => *bool == value.is_truthy(),
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| b.get(k).is_some_and(|w| v.loose_eq(w)))
            },
            (Value::Map(_), _) | (_, Value::Map(_)) => false,
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => compare_numbers(x, y) == Ordering::Equal,
                _ => matches!((a, b), (Value::Str(x), Value::Str(y)) if x == y),
            },
        }
    }

    /// Orders two values ascending, as used by default sorting.
    ///
    /// Values of different kinds are ranked `null < bool < number < string < map`, where numeric
    /// strings count as numbers. Within a kind, numbers compare numerically, strings lexically,
    /// and maps by length and then by their values in order. `NaN` ranks above every other
    /// number and equal to itself, so the ordering is total.
    pub fn loose_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Str(a), Value::Str(b)) if rank(self) == 3 && rank(other) == 3 => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.values()
                    .zip(b.values())
                    .map(|(v, w)| v.loose_cmp(w))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) if rank(a) == 2 && rank(b) == 2 => compare_numbers(x, y),
                _ => rank(a).cmp(&rank(b)),
            },
        }
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Str(string) if parse_number(string).is_some() => 2,
        Value::Str(_) => 3,
        Value::Map(_) => 4,
    }
}

fn compare_numbers(a: Number, b: Number) -> Ordering {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.cmp(&y),
        (Number::Int(x), Number::Float(y)) => compare_int_float(x, y),
        (Number::Float(x), Number::Int(y)) => compare_int_float(y, x).reverse(),
        (Number::Float(x), Number::Float(y)) => match x.partial_cmp(&y) {
            Some(ordering) => ordering,
            None => x.is_nan().cmp(&y.is_nan()),
        },
    }
}

/// Compares without rounding `int` to a float, which loses precision above 2^53.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, the first float above i64::MAX.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() || float >= BOUND {
        return Ordering::Less;
    }
    if float < -BOUND {
        return Ordering::Greater;
    }

    // In range, so the truncated float converts to i64 exactly.
    let whole = float.trunc();
    int.cmp(&(whole as i64)).then_with(|| {
        if whole < float {
            Ordering::Less
        } else if whole > float {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}
