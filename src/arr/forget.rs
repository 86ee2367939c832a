use tracing::trace;

use crate::data::Accessible;
use crate::{Key, Value};

/// Removes each of the dot-notation `keys` from `array`, in place.
///
/// Each key is handled independently:
/// 1. If `array` holds the whole key literally, dots included, that entry is removed.
/// 2. Otherwise the key is split on dots and the nested maps are walked segment by segment, and
///    the final segment is removed from the innermost map reached.
///
/// If an intermediate segment is missing, or holds something other than a map, that key is
/// skipped without error and the remaining keys are still processed.
///
/// # Examples
/// ```
/// use support_lib::arr::forget;
/// use support_lib::map;
///
/// let mut value = map! { "a" => map! { "b" => 1, "c" => 2 }, "x.y" => 3 };
/// let array = value.as_map_mut().expect("map");
///
/// forget(array, ["a.b", "x.y", "missing.path"]);
/// assert_eq!(value, map! { "a" => map! { "c" => 2 } });
/// ```
pub fn forget<T, I>(array: &mut T, keys: I)
where
    T: Accessible + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    'keys: for raw in keys {
        let raw = raw.as_ref();

        let exact = Key::parse(raw);
        if array.has_key(&exact) {
            array.remove_key(&exact);
            continue;
        }

        let mut parts: Vec<Key> = raw.split('.').map(Key::parse).collect();
        // Splitting always yields at least one part.
        let Some(last) = parts.pop() else { continue };

        let Some((head, rest)) = parts.split_first() else {
            // A single segment that doesn't exist, nothing to remove.
            continue;
        };

        let mut inner = match array.get_key_mut(head) {
            Some(Value::Map(nested)) => nested,
            _ => {
                trace!(target: "support_lib::arr", path = raw, segment = %head, "path not found, skipping");
                continue;
            },
        };

        for part in rest {
            inner = match inner.get_mut(part) {
                Some(Value::Map(nested)) => nested,
                _ => {
                    trace!(target: "support_lib::arr", path = raw, segment = %part, "path not found, skipping");
                    continue 'keys;
                },
            };
        }

        inner.remove(&last);
    }
}
