/// Builds a [`Value::Map`](crate::Value::Map) from `key => value` pairs, in order.
///
/// Keys can be anything convertible into a [`Key`](crate::Key) and values anything convertible
/// into a [`Value`](crate::Value), including nested `map!` and [`list!`](crate::list) calls.
///
/// ```
/// use support_lib::{map, Key, Value};
///
/// let user = map! {
///     "name" => "Jo",
///     "roles" => map! { 0 => "admin" },
/// };
///
/// let roles = user.as_map().and_then(|m| m.get(&Key::from("roles")));
/// assert!(roles.is_some_and(Value::is_map));
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::Value::Map($crate::Map::new())
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut map = $crate::Map::new();
        $( map.insert($key, $value); )+
        $crate::Value::Map(map)
    }};
}

/// Builds a list, a [`Value::Map`](crate::Value::Map) keyed `0..n`, from the provided values.
///
/// ```
/// use support_lib::{list, Value};
///
/// let list = list![1, "two", 3.0];
/// assert_eq!(list.as_map().map(|m| m.len()), Some(3));
/// assert_eq!(list![], Value::list());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::list()
    };
    ( $( $value:expr ),+ $(,)? ) => {{
        let mut map = $crate::Map::new();
        $( map.push($value); )+
        $crate::Value::Map(map)
    }};
}
