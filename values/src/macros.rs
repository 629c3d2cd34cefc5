/// Build an Array value from expressions convertible into values.
///
/// ```
/// use axzdict_values::array;
///
/// let v = array![1, "two", 3.0, array![]];
/// assert_eq!(v.size(), 4);
/// assert!(v[3].is_array());
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::dynamic::Value::array()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::dynamic::Value::from(::std::vec![$($crate::dynamic::Value::from($item)),+])
    };
}

/// Build an Object value from `key => value` pairs.
///
/// Later duplicates overwrite earlier ones.
///
/// ```
/// use axzdict_values::object;
///
/// let v = object! { "a" => 1, "b" => object! { "c" => true } };
/// assert_eq!(v["b"]["c"].boolean(), true);
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::dynamic::Value::object()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::object::ObjectMap::new();
        $(
            let _ = map.insert($key, $crate::dynamic::Value::from($value));
        )+
        $crate::dynamic::Value::from(map)
    }};
}
