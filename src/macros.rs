/// Builds a [`Value`](crate::Value) from a literal.
///
/// Handy for tests and for assembling structured cells programmatically:
///
/// ```rust
/// use typed_cell::structured;
///
/// let value = structured!({
///     "name": "Alice",
///     "tags": [1, 2, 3],
///     "active": true
/// });
/// assert!(value.is_mapping());
/// ```
#[macro_export]
macro_rules! structured {
    // null
    (null) => {
        $crate::Value::Null
    };

    // booleans
    (true) => {
        $crate::Value::Bool(true)
    };
    (false) => {
        $crate::Value::Bool(false)
    };

    // sequences
    ([]) => {
        $crate::Value::Sequence(vec![])
    };
    ([ $($element:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::structured!($element)),*])
    };

    // mappings
    ({}) => {
        $crate::Value::Mapping($crate::CellMap::new())
    };
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::CellMap::new();
        $(
            map.insert($key.to_string(), $crate::structured!($value));
        )*
        $crate::Value::Mapping(map)
    }};

    // everything else converts through From
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
