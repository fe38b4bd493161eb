/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects become sections (keys are stored as written, without path splitting),
/// arrays become lists, and anything else goes through `Value::from`. Negative
/// numbers and other multi-token expressions need parentheses.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::{fds, Value};
///
/// let value = fds!({
///     "server": {
///         "host": "localhost",
///         "port": 8080
///     },
///     "offset": (-5),
///     "tags": ["a", "b"]
/// });
///
/// let root = value.as_section().unwrap();
/// assert_eq!(root.get_i64("server.port", 0), 8080);
/// assert_eq!(root.get_i64("offset", 0), -5);
/// assert!(root.get_value("tags").unwrap().is_list());
/// ```
///
/// # Panics
///
/// Panics if an array contains an array or an object; list members must be
/// scalars or bytes.
#[macro_export]
macro_rules! fds {
    ([]) => {
        $crate::Value::List(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::Entry::new($crate::fds!($elem))),*])
    };

    ({}) => {
        $crate::Value::Section($crate::Section::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut section = $crate::Section::new();
        $(
            if let ::std::result::Result::Err(err) = section.set_root($key, $crate::fds!($value)) {
                panic!("fds!: {}", err);
            }
        )*
        $crate::Value::Section(section)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
