use core::fmt;

/// The closed set of value kinds.
///
/// Every [`Value`](crate::dynamic::Value) is exactly one of these at any
/// time. The kind of a value only changes by replacing its content wholesale
/// (promotion, [`become_kind`](crate::dynamic::Value::become_kind),
/// assignment), never by reinterpreting the existing payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DictKind {
    /// No value.
    Null,

    /// 64-bit floating point number.
    Number,

    /// 32-bit signed integer.
    Integral,

    /// Boolean.
    Bool,

    /// Unicode text.
    String,

    /// Raw byte sequence.
    Bytes,

    /// Ordered sequence of values.
    Array,

    /// Unordered mapping from string keys to values.
    Object,

    /// Function from one value to another.
    Callable,
}

impl DictKind {
    /// All kinds, in declaration order.
    pub const ALL: [DictKind; 9] = [
        DictKind::Null,
        DictKind::Number,
        DictKind::Integral,
        DictKind::Bool,
        DictKind::String,
        DictKind::Bytes,
        DictKind::Array,
        DictKind::Object,
        DictKind::Callable,
    ];

    /// Lowercase name, as used in panic messages and logs.
    pub const fn name(self) -> &'static str {
        match self {
            DictKind::Null => "null",
            DictKind::Number => "number",
            DictKind::Integral => "integral",
            DictKind::Bool => "bool",
            DictKind::String => "string",
            DictKind::Bytes => "bytes",
            DictKind::Array => "array",
            DictKind::Object => "object",
            DictKind::Callable => "callable",
        }
    }

    /// Array or Object.
    pub const fn is_container(self) -> bool {
        matches!(self, DictKind::Array | DictKind::Object)
    }

    /// Number or Integral.
    pub const fn is_numeric(self) -> bool {
        matches!(self, DictKind::Number | DictKind::Integral)
    }

    /// Kinds for which `size()` is defined.
    pub const fn is_sized(self) -> bool {
        matches!(
            self,
            DictKind::String | DictKind::Bytes | DictKind::Array | DictKind::Object
        )
    }
}

impl fmt::Display for DictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        let mut sorted = DictKind::ALL;
        sorted.sort();
        assert_eq!(sorted, DictKind::ALL);
    }

    #[test]
    fn test_sized_kinds() {
        let sized: Vec<_> = DictKind::ALL.into_iter().filter(|k| k.is_sized()).collect();
        assert_eq!(
            sized,
            [DictKind::String, DictKind::Bytes, DictKind::Array, DictKind::Object]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DictKind::Integral.to_string(), "integral");
        assert_eq!(DictKind::Callable.to_string(), "callable");
    }
}
