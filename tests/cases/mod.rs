// Table-driven value scenarios.
//
// A case names a value-building expression and any number of checks on the
// resulting value:
//
//     test_case! {
//         name: promoted_object,
//         input: { let mut v = Value::null(); v["a"] = Value::from(1); v },
//         kind: { DictKind::Object },
//         size: { 1 },
//     }
//
// Each check becomes its own `#[test]` inside a module named after the case.
// A check may carry attributes such as `#[should_panic]`.

// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Wildcard pattern
    ($result:expr, { _ }) => {
        let _ = $result;
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        pretty_assertions::assert_eq!($result, $expected);
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] kind, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_kind() {
            assert_case!(input().kind(), $expected);
        }
    };

    ([$($attrs:meta)*] size, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_size() {
            assert_case!(input().size(), $expected);
        }
    };

    ([$($attrs:meta)*] keys, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_keys() {
            let keys: Vec<String> = input().keys().iter().map(|k| k.to_string()).collect();
            assert_case!(keys, $expected);
        }
    };

    ([$($attrs:meta)*] debug, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_debug() {
            assert_case!(format!("{:?}", input()).as_str(), $expected);
        }
    };

    ([$($attrs:meta)*] status, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_status() {
            assert_case!(status(), $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, optional outcome, then checks in any order
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:block,
        outcome: $outcome:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            fn input() -> Value $input

            // Result of the operation under test, flattened to a status code.
            fn status() -> Status {
                let mut value = input();
                let outcome = $outcome;
                ToStatus::to_status(&outcome(&mut value))
            }

            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };

    (
        name: $name:ident,
        input: $input:block,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            fn input() -> Value $input

            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
