use axzdict_values::{Added, DictError, DictKind, Key, Status, ToStatus, Value, array, object};
use pretty_assertions::assert_eq;

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn default_is_null() {
    let v = Value::default();
    assert_eq!(v.kind(), DictKind::Null);
    assert!(v.keys().is_empty());
}

#[test]
fn scalar_round_trips() {
    assert_eq!(Value::from(42).val::<i32>(), Ok(42));
    assert_eq!(Value::from(6.25).val::<f64>(), Ok(6.25));
    assert_eq!(Value::from("hi").val::<String>(), Ok("hi".to_string()));
    assert_eq!(Value::from(false).val::<bool>(), Ok(false));
    assert_eq!(Value::from(&b"\x00\xff"[..]).val::<Vec<u8>>(), Ok(vec![0, 255]));
}

#[test]
fn wrong_kind_is_soft_for_val() {
    let v = Value::from("hi");
    assert_eq!(
        v.val::<i32>(),
        Err(DictError::NotSupported { kind: DictKind::String })
    );
    assert_eq!(v.val::<i32>().to_status(), Status::NotSupported);
}

#[test]
fn string_size_counts_characters() {
    assert_eq!(Value::from("héllo").size(), 5);
    assert_eq!(Value::from("héllo").val::<String>().map(|s| s.len()), Ok(6));
}

#[test]
fn become_kind_resets_content() {
    let mut v = Value::from("text");
    for kind in DictKind::ALL {
        v.become_kind(kind);
        assert_eq!(v.kind(), kind);
    }
    v.become_kind(DictKind::Integral);
    assert_eq!(v.integral(), 0);
    v.become_kind(DictKind::Bool);
    assert!(!v.boolean());
    v.become_kind(DictKind::Callable);
    assert!(v.call(Value::from(1)).is_ok_and(|out| out.is_null()));
}

#[test]
fn clear_keeps_kind_and_reset_goes_to_null() {
    let mut obj = object! { "a" => 1 };
    obj.clear();
    assert!(obj.is_object());
    assert!(obj.is_empty());

    let mut n = Value::from(9);
    n.clear();
    assert_eq!(n, 9);

    obj.reset();
    assert!(obj.is_null());
}

// =============================================================================
// Arrays
// =============================================================================

#[test]
fn array_built_by_adds() {
    let mut a = Value::array();
    for i in 0..10 {
        assert_eq!(a.add(i), Ok(Added::Inserted));
    }
    assert_eq!(a.size(), 10);

    assert_eq!(a.remove(3), Ok(Value::from(3)));
    assert_eq!(a.size(), 9);
    assert_eq!(a[3], 4);
    assert_eq!(a[8], 9);
}

#[test]
fn indexed_write_grows_with_nulls() {
    let mut a = Value::array();
    a[5] = Value::from("X");
    assert_eq!(a.size(), 6);
    assert!((0..5).all(|i| a[i].is_null()));
    assert_eq!(a[5], "X");
}

#[test]
fn indexed_soft_access() {
    let a = array![10, 20];
    assert_eq!(a.val_index::<i32>(1), Ok(20));
    assert_eq!(a.val_index::<i32>(2), Err(DictError::OutOfRange { index: 2, len: 2 }));
    assert_eq!(Value::object().val_index::<i32>(0).to_status(), Status::NotSupported);
}

#[test]
#[should_panic(expected = "out of range")]
fn indexed_hard_access_panics_past_end() {
    let a = array![1];
    let _ = a.at(1);
}

#[test]
fn reserve() {
    let mut a = Value::array();
    assert_eq!(a.reserve(128), Ok(()));
    assert!(matches!(a.reserve(usize::MAX), Err(DictError::OutOfRange { .. })));

    let mut o = Value::object();
    assert_eq!(o.reserve(128), Ok(()));
    assert!(matches!(o.reserve(usize::MAX), Err(DictError::HashError { .. })));

    let mut s = Value::from(1);
    assert_eq!(s.reserve(usize::MAX), Ok(()));
}

// =============================================================================
// Objects
// =============================================================================

#[test]
fn add_key_then_replace() {
    let mut d = Value::object();
    assert_eq!(d.add_key("a", 1).to_status(), Status::Ok);
    assert_eq!(d.add_key("a", 2).to_status(), Status::OkReplaced);
    assert_eq!(d["a"], 2);
    assert_eq!(d.size(), 1);
}

#[test]
fn keyed_write_on_null_promotes() {
    let mut v = Value::null();
    let slot = &mut v["fresh"];
    assert!(slot.is_null());
    assert_eq!(v.kind(), DictKind::Object);
    assert!(v.has("fresh"));
}

#[test]
fn keys_match_inserted_set() {
    let mut d = Value::object();
    for key in ["zeta", "alpha", "a key longer than sixteen bytes"] {
        let _ = d.add_key(key, Value::null());
    }
    let keys: Vec<Key> = d.keys().into_iter().collect();
    assert_eq!(keys, ["a key longer than sixteen bytes", "alpha", "zeta"].map(Key::from));

    assert!(array![1, 2].keys().is_empty());
    assert!(Value::from("s").keys().is_empty());
}

#[test]
fn remove_missing_key_is_not_found() {
    let mut d = object! { "a" => 1 };
    assert_eq!(d.remove_key("b").to_status(), Status::NotFound);
    assert_eq!(d.remove_key("a"), Ok(Value::from(1)));
    assert!(d.is_empty());
}

#[test]
fn add_key_on_non_object_is_not_supported() {
    let mut v = Value::null();
    assert_eq!(
        v.add_key("k", 1),
        Err(DictError::NotSupported { kind: DictKind::Null })
    );
    assert!(v.is_null());
}

#[test]
fn merge_reports_invalid_input_for_non_objects() {
    let mut d = object! { "a" => 1 };
    assert_eq!(d.add(array![1]).to_status(), Status::InvalidInput);
    assert_eq!(d.add(object! { "a" => 9, "b" => 2 }), Ok(Added::Inserted));
    assert_eq!(d, object! { "a" => 1, "b" => 2 });
}

#[test]
#[should_panic(expected = "not found")]
fn keyed_hard_read_panics_on_missing_key() {
    let d = Value::object();
    let _ = &d["missing"];
}

#[test]
#[should_panic(expected = "Value::size is not available for bool values")]
fn size_on_scalar_panics() {
    let _ = Value::from(true).size();
}

// =============================================================================
// Callables
// =============================================================================

#[test]
fn callable_invocation() {
    let double = Value::callable(|v| Value::from(v.integral() * 2));
    assert_eq!(double.call(Value::from(21)), Ok(Value::from(42)));
    assert_eq!(
        Value::from(1).call(Value::null()),
        Err(DictError::NotSupported { kind: DictKind::Integral })
    );
}
