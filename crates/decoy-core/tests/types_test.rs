//! Tests for values, declared types, method identities and IDs.

use std::collections::HashSet;
use std::sync::Arc;

use decoy_core::errors::ArgumentError;
use decoy_core::types::*;

// ── Value ──

#[test]
fn scalars_compare_structurally() {
    assert_eq!(Value::from(42), Value::Int(42));
    assert_eq!(Value::from("houseboat"), Value::from(String::from("houseboat")));
    assert_ne!(Value::Int(1), Value::UInt(1));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(7i64)), Value::Int(7));
}

#[test]
fn objects_compare_by_identity() {
    let shared = ObjectRef::new(String::from("payload"));
    let a = Value::Object(shared.clone());
    let b = Value::Object(shared);
    let other = Value::object(String::from("payload"));
    assert_eq!(a, b);
    assert_ne!(a, other);
}

#[test]
fn object_ref_from_arc_preserves_identity() {
    let inner = Arc::new(5u32);
    let a = ObjectRef::from_arc(Arc::clone(&inner));
    let b = ObjectRef::from_arc(inner);
    assert!(a.ptr_eq(&b));
    assert_eq!(a.downcast_ref::<u32>(), Some(&5));
    assert_eq!(a.type_name(), "u32");
}

#[test]
fn display_and_render() {
    assert_eq!(Value::Null.to_string(), "NULL");
    assert_eq!(Value::from("x").to_string(), "\"x\"");
    assert_eq!(Value::object(1u8).to_string(), "<u8>");

    let long = Value::from("abcdefghijklmnopqrstuvwxyz");
    let rendered = long.render(10);
    assert_eq!(rendered.chars().count(), 10);
    assert!(rendered.ends_with("..."));
    assert_eq!(Value::Int(5).render(10), "5");
}

#[test]
fn numeric_views() {
    assert_eq!(Value::Int(-3).as_number(), Some(-3.0));
    assert_eq!(Value::UInt(3).as_number(), Some(3.0));
    assert_eq!(Value::from("3").as_number(), None);
    assert_eq!(Value::Null.as_i64(), None);
}

#[test]
fn json_view_of_values() {
    assert_eq!(Value::Int(4).to_json(), serde_json::json!(4));
    assert_eq!(Value::Null.to_json(), serde_json::Value::Null);
    assert_eq!(
        Value::object(1u8).to_json(),
        serde_json::json!({ "object": "u8" })
    );
}

// ── TypeRef ──

#[test]
fn type_accepts_matching_kind_only() {
    assert!(TypeRef::int().accepts(&Value::Int(0)));
    assert!(!TypeRef::int().accepts(&Value::UInt(0)));
    assert!(!TypeRef::int().accepts(&Value::Null));
    assert!(TypeRef::int().nullable().accepts(&Value::Null));
    assert!(TypeRef::string().accepts(&Value::from("s")));
}

#[test]
fn object_types_check_names() {
    let obj = ObjectRef::new(7u16);
    assert!(TypeRef::any_object().accepts(&Value::Object(obj.clone())));
    assert!(TypeRef::object_of::<u16>().accepts(&Value::Object(obj.clone())));
    assert!(!TypeRef::named_object("Widget").accepts(&Value::Object(obj.clone())));
    assert!(TypeRef::object_of::<u16>()
        .nullable()
        .accepts(&Value::Object(obj)));
}

#[test]
fn default_values() {
    assert_eq!(TypeRef::int().default_value(), Value::Int(0));
    assert_eq!(TypeRef::bool().default_value(), Value::Bool(false));
    assert_eq!(TypeRef::string().default_value(), Value::from(""));
    assert_eq!(TypeRef::int().nullable().default_value(), Value::Null);

    let dummy = TypeRef::named_object("Widget").default_value();
    let obj = dummy.as_object().unwrap();
    assert!(obj.is_dummy());
    assert_eq!(obj.type_name(), "Widget");
    // Every default object is a fresh placeholder.
    assert_ne!(dummy, TypeRef::named_object("Widget").default_value());
}

#[test]
fn nullable_is_a_distinct_type() {
    assert_ne!(TypeRef::int(), TypeRef::int().nullable());
    assert_eq!(TypeRef::int().nullable().name(), "Option<i64>");
    assert_eq!(TypeRef::int().nullable().nullable(), TypeRef::int().nullable());
}

// ── MethodId ──

fn another_method(text: TypeRef) -> MethodId {
    MethodId::builder("Foo", "another_method")
        .param("text", text)
        .build()
        .unwrap()
}

#[test]
fn overloads_are_distinct() {
    let no_args = MethodId::builder("Foo", "another_method").build().unwrap();
    let with_text = another_method(TypeRef::string());
    assert_ne!(no_args, with_text);
    assert_eq!(no_args.name(), with_text.name());
}

#[test]
fn identity_ignores_parameter_names() {
    let a = another_method(TypeRef::string());
    let b = MethodId::builder("Foo", "another_method")
        .param("value", TypeRef::string())
        .build()
        .unwrap();
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn identity_covers_return_type_and_generics() {
    let plain = MethodId::builder("Foo", "get").build().unwrap();
    let returning = MethodId::builder("Foo", "get")
        .returns(TypeRef::int())
        .build()
        .unwrap();
    let generic = MethodId::builder("Foo", "get")
        .generic_arg("T")
        .build()
        .unwrap();
    assert_ne!(plain, returning);
    assert_ne!(plain, generic);
    assert!(plain.is_void());
    assert!(!returning.is_void());
}

#[test]
fn duplicate_parameter_names_rejected() {
    let err = MethodId::builder("Foo", "bar")
        .param("x", TypeRef::int())
        .param("x", TypeRef::string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ArgumentError::DuplicateParameterName { .. }));
}

#[test]
fn method_display() {
    let m = MethodId::builder("Counter", "record")
        .param("amount", TypeRef::int().nullable())
        .returns(TypeRef::bool())
        .build()
        .unwrap();
    assert_eq!(m.to_string(), "Counter.record(amount: Option<i64>) -> bool");
    assert_eq!(m.qualified_name(), "Counter.record");
    assert_eq!(m.parameter_index("amount"), Some(0));
    assert_eq!(m.parameter_index("Amount"), None);
}

// ── Identifiers ──

#[test]
fn ids_are_unique_and_prefixed() {
    let a = FakeId::next();
    let b = FakeId::next();
    assert_ne!(a, b);
    assert!(a.to_string().starts_with("fake#"));
    assert!(RuleId::next().to_string().starts_with("rule#"));
}

#[test]
fn object_id_is_address() {
    let boxed = Box::new(5u64);
    let id = ObjectId::of(&*boxed);
    assert_eq!(id, ObjectId::of(&*boxed));
    assert!(id.to_string().starts_with("0x"));
}
