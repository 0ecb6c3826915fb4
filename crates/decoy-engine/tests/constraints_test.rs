//! Tests for argument constraints and their negation.

use proptest::prelude::*;

use decoy_core::types::{ObjectRef, Value};
use decoy_engine::ArgumentConstraint;

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::UInt),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        ".{0,12}".prop_map(Value::from),
    ]
}

fn builtins() -> Vec<ArgumentConstraint> {
    vec![
        ArgumentConstraint::any(),
        ArgumentConstraint::is_null(),
        ArgumentConstraint::is_not_null(),
        ArgumentConstraint::equal_to(42),
        ArgumentConstraint::equal_to("houseboat"),
        ArgumentConstraint::greater_than(0.0),
        ArgumentConstraint::less_than(10.0),
        ArgumentConstraint::contains("bo"),
        ArgumentConstraint::starts_with("house"),
        ArgumentConstraint::is_empty(),
        ArgumentConstraint::that("even", |v| v.as_i64().is_some_and(|i| i % 2 == 0)),
    ]
}

// ── Null constraints ──

#[test]
fn is_null_on_nullable_int() {
    let c = ArgumentConstraint::is_null();
    assert!(c.is_satisfied_by(&Value::from(None::<i64>)));
    for v in [0i64, -1, 42] {
        assert!(!c.is_satisfied_by(&Value::from(Some(v))));
    }
    assert_eq!(c.describe(), "NULL");
}

#[test]
fn is_not_null_on_nullable_int() {
    let c = ArgumentConstraint::is_not_null();
    assert!(!c.is_satisfied_by(&Value::from(None::<i64>)));
    for v in [0i64, -1, 42] {
        assert!(c.is_satisfied_by(&Value::from(Some(v))));
    }
    assert_eq!(c.describe(), "NOT NULL");
}

#[test]
fn negation_swaps_descriptions() {
    let c = ArgumentConstraint::is_null();
    assert_eq!(c.negate().describe(), "NOT NULL");
    assert_eq!(c.negate().negate().describe(), "NULL");
    assert!(!c.is_negated());
    assert!(c.negate().is_negated());
    assert!(!c.negate().negate().is_negated());
}

// ── Built-ins ──

#[test]
fn any_is_wildcard() {
    let c = ArgumentConstraint::any();
    assert!(c.is_wildcard());
    assert!(c.is_satisfied_by(&Value::Null));
    assert_eq!(c.describe(), "<Ignored>");
    assert!(!c.negate().is_wildcard());
    assert!(!c.negate().is_satisfied_by(&Value::Int(1)));
}

#[test]
fn equal_to_null_is_is_null() {
    let c = ArgumentConstraint::equal_to(Value::Null);
    assert_eq!(c.describe(), "NULL");
    assert!(c.is_satisfied_by(&Value::Null));
}

#[test]
fn equal_to_describes_value() {
    let c = ArgumentConstraint::equal_to("houseboat");
    assert_eq!(c.describe(), "\"houseboat\"");
    assert_eq!(c.negate().describe(), "not \"houseboat\"");
    assert!(c.is_satisfied_by(&Value::from("houseboat")));
    assert!(!c.is_satisfied_by(&Value::from("hovercraft")));
}

#[test]
fn same_as_uses_identity() {
    let obj = ObjectRef::new(String::from("payload"));
    let c = ArgumentConstraint::same_as(obj.clone());
    assert!(c.is_satisfied_by(&Value::Object(obj)));
    assert!(!c.is_satisfied_by(&Value::object(String::from("payload"))));
    assert!(!c.is_satisfied_by(&Value::Null));
}

#[test]
fn numeric_bounds_accept_every_numeric_kind() {
    let c = ArgumentConstraint::greater_than(1.5);
    assert!(c.is_satisfied_by(&Value::Int(2)));
    assert!(c.is_satisfied_by(&Value::UInt(2)));
    assert!(c.is_satisfied_by(&Value::Float(1.6)));
    assert!(!c.is_satisfied_by(&Value::Int(1)));
    assert!(!c.is_satisfied_by(&Value::from("9")));
}

#[test]
fn string_constraints() {
    assert!(ArgumentConstraint::contains("ous").is_satisfied_by(&Value::from("houseboat")));
    assert!(ArgumentConstraint::starts_with("house").is_satisfied_by(&Value::from("houseboat")));
    assert!(!ArgumentConstraint::starts_with("boat").is_satisfied_by(&Value::from("houseboat")));
    assert!(ArgumentConstraint::is_empty().is_satisfied_by(&Value::from("")));
    assert!(!ArgumentConstraint::is_empty().is_satisfied_by(&Value::Null));
}

#[test]
fn custom_constraint_description() {
    let c = ArgumentConstraint::that("positive", |v| v.as_i64().is_some_and(|i| i > 0));
    assert_eq!(c.describe(), "positive");
    assert_eq!(c.negate().describe(), "not positive");
    let c = c.with_negated_description("non-positive");
    assert_eq!(c.negate().describe(), "non-positive");
}

// ── Properties ──

proptest! {
    #[test]
    fn negation_is_exact_complement(v in arb_value()) {
        for c in builtins() {
            prop_assert_eq!(c.is_satisfied_by(&v), !c.negate().is_satisfied_by(&v));
        }
    }

    #[test]
    fn double_negation_is_identity(v in arb_value()) {
        for c in builtins() {
            let twice = c.negate().negate();
            prop_assert_eq!(c.is_satisfied_by(&v), twice.is_satisfied_by(&v));
            prop_assert_eq!(c.describe(), twice.describe());
        }
    }

    #[test]
    fn evaluation_is_repeatable_and_pure(v in arb_value()) {
        let before = v.clone();
        for c in builtins() {
            let first = c.is_satisfied_by(&v);
            prop_assert_eq!(first, c.is_satisfied_by(&v));
        }
        prop_assert_eq!(before, v);
    }
}
