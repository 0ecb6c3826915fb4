//! Tests for decoy error enums and error codes.

use decoy_core::errors::error_code;
use decoy_core::errors::*;

// ── Error codes ──

#[test]
fn argument_error_codes() {
    let e = ArgumentError::IndexOutOfRange {
        method: "Foo.bar()".to_string(),
        index: 3,
        arity: 1,
    };
    assert_eq!(e.error_code(), error_code::INDEX_OUT_OF_RANGE);

    let e = ArgumentError::UnknownParameterName {
        method: "Foo.bar()".to_string(),
        name: "Text".to_string(),
    };
    assert_eq!(e.error_code(), error_code::UNKNOWN_PARAMETER_NAME);

    let e = ArgumentError::DuplicateParameterName {
        method: "Foo.bar".to_string(),
        name: "x".to_string(),
    };
    assert_eq!(e.error_code(), error_code::SIGNATURE_MISMATCH);
}

#[test]
fn specification_error_delegates_argument_code() {
    let inner = ArgumentError::UnknownParameterName {
        method: "Foo.bar()".to_string(),
        name: "y".to_string(),
    };
    let e: SpecificationError = inner.into();
    assert_eq!(e.error_code(), error_code::UNKNOWN_PARAMETER_NAME);

    let e = SpecificationError::ReturnTypeMismatch {
        method: "Foo.bar() -> i64".to_string(),
        expected: "i64".to_string(),
        actual: "\"text\"".to_string(),
    };
    assert_eq!(e.error_code(), error_code::RETURN_TYPE_MISMATCH);
}

#[test]
fn creation_error_delegates_registry_code() {
    let e: CreationError = RegistryError::AlreadyRegistered {
        object: "0x10".to_string(),
        fake: "Faked Foo".to_string(),
    }
    .into();
    assert_eq!(e.error_code(), error_code::ALREADY_REGISTERED);

    let e = CreationError::ProxyFailed {
        type_name: "Foo".to_string(),
        message: "boom".to_string(),
    };
    assert_eq!(e.error_code(), error_code::CREATION_FAILED);
}

#[test]
fn aggregate_error_keeps_subsystem_code() {
    let e: DecoyError = RegistryError::NoFakeAssociated {
        object: "0xdead".to_string(),
    }
    .into();
    assert_eq!(e.error_code(), error_code::NO_FAKE_ASSOCIATED);

    let e: DecoyError = ConfigError::InvalidValue {
        field: "x".to_string(),
        message: "y".to_string(),
    }
    .into();
    assert_eq!(e.error_code(), error_code::CONFIG_ERROR);
}

// ── Messages ──

#[test]
fn coded_string_prefixes_code() {
    let e = RegistryError::NoFakeAssociated {
        object: "0xbeef".to_string(),
    };
    assert_eq!(
        e.coded_string(),
        "[NO_FAKE_ASSOCIATED] No fake is associated with object 0xbeef"
    );
}

#[test]
fn expectation_error_lists_recorded_calls() {
    let e = ExpectationError::CallCountMismatch {
        fake: "Faked Foo".to_string(),
        specification: "Foo.a_method()".to_string(),
        expected: "exactly once".to_string(),
        actual: 0,
        calls: vec![
            "1. Foo.another_method()".to_string(),
            "2. Foo.another_method(text: \"houseboat\")".to_string(),
        ],
    };
    let msg = e.to_string();
    assert!(msg.contains("expected exactly once, but found 0"));
    assert!(msg.contains("[1. Foo.another_method(), 2. Foo.another_method(text: \"houseboat\")]"));
    assert_eq!(e.error_code(), error_code::EXPECTATION_FAILED);
}

#[test]
fn errors_are_send_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<ArgumentError>();
    assert_send_sync::<SpecificationError>();
    assert_send_sync::<DecoyError>();
}
