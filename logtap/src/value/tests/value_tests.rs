use crate::log_args;
use crate::value::{ErrorValue, LogValue};
use pretty_assertions::assert_eq;

#[test]
fn display_renders_primitives() {
    assert_eq!(LogValue::Undefined.to_string(), "undefined");
    assert_eq!(LogValue::Null.to_string(), "null");
    assert_eq!(LogValue::Bool(true).to_string(), "true");
    assert_eq!(LogValue::Int(42).to_string(), "42");
    assert_eq!(LogValue::Str("hello".into()).to_string(), "hello");
    assert_eq!(LogValue::BigInt(12_345_678_901_234_567_890_i128).to_string(), "12345678901234567890");
}

#[test]
fn display_renders_floats_without_trailing_zero() {
    // Integral doubles print as plain integers.
    assert_eq!(LogValue::Float(3.0).to_string(), "3");
    assert_eq!(LogValue::Float(0.5).to_string(), "0.5");
    assert_eq!(LogValue::Float(f64::NAN).to_string(), "NaN");
    assert_eq!(LogValue::Float(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(LogValue::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
}

#[test]
fn display_unwraps_boxed_values() {
    let boxed = LogValue::Boxed(Box::new(LogValue::Int(7)));
    assert_eq!(boxed.to_string(), "7");
}

#[test]
fn from_json_round_trips_containers() {
    // Arrange
    let json = serde_json::json!({"a": 1, "b": [true, null], "c": "text"});

    // Act
    let value = LogValue::from(json);

    // Assert
    let LogValue::Object(entries) = &value else {
        panic!("expected an object");
    };
    let entries = entries.borrow();
    assert_eq!(entries.get("a"), Some(&LogValue::Int(1)));
    assert_eq!(entries.get("c"), Some(&LogValue::Str("text".into())));
    let LogValue::Array(items) = entries.get("b").unwrap() else {
        panic!("expected an array");
    };
    assert_eq!(
        *items.borrow(),
        vec![LogValue::Bool(true), LogValue::Null]
    );
}

#[test]
fn from_u64_overflowing_i64_becomes_big_int() {
    assert_eq!(LogValue::from(u64::MAX), LogValue::BigInt(u64::MAX.into()));
    assert_eq!(LogValue::from(7_u64), LogValue::Int(7));
}

#[test]
fn log_args_converts_heterogeneous_values() {
    // Act
    let args = log_args!["hello", 1, true, 0.5];

    // Assert
    assert_eq!(
        args,
        vec![
            LogValue::Str("hello".into()),
            LogValue::Int(1),
            LogValue::Bool(true),
            LogValue::Float(0.5),
        ]
    );
    assert_eq!(log_args!(), Vec::<LogValue>::new());
}

#[test]
fn error_value_from_std_follows_the_source_chain() {
    // Arrange
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);
    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("outer failed")
        }
    }
    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("inner failed")
        }
    }
    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }
    impl std::error::Error for Inner {}

    // Act
    let value = ErrorValue::from_std(&Outer(Inner));

    // Assert
    assert_eq!(value.message, "outer failed");
    let Some(LogValue::Error(cause)) = &value.cause else {
        panic!("expected a cause");
    };
    assert_eq!(cause.message, "inner failed");
    assert_eq!(cause.cause, None);
}

#[test]
fn identity_is_shared_between_clones() {
    // Arrange
    let object = LogValue::object([("a", LogValue::Int(1))]);
    let clone = object.clone();
    let other = LogValue::object([("a", LogValue::Int(1))]);

    // Assert
    assert_eq!(object.identity(), clone.identity());
    assert_ne!(object.identity(), other.identity());
    assert_eq!(LogValue::Int(1).identity(), None);
}
