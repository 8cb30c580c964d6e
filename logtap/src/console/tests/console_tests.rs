use crate::console::{Console, LogLevel, render_args};
use crate::log_args;
use crate::value::LogValue;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

#[test]
fn level_round_trips_through_strings() {
    for level in LogLevel::ALL {
        // Act
        let parsed = LogLevel::from_str(level.as_str()).unwrap();

        // Assert
        assert_eq!(parsed, level);
        assert_eq!(level.to_string(), level.as_str());
    }
    assert!(LogLevel::from_str("fatal").is_err());
}

#[test]
fn level_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
    let parsed: LogLevel = serde_json::from_str("\"debug\"").unwrap();
    assert_eq!(parsed, LogLevel::Debug);
}

#[test]
fn emit_routes_to_the_current_method() {
    // Arrange
    let console = Console::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    console.set_method(
        LogLevel::Info,
        Rc::new(move |args: &[LogValue]| sink.borrow_mut().push(args.to_vec())),
    );

    // Act
    console.info(&log_args!["hello", 1]);

    // Assert
    assert_eq!(
        *seen.borrow(),
        vec![vec![LogValue::Str("hello".into()), LogValue::Int(1)]]
    );
}

#[test]
fn set_method_replaces_only_one_level() {
    // Arrange
    let console = Console::new();
    let before_warn = console.method(LogLevel::Warn);

    // Act
    console.set_method(LogLevel::Info, Rc::new(|_: &[LogValue]| {}));

    // Assert
    assert!(Rc::ptr_eq(&console.method(LogLevel::Warn), &before_warn));
}

#[test]
fn render_args_joins_with_spaces() {
    // Act
    let line = render_args(&log_args!["status", 200, true]);

    // Assert
    assert_eq!(line, "status 200 true");
}

#[test]
fn render_args_serializes_containers() {
    // Arrange
    let args = vec![
        LogValue::Str("payload".into()),
        LogValue::object([("a", LogValue::Int(1))]),
    ];

    // Act
    let line = render_args(&args);

    // Assert
    assert_eq!(line, "payload {\"a\":1}");
}

#[test]
fn render_args_survives_cycles() {
    // Arrange
    let entries = Rc::new(RefCell::new(indexmap::IndexMap::new()));
    let object = LogValue::Object(entries.clone());
    entries
        .borrow_mut()
        .insert("me".to_string(), object.clone());

    // Act
    let line = render_args(&[object]);

    // Assert
    assert_eq!(line, "{\"me\":\"[Circular ~]\"}");
}
