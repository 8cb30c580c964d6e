use crate::record::{TopLevelPickerOptions, pick_top_level_properties};
use crate::value::LogValue;
use pretty_assertions::assert_eq;
use std::rc::Rc;

#[test]
fn picks_marked_properties_with_the_default_picker() {
    // Arrange
    let object = LogValue::object([
        ("a", LogValue::Int(0)),
        ("@a", LogValue::Int(1)),
        ("b", LogValue::Int(2)),
        ("", LogValue::Int(3)),
        ("4", LogValue::Int(4)),
    ]);

    // Act
    let result = pick_top_level_properties(&object, &TopLevelPickerOptions::default());

    // Assert
    assert_eq!(result, vec![("@a".to_string(), LogValue::Int(1))]);
}

#[test]
fn picks_properties_with_a_custom_picker() {
    // Arrange
    let object = LogValue::object([
        ("a", LogValue::Int(0)),
        ("@a", LogValue::Int(1)),
        ("b", LogValue::Int(2)),
        ("", LogValue::Int(3)),
        ("4", LogValue::Int(4)),
        ("22", LogValue::Int(22)),
    ]);
    let options = TopLevelPickerOptions {
        is_top_level_property: Rc::new(|name| name.len() == 1),
        ..Default::default()
    };

    // Act
    let result = pick_top_level_properties(&object, &options);

    // Assert
    assert_eq!(
        result,
        vec![
            ("a".to_string(), LogValue::Int(0)),
            ("b".to_string(), LogValue::Int(2)),
            ("4".to_string(), LogValue::Int(4)),
        ]
    );
}

#[test]
fn never_picks_reserved_names() {
    // Arrange
    let object = LogValue::object([("a", LogValue::Int(1)), ("b", LogValue::Int(2))]);
    let options = TopLevelPickerOptions {
        is_top_level_property: Rc::new(|_| true),
        ignored_property_names: vec!["b".to_string()],
    };

    // Act
    let result = pick_top_level_properties(&object, &options);

    // Assert
    assert_eq!(result, vec![("a".to_string(), LogValue::Int(1))]);
}

#[test]
fn sequences_have_no_top_level_properties() {
    let array = LogValue::array(vec![LogValue::Int(1)]);
    let options = TopLevelPickerOptions {
        is_top_level_property: Rc::new(|_| true),
        ..Default::default()
    };
    assert_eq!(pick_top_level_properties(&array, &options), vec![]);
}
