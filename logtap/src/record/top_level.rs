use crate::value::LogValue;
use std::rc::Rc;

/// Options for `pick_top_level_properties`.
#[derive(Clone)]
pub struct TopLevelPickerOptions {
    /// Marks a property for promotion. Default: names starting with `'@'`.
    pub is_top_level_property: Rc<dyn Fn(&str) -> bool>,

    /// Names never promoted regardless of the predicate (reserved record
    /// fields such as the message property).
    pub ignored_property_names: Vec<String>,
}

impl Default for TopLevelPickerOptions {
    fn default() -> Self {
        Self {
            is_top_level_property: Rc::new(|name| name.starts_with('@')),
            ignored_property_names: Vec::new(),
        }
    }
}

/// Extracts the properties of a record-like value that are promoted to
/// sibling fields of the structured record. Sequences have no named
/// properties and yield nothing.
pub fn pick_top_level_properties(
    value: &LogValue,
    options: &TopLevelPickerOptions,
) -> Vec<(String, LogValue)> {
    let mut result = Vec::new();
    let mut pick = |name: &str, value: &LogValue| {
        if (options.is_top_level_property)(name)
            && !options.ignored_property_names.iter().any(|n| n == name)
        {
            result.push((name.to_string(), value.clone()));
        }
    };
    match value {
        LogValue::Object(entries) => {
            for (name, value) in entries.borrow().iter() {
                pick(name, value);
            }
        }
        LogValue::Error(error) => {
            for (name, value) in &error.properties {
                pick(name, value);
            }
        }
        _ => {}
    }
    result
}
