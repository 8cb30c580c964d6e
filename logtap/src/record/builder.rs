use super::{StructuredMessageOptions, TopLevelPickerOptions, pick_top_level_properties};
use crate::console::LogLevel;
use crate::simplify::{Scalar, SimplifierOptions, simplify_deep, simplify_scalar};
use crate::value::LogValue;
use chrono::Utc;
use serde_json::{Map, Value};
use std::rc::Rc;

/// One structured record built from a log call, plus the message id it
/// carries (when ids are enabled).
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredRecord {
    pub fields: Map<String, Value>,
    pub message_id: Option<String>,
}

/// Builds a structured record from a log level and an argument list.
///
/// Primitive arguments are joined into a human-readable message; each
/// object argument is replaced in the message with a token keying into the
/// record, its marked properties promoted to sibling fields. The message
/// field, when present, is always the first key. `next_message_id`
/// overrides the configured id provider for this record only.
pub fn build_record(
    level: LogLevel,
    args: &[LogValue],
    options: &StructuredMessageOptions,
    next_message_id: Option<String>,
) -> StructuredRecord {
    let mut fields = Map::new();
    let mut contributions: Vec<String> = Vec::new();
    let mut object_index = 0usize;

    for (arg_index, raw) in args.iter().enumerate() {
        let scalar = simplify_scalar(
            raw,
            &options.simplifier.function_value,
            &options.simplifier.symbol_value,
        );
        match scalar {
            Scalar::Primitive(None) => {
                let mut token = String::from("undefined");
                if let Some(marker) = &options.undefined_message_value {
                    token.push_str(marker);
                }
                contributions.push(token);
            }
            Scalar::Primitive(Some(value)) => contributions.push(primitive_text(&value)),
            Scalar::Composite(arg) => {
                if options.pick_field_name_as_object_message_token_for_single_field_objects {
                    match single_field_token(&arg, options) {
                        Some(SingleFieldToken::Inline(token)) => {
                            contributions.push(token);
                            continue;
                        }
                        Some(SingleFieldToken::Nested { token, value })
                            if !fields.contains_key(&token)
                                && token != options.message_property_name =>
                        {
                            let nested =
                                simplify_deep(&value, &options.simplifier).unwrap_or(Value::Null);
                            fields.insert(token.clone(), nested);
                            object_index += 1;
                            contributions.push(token);
                            continue;
                        }
                        // Token collision: fall back to the positional scheme.
                        _ => {}
                    }
                }

                let picker = TopLevelPickerOptions {
                    is_top_level_property: options.is_top_level_property.clone(),
                    ignored_property_names: vec![options.message_property_name.clone()],
                };
                let promoted = pick_top_level_properties(&arg, &picker);
                let promote_options = SimplifierOptions {
                    is_ignored_property: Rc::new(|_| false),
                    ..options.simplifier.clone()
                };
                for (name, value) in &promoted {
                    if let Some(simplified) = simplify_deep(value, &promote_options) {
                        fields.insert(name.clone(), simplified);
                    }
                }

                let token = (options.object_message_token)(object_index, &arg, arg_index);
                let promoted_names: Rc<Vec<String>> =
                    Rc::new(promoted.into_iter().map(|(name, _)| name).collect());
                let base_ignored = options.simplifier.is_ignored_property.clone();
                let nested_options = SimplifierOptions {
                    is_ignored_property: Rc::new(move |name: &str| {
                        base_ignored(name) || promoted_names.iter().any(|n| n == name)
                    }),
                    ..options.simplifier.clone()
                };
                let nested = simplify_deep(&arg, &nested_options).unwrap_or(Value::Null);
                fields.insert(token.clone(), nested);
                object_index += 1;
                contributions.push(token);
            }
        }
    }

    let message = contributions.join(" ");
    let mut record = Map::new();
    if !message.is_empty() {
        record.insert(options.message_property_name.clone(), Value::from(message));
    }
    for (name, value) in fields {
        record.insert(name, value);
    }
    if let Some(name) = &options.level_property_name {
        let formatted = (options.level_property_formatter)(level);
        record.insert(name.clone(), Value::from(formatted));
    }
    if let Some(name) = &options.timestamp_property_name {
        let formatted = (options.timestamp_property_formatter)(Utc::now());
        record.insert(name.clone(), Value::from(formatted));
    }
    let mut message_id = None;
    if let Some(name) = &options.message_id_property_name {
        let id = next_message_id.unwrap_or_else(|| (options.message_id_provider)());
        record.insert(name.clone(), Value::from(id.clone()));
        message_id = Some(id);
    }

    StructuredRecord {
        fields: record,
        message_id,
    }
}

enum SingleFieldToken {
    /// The whole argument is inlined into the message text.
    Inline(String),
    /// The field's value is nested under a `$name` token.
    Nested { token: String, value: LogValue },
}

fn single_field_token(
    arg: &LogValue,
    options: &StructuredMessageOptions,
) -> Option<SingleFieldToken> {
    let LogValue::Object(entries) = arg else {
        return None;
    };
    let entries = entries.borrow();
    if entries.len() != 1 {
        return None;
    }
    let (name, value) = entries.get_index(0)?;
    let token = match simplify_scalar(
        value,
        &options.simplifier.function_value,
        &options.simplifier.symbol_value,
    ) {
        Scalar::Primitive(primitive) => {
            let repr = match primitive {
                None => "undefined".to_string(),
                Some(Value::String(text)) => format!("'{text}'"),
                Some(value) => primitive_text(&value),
            };
            SingleFieldToken::Inline(format!("${name}:[{repr}]"))
        }
        Scalar::Composite(inner) => SingleFieldToken::Nested {
            token: format!("${name}"),
            value: inner,
        },
    };
    Some(token)
}

fn primitive_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        Value::String(value) => value.clone(),
        other => other.to_string(),
    }
}
