use super::SimplifierOptions;
use crate::value::{LogValue, MAX_SAFE_INTEGER};
use ahash::AHashSet;
use serde_json::{Map, Value};

/// Outcome of the single-level normalization step.
pub enum Scalar {
    /// A JSON-safe leaf. `None` is the absent value: record parents omit
    /// the property, sequence parents hold `null`.
    Primitive(Option<Value>),
    /// A container the caller must recurse into. Array/Object/Error only;
    /// the handle keeps the source identity.
    Composite(LogValue),
}

/// Single-level, non-recursive normalization applied to every value before
/// any container recursion.
pub fn simplify_scalar(value: &LogValue, function_value: &str, symbol_value: &str) -> Scalar {
    match value {
        LogValue::Undefined => Scalar::Primitive(None),
        LogValue::Null => Scalar::Primitive(Some(Value::Null)),
        LogValue::Bool(value) => Scalar::Primitive(Some(Value::from(*value))),
        LogValue::Int(value) => Scalar::Primitive(Some(Value::from(*value))),
        LogValue::Float(value) => Scalar::Primitive(Some(simplify_float(*value))),
        LogValue::BigInt(value) => Scalar::Primitive(Some(simplify_big_int(*value))),
        LogValue::Str(value) => Scalar::Primitive(Some(Value::from(value.clone()))),
        LogValue::Function(_) => Scalar::Primitive(Some(Value::from(function_value))),
        LogValue::Symbol(_) => Scalar::Primitive(Some(Value::from(symbol_value))),
        LogValue::Boxed(inner) => simplify_scalar(inner, function_value, symbol_value),
        LogValue::Timestamp(value) => Scalar::Primitive(Some(Value::from(
            value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        ))),
        // Set and Map collapse to fresh containers: converted identity is
        // per-visit, matching the reference conversions.
        LogValue::Set(items) => Scalar::Composite(LogValue::array(items.clone())),
        LogValue::Map(entries) => Scalar::Composite(LogValue::object(
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone())),
        )),
        LogValue::Array(_) | LogValue::Object(_) | LogValue::Error(_) => {
            Scalar::Composite(value.clone())
        }
    }
}

fn simplify_float(value: f64) -> Value {
    if value.is_nan() {
        Value::from("NaN")
    } else if value.is_infinite() {
        Value::from(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

fn simplify_big_int(value: i128) -> Value {
    if let Ok(value) = i64::try_from(value) {
        Value::from(value)
    } else if let Ok(value) = u64::try_from(value) {
        Value::from(value)
    } else {
        Value::from(value.to_string())
    }
}

/// Converts a value into a JSON-safe representation, degrading cycles and
/// oversized containers to placeholder strings so that serialization of
/// the result can never fail.
///
/// Returns `None` for the absent value. One visited set is shared across
/// the whole traversal, including sibling branches: a non-cyclic value
/// reachable twice is reported as circular on its second occurrence.
pub fn simplify_deep(value: &LogValue, options: &SimplifierOptions) -> Option<Value> {
    let mut visited = AHashSet::new();
    simplify_deep_at(value, options, 0, &mut visited)
}

pub(crate) fn simplify_deep_at(
    value: &LogValue,
    options: &SimplifierOptions,
    depth: usize,
    visited: &mut AHashSet<usize>,
) -> Option<Value> {
    if depth > options.max_depth {
        return Some(Value::from(options.depth_limit_value.clone()));
    }
    let composite = match simplify_scalar(value, &options.function_value, &options.symbol_value) {
        Scalar::Primitive(primitive) => return primitive,
        Scalar::Composite(composite) => composite,
    };
    let identity = composite
        .identity()
        .expect("composite values always carry an identity");
    if !visited.insert(identity) {
        return Some(Value::from(options.circular_reference_value.clone()));
    }
    match composite {
        LogValue::Array(items) => {
            let items = items.borrow();
            if items.len() > options.max_array_length {
                return Some(Value::from(
                    options
                        .array_length_limit_value
                        .replace("$length", &items.len().to_string()),
                ));
            }
            let mut result = Vec::with_capacity(items.len());
            for item in items.iter() {
                let simplified = simplify_deep_at(item, options, depth + 1, visited);
                result.push(simplified.unwrap_or(Value::Null));
            }
            Some(Value::Array(result))
        }
        LogValue::Object(entries) => {
            let entries = entries.borrow();
            if entries.len() > options.max_object_properties {
                return Some(property_limit(options, entries.len()));
            }
            let mut result = Map::new();
            for (name, value) in entries.iter() {
                if depth == 0 && (options.is_ignored_property)(name) {
                    // The property was promoted to the top level elsewhere.
                    continue;
                }
                if let Some(simplified) = simplify_deep_at(value, options, depth + 1, visited) {
                    result.insert(name.clone(), simplified);
                }
            }
            Some(Value::Object(replace_properties(result, options)))
        }
        LogValue::Error(error) => {
            if error.properties.len() > options.max_object_properties {
                return Some(property_limit(options, error.properties.len()));
            }
            let mut result = Map::new();
            for (name, value) in &error.properties {
                if depth == 0 && (options.is_ignored_property)(name) {
                    continue;
                }
                if let Some(simplified) = simplify_deep_at(value, options, depth + 1, visited) {
                    result.insert(name.clone(), simplified);
                }
            }
            // These fields don't show up through ordinary enumeration.
            let special_fields: [(&str, Option<LogValue>); 4] = [
                ("cause", error.cause.clone()),
                ("message", Some(LogValue::Str(error.message.clone()))),
                ("name", Some(LogValue::Str(error.name.clone()))),
                ("stack", error.stack.clone().map(LogValue::Str)),
            ];
            for (name, value) in special_fields {
                if result.contains_key(name) || (options.is_ignored_property)(name) {
                    continue;
                }
                if let Some(value) = value {
                    if let Some(simplified) = simplify_deep_at(&value, options, depth + 1, visited)
                    {
                        result.insert(name.to_string(), simplified);
                    }
                }
            }
            Some(Value::Object(replace_properties(result, options)))
        }
        _ => unreachable!("simplify_scalar only yields container composites"),
    }
}

fn property_limit(options: &SimplifierOptions, count: usize) -> Value {
    Value::from(
        options
            .object_property_limit_value
            .replace("$count", &count.to_string()),
    )
}

fn replace_properties(result: Map<String, Value>, options: &SimplifierOptions) -> Map<String, Value> {
    match &options.replace_property_value {
        Some(replace) => result
            .into_iter()
            .map(|(name, value)| {
                let replaced = replace(&name, value);
                (name, replaced)
            })
            .collect(),
        None => result,
    }
}
