use super::LogValue;
use chrono::{DateTime, Utc};
use serde_json::Value;

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Bool(value)
    }
}

impl From<i32> for LogValue {
    fn from(value: i32) -> Self {
        LogValue::Int(value.into())
    }
}

impl From<i64> for LogValue {
    fn from(value: i64) -> Self {
        LogValue::Int(value)
    }
}

impl From<u64> for LogValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => LogValue::Int(value),
            Err(_) => LogValue::BigInt(value.into()),
        }
    }
}

impl From<i128> for LogValue {
    fn from(value: i128) -> Self {
        LogValue::BigInt(value)
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        LogValue::Float(value)
    }
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::Str(value.to_string())
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        LogValue::Str(value)
    }
}

impl From<DateTime<Utc>> for LogValue {
    fn from(value: DateTime<Utc>) -> Self {
        LogValue::Timestamp(value)
    }
}

impl From<Vec<LogValue>> for LogValue {
    fn from(items: Vec<LogValue>) -> Self {
        LogValue::array(items)
    }
}

impl From<Value> for LogValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => LogValue::Null,
            Value::Bool(value) => LogValue::Bool(value),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    LogValue::Int(value)
                } else if let Some(value) = number.as_u64() {
                    LogValue::BigInt(value.into())
                } else {
                    LogValue::Float(number.as_f64().unwrap_or_default())
                }
            }
            Value::String(value) => LogValue::Str(value),
            Value::Array(items) => {
                LogValue::array(items.into_iter().map(LogValue::from).collect())
            }
            Value::Object(entries) => LogValue::object(
                entries
                    .into_iter()
                    .map(|(name, value)| (name, LogValue::from(value))),
            ),
        }
    }
}
