mod convert;
mod error;
mod macros;
#[cfg(test)]
mod tests;

pub use error::*;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A runtime value entering the logging pipeline.
///
/// Console-style logging accepts anything; this closed set of variants is
/// the classification the simplifier and the message builder dispatch on.
/// `Array`, `Object` and `Error` are shared references: cloning a `LogValue`
/// clones the handle, not the container, and the handle's pointer identity
/// is what cycle detection operates on.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    /// An absent value. Distinct from `Null`: object properties holding
    /// `Undefined` are dropped during simplification.
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Arbitrary-precision integer (within i128 range).
    BigInt(i128),
    Str(String),
    /// Opaque identity value carrying only a description.
    Symbol(String),
    /// Callable value carrying only a name.
    Function(String),
    /// Boxed/wrapper form of a scalar; unwraps during simplification.
    Boxed(Box<LogValue>),
    /// Temporal value; renders as ISO-8601.
    Timestamp(DateTime<Utc>),
    /// Set-like collection in insertion order.
    Set(Vec<LogValue>),
    /// Map-like collection in insertion order; keys are stringified during
    /// simplification.
    Map(Vec<(LogValue, LogValue)>),
    Array(Rc<RefCell<Vec<LogValue>>>),
    Object(Rc<RefCell<IndexMap<String, LogValue>>>),
    Error(Rc<ErrorValue>),
}

/// Construction API
impl LogValue {
    pub fn array(items: Vec<LogValue>) -> Self {
        LogValue::Array(Rc::new(RefCell::new(items)))
    }

    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, LogValue)>,
    {
        let map = entries
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect::<IndexMap<_, _>>();
        LogValue::Object(Rc::new(RefCell::new(map)))
    }

    pub fn error(error: ErrorValue) -> Self {
        LogValue::Error(Rc::new(error))
    }
}

/// Identity API
impl LogValue {
    /// Pointer identity of a shared container, used by the simplifier's
    /// visited set. Non-container values have no identity.
    pub(crate) fn identity(&self) -> Option<usize> {
        match self {
            LogValue::Array(items) => Some(Rc::as_ptr(items) as *const () as usize),
            LogValue::Object(entries) => Some(Rc::as_ptr(entries) as *const () as usize),
            LogValue::Error(error) => Some(Rc::as_ptr(error) as *const () as usize),
            _ => None,
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Undefined => f.write_str("undefined"),
            LogValue::Null => f.write_str("null"),
            LogValue::Bool(value) => write!(f, "{value}"),
            LogValue::Int(value) => write!(f, "{value}"),
            LogValue::Float(value) => fmt_float(*value, f),
            LogValue::BigInt(value) => write!(f, "{value}"),
            LogValue::Str(value) => f.write_str(value),
            LogValue::Symbol(description) => write!(f, "Symbol({description})"),
            LogValue::Function(name) => write!(f, "[Function: {name}]"),
            LogValue::Boxed(inner) => inner.fmt(f),
            LogValue::Timestamp(value) => {
                f.write_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            LogValue::Set(_) => f.write_str("[object Set]"),
            LogValue::Map(_) => f.write_str("[object Map]"),
            LogValue::Array(_) => f.write_str("[object Array]"),
            LogValue::Object(_) => f.write_str("[object Object]"),
            LogValue::Error(error) => write!(f, "{}: {}", error.name, error.message),
        }
    }
}

/// Largest integer a double represents exactly; integral floats below it
/// print and serialize as plain integers.
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn fmt_float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{value}")
    }
}
