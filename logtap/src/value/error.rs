use super::LogValue;
use std::rc::Rc;

/// An error-like value.
///
/// `name`, `message`, `stack` and `cause` mirror the fields an error
/// carries outside of its ordinary enumeration; `properties` holds the
/// enumerable fields attached to the error instance itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValue {
    pub name: String,
    pub message: String,
    pub stack: Option<String>,
    pub cause: Option<LogValue>,
    pub properties: Vec<(String, LogValue)>,
}

impl ErrorValue {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
            cause: None,
            properties: Vec::new(),
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn with_cause(mut self, cause: LogValue) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: LogValue) -> Self {
        self.properties.push((name.into(), value));
        self
    }

    /// Maps a std error onto an `ErrorValue`, following the `source()`
    /// chain into `cause`.
    pub fn from_std(error: &dyn std::error::Error) -> Self {
        let mut value = ErrorValue::new("Error", error.to_string());
        if let Some(source) = error.source() {
            value.cause = Some(LogValue::Error(Rc::new(Self::from_std(source))));
        }
        value
    }
}
