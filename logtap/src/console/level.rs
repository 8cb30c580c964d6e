use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which console entry point a log call was made against.
///
/// The set is closed and matches the console surface: one variant per
/// overridable method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Error,
    Info,
    Log,
    Trace,
    Warn,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Error,
        LogLevel::Info,
        LogLevel::Log,
        LogLevel::Trace,
        LogLevel::Warn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Log => "log",
            LogLevel::Trace => "trace",
            LogLevel::Warn => "warn",
        }
    }

    /// Position in `ALL`, used to index per-level method tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown log level '{0}'")]
pub struct ParseLogLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(LogLevel::Debug),
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "log" => Ok(LogLevel::Log),
            "trace" => Ok(LogLevel::Trace),
            "warn" => Ok(LogLevel::Warn),
            other => Err(ParseLogLevelError(other.to_string())),
        }
    }
}
