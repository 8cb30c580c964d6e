use crate::console::LogLevel;
use crate::pipe::core::{LogPipe, PipeResult};
use crate::record::TimestampFormatter;
use crate::value::LogValue;
use chrono::{SecondsFormat, Utc};
use std::rc::Rc;

#[derive(Clone)]
pub struct TimestampPrefixPipeOptions {
    /// Renders the prepended timestamp. Default: ISO-8601 with
    /// millisecond precision.
    pub formatter: TimestampFormatter,
}

impl Default for TimestampPrefixPipeOptions {
    fn default() -> Self {
        Self {
            formatter: Rc::new(|timestamp| {
                timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
            }),
        }
    }
}

/// Prepends the current time as the first argument of every log call.
pub struct TimestampPrefixPipe {
    options: TimestampPrefixPipeOptions,
}

impl Default for TimestampPrefixPipe {
    fn default() -> Self {
        Self::new(TimestampPrefixPipeOptions::default())
    }
}

impl TimestampPrefixPipe {
    pub fn new(options: TimestampPrefixPipeOptions) -> Self {
        Self { options }
    }
}

impl LogPipe for TimestampPrefixPipe {
    fn transform(&self, _level: LogLevel, args: &[LogValue]) -> PipeResult {
        let mut result = Vec::with_capacity(args.len() + 1);
        result.push(LogValue::Str((self.options.formatter)(Utc::now())));
        result.extend(args.iter().cloned());
        PipeResult::Forward(result)
    }
}
