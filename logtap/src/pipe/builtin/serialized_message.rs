use super::StructuredMessagePipe;
use crate::console::LogLevel;
use crate::pipe::core::{LogPipe, PipeResult};
use crate::record::StructuredMessageOptions;
use crate::value::LogValue;

/// Like `StructuredMessagePipe`, but emits the record as one JSON string
/// argument.
pub struct SerializedMessagePipe {
    inner: StructuredMessagePipe,
}

impl Default for SerializedMessagePipe {
    fn default() -> Self {
        Self::new(StructuredMessageOptions::default())
    }
}

impl SerializedMessagePipe {
    pub fn new(options: StructuredMessageOptions) -> Self {
        Self {
            inner: StructuredMessagePipe::new(options),
        }
    }

    pub fn last_message_id(&self) -> Option<String> {
        self.inner.last_message_id()
    }

    pub fn set_next_message_id(&self, id: impl Into<String>) {
        self.inner.set_next_message_id(id);
    }
}

impl LogPipe for SerializedMessagePipe {
    fn transform(&self, level: LogLevel, args: &[LogValue]) -> PipeResult {
        let record = self.inner.build(level, args);
        // Simplified records hold only JSON-safe values; serialization
        // cannot fail for them.
        let json = serde_json::to_string(&record.fields)
            .expect("simplified records always serialize");
        PipeResult::Rewrite {
            level,
            args: vec![LogValue::Str(json)],
        }
    }
}
