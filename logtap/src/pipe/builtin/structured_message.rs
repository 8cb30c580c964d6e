use crate::console::LogLevel;
use crate::pipe::core::{LogPipe, PipeResult};
use crate::record::{StructuredMessageOptions, StructuredRecord, build_record};
use crate::value::LogValue;
use serde_json::Value;
use std::cell::RefCell;

/// Replaces a log call's arguments with one structured record value.
///
/// The record carries the synthesized message, promoted fields, the token
/// entries for object arguments and (when configured) level, timestamp and
/// message-id fields. The level passes through unchanged.
pub struct StructuredMessagePipe {
    options: StructuredMessageOptions,
    last_message_id: RefCell<Option<String>>,
    next_message_id: RefCell<Option<String>>,
}

impl Default for StructuredMessagePipe {
    fn default() -> Self {
        Self::new(StructuredMessageOptions::default())
    }
}

impl StructuredMessagePipe {
    pub fn new(options: StructuredMessageOptions) -> Self {
        Self {
            options,
            last_message_id: RefCell::new(None),
            next_message_id: RefCell::new(None),
        }
    }

    /// Id carried by the most recently built record, if ids are enabled.
    pub fn last_message_id(&self) -> Option<String> {
        self.last_message_id.borrow().clone()
    }

    /// Forces the id of the next record instead of the configured provider.
    pub fn set_next_message_id(&self, id: impl Into<String>) {
        *self.next_message_id.borrow_mut() = Some(id.into());
    }

    pub(crate) fn build(&self, level: LogLevel, args: &[LogValue]) -> StructuredRecord {
        let next_id = self.next_message_id.borrow_mut().take();
        let record = build_record(level, args, &self.options, next_id);
        *self.last_message_id.borrow_mut() = record.message_id.clone();
        record
    }
}

impl LogPipe for StructuredMessagePipe {
    fn transform(&self, level: LogLevel, args: &[LogValue]) -> PipeResult {
        let record = self.build(level, args);
        PipeResult::Rewrite {
            level,
            args: vec![LogValue::from(Value::Object(record.fields))],
        }
    }
}
