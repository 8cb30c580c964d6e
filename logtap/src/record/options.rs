use crate::console::LogLevel;
use crate::simplify::SimplifierOptions;
use crate::value::LogValue;
use chrono::{DateTime, SecondsFormat, Utc};
use std::rc::Rc;
use uuid::Uuid;

pub type LevelFormatter = Rc<dyn Fn(LogLevel) -> String>;
pub type TimestampFormatter = Rc<dyn Fn(DateTime<Utc>) -> String>;
pub type MessageIdProvider = Rc<dyn Fn() -> String>;

/// Builds the message token standing in for an object argument.
/// Receives the zero-based index among object arguments, the argument
/// itself, and its position in the original argument list.
pub type ObjectMessageToken = Rc<dyn Fn(usize, &LogValue, usize) -> String>;

/// Options for `build_record` and the structured/serialized message pipes.
///
/// Every field has a default; callers override selectively through struct
/// update syntax.
#[derive(Clone)]
pub struct StructuredMessageOptions {
    /// Name of the field holding the synthesized human-readable message.
    /// Default: `"message"`.
    pub message_property_name: String,

    /// Name of the log level field. `None` omits the level entirely.
    /// Default: `Some("level")`.
    pub level_property_name: Option<String>,

    /// Renders the level field value. Default: the lowercase level name.
    pub level_property_formatter: LevelFormatter,

    /// Name of the timestamp field. `None` omits the timestamp.
    /// Default: `Some("@timestamp")`.
    pub timestamp_property_name: Option<String>,

    /// Renders the timestamp field value. Default: ISO-8601 with
    /// millisecond precision.
    pub timestamp_property_formatter: TimestampFormatter,

    /// Name of the message id field. `None` omits the id.
    /// Default: `Some("messageId")`.
    pub message_id_property_name: Option<String>,

    /// Produces a fresh message id. Default: a random UUID v4.
    pub message_id_provider: MessageIdProvider,

    /// Marks a property of an object argument for promotion to a sibling
    /// field of the record. Default: names starting with `'@'`.
    pub is_top_level_property: Rc<dyn Fn(&str) -> bool>,

    /// Builds message tokens for object arguments.
    /// Default: `"$" + (object index + 1)`.
    pub object_message_token: ObjectMessageToken,

    /// Marker appended to the literal word `undefined` when an absent
    /// argument contributes to the message. Default: no marker.
    pub undefined_message_value: Option<String>,

    /// When set, an object argument with exactly one field uses that
    /// field's name as its message token instead of a positional index.
    /// Default: off.
    pub pick_field_name_as_object_message_token_for_single_field_objects: bool,

    /// Limits and placeholders applied when nesting object arguments.
    pub simplifier: SimplifierOptions,
}

impl Default for StructuredMessageOptions {
    fn default() -> Self {
        Self {
            message_property_name: "message".to_string(),
            level_property_name: Some("level".to_string()),
            level_property_formatter: Rc::new(|level| level.to_string()),
            timestamp_property_name: Some("@timestamp".to_string()),
            timestamp_property_formatter: Rc::new(|timestamp| {
                timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
            }),
            message_id_property_name: Some("messageId".to_string()),
            message_id_provider: Rc::new(|| Uuid::new_v4().to_string()),
            is_top_level_property: Rc::new(|name| name.starts_with('@')),
            object_message_token: Rc::new(|object_index, _, _| format!("${}", object_index + 1)),
            undefined_message_value: None,
            pick_field_name_as_object_message_token_for_single_field_objects: false,
            simplifier: SimplifierOptions::default(),
        }
    }
}
