mod cache;
mod level_filter;
mod message_filter;
mod noop;
mod serialized_message;
mod structured_message;
mod timestamp;

pub use cache::*;
pub use level_filter::*;
pub use message_filter::*;
pub use noop::*;
pub use serialized_message::*;
pub use structured_message::*;
pub use timestamp::*;
