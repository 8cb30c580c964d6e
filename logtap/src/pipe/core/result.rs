use crate::console::LogLevel;
use crate::value::LogValue;

/// Outcome of one pipe's transform.
#[derive(Debug, Clone, PartialEq)]
pub enum PipeResult {
    /// Replacement arguments for the next stage; the level is unchanged.
    /// An empty list suppresses the call.
    Forward(Vec<LogValue>),

    /// Replacement arguments plus a rewritten level: the call will reach
    /// the original method of `level`, not the one it started at.
    /// An empty list suppresses the call.
    Rewrite {
        level: LogLevel,
        args: Vec<LogValue>,
    },

    /// Stop the chain; the original console method is never invoked.
    Suppress,
}
