use super::{LogPipe, PipeResult};
use crate::console::LogLevel;
use crate::value::LogValue;
use std::rc::Rc;

/// Runs one log call through a pipe chain in order.
///
/// Each pipe sees the previous pipe's output. Returns the final level and
/// argument list, or `None` when a pipe suppressed the call.
pub fn run_pipes(
    pipes: &[Rc<dyn LogPipe>],
    level: LogLevel,
    args: &[LogValue],
) -> Option<(LogLevel, Vec<LogValue>)> {
    let mut level = level;
    let mut current = args.to_vec();
    for pipe in pipes {
        match pipe.transform(level, &current) {
            PipeResult::Suppress => return None,
            PipeResult::Forward(args) => {
                if args.is_empty() {
                    return None;
                }
                current = args;
            }
            PipeResult::Rewrite {
                level: new_level,
                args,
            } => {
                if args.is_empty() {
                    return None;
                }
                level = new_level;
                current = args;
            }
        }
    }
    Some((level, current))
}
