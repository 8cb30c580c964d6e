use crate::console::LogLevel;
use crate::pipe::core::{LogPipe, PipeResult};
use crate::value::LogValue;
use std::rc::Rc;

/// Which levels a `LevelFilterPipe` suppresses.
#[derive(Clone)]
pub enum LevelSelector {
    /// A fixed list of excluded levels.
    Levels(Vec<LogLevel>),
    /// A predicate deciding per call.
    Predicate(Rc<dyn Fn(LogLevel) -> bool>),
}

impl Default for LevelSelector {
    fn default() -> Self {
        LevelSelector::Levels(Vec::new())
    }
}

impl LevelSelector {
    fn excludes(&self, level: LogLevel) -> bool {
        match self {
            LevelSelector::Levels(levels) => levels.contains(&level),
            LevelSelector::Predicate(predicate) => predicate(level),
        }
    }
}

#[derive(Clone, Default)]
pub struct LevelFilterPipeOptions {
    /// Calls made at an excluded level never reach the original console
    /// method. Default: nothing is excluded.
    pub excluded_levels: LevelSelector,
}

/// Suppresses log calls made at excluded levels; everything else passes
/// through untouched.
pub struct LevelFilterPipe {
    options: LevelFilterPipeOptions,
}

impl Default for LevelFilterPipe {
    fn default() -> Self {
        Self::new(LevelFilterPipeOptions::default())
    }
}

impl LevelFilterPipe {
    pub fn new(options: LevelFilterPipeOptions) -> Self {
        Self { options }
    }

    pub fn excluding(levels: Vec<LogLevel>) -> Self {
        Self::new(LevelFilterPipeOptions {
            excluded_levels: LevelSelector::Levels(levels),
        })
    }
}

impl LogPipe for LevelFilterPipe {
    fn transform(&self, level: LogLevel, args: &[LogValue]) -> PipeResult {
        if self.options.excluded_levels.excludes(level) {
            PipeResult::Suppress
        } else {
            PipeResult::Forward(args.to_vec())
        }
    }
}
