use super::LogLevel;
use crate::simplify::{SimplifierOptions, simplify_deep};
use crate::value::LogValue;
use std::cell::RefCell;
use std::rc::Rc;

/// One console output function. Held by `Rc` so that the override engine
/// can capture a method, swap in a replacement, and later restore the very
/// same value (`Rc::ptr_eq` is the restore invariant).
pub type ConsoleMethod = Rc<dyn Fn(&[LogValue])>;

/// The set of console entry points the pipeline intercepts.
///
/// A `Console` is the explicit stand-in for the host's global console: six
/// swappable per-level methods. Callers log through the per-level helpers
/// (or `emit`); the override engine rewires the methods underneath.
pub struct Console {
    methods: RefCell<Vec<ConsoleMethod>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction API
impl Console {
    /// A console writing space-joined arguments to stdout, with `error`
    /// and `warn` going to stderr.
    pub fn new() -> Self {
        let methods = LogLevel::ALL.into_iter().map(stdio_method).collect();
        Self {
            methods: RefCell::new(methods),
        }
    }
}

/// Method table API
impl Console {
    pub fn method(&self, level: LogLevel) -> ConsoleMethod {
        self.methods.borrow()[level.index()].clone()
    }

    pub fn set_method(&self, level: LogLevel, method: ConsoleMethod) {
        self.methods.borrow_mut()[level.index()] = method;
    }
}

/// Logging API
impl Console {
    /// Invokes the current method for `level`. The method is cloned out
    /// before the call so it may freely re-enter the console.
    pub fn emit(&self, level: LogLevel, args: &[LogValue]) {
        let method = self.method(level);
        method(args);
    }

    pub fn debug(&self, args: &[LogValue]) {
        self.emit(LogLevel::Debug, args);
    }

    pub fn error(&self, args: &[LogValue]) {
        self.emit(LogLevel::Error, args);
    }

    pub fn info(&self, args: &[LogValue]) {
        self.emit(LogLevel::Info, args);
    }

    pub fn log(&self, args: &[LogValue]) {
        self.emit(LogLevel::Log, args);
    }

    pub fn trace(&self, args: &[LogValue]) {
        self.emit(LogLevel::Trace, args);
    }

    pub fn warn(&self, args: &[LogValue]) {
        self.emit(LogLevel::Warn, args);
    }
}

fn stdio_method(level: LogLevel) -> ConsoleMethod {
    Rc::new(move |args: &[LogValue]| {
        let line = render_args(args);
        match level {
            LogLevel::Error | LogLevel::Warn => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    })
}

/// Space-joined display form of a console argument list. Containers go
/// through the simplifier so that cyclic values stay printable.
pub fn render_args(args: &[LogValue]) -> String {
    let options = SimplifierOptions::default();
    let mut parts = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            LogValue::Set(_)
            | LogValue::Map(_)
            | LogValue::Array(_)
            | LogValue::Object(_)
            | LogValue::Error(_) => {
                let simplified =
                    simplify_deep(arg, &options).unwrap_or(serde_json::Value::Null);
                parts.push(simplified.to_string());
            }
            other => parts.push(other.to_string()),
        }
    }
    parts.join(" ")
}
