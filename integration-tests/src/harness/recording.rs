use logtap::console::{Console, LogLevel};
use logtap::value::LogValue;
use std::cell::RefCell;
use std::rc::Rc;

/// A console whose original methods record every call instead of printing,
/// so tests can observe exactly what reaches the other side of the pipe
/// chain.
pub struct RecordingConsole {
    console: Rc<Console>,
    calls: Rc<RefCell<Vec<(LogLevel, Vec<LogValue>)>>>,
}

impl Default for RecordingConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingConsole {
    pub fn new() -> Self {
        let console = Rc::new(Console::new());
        let calls: Rc<RefCell<Vec<(LogLevel, Vec<LogValue>)>>> =
            Rc::new(RefCell::new(Vec::new()));
        for level in LogLevel::ALL {
            let calls = calls.clone();
            console.set_method(
                level,
                Rc::new(move |args: &[LogValue]| {
                    calls.borrow_mut().push((level, args.to_vec()));
                }),
            );
        }
        Self { console, calls }
    }

    pub fn console(&self) -> Rc<Console> {
        self.console.clone()
    }

    /// Everything the original console methods received, in order.
    pub fn calls(&self) -> Vec<(LogLevel, Vec<LogValue>)> {
        self.calls.borrow().clone()
    }

    /// The recorded calls as `(level, rendered args)` lines.
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.calls
            .borrow()
            .iter()
            .map(|(level, args)| {
                let text = args
                    .iter()
                    .map(|arg| arg.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                (*level, text)
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}
