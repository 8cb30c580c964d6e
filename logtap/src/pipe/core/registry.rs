use super::{LogPipe, run_pipes};
use crate::console::{Console, ConsoleMethod, LogLevel};
use crate::value::LogValue;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

/// The pipe registry and console override engine.
///
/// Holds the ordered list of installed pipes (insertion order is call
/// order) and, while at least one pipe is installed, a snapshot of the
/// console's pre-override methods. The console methods are overridden
/// exactly once on the empty-to-active transition and restored exactly
/// once on the active-to-empty transition; the snapshot exists iff the
/// registry is non-empty.
///
/// Dropping the engine uninstalls every pipe and restores the console.
///
/// A pipe must not log through the overridden console from inside its own
/// transform while that dispatch is in progress: doing so re-enters the
/// chain recursively. This is a caller obligation, not enforced here.
pub struct ConsoleOverrides {
    state: Rc<OverridesState>,
}

struct OverridesState {
    console: Rc<Console>,
    pipes: RefCell<Vec<Rc<dyn LogPipe>>>,
    snapshot: RefCell<Option<Vec<ConsoleMethod>>>,
}

/// Construction API
impl ConsoleOverrides {
    pub fn new(console: Rc<Console>) -> Self {
        Self {
            state: Rc::new(OverridesState {
                console,
                pipes: RefCell::new(Vec::new()),
                snapshot: RefCell::new(None),
            }),
        }
    }

    pub fn console(&self) -> Rc<Console> {
        self.state.console.clone()
    }
}

/// Install API
impl ConsoleOverrides {
    pub fn install_pipe(&self, pipe: Rc<dyn LogPipe>) {
        self.install_pipes([pipe]);
    }

    /// Installs pipes in order. The console is overridden before the first
    /// pipe is appended; a pipe reference not yet present anywhere in the
    /// registry gets its `on_install` hook, duplicates are appended
    /// silently.
    pub fn install_pipes<I>(&self, pipes: I)
    where
        I: IntoIterator<Item = Rc<dyn LogPipe>>,
    {
        for pipe in pipes {
            if self.state.snapshot.borrow().is_none() {
                self.override_console();
            }
            let first_install = !self
                .state
                .pipes
                .borrow()
                .iter()
                .any(|installed| Rc::ptr_eq(installed, &pipe));
            if first_install {
                pipe.on_install();
            }
            self.state.pipes.borrow_mut().push(pipe);
        }
    }
}

/// Uninstall API
impl ConsoleOverrides {
    pub fn uninstall_pipe(&self, pipe: &Rc<dyn LogPipe>) {
        self.uninstall_pipes(std::slice::from_ref(pipe));
    }

    /// Removes every occurrence of each given pipe reference. The position
    /// is re-queried after each removal, so duplicate installs and
    /// mutations from hooks are tolerated. `on_uninstall` fires once per
    /// pipe that was actually present; removing an absent pipe is a no-op.
    /// The console is restored once the registry is empty.
    pub fn uninstall_pipes(&self, pipes: &[Rc<dyn LogPipe>]) {
        for pipe in pipes {
            let mut removed_any = false;
            loop {
                let position = self
                    .state
                    .pipes
                    .borrow()
                    .iter()
                    .position(|installed| Rc::ptr_eq(installed, pipe));
                match position {
                    Some(index) => {
                        self.state.pipes.borrow_mut().remove(index);
                        removed_any = true;
                    }
                    None => break,
                }
            }
            if removed_any {
                pipe.on_uninstall();
            }
        }
        if self.state.pipes.borrow().is_empty() {
            self.restore_console();
        }
    }

    pub fn uninstall_all(&self) {
        // Uninstalling mutates the registry; work off a snapshot.
        let pipes = self.installed_pipes();
        self.uninstall_pipes(&pipes);
    }
}

/// Inspection API
impl ConsoleOverrides {
    /// Defensive copy of the registry; mutating it does not affect the
    /// engine.
    pub fn installed_pipes(&self) -> Vec<Rc<dyn LogPipe>> {
        self.state.pipes.borrow().clone()
    }

    /// The console method for `level` as it was before the override: the
    /// snapshot value while pipes are installed, the live method otherwise.
    pub fn original_method(&self, level: LogLevel) -> ConsoleMethod {
        match self.state.snapshot.borrow().as_ref() {
            Some(methods) => methods[level.index()].clone(),
            None => self.state.console.method(level),
        }
    }
}

/// Override lifecycle
impl ConsoleOverrides {
    fn override_console(&self) {
        let console = &self.state.console;
        let mut snapshot = Vec::with_capacity(LogLevel::ALL.len());
        for level in LogLevel::ALL {
            snapshot.push(console.method(level));
        }
        *self.state.snapshot.borrow_mut() = Some(snapshot);
        for level in LogLevel::ALL {
            let state = Rc::downgrade(&self.state);
            console.set_method(
                level,
                Rc::new(move |args: &[LogValue]| {
                    if let Some(state) = state.upgrade() {
                        dispatch(&state, level, args);
                    }
                }),
            );
        }
        debug!("console methods overridden");
    }

    fn restore_console(&self) {
        let Some(snapshot) = self.state.snapshot.borrow_mut().take() else {
            return;
        };
        for (level, method) in LogLevel::ALL.into_iter().zip(snapshot) {
            self.state.console.set_method(level, method);
        }
        debug!("console methods restored");
    }
}

impl Drop for ConsoleOverrides {
    fn drop(&mut self) {
        self.uninstall_all();
    }
}

fn dispatch(state: &OverridesState, level: LogLevel, args: &[LogValue]) {
    // The chain runs against the registry as it was when the call started;
    // a transform may install or uninstall pipes without aliasing the
    // registry cell mid-iteration.
    let pipes = state.pipes.borrow().clone();
    let Some((level, args)) = run_pipes(&pipes, level, args) else {
        return;
    };
    let original = state
        .snapshot
        .borrow()
        .as_ref()
        .map(|methods| methods[level.index()].clone());
    if let Some(method) = original {
        method(&args);
    }
}
