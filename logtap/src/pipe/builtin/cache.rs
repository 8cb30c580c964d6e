use crate::console::LogLevel;
use crate::pipe::core::{LogPipe, PipeResult};
use crate::value::LogValue;
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// One cached log call.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMessage {
    pub level: LogLevel,
    /// Time the message was cached.
    pub timestamp: DateTime<Utc>,
    pub args: Vec<LogValue>,
}

pub type OverflowCallback = Rc<dyn Fn(&BoundedCachePipe)>;

#[derive(Clone)]
pub struct BoundedCachePipeOptions {
    /// How many messages to keep. Once the cache is full, each new message
    /// evicts the oldest one. Zero disables caching entirely.
    /// Default: 1000.
    pub cache_size: usize,

    /// Called every time the cache is full, before the eviction making
    /// room for the new message; the callback observes the full cache and
    /// may read or clear it. Messages logged from inside the callback are
    /// dropped, not queued. Default: no callback.
    pub on_cache_size_reached: Option<OverflowCallback>,
}

impl Default for BoundedCachePipeOptions {
    fn default() -> Self {
        Self {
            cache_size: 1000,
            on_cache_size_reached: None,
        }
    }
}

/// Caches the last `cache_size` log calls while forwarding them untouched.
/// Installing the pipe clears any previously cached messages.
pub struct BoundedCachePipe {
    options: BoundedCachePipeOptions,
    cache: RefCell<VecDeque<CachedMessage>>,
    inside_overflow_callback: Cell<bool>,
}

impl Default for BoundedCachePipe {
    fn default() -> Self {
        Self::new(BoundedCachePipeOptions::default())
    }
}

impl BoundedCachePipe {
    pub fn new(options: BoundedCachePipeOptions) -> Self {
        Self {
            options,
            cache: RefCell::new(VecDeque::new()),
            inside_overflow_callback: Cell::new(false),
        }
    }

    /// All cached messages in arrival order.
    pub fn messages(&self) -> Vec<CachedMessage> {
        self.cache.borrow().iter().cloned().collect()
    }

    pub fn clear_messages(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl LogPipe for BoundedCachePipe {
    fn transform(&self, level: LogLevel, args: &[LogValue]) -> PipeResult {
        if self.options.cache_size == 0 || self.inside_overflow_callback.get() {
            return PipeResult::Forward(args.to_vec());
        }
        if self.cache.borrow().len() == self.options.cache_size {
            if let Some(callback) = &self.options.on_cache_size_reached {
                let _guard = ReentryGuard::acquire(&self.inside_overflow_callback);
                callback(self);
            }
            let mut cache = self.cache.borrow_mut();
            // The callback may have cleared the cache already.
            if !cache.is_empty() {
                cache.pop_front();
            }
        }
        self.cache.borrow_mut().push_back(CachedMessage {
            level,
            timestamp: Utc::now(),
            args: args.to_vec(),
        });
        PipeResult::Forward(args.to_vec())
    }

    fn on_install(&self) {
        self.clear_messages();
    }
}

/// Clears the reentrancy flag even when the overflow callback panics.
struct ReentryGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> ReentryGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for ReentryGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
