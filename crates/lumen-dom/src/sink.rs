//! Log sinks.
//!
//! The utilities in this crate report what they observe through a write-only
//! sink that accepts one string per emission. Production code routes
//! emissions through `tracing`; tests capture them with [`MemorySink`].

use parking_lot::Mutex;

/// A write-only log sink.
///
/// Sinks are `Send + Sync` so a page can be handed across threads; emission
/// itself carries no result — a sink cannot fail observably.
pub trait LogSink: Send + Sync {
    /// Emits one message.
    fn emit(&self, message: &str);
}

/// A sink that routes emissions through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn emit(&self, message: &str) {
        tracing::info!(target: "lumen_dom", "{message}");
    }
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    #[inline]
    fn emit(&self, _message: &str) {}
}

/// A sink that records emissions in order, for tests to assert against.
///
/// # Example
///
/// ```
/// use lumen_dom::sink::{LogSink, MemorySink};
///
/// let sink = MemorySink::new();
/// sink.emit("first");
/// sink.emit("second");
/// assert_eq!(sink.messages(), ["first", "second"]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything emitted so far, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Returns the number of emissions so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// Returns true if nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Clears the recorded emissions.
    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
