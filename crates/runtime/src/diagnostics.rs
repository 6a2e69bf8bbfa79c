use std::cell::RefCell;

use log::Level;

use crate::config::PROBE_LOG_TARGET;

/// Sink for diagnostic messages emitted by library code.
///
/// Components receive a sink at construction instead of logging through
/// process-wide state, so callers decide where messages go.
pub trait Diagnostics {
    fn emit(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }
}

impl<T: Diagnostics + ?Sized> Diagnostics for &T {
    fn emit(&self, level: Level, message: &str) {
        (**self).emit(level, message);
    }
}

/// Forwards to the `log` facade.
#[derive(Debug, Clone)]
pub struct LogDiagnostics {
    target: &'static str,
}

impl LogDiagnostics {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }
}

impl Default for LogDiagnostics {
    fn default() -> Self {
        Self::new(PROBE_LOG_TARGET)
    }
}

impl Diagnostics for LogDiagnostics {
    fn emit(&self, level: Level, message: &str) {
        log::log!(target: self.target, level, "{message}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn emit(&self, _level: Level, _message: &str) {}
}

/// Buffering sink for testing.
#[derive(Debug, Default)]
pub struct BufferedDiagnostics {
    buf: RefCell<Vec<(Level, String)>>,
}

impl BufferedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.buf.borrow().clone()
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.buf
            .borrow()
            .iter()
            .filter(|(lvl, _)| *lvl == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.borrow().is_empty()
    }
}

impl Diagnostics for BufferedDiagnostics {
    fn emit(&self, level: Level, message: &str) {
        self.buf.borrow_mut().push((level, message.to_owned()));
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
