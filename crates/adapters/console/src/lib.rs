//! # solid-adapter-console
//!
//! Implementations of the [`Console`] port.
//!
//! | Adapter | Sink |
//! |---------|------|
//! | [`StdoutConsole`] | process standard output, one line per call |
//! | [`MemoryConsole`] | shared in-memory buffer, for tests and assertions |
//!
//! ## Dependency rule
//!
//! Depends on `solid-app` (port traits) only.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use solid_app::ports::Console;

/// Writes lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // A closed pipe must not take the demo down with it.
        if let Err(err) = writeln!(out, "{line}") {
            tracing::warn!(%err, "failed to write console line");
        }
    }
}

/// Records lines in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// another away.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether any recorded line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|line| line.contains(needle))
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
