//! In-memory console adapter for testing and capture.

use std::sync::{Arc, RwLock};

use patternkit_core::{
    application::{ApplicationError, ports::Console},
    error::PatternResult,
};

/// Records every line instead of printing it.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemoryConsole {
    /// Create a new empty console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// All lines joined with newlines.
    pub fn transcript(&self) -> String {
        self.lines().join("\n")
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.write() {
            lines.clear();
        }
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) -> PatternResult<()> {
        let mut lines = self
            .lines
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        lines.push(line.to_string());
        Ok(())
    }

    fn heading(&self, title: &str) -> PatternResult<()> {
        self.write_line(&format!("== {title} =="))
    }
}
