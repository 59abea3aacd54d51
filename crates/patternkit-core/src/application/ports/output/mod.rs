//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `patternkit-adapters` crate and the CLI provide implementations.

use crate::error::PatternResult;
use std::path::Path;

/// Port for demo output.
///
/// Implemented by:
/// - `patternkit_adapters::console::MemoryConsole` (testing)
/// - `OutputManager` in the CLI (terminal)
pub trait Console: Send + Sync {
    /// Write one line of demo output.
    fn write_line(&self, line: &str) -> PatternResult<()>;

    /// Write a section heading. Defaults to a plain line.
    fn heading(&self, title: &str) -> PatternResult<()> {
        self.write_line(title)
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `patternkit_adapters::filesystem::LocalFilesystem` (production)
/// - `patternkit_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PatternResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> PatternResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
