//! Infrastructure adapters for patternkit.
//!
//! This crate implements the ports defined in `patternkit-core::application::ports`.
//! It contains the I/O side of the demos: where lines go and where journals land.

pub mod console;
pub mod filesystem;

// Re-export commonly used adapters
pub use console::MemoryConsole;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
