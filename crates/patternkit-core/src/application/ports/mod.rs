//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `patternkit-adapters` and the CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Console`: Demo output lines
//!   - `Filesystem`: File operations for journal saves

pub mod output;

pub use output::{Console, Filesystem};
