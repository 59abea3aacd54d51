//! Application layer for patternkit.
//!
//! This layer contains:
//! - **Catalog**: The static registry of runnable demos
//! - **Services**: Use case orchestration (DemoService, JournalPersistence)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! pattern logic itself. All of that lives in `crate::domain`.

pub mod catalog;
pub mod error;
pub mod ports;
pub mod services;

pub use catalog::{DEMO_REGISTRY, DemoDef, DemoFamily, DemoInfo, DemoKind, catalog};

pub use services::{DemoService, DemoSettings, JournalPersistence};

// Re-export port traits (for adapter implementation)
pub use ports::{Console, Filesystem};

pub use error::ApplicationError;
