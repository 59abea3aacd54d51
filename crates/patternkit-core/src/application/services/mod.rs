//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "run a demo" or "save a journal".

pub mod demo_service;
pub mod journal_service;

pub use demo_service::{DemoService, DemoSettings};
pub use journal_service::JournalPersistence;
