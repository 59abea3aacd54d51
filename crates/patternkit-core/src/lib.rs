//! patternkit core - design patterns behind ports and adapters.
//!
//! This crate provides the domain and application layers for the patternkit
//! demo collection, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         patternkit-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (DemoService, JournalPersistence)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Console, Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   patternkit-adapters / CLI output      │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  creational, structural, behavioral,    │
//! │  principles, neural                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use patternkit_core::prelude::*;
//!
//! # fn demo(console: Arc<dyn Console>) -> PatternResult<()> {
//! let service = DemoService::new(console);
//! service.run(DemoKind::Observer)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DemoKind, DemoService, DemoSettings, JournalPersistence,
        ports::{Console, Filesystem},
    };
    pub use crate::domain::{
        DrinkKind, principles::single_responsibility::Journal, structural::messaging::Delivery,
    };
    pub use crate::error::{PatternError, PatternResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
