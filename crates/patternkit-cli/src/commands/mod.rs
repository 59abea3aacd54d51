//! Command handlers, one module per subcommand.
//!
//! Each handler takes its parsed args plus whatever shared state it needs
//! and returns a [`crate::error::CliResult`].

pub mod completions;
pub mod config;
pub mod drink;
pub mod init;
pub mod journal;
pub mod list;
pub mod run;
pub mod send;

use std::sync::Arc;

use patternkit_core::application::DemoService;

use crate::{config::AppConfig, output::OutputManager};

/// Demo service writing to the terminal with the configured settings.
pub(crate) fn demo_service(config: &AppConfig, output: &OutputManager) -> DemoService {
    DemoService::with_settings(Arc::new(output.clone()), config.demo_settings())
}
