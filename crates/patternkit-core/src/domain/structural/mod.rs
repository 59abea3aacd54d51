//! Structural patterns: bridge, composite, decorator.

pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod messaging;
