//! Creational patterns: builders and factories.

pub mod drinks;
pub mod html;
pub mod person;
pub mod point;
