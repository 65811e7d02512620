//! HTTP surface of the Plumbline scheduling core.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
