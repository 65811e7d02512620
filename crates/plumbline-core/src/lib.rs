//! Shared data model, configuration and errors for the Plumbline scheduling core.

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
