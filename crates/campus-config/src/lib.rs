//! # Campus Config
//!
//! Configuration management for the campus records API.
//! Supports layered configuration from files and environment variables,
//! validated at load time.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
