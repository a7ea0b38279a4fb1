//! # Campus Server Library
//!
//! Storage backend selection, logging setup and server startup for the
//! campus records API.

pub mod app;
pub mod logging;
pub mod startup;
