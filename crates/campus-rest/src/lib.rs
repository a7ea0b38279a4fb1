//! # Campus REST
//!
//! REST API layer using Axum for the campus records API.
//! Provides HTTP endpoints for students, courses, professors, subjects,
//! enrollment and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
