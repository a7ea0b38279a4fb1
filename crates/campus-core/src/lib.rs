//! # Campus Core
//!
//! Core types, traits, and error definitions for the campus records API.
//! Holds the resource-agnostic pieces of the search pipeline: pagination
//! math, sort whitelisting, free-text filtering and hypermedia links.

pub mod error;
pub mod id;
pub mod links;
pub mod pagination;
pub mod result;
pub mod search;
pub mod sort;
pub mod traits;
pub mod validation;

pub use error::*;
pub use id::*;
pub use links::*;
pub use pagination::*;
pub use result::*;
pub use search::*;
pub use sort::*;
pub use traits::*;
pub use validation::*;
