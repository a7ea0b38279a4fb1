//! Custom Axum extractors.

mod base_uri;
mod json;
mod search;

pub use base_uri::*;
pub use json::*;
pub use search::*;

use campus_core::{CampusError, CampusResult};
use std::str::FromStr;

/// Parses a path identifier. A value that is not a number names no
/// resource, so it reports `NotFound` like an unknown id.
pub fn parse_id<I: FromStr>(raw: &str, resource: &'static str) -> CampusResult<I> {
    raw.parse()
        .map_err(|_| CampusError::not_found(resource, raw))
}
