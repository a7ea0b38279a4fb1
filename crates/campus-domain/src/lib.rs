//! # Campus Domain
//!
//! Entities (students, courses, professors, subjects), value objects and
//! the enrollment relation. Entities implement [`campus_core::Resource`]
//! so the generic search pipeline can sort, filter and link them.

pub mod enrollment;
pub mod entities;
pub mod value_objects;

pub use enrollment::*;
pub use entities::*;
pub use value_objects::*;

use std::cmp::Ordering;

/// Case-insensitive ordering for text sort fields.
pub(crate) fn folded_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
