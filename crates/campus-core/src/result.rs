//! Result type aliases.

use crate::CampusError;

/// A specialized `Result` type for campus operations.
pub type CampusResult<T> = Result<T, CampusError>;
