//! Student sex.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for an unrecognized stored sex value.
#[derive(Debug, Error)]
#[error("Unknown sex value: {0}")]
pub struct SexParseError(String);

/// Sex of a student, serialized as `MASCULINO` / `FEMININO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Sex {
    #[serde(rename = "MASCULINO")]
    Male,
    #[serde(rename = "FEMININO")]
    Female,
}

impl Sex {
    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MASCULINO",
            Self::Female => "FEMININO",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = SexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MASCULINO" => Ok(Self::Male),
            "FEMININO" => Ok(Self::Female),
            other => Err(SexParseError(other.to_string())),
        }
    }
}
