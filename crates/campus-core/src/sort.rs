//! Sort resolution against per-resource whitelists.

use crate::Resource;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The field every resource sorts by when none (or an unknown one) is requested.
pub const DEFAULT_SORT_FIELD: &str = "id";

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Descending only for a case-insensitive `desc`; everything else ascends.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// A resolved sort: a whitelisted field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    field: &'static str,
    direction: SortDirection,
}

impl SortSpec {
    /// Resolves a requested field against `allowed`, falling back to `id`.
    #[must_use]
    pub fn resolve(
        requested: Option<&str>,
        direction: Option<&str>,
        allowed: &'static [&'static str],
    ) -> Self {
        let field = requested
            .and_then(|name| allowed.iter().copied().find(|candidate| *candidate == name))
            .unwrap_or(DEFAULT_SORT_FIELD);

        Self {
            field,
            direction: SortDirection::parse(direction),
        }
    }

    /// Resolves a request for resource `R` using its whitelist.
    #[must_use]
    pub fn for_resource<R: Resource>(requested: Option<&str>, direction: Option<&str>) -> Self {
        Self::resolve(requested, direction, R::SORT_FIELDS)
    }

    /// Ascending by id.
    #[must_use]
    pub const fn by_id() -> Self {
        Self {
            field: DEFAULT_SORT_FIELD,
            direction: SortDirection::Asc,
        }
    }

    /// The resolved field name.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// The resolved direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Sorts resources in place. Ties on the field fall back to ascending id.
    pub fn sort<R: Resource>(&self, items: &mut [R]) {
        items.sort_by(|a, b| {
            self.direction
                .apply(a.compare_by(b, self.field))
                .then_with(|| a.id().cmp(&b.id()))
        });
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::by_id()
    }
}
