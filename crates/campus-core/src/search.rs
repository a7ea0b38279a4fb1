//! Free-text filtering and normalized search parameters.

use crate::{PageRequest, Resource, SortSpec};

/// Case-insensitive substring filter over a resource's two text fields.
///
/// A blank or absent query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    needle: Option<String>,
}

impl TextFilter {
    /// Builds a filter from the raw `q` parameter.
    #[must_use]
    pub fn new(query: Option<&str>) -> Self {
        let needle = query
            .filter(|q| !q.trim().is_empty())
            .map(str::to_lowercase);
        Self { needle }
    }

    /// A filter that matches everything.
    #[must_use]
    pub const fn all() -> Self {
        Self { needle: None }
    }

    /// Returns true when no text filter applies.
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.needle.is_none()
    }

    /// The case-folded query, if any.
    #[must_use]
    pub fn needle(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    /// True when the needle occurs in any of the candidate fields.
    #[must_use]
    pub fn matches(&self, fields: &[&str]) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => fields
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }

    /// True when the resource matches on its designated search fields.
    #[must_use]
    pub fn matches_resource<R: Resource>(&self, resource: &R) -> bool {
        self.matches(&resource.search_text())
    }

    /// `LIKE` pattern for the needle with `%`, `_` and `\` escaped.
    #[must_use]
    pub fn like_pattern(&self) -> Option<String> {
        self.needle.as_ref().map(|needle| {
            let mut pattern = String::with_capacity(needle.len() + 2);
            pattern.push('%');
            for ch in needle.chars() {
                if matches!(ch, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(ch);
            }
            pattern.push('%');
            pattern
        })
    }
}

/// Raw search query parameters as the caller sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Free-text query.
    pub q: Option<String>,
    /// Requested sort field.
    pub sort: Option<String>,
    /// Requested direction.
    pub direction: Option<String>,
    /// Requested page (1-based, may be out of range).
    pub page: Option<i64>,
    /// Requested page size.
    pub size: Option<i64>,
}

impl SearchParams {
    /// The normalized page window, using `default_size` when no size was sent.
    #[must_use]
    pub fn page_request(&self, default_size: u64) -> PageRequest {
        let default_size = i64::try_from(default_size).unwrap_or(i64::MAX);
        PageRequest::new(
            self.page.unwrap_or(1),
            self.size.unwrap_or(default_size),
        )
    }

    /// The text filter for `q`.
    #[must_use]
    pub fn filter(&self) -> TextFilter {
        TextFilter::new(self.q.as_deref())
    }

    /// The sort resolved against the whitelist of `R`.
    #[must_use]
    pub fn sort_for<R: Resource>(&self) -> SortSpec {
        SortSpec::for_resource::<R>(self.sort.as_deref(), self.direction.as_deref())
    }

    /// The direction string to echo back in links (`asc` when absent).
    #[must_use]
    pub fn direction_param(&self) -> &str {
        self.direction.as_deref().unwrap_or("asc")
    }

    /// The query string to echo back in links, if present and not blank.
    #[must_use]
    pub fn query_param(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.trim().is_empty())
    }
}
