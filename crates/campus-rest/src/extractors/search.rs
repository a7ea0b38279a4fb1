//! Search query extractor.

use campus_core::SearchParams;
use serde::Deserialize;
use utoipa::IntoParams;

/// Query string of `/{plural}/search`.
///
/// Every parameter is read as text and normalized afterwards, so no
/// combination of values is ever rejected.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Free-text query over the resource's two text fields.
    #[serde(default)]
    pub q: Option<String>,
    /// Sort field; unknown fields fall back to `id`.
    #[serde(default)]
    pub sort: Option<String>,
    /// `asc` or `desc` (case-insensitive); anything else is ascending.
    #[serde(default)]
    pub direction: Option<String>,
    /// 1-based page; values below 1 mean page 1.
    #[serde(default)]
    pub page: Option<String>,
    /// Page size, clamped to 1..=100.
    #[serde(default)]
    pub size: Option<String>,
}

fn lenient(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

impl From<SearchQuery> for SearchParams {
    fn from(query: SearchQuery) -> Self {
        Self {
            page: lenient(query.page.as_deref()),
            size: lenient(query.size.as_deref()),
            q: query.q,
            sort: query.sort,
            direction: query.direction,
        }
    }
}
