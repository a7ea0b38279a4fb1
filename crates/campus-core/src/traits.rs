//! Core traits shared across layers.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Metadata and behavior every searchable resource exposes.
///
/// One generic search, sort and link pipeline runs over all four
/// resource types; this trait is the only thing it knows about them.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// Typed identifier.
    type Id: Copy + Eq + Ord + Hash + Debug + Display + From<i64> + Into<i64> + Send + Sync + 'static;

    /// Field values needed to create a new instance (everything but the id).
    type Draft: Debug + Send + Sync + 'static;

    /// Human-readable resource name used in error messages.
    const NAME: &'static str;

    /// Plural path segment (`alunos`, `cursos`, ...).
    const PATH: &'static str;

    /// Wire names of the fields this resource may be sorted by.
    const SORT_FIELDS: &'static [&'static str];

    /// Returns the identifier.
    fn id(&self) -> Self::Id;

    /// Builds the stored instance once an identifier has been assigned.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// The two text fields free-text search looks at.
    fn search_text(&self) -> [&str; 2];

    /// Compares two instances on a whitelisted sort field.
    fn compare_by(&self, other: &Self, field: &str) -> Ordering;
}

/// Trait for health checks.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}
