//! Subject service trait definition.

use crate::dto::{SubjectRepresentation, SubjectRequest, SubjectSearchResponse};
use async_trait::async_trait;
use campus_core::{CampusResult, LinkBase, SearchParams, SubjectId};

/// Subject service trait.
#[async_trait]
pub trait SubjectService: Send + Sync {
    async fn list_subjects(&self, base: &LinkBase) -> CampusResult<Vec<SubjectRepresentation>>;

    async fn get_subject(&self, id: SubjectId, base: &LinkBase) -> CampusResult<SubjectRepresentation>;

    async fn search_subjects(&self, params: SearchParams, base: &LinkBase) -> CampusResult<SubjectSearchResponse>;

    /// Creates a subject; a referenced professor must exist.
    async fn create_subject(&self, request: SubjectRequest, base: &LinkBase) -> CampusResult<SubjectRepresentation>;

    async fn update_subject(
        &self,
        id: SubjectId,
        request: SubjectRequest,
        base: &LinkBase,
    ) -> CampusResult<SubjectRepresentation>;

    async fn delete_subject(&self, id: SubjectId) -> CampusResult<()>;
}
