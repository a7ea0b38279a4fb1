//! Professor service trait definition.

use crate::dto::{ProfessorRepresentation, ProfessorRequest, ProfessorSearchResponse};
use async_trait::async_trait;
use campus_core::{CampusResult, LinkBase, ProfessorId, SearchParams};

/// Professor service trait.
#[async_trait]
pub trait ProfessorService: Send + Sync {
    async fn list_professors(&self, base: &LinkBase) -> CampusResult<Vec<ProfessorRepresentation>>;

    async fn get_professor(&self, id: ProfessorId, base: &LinkBase) -> CampusResult<ProfessorRepresentation>;

    async fn search_professors(
        &self,
        params: SearchParams,
        base: &LinkBase,
    ) -> CampusResult<ProfessorSearchResponse>;

    async fn create_professor(
        &self,
        request: ProfessorRequest,
        base: &LinkBase,
    ) -> CampusResult<ProfessorRepresentation>;

    async fn update_professor(
        &self,
        id: ProfessorId,
        request: ProfessorRequest,
        base: &LinkBase,
    ) -> CampusResult<ProfessorRepresentation>;

    /// Deletes a professor, clearing it from the courses and subjects that
    /// referenced it.
    async fn delete_professor(&self, id: ProfessorId) -> CampusResult<()>;
}
