//! Subject service implementation.

use super::{fetch, fetch_all, fetch_page, find_existing, require_professor};
use crate::dto::{SubjectRepresentation, SubjectRequest, SubjectSearchResponse};
use crate::mappers::Render;
use crate::subject_service::SubjectService;
use async_trait::async_trait;
use campus_core::{CampusResult, LinkBase, PageRequest, SearchParams, SubjectId};
use campus_domain::Subject;
use campus_repository::{Session, Store};
use std::sync::Arc;
use tracing::{debug, info};

/// Subject service over any store.
pub struct SubjectServiceImpl<S: Store> {
    store: Arc<S>,
    default_page_size: u64,
}

impl<S: Store> SubjectServiceImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            default_page_size: PageRequest::DEFAULT_SIZE,
        }
    }

    #[must_use]
    pub const fn with_default_page_size(mut self, size: u64) -> Self {
        self.default_page_size = size;
        self
    }
}

#[async_trait]
impl<S: Store> SubjectService for SubjectServiceImpl<S> {
    async fn list_subjects(&self, base: &LinkBase) -> CampusResult<Vec<SubjectRepresentation>> {
        debug!("Listing subjects");
        fetch_all::<Subject, _>(self.store.as_ref(), base).await
    }

    async fn get_subject(&self, id: SubjectId, base: &LinkBase) -> CampusResult<SubjectRepresentation> {
        debug!("Getting subject: {}", id);
        fetch::<Subject, _>(self.store.as_ref(), id, base).await
    }

    async fn search_subjects(&self, params: SearchParams, base: &LinkBase) -> CampusResult<SubjectSearchResponse> {
        debug!("Searching subjects: {:?}", params);
        let result =
            fetch_page::<Subject, _>(self.store.as_ref(), &params, self.default_page_size, base).await?;
        Ok(SubjectSearchResponse {
            subjects: result.items,
            pagination: result.info,
            links: result.links,
        })
    }

    async fn create_subject(&self, request: SubjectRequest, base: &LinkBase) -> CampusResult<SubjectRepresentation> {
        debug!("Creating subject: {}", request.name);

        let draft = request.into_draft()?;

        let mut session = self.store.begin().await?;
        require_professor(&mut session, draft.professor).await?;
        let subject = session.insert::<Subject>(draft).await?;
        let representation = subject.render(&mut session, base).await?;
        session.commit().await?;

        info!("Subject created: {}", representation.id);
        Ok(representation)
    }

    async fn update_subject(
        &self,
        id: SubjectId,
        request: SubjectRequest,
        base: &LinkBase,
    ) -> CampusResult<SubjectRepresentation> {
        debug!("Updating subject: {}", id);

        let draft = request.into_draft()?;

        let mut session = self.store.begin().await?;
        let mut subject = find_existing::<Subject, _>(&mut session, id).await?;
        require_professor(&mut session, draft.professor).await?;
        subject.apply(draft);
        session.update(&subject).await?;
        let representation = subject.render(&mut session, base).await?;
        session.commit().await?;

        info!("Subject updated: {}", id);
        Ok(representation)
    }

    async fn delete_subject(&self, id: SubjectId) -> CampusResult<()> {
        debug!("Deleting subject: {}", id);

        let mut session = self.store.begin().await?;
        find_existing::<Subject, _>(&mut session, id).await?;
        session.delete::<Subject>(id).await?;
        session.commit().await?;

        info!("Subject deleted: {}", id);
        Ok(())
    }
}
