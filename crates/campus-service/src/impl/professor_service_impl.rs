//! Professor service implementation.

use super::{fetch, fetch_all, fetch_page, find_existing};
use crate::dto::{ProfessorRepresentation, ProfessorRequest, ProfessorSearchResponse};
use crate::mappers::Render;
use crate::professor_service::ProfessorService;
use async_trait::async_trait;
use campus_core::{CampusResult, LinkBase, PageRequest, ProfessorId, SearchParams};
use campus_domain::Professor;
use campus_repository::{Session, Store};
use std::sync::Arc;
use tracing::{debug, info};

/// Professor service over any store.
pub struct ProfessorServiceImpl<S: Store> {
    store: Arc<S>,
    default_page_size: u64,
}

impl<S: Store> ProfessorServiceImpl<S> {
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
impl<S: Store> ProfessorService for ProfessorServiceImpl<S> {
    async fn list_professors(&self, base: &LinkBase) -> CampusResult<Vec<ProfessorRepresentation>> {
        debug!("Listing professors");
        fetch_all::<Professor, _>(self.store.as_ref(), base).await
    }

    async fn get_professor(&self, id: ProfessorId, base: &LinkBase) -> CampusResult<ProfessorRepresentation> {
        debug!("Getting professor: {}", id);
        fetch::<Professor, _>(self.store.as_ref(), id, base).await
    }

    async fn search_professors(
        &self,
        params: SearchParams,
        base: &LinkBase,
    ) -> CampusResult<ProfessorSearchResponse> {
        debug!("Searching professors: {:?}", params);
        let result =
            fetch_page::<Professor, _>(self.store.as_ref(), &params, self.default_page_size, base).await?;
        Ok(ProfessorSearchResponse {
            professors: result.items,
            pagination: result.info,
            links: result.links,
        })
    }

    async fn create_professor(
        &self,
        request: ProfessorRequest,
        base: &LinkBase,
    ) -> CampusResult<ProfessorRepresentation> {
        debug!("Creating professor: {}", request.name);

        let draft = request.into_draft()?;

        let mut session = self.store.begin().await?;
        let professor = session.insert::<Professor>(draft).await?;
        let representation = professor.render(&mut session, base).await?;
        session.commit().await?;

        info!("Professor created: {}", representation.id);
        Ok(representation)
    }

    async fn update_professor(
        &self,
        id: ProfessorId,
        request: ProfessorRequest,
        base: &LinkBase,
    ) -> CampusResult<ProfessorRepresentation> {
        debug!("Updating professor: {}", id);

        let draft = request.into_draft()?;

        let mut session = self.store.begin().await?;
        let mut professor = find_existing::<Professor, _>(&mut session, id).await?;
        professor.apply(draft);
        session.update(&professor).await?;
        let representation = professor.render(&mut session, base).await?;
        session.commit().await?;

        info!("Professor updated: {}", id);
        Ok(representation)
    }

    async fn delete_professor(&self, id: ProfessorId) -> CampusResult<()> {
        debug!("Deleting professor: {}", id);

        let mut session = self.store.begin().await?;
        find_existing::<Professor, _>(&mut session, id).await?;
        session.detach_professor(id).await?;
        session.delete::<Professor>(id).await?;
        session.commit().await?;

        info!("Professor deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course_service::CourseService;
    use crate::dto::{CourseRequest, ProfessorRef, SubjectRequest};
    use crate::subject_service::SubjectService;
    use crate::{CourseServiceImpl, SubjectServiceImpl};
    use campus_repository::InMemoryStore;

    fn base() -> LinkBase {
        LinkBase::parse("http://localhost:8080").unwrap()
    }

    fn rita() -> ProfessorRequest {
        ProfessorRequest {
            name: "Rita".to_string(),
            email: "rita@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_crud_round() {
        let service = ProfessorServiceImpl::new(Arc::new(InMemoryStore::new()));

        let created = service.create_professor(rita(), &base()).await.unwrap();
        assert_eq!(created.links["update"], format!("http://localhost:8080/professores/{}", created.id));

        let updated = service
            .update_professor(
                created.id,
                ProfessorRequest {
                    name: "Rita Lee".to_string(),
                    email: "rita@x.com".to_string(),
                },
                &base(),
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Rita Lee");

        service.delete_professor(created.id).await.unwrap();
        assert!(service.get_professor(created.id, &base()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_detaches_courses_and_subjects() {
        let store = Arc::new(InMemoryStore::new());
        let professors = ProfessorServiceImpl::new(Arc::clone(&store));
        let courses = CourseServiceImpl::new(Arc::clone(&store));
        let subjects = SubjectServiceImpl::new(store);

        let rita = professors.create_professor(rita(), &base()).await.unwrap();
        let reference = Some(ProfessorRef { id: rita.id.into_inner() });

        let calc = courses
            .create_course(
                CourseRequest {
                    name: "Calc".to_string(),
                    description: "Cálculo".to_string(),
                    workload_hours: 3600,
                    professor: reference,
                },
                &base(),
            )
            .await
            .unwrap();
        let algebra = subjects
            .create_subject(
                SubjectRequest {
                    name: "Álgebra".to_string(),
                    description: "Álgebra linear".to_string(),
                    workload_hours: 60,
                    professor: reference,
                },
                &base(),
            )
            .await
            .unwrap();

        professors.delete_professor(rita.id).await.unwrap();

        assert!(courses.get_course(calc.id, &base()).await.unwrap().professor.is_none());
        assert!(subjects.get_subject(algebra.id, &base()).await.unwrap().professor.is_none());
    }

    #[tokio::test]
    async fn test_search_by_email() {
        let service = ProfessorServiceImpl::new(Arc::new(InMemoryStore::new()));
        service.create_professor(rita(), &base()).await.unwrap();
        service
            .create_professor(
                ProfessorRequest {
                    name: "Paulo".to_string(),
                    email: "paulo@uni.br".to_string(),
                },
                &base(),
            )
            .await
            .unwrap();

        let params = SearchParams {
            q: Some("UNI.BR".to_string()),
            ..SearchParams::default()
        };
        let response = service.search_professors(params, &base()).await.unwrap();
        assert_eq!(response.professors.len(), 1);
        assert_eq!(response.professors[0].name, "Paulo");
    }
}
