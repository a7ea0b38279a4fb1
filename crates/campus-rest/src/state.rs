//! Application state for Axum handlers.

use campus_config::ApiConfig;
use campus_core::{CampusResult, HealthCheck, LinkBase};
use campus_repository::Store;
use campus_service::{
    CourseService, CourseServiceImpl, ProfessorService, ProfessorServiceImpl, StudentService,
    StudentServiceImpl, SubjectService, SubjectServiceImpl,
};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<dyn StudentService>,
    pub course_service: Arc<dyn CourseService>,
    pub professor_service: Arc<dyn ProfessorService>,
    pub subject_service: Arc<dyn SubjectService>,
    /// Storage health, reported by `/ready`.
    pub health: Arc<dyn HealthCheck>,
    /// Fixed link base; when `None` links follow the request's `Host`.
    pub public_base: Option<LinkBase>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        student_service: Arc<dyn StudentService>,
        course_service: Arc<dyn CourseService>,
        professor_service: Arc<dyn ProfessorService>,
        subject_service: Arc<dyn SubjectService>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            student_service,
            course_service,
            professor_service,
            subject_service,
            health,
            public_base: None,
        }
    }

    /// Wires all four services over one store.
    pub fn from_store<S: Store>(store: Arc<S>, api: &ApiConfig) -> CampusResult<Self> {
        let size = api.default_page_size;

        let state = Self::new(
            Arc::new(StudentServiceImpl::new(Arc::clone(&store)).with_default_page_size(size)),
            Arc::new(CourseServiceImpl::new(Arc::clone(&store)).with_default_page_size(size)),
            Arc::new(ProfessorServiceImpl::new(Arc::clone(&store)).with_default_page_size(size)),
            Arc::new(SubjectServiceImpl::new(Arc::clone(&store)).with_default_page_size(size)),
            store,
        );

        let public_base = api
            .public_base_url
            .as_deref()
            .map(LinkBase::parse)
            .transpose()?;

        Ok(state.with_public_base(public_base))
    }

    /// Pins the base URI used for links.
    #[must_use]
    pub fn with_public_base(mut self, base: Option<LinkBase>) -> Self {
        self.public_base = base;
        self
    }
}
