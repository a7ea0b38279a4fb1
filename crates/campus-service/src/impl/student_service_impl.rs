//! Student service implementation.

use super::{fetch, fetch_all, fetch_page, find_existing};
use crate::dto::{StudentRepresentation, StudentRequest, StudentSearchResponse};
use crate::enrollment::{self, Side};
use crate::mappers::Render;
use crate::student_service::StudentService;
use async_trait::async_trait;
use campus_core::{CampusResult, CourseId, LinkBase, PageRequest, SearchParams, StudentId};
use campus_domain::{Enrollment, Student};
use campus_repository::{Session, Store};
use std::sync::Arc;
use tracing::{debug, info};

/// Student service over any store.
pub struct StudentServiceImpl<S: Store> {
    store: Arc<S>,
    default_page_size: u64,
}

impl<S: Store> StudentServiceImpl<S> {
    /// Creates a new student service.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            default_page_size: PageRequest::DEFAULT_SIZE,
        }
    }

    /// Sets the page size used when a search sends none.
    #[must_use]
    pub const fn with_default_page_size(mut self, size: u64) -> Self {
        self.default_page_size = size;
        self
    }
}

#[async_trait]
impl<S: Store> StudentService for StudentServiceImpl<S> {
    async fn list_students(&self, base: &LinkBase) -> CampusResult<Vec<StudentRepresentation>> {
        debug!("Listing students");
        fetch_all::<Student, _>(self.store.as_ref(), base).await
    }

    async fn get_student(&self, id: StudentId, base: &LinkBase) -> CampusResult<StudentRepresentation> {
        debug!("Getting student: {}", id);
        fetch::<Student, _>(self.store.as_ref(), id, base).await
    }

    async fn search_students(&self, params: SearchParams, base: &LinkBase) -> CampusResult<StudentSearchResponse> {
        debug!("Searching students: {:?}", params);
        let result =
            fetch_page::<Student, _>(self.store.as_ref(), &params, self.default_page_size, base).await?;
        Ok(StudentSearchResponse {
            students: result.items,
            pagination: result.info,
            links: result.links,
        })
    }

    async fn create_student(&self, request: StudentRequest, base: &LinkBase) -> CampusResult<StudentRepresentation> {
        debug!("Creating student: {}", request.name);

        let draft = request.into_draft()?;

        let mut session = self.store.begin().await?;
        let student = session.insert::<Student>(draft).await?;
        let representation = student.render(&mut session, base).await?;
        session.commit().await?;

        info!("Student created: {}", representation.id);
        Ok(representation)
    }

    async fn update_student(
        &self,
        id: StudentId,
        request: StudentRequest,
        base: &LinkBase,
    ) -> CampusResult<StudentRepresentation> {
        debug!("Updating student: {}", id);

        let draft = request.into_draft()?;

        let mut session = self.store.begin().await?;
        let mut student = find_existing::<Student, _>(&mut session, id).await?;
        student.apply(draft);
        session.update(&student).await?;
        let representation = student.render(&mut session, base).await?;
        session.commit().await?;

        info!("Student updated: {}", id);
        Ok(representation)
    }

    async fn delete_student(&self, id: StudentId) -> CampusResult<()> {
        debug!("Deleting student: {}", id);

        let mut session = self.store.begin().await?;
        find_existing::<Student, _>(&mut session, id).await?;
        let dropped = session.clear_enrollments_for_student(id).await?;
        session.delete::<Student>(id).await?;
        session.commit().await?;

        info!("Student deleted: {} ({} enrollments removed)", id, dropped);
        Ok(())
    }

    async fn enroll_in_course(
        &self,
        id: StudentId,
        course: CourseId,
        base: &LinkBase,
    ) -> CampusResult<StudentRepresentation> {
        let pair = Enrollment::new(id, course);

        let mut session = self.store.begin().await?;
        let (student, _) = enrollment::enroll(&mut session, pair, Side::Student).await?;
        let representation = student.render(&mut session, base).await?;
        session.commit().await?;

        info!("Enrolled: {}", pair);
        Ok(representation)
    }

    async fn student_courses(&self, id: StudentId, base: &LinkBase) -> CampusResult<StudentRepresentation> {
        debug!("Getting courses of student: {}", id);
        fetch::<Student, _>(self.store.as_ref(), id, base).await
    }

    async fn unenroll_from_course(&self, id: StudentId, course: CourseId) -> CampusResult<()> {
        let pair = Enrollment::new(id, course);

        let mut session = self.store.begin().await?;
        enrollment::unenroll(&mut session, pair, Side::Student).await?;
        session.commit().await?;

        info!("Unenrolled: {}", pair);
        Ok(())
    }
}
