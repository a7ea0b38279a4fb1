//! Course service implementation.

use super::{fetch, fetch_all, fetch_page, find_existing, require_professor};
use crate::course_service::CourseService;
use crate::dto::{CourseRepresentation, CourseRequest, CourseSearchResponse};
use crate::enrollment::{self, Side};
use crate::mappers::Render;
use async_trait::async_trait;
use campus_core::{
    CampusError, CampusResult, CourseId, LinkBase, PageRequest, ProfessorId, SearchParams, StudentId,
};
use campus_domain::{Course, Enrollment};
use campus_repository::{Session, Store};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Course service over any store.
pub struct CourseServiceImpl<S: Store> {
    store: Arc<S>,
    default_page_size: u64,
}

impl<S: Store> CourseServiceImpl<S> {
    /// Creates a new course service.
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

/// A professor may coordinate one course only. `course` is the course
/// being written, which may keep its current coordinator.
async fn check_coordinator<X: Session>(
    session: &mut X,
    professor: Option<ProfessorId>,
    course: Option<CourseId>,
) -> CampusResult<()> {
    let Some(professor) = professor else {
        return Ok(());
    };

    require_professor(session, Some(professor)).await?;

    if let Some(existing) = session.course_coordinated_by(professor).await? {
        if Some(existing.id) != course {
            warn!("Professor {} already coordinates course {}", professor, existing.id);
            return Err(CampusError::conflict(format!(
                "Professor {} já coordena o curso {}",
                professor, existing.id
            )));
        }
    }

    Ok(())
}

#[async_trait]
impl<S: Store> CourseService for CourseServiceImpl<S> {
    async fn list_courses(&self, base: &LinkBase) -> CampusResult<Vec<CourseRepresentation>> {
        debug!("Listing courses");
        fetch_all::<Course, _>(self.store.as_ref(), base).await
    }

    async fn get_course(&self, id: CourseId, base: &LinkBase) -> CampusResult<CourseRepresentation> {
        debug!("Getting course: {}", id);
        fetch::<Course, _>(self.store.as_ref(), id, base).await
    }

    async fn search_courses(&self, params: SearchParams, base: &LinkBase) -> CampusResult<CourseSearchResponse> {
        debug!("Searching courses: {:?}", params);
        let result =
            fetch_page::<Course, _>(self.store.as_ref(), &params, self.default_page_size, base).await?;
        Ok(CourseSearchResponse {
            courses: result.items,
            pagination: result.info,
            links: result.links,
        })
    }

    async fn create_course(&self, request: CourseRequest, base: &LinkBase) -> CampusResult<CourseRepresentation> {
        debug!("Creating course: {}", request.name);

        let draft = request.into_draft()?;

        let mut session = self.store.begin().await?;
        check_coordinator(&mut session, draft.professor, None).await?;
        let course = session.insert::<Course>(draft).await?;
        let representation = course.render(&mut session, base).await?;
        session.commit().await?;

        info!("Course created: {}", representation.id);
        Ok(representation)
    }

    async fn update_course(
        &self,
        id: CourseId,
        request: CourseRequest,
        base: &LinkBase,
    ) -> CampusResult<CourseRepresentation> {
        debug!("Updating course: {}", id);

        let draft = request.into_draft()?;

        let mut session = self.store.begin().await?;
        let mut course = find_existing::<Course, _>(&mut session, id).await?;
        check_coordinator(&mut session, draft.professor, Some(id)).await?;
        course.apply(draft);
        session.update(&course).await?;
        let representation = course.render(&mut session, base).await?;
        session.commit().await?;

        info!("Course updated: {}", id);
        Ok(representation)
    }

    async fn delete_course(&self, id: CourseId) -> CampusResult<()> {
        debug!("Deleting course: {}", id);

        let mut session = self.store.begin().await?;
        find_existing::<Course, _>(&mut session, id).await?;
        let dropped = session.clear_enrollments_for_course(id).await?;
        session.delete::<Course>(id).await?;
        session.commit().await?;

        info!("Course deleted: {} ({} enrollments removed)", id, dropped);
        Ok(())
    }

    async fn enroll_student(
        &self,
        id: CourseId,
        student: StudentId,
        base: &LinkBase,
    ) -> CampusResult<CourseRepresentation> {
        let pair = Enrollment::new(student, id);

        let mut session = self.store.begin().await?;
        let (_, course) = enrollment::enroll(&mut session, pair, Side::Course).await?;
        let representation = course.render(&mut session, base).await?;
        session.commit().await?;

        info!("Enrolled: {}", pair);
        Ok(representation)
    }

    async fn course_students(&self, id: CourseId, base: &LinkBase) -> CampusResult<CourseRepresentation> {
        debug!("Getting students of course: {}", id);
        fetch::<Course, _>(self.store.as_ref(), id, base).await
    }

    async fn unenroll_student(&self, id: CourseId, student: StudentId) -> CampusResult<()> {
        let pair = Enrollment::new(student, id);

        let mut session = self.store.begin().await?;
        enrollment::unenroll(&mut session, pair, Side::Course).await?;
        session.commit().await?;

        info!("Unenrolled: {}", pair);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{ProfessorRef, ProfessorRequest, StudentRequest};
    use crate::professor_service::ProfessorService;
    use crate::student_service::StudentService;
    use crate::{ProfessorServiceImpl, StudentServiceImpl};
    use campus_domain::Sex;
    use campus_repository::InMemoryStore;

    struct Fixture {
        students: StudentServiceImpl<InMemoryStore>,
        courses: CourseServiceImpl<InMemoryStore>,
        professors: ProfessorServiceImpl<InMemoryStore>,
        base: LinkBase,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryStore::new());
        Fixture {
            students: StudentServiceImpl::new(Arc::clone(&store)),
            courses: CourseServiceImpl::new(Arc::clone(&store)),
            professors: ProfessorServiceImpl::new(store),
            base: LinkBase::parse("http://localhost:8080").unwrap(),
        }
    }

    fn course(name: &str, professor: Option<ProfessorId>) -> CourseRequest {
        CourseRequest {
            name: name.to_string(),
            description: format!("Curso de {}", name),
            workload_hours: 2400,
            professor: professor.map(|p| ProfessorRef { id: p.into_inner() }),
        }
    }

    fn ana() -> StudentRequest {
        StudentRequest {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            sex: Sex::Female,
        }
    }

    async fn professor(f: &Fixture, name: &str) -> ProfessorId {
        f.professors
            .create_professor(
                ProfessorRequest {
                    name: name.to_string(),
                    email: format!("{}@x.com", name.to_lowercase()),
                },
                &f.base,
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_enrollment_is_visible_from_both_sides() {
        let f = fixture();
        let ana = f.students.create_student(ana(), &f.base).await.unwrap();
        let calc = f.courses.create_course(course("Calc", None), &f.base).await.unwrap();

        let student = f.students.enroll_in_course(ana.id, calc.id, &f.base).await.unwrap();
        assert_eq!(student.courses.len(), 1);
        assert_eq!(student.courses[0].name, "Calc");
        assert_eq!(
            student.courses[0].link,
            format!("http://localhost:8080/cursos/{}", calc.id)
        );

        let course = f.courses.course_students(calc.id, &f.base).await.unwrap();
        assert_eq!(course.students.len(), 1);
        assert_eq!(course.students[0].name, "Ana");

        f.courses.unenroll_student(calc.id, ana.id).await.unwrap();

        assert!(f.students.student_courses(ana.id, &f.base).await.unwrap().courses.is_empty());
        assert!(f.courses.course_students(calc.id, &f.base).await.unwrap().students.is_empty());
    }

    #[tokio::test]
    async fn test_repeat_enroll_conflicts_from_either_side() {
        let f = fixture();
        let ana = f.students.create_student(ana(), &f.base).await.unwrap();
        let calc = f.courses.create_course(course("Calc", None), &f.base).await.unwrap();

        f.courses.enroll_student(calc.id, ana.id, &f.base).await.unwrap();
        let err = f.students.enroll_in_course(ana.id, calc.id, &f.base).await.unwrap_err();
        assert_eq!(err.status_code(), 409);

        let course = f.courses.get_course(calc.id, &f.base).await.unwrap();
        assert_eq!(course.students.len(), 1);
    }

    #[tokio::test]
    async fn test_repeat_unenroll_is_not_enrolled_from_either_side() {
        let f = fixture();
        let ana = f.students.create_student(ana(), &f.base).await.unwrap();
        let calc = f.courses.create_course(course("Calc", None), &f.base).await.unwrap();

        f.students.enroll_in_course(ana.id, calc.id, &f.base).await.unwrap();
        f.students.unenroll_from_course(ana.id, calc.id).await.unwrap();

        let err = f.students.unenroll_from_course(ana.id, calc.id).await.unwrap_err();
        assert_eq!(err.error_code(), "NOT_ENROLLED");
        let err = f.courses.unenroll_student(calc.id, ana.id).await.unwrap_err();
        assert_eq!(err.error_code(), "NOT_ENROLLED");
    }

    #[tokio::test]
    async fn test_delete_course_removes_enrollments() {
        let f = fixture();
        let ana = f.students.create_student(ana(), &f.base).await.unwrap();
        let calc = f.courses.create_course(course("Calc", None), &f.base).await.unwrap();
        f.students.enroll_in_course(ana.id, calc.id, &f.base).await.unwrap();

        f.courses.delete_course(calc.id).await.unwrap();

        assert!(f.courses.get_course(calc.id, &f.base).await.unwrap_err().is_not_found());
        assert!(f.students.get_student(ana.id, &f.base).await.unwrap().courses.is_empty());
    }

    #[tokio::test]
    async fn test_delete_student_removes_enrollments() {
        let f = fixture();
        let ana = f.students.create_student(ana(), &f.base).await.unwrap();
        let calc = f.courses.create_course(course("Calc", None), &f.base).await.unwrap();
        f.students.enroll_in_course(ana.id, calc.id, &f.base).await.unwrap();

        f.students.delete_student(ana.id).await.unwrap();

        assert!(f.courses.get_course(calc.id, &f.base).await.unwrap().students.is_empty());
    }

    #[tokio::test]
    async fn test_professor_is_embedded_with_full_fields() {
        let f = fixture();
        let rita = professor(&f, "Rita").await;
        let calc = f.courses.create_course(course("Calc", Some(rita)), &f.base).await.unwrap();

        let view = calc.professor.unwrap();
        assert_eq!(view.id, rita);
        assert_eq!(view.name, "Rita");
        assert_eq!(view.email, "rita@x.com");
    }

    #[tokio::test]
    async fn test_missing_professor_is_not_found() {
        let f = fixture();
        let err = f
            .courses
            .create_course(course("Calc", Some(ProfessorId(77))), &f.base)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(f.courses.list_courses(&f.base).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_professor_coordinates_one_course_only() {
        let f = fixture();
        let rita = professor(&f, "Rita").await;
        let calc = f.courses.create_course(course("Calc", Some(rita)), &f.base).await.unwrap();

        let err = f
            .courses
            .create_course(course("Física", Some(rita)), &f.base)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 409);

        // Rewriting the same course with its own coordinator is allowed.
        let updated = f
            .courses
            .update_course(calc.id, course("Cálculo I", Some(rita)), &f.base)
            .await
            .unwrap();
        assert_eq!(updated.name, "Cálculo I");
    }

    #[tokio::test]
    async fn test_update_keeps_enrollments() {
        let f = fixture();
        let ana = f.students.create_student(ana(), &f.base).await.unwrap();
        let calc = f.courses.create_course(course("Calc", None), &f.base).await.unwrap();
        f.students.enroll_in_course(ana.id, calc.id, &f.base).await.unwrap();

        let updated = f
            .courses
            .update_course(calc.id, course("Cálculo", None), &f.base)
            .await
            .unwrap();
        assert_eq!(updated.id, calc.id);
        assert_eq!(updated.students.len(), 1);
    }

    #[tokio::test]
    async fn test_search_matches_description() {
        let f = fixture();
        f.courses.create_course(course("Calc", None), &f.base).await.unwrap();
        f.courses.create_course(course("Física", None), &f.base).await.unwrap();

        let params = SearchParams {
            q: Some("DE CALC".to_string()),
            ..SearchParams::default()
        };
        let response = f.courses.search_courses(params, &f.base).await.unwrap();
        assert_eq!(response.courses.len(), 1);
        assert_eq!(response.links["cursos"], "http://localhost:8080/cursos");
    }
}
