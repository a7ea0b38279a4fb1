//! Enrollment manager.
//!
//! Both entry points (`/alunos/{id}/cursos/{cursoId}` and
//! `/cursos/{id}/alunos/{alunoId}`) funnel into these two functions so
//! that the pair is checked and mutated the same way from either side.

use campus_core::{CampusError, CampusResult};
use campus_domain::{Course, Enrollment, Student};
use campus_repository::Session;
use tracing::{debug, warn};

/// Which endpoint of the pair started the operation.
///
/// The initiating side is resolved first, so a request where both ids are
/// missing reports the initiator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Student,
    Course,
}

/// Loads both endpoints of the pair, initiator first.
async fn resolve<X: Session>(
    session: &mut X,
    pair: Enrollment,
    initiator: Side,
) -> CampusResult<(Student, Course)> {
    match initiator {
        Side::Student => {
            let student = find_student(session, pair).await?;
            let course = find_course(session, pair).await?;
            Ok((student, course))
        }
        Side::Course => {
            let course = find_course(session, pair).await?;
            let student = find_student(session, pair).await?;
            Ok((student, course))
        }
    }
}

async fn find_student<X: Session>(session: &mut X, pair: Enrollment) -> CampusResult<Student> {
    session
        .find::<Student>(pair.student)
        .await?
        .ok_or_else(|| CampusError::not_found("Aluno", pair.student))
}

async fn find_course<X: Session>(session: &mut X, pair: Enrollment) -> CampusResult<Course> {
    session
        .find::<Course>(pair.course)
        .await?
        .ok_or_else(|| CampusError::not_found("Curso", pair.course))
}

/// Adds the pair and returns both endpoints for rendering.
///
/// # Errors
/// `NotFound` for a missing endpoint, `Conflict` when already enrolled.
pub async fn enroll<X: Session>(
    session: &mut X,
    pair: Enrollment,
    initiator: Side,
) -> CampusResult<(Student, Course)> {
    debug!("Enrolling {} (initiated by {:?})", pair, initiator);

    let endpoints = resolve(session, pair, initiator).await?;

    if !session.enroll(pair).await? {
        warn!("Rejected duplicate enrollment: {}", pair);
        return Err(CampusError::conflict("Aluno já está matriculado neste curso"));
    }

    Ok(endpoints)
}

/// Removes the pair.
///
/// # Errors
/// `NotFound` for a missing endpoint, `NotEnrolled` when the pair is absent.
pub async fn unenroll<X: Session>(
    session: &mut X,
    pair: Enrollment,
    initiator: Side,
) -> CampusResult<()> {
    debug!("Unenrolling {} (initiated by {:?})", pair, initiator);

    resolve(session, pair, initiator).await?;

    if !session.unenroll(pair).await? {
        warn!("Rejected unenroll of absent pair: {}", pair);
        return Err(CampusError::NotEnrolled {
            student: pair.student.into_inner(),
            course: pair.course.into_inner(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::{CourseId, StudentId};
    use campus_domain::{Email, NewCourse, NewStudent, Sex};
    use campus_repository::{InMemoryStore, Store};

    async fn seeded() -> (InMemoryStore, StudentId, CourseId) {
        let store = InMemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let student: Student = session
            .insert(NewStudent {
                name: "Ana".to_string(),
                email: Email::new_unchecked("ana@x.com"),
                sex: Sex::Female,
            })
            .await
            .unwrap();
        let course: Course = session
            .insert(NewCourse {
                name: "Calc".to_string(),
                description: "Cálculo".to_string(),
                workload_hours: 2400,
                professor: None,
            })
            .await
            .unwrap();
        session.commit().await.unwrap();
        (store, student.id, course.id)
    }

    #[tokio::test]
    async fn test_enroll_then_conflict() {
        let (store, student, course) = seeded().await;
        let pair = Enrollment::new(student, course);

        let mut session = store.begin().await.unwrap();
        enroll(&mut session, pair, Side::Student).await.unwrap();
        let err = enroll(&mut session, pair, Side::Course).await.unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_unenroll_absent_pair_is_not_enrolled() {
        let (store, student, course) = seeded().await;
        let mut session = store.begin().await.unwrap();
        let err = unenroll(&mut session, Enrollment::new(student, course), Side::Course)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_ENROLLED");
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_initiator_is_reported_first() {
        let store = InMemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let pair = Enrollment::new(StudentId(7), CourseId(8));

        let err = enroll(&mut session, pair, Side::Student).await.unwrap_err();
        assert!(err.to_string().contains("Aluno"));

        let err = enroll(&mut session, pair, Side::Course).await.unwrap_err();
        assert!(err.to_string().contains("Curso"));
    }
}
