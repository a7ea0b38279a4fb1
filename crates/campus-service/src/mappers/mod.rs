//! Entity to representation mappers.
//!
//! Rendering a representation may need related rows (a student's courses,
//! a course's coordinator and students), so mapping runs inside the
//! caller's session instead of through plain `From` impls.

use crate::dto::{
    CourseRepresentation, ProfessorRepresentation, StudentRepresentation, SubjectRepresentation,
};
use async_trait::async_trait;
use campus_core::{CampusResult, LinkBase, ProfessorId};
use campus_domain::{Course, Professor, Student, Subject};
use campus_repository::{Session, Stored};

/// Turns a stored entity into its outward representation.
#[async_trait]
pub trait Render: Stored {
    /// The representation type.
    type Output: Send + 'static;

    /// Renders one entity, loading whatever related rows it embeds.
    async fn render<X: Session>(self, session: &mut X, base: &LinkBase) -> CampusResult<Self::Output>;
}

/// Renders every item in order.
pub async fn render_all<T: Render, X: Session>(
    items: Vec<T>,
    session: &mut X,
    base: &LinkBase,
) -> CampusResult<Vec<T::Output>> {
    let mut rendered = Vec::with_capacity(items.len());
    for item in items {
        rendered.push(item.render(session, base).await?);
    }
    Ok(rendered)
}

async fn professor_of<X: Session>(
    session: &mut X,
    professor: Option<ProfessorId>,
) -> CampusResult<Option<Professor>> {
    match professor {
        Some(id) => session.find::<Professor>(id).await,
        None => Ok(None),
    }
}

#[async_trait]
impl Render for Student {
    type Output = StudentRepresentation;

    async fn render<X: Session>(self, session: &mut X, base: &LinkBase) -> CampusResult<Self::Output> {
        let courses = session.courses_of_student(self.id).await?;
        Ok(StudentRepresentation::new(self, courses, base))
    }
}

#[async_trait]
impl Render for Course {
    type Output = CourseRepresentation;

    async fn render<X: Session>(self, session: &mut X, base: &LinkBase) -> CampusResult<Self::Output> {
        let professor = professor_of(session, self.professor).await?;
        let students = session.students_of_course(self.id).await?;
        Ok(CourseRepresentation::new(self, professor, students, base))
    }
}

#[async_trait]
impl Render for Professor {
    type Output = ProfessorRepresentation;

    async fn render<X: Session>(self, _session: &mut X, base: &LinkBase) -> CampusResult<Self::Output> {
        Ok(ProfessorRepresentation::new(self, base))
    }
}

#[async_trait]
impl Render for Subject {
    type Output = SubjectRepresentation;

    async fn render<X: Session>(self, session: &mut X, base: &LinkBase) -> CampusResult<Self::Output> {
        let professor = professor_of(session, self.professor).await?;
        Ok(SubjectRepresentation::new(self, professor, base))
    }
}
