//! Course DTOs.

use super::{workload_within, ProfessorRef};
use campus_core::{
    CampusResult, CourseId, LinkBase, Links, PageInfo, ProfessorId, Resource, StudentId, ValidateExt,
};
use campus_domain::{Course, NewCourse, Professor, Sex, Student, COURSE_MAX_HOURS, COURSE_MIN_HOURS};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Request body to create or replace a course.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CourseRequest {
    #[serde(rename = "nome")]
    #[validate(length(min = 2, max = 100, message = "O nome deve ter entre 2 a 100 letras"))]
    pub name: String,

    #[serde(rename = "descricao")]
    #[validate(length(min = 2, max = 200, message = "A descrição deve ter entre 2 a 200 letras"))]
    pub description: String,

    #[serde(rename = "cargaHoraria")]
    #[validate(custom(function = "course_workload"))]
    pub workload_hours: i32,

    /// Coordinating professor, if any.
    #[serde(default)]
    pub professor: Option<ProfessorRef>,
}

fn course_workload(hours: i32) -> Result<(), ValidationError> {
    workload_within(hours, COURSE_MIN_HOURS, COURSE_MAX_HOURS)
}

impl CourseRequest {
    /// Validates the body and converts it to storable fields.
    ///
    /// The professor reference is carried over unchecked; the service
    /// resolves it inside its session.
    pub fn into_draft(self) -> CampusResult<NewCourse> {
        self.validate_request()?;
        Ok(NewCourse {
            name: self.name,
            description: self.description,
            workload_hours: self.workload_hours,
            professor: self.professor.map(|p| ProfessorId(p.id)),
        })
    }
}

/// Professor fields embedded in course and subject representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfessorView {
    pub id: ProfessorId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

impl From<Professor> for ProfessorView {
    fn from(professor: Professor) -> Self {
        Self {
            id: professor.id,
            name: professor.name,
            email: professor.email.into(),
        }
    }
}

/// Student entry nested in a course representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentSummary {
    pub id: StudentId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "sexo")]
    pub sex: Sex,
    #[serde(rename = "_link")]
    pub link: String,
}

impl StudentSummary {
    #[must_use]
    pub fn new(student: Student, base: &LinkBase) -> Self {
        Self {
            link: base.member(Student::PATH, student.id),
            id: student.id,
            name: student.name,
            email: student.email.into(),
            sex: student.sex,
        }
    }
}

/// A course with its coordinator, links and enrolled students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseRepresentation {
    pub id: CourseId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "cargaHoraria")]
    pub workload_hours: i32,
    pub professor: Option<ProfessorView>,
    #[serde(rename = "_links")]
    pub links: Links,
    #[serde(rename = "alunos")]
    pub students: Vec<StudentSummary>,
}

impl CourseRepresentation {
    #[must_use]
    pub fn new(
        course: Course,
        professor: Option<Professor>,
        students: Vec<Student>,
        base: &LinkBase,
    ) -> Self {
        Self {
            links: base.entity_links(Course::PATH, course.id),
            id: course.id,
            name: course.name,
            description: course.description,
            workload_hours: course.workload_hours,
            professor: professor.map(ProfessorView::from),
            students: students
                .into_iter()
                .map(|student| StudentSummary::new(student, base))
                .collect(),
        }
    }
}

/// One page of course search results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseSearchResponse {
    #[serde(rename = "cursos")]
    pub courses: Vec<CourseRepresentation>,
    pub pagination: PageInfo,
    #[serde(rename = "_links")]
    pub links: Links,
}
