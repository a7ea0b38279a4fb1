//! Student DTOs.

use campus_core::{CampusError, CampusResult, CourseId, LinkBase, Links, PageInfo, Resource, StudentId, ValidateExt};
use campus_domain::{Course, Email, NewStudent, Sex, Student};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body to create or replace a student.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StudentRequest {
    #[serde(rename = "nome")]
    #[validate(length(min = 2, max = 100, message = "O nome deve ter entre 2 a 100 letras"))]
    pub name: String,

    #[validate(email(message = "O email deve ser válido"))]
    pub email: String,

    #[serde(rename = "sexo")]
    pub sex: Sex,
}

impl StudentRequest {
    /// Validates the body and converts it to storable fields.
    pub fn into_draft(self) -> CampusResult<NewStudent> {
        self.validate_request()?;
        let email = Email::new(self.email).map_err(|e| CampusError::validation(e.to_string()))?;
        Ok(NewStudent {
            name: self.name,
            email,
            sex: self.sex,
        })
    }
}

/// Course entry nested in a student representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseSummary {
    pub id: CourseId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "cargaHoraria")]
    pub workload_hours: i32,
    #[serde(rename = "_link")]
    pub link: String,
}

impl CourseSummary {
    #[must_use]
    pub fn new(course: Course, base: &LinkBase) -> Self {
        Self {
            link: base.member(Course::PATH, course.id),
            id: course.id,
            name: course.name,
            description: course.description,
            workload_hours: course.workload_hours,
        }
    }
}

/// A student with links and the courses they are enrolled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentRepresentation {
    pub id: StudentId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "sexo")]
    pub sex: Sex,
    #[serde(rename = "_links")]
    pub links: Links,
    #[serde(rename = "cursos")]
    pub courses: Vec<CourseSummary>,
}

impl StudentRepresentation {
    #[must_use]
    pub fn new(student: Student, courses: Vec<Course>, base: &LinkBase) -> Self {
        Self {
            links: base.entity_links(Student::PATH, student.id),
            id: student.id,
            name: student.name,
            email: student.email.into(),
            sex: student.sex,
            courses: courses
                .into_iter()
                .map(|course| CourseSummary::new(course, base))
                .collect(),
        }
    }
}

/// One page of student search results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentSearchResponse {
    #[serde(rename = "alunos")]
    pub students: Vec<StudentRepresentation>,
    pub pagination: PageInfo,
    #[serde(rename = "_links")]
    pub links: Links,
}
