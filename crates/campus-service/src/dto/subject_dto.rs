//! Subject DTOs.

use super::{workload_within, ProfessorRef, ProfessorView};
use campus_core::{
    CampusResult, LinkBase, Links, PageInfo, ProfessorId, Resource, SubjectId, ValidateExt,
};
use campus_domain::{NewSubject, Professor, Subject, SUBJECT_MAX_HOURS, SUBJECT_MIN_HOURS};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Request body to create or replace a subject.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubjectRequest {
    #[serde(rename = "nome")]
    #[validate(length(min = 2, max = 100, message = "O nome deve ter entre 2 a 100 letras"))]
    pub name: String,

    #[serde(rename = "descricao")]
    #[validate(length(min = 2, max = 200, message = "A descrição deve ter entre 2 a 200 letras"))]
    pub description: String,

    #[serde(rename = "cargaHoraria")]
    #[validate(custom(function = "subject_workload"))]
    pub workload_hours: i32,

    #[serde(default)]
    pub professor: Option<ProfessorRef>,
}

fn subject_workload(hours: i32) -> Result<(), ValidationError> {
    workload_within(hours, SUBJECT_MIN_HOURS, SUBJECT_MAX_HOURS)
}

impl SubjectRequest {
    pub fn into_draft(self) -> CampusResult<NewSubject> {
        self.validate_request()?;
        Ok(NewSubject {
            name: self.name,
            description: self.description,
            workload_hours: self.workload_hours,
            professor: self.professor.map(|p| ProfessorId(p.id)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectRepresentation {
    pub id: SubjectId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "cargaHoraria")]
    pub workload_hours: i32,
    pub professor: Option<ProfessorView>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl SubjectRepresentation {
    #[must_use]
    pub fn new(subject: Subject, professor: Option<Professor>, base: &LinkBase) -> Self {
        Self {
            links: base.entity_links(Subject::PATH, subject.id),
            id: subject.id,
            name: subject.name,
            description: subject.description,
            workload_hours: subject.workload_hours,
            professor: professor.map(ProfessorView::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubjectSearchResponse {
    #[serde(rename = "disciplinas")]
    pub subjects: Vec<SubjectRepresentation>,
    pub pagination: PageInfo,
    #[serde(rename = "_links")]
    pub links: Links,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(hours: i32) -> SubjectRequest {
        SubjectRequest {
            name: "Álgebra".to_string(),
            description: "Álgebra linear".to_string(),
            workload_hours: hours,
            professor: Some(ProfessorRef { id: 2 }),
        }
    }

    #[test]
    fn test_subject_workload_range() {
        assert!(request(30).into_draft().is_ok());
        assert!(request(100).into_draft().is_ok());
        assert!(request(29).into_draft().is_err());
        assert!(request(101).into_draft().is_err());
    }

    #[test]
    fn test_draft_keeps_professor_reference() {
        let draft = request(60).into_draft().unwrap();
        assert_eq!(draft.professor, Some(ProfessorId(2)));
    }
}
