//! Professor DTOs.

use campus_core::{CampusError, CampusResult, Links, LinkBase, PageInfo, ProfessorId, Resource, ValidateExt};
use campus_domain::{Email, NewProfessor, Professor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body to create or replace a professor.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProfessorRequest {
    #[serde(rename = "nome")]
    #[validate(length(min = 2, max = 100, message = "O nome deve ter entre 2 a 100 letras"))]
    pub name: String,

    #[validate(email(message = "O email deve ser válido"))]
    pub email: String,
}

impl ProfessorRequest {
    pub fn into_draft(self) -> CampusResult<NewProfessor> {
        self.validate_request()?;
        Ok(NewProfessor {
            name: self.name,
            email: Email::new(self.email).map_err(|e| CampusError::validation(e.to_string()))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfessorRepresentation {
    pub id: ProfessorId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl ProfessorRepresentation {
    #[must_use]
    pub fn new(professor: Professor, base: &LinkBase) -> Self {
        Self {
            links: base.entity_links(Professor::PATH, professor.id),
            id: professor.id,
            name: professor.name,
            email: professor.email.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfessorSearchResponse {
    #[serde(rename = "professores")]
    pub professors: Vec<ProfessorRepresentation>,
    pub pagination: PageInfo,
    #[serde(rename = "_links")]
    pub links: Links,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_is_rejected() {
        let request = ProfessorRequest {
            name: "Rita".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(request.into_draft().is_err());
    }

    #[test]
    fn test_representation_links() {
        let professor = Professor {
            id: ProfessorId(3),
            name: "Rita".to_string(),
            email: Email::new_unchecked("rita@x.com"),
        };
        let base = LinkBase::parse("http://localhost:8080").unwrap();
        let value = serde_json::to_value(ProfessorRepresentation::new(professor, &base)).unwrap();
        assert_eq!(value["nome"], "Rita");
        assert_eq!(value["_links"]["self"], "http://localhost:8080/professores/3");
        assert_eq!(value["_links"]["search"], "http://localhost:8080/professores/search");
    }
}
