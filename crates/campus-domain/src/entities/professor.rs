//! Professor entity.

use crate::{folded_cmp, Email};
use campus_core::{ProfessorId, Resource};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    pub id: ProfessorId,
    pub name: String,
    pub email: Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfessor {
    pub name: String,
    pub email: Email,
}

impl Professor {
    /// Replaces the updatable fields, keeping the identifier.
    pub fn apply(&mut self, changes: NewProfessor) {
        self.name = changes.name;
        self.email = changes.email;
    }
}

impl Resource for Professor {
    type Id = ProfessorId;
    type Draft = NewProfessor;

    const NAME: &'static str = "Professor";
    const PATH: &'static str = "professores";
    const SORT_FIELDS: &'static [&'static str] = &["id", "nome", "email"];

    fn id(&self) -> ProfessorId {
        self.id
    }

    fn from_draft(id: ProfessorId, draft: NewProfessor) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }

    fn search_text(&self) -> [&str; 2] {
        [&self.name, self.email.as_str()]
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome" => folded_cmp(&self.name, &other.name),
            "email" => folded_cmp(self.email.as_str(), other.email.as_str()),
            _ => self.id.cmp(&other.id),
        }
    }
}
