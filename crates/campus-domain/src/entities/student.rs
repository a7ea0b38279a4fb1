//! Student (Aluno) entity.

use crate::{folded_cmp, Email, Sex};
use campus_core::{Resource, StudentId};
use std::cmp::Ordering;

/// A student. Enrolled courses live in the enrollment relation, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: Email,
    pub sex: Sex,
}

/// Fields of a student that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: Email,
    pub sex: Sex,
}

impl Student {
    /// Replaces the updatable fields, keeping the identifier.
    pub fn apply(&mut self, changes: NewStudent) {
        self.name = changes.name;
        self.email = changes.email;
        self.sex = changes.sex;
    }
}

impl Resource for Student {
    type Id = StudentId;
    type Draft = NewStudent;

    const NAME: &'static str = "Aluno";
    const PATH: &'static str = "alunos";
    const SORT_FIELDS: &'static [&'static str] = &["id", "nome", "email", "sexo"];

    fn id(&self) -> StudentId {
        self.id
    }

    fn from_draft(id: StudentId, draft: NewStudent) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            sex: draft.sex,
        }
    }

    fn search_text(&self) -> [&str; 2] {
        [&self.name, self.email.as_str()]
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome" => folded_cmp(&self.name, &other.name),
            "email" => folded_cmp(self.email.as_str(), other.email.as_str()),
            "sexo" => self.sex.as_str().cmp(other.sex.as_str()),
            _ => self.id.cmp(&other.id),
        }
    }
}
