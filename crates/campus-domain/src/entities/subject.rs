//! Subject (Disciplina) entity.

use crate::folded_cmp;
use campus_core::{ProfessorId, Resource, SubjectId};
use std::cmp::Ordering;

/// Minimum subject workload in hours.
pub const SUBJECT_MIN_HOURS: i32 = 30;
/// Maximum subject workload in hours.
pub const SUBJECT_MAX_HOURS: i32 = 100;

/// A subject taught by (at most) one professor; a professor may teach many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub description: String,
    pub workload_hours: i32,
    pub professor: Option<ProfessorId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub name: String,
    pub description: String,
    pub workload_hours: i32,
    pub professor: Option<ProfessorId>,
}

impl Subject {
    /// Replaces the updatable fields, keeping the identifier.
    pub fn apply(&mut self, changes: NewSubject) {
        self.name = changes.name;
        self.description = changes.description;
        self.workload_hours = changes.workload_hours;
        self.professor = changes.professor;
    }
}

impl Resource for Subject {
    type Id = SubjectId;
    type Draft = NewSubject;

    const NAME: &'static str = "Disciplina";
    const PATH: &'static str = "disciplinas";
    const SORT_FIELDS: &'static [&'static str] =
        &["id", "nome", "descricao", "cargaHoraria", "professor"];

    fn id(&self) -> SubjectId {
        self.id
    }

    fn from_draft(id: SubjectId, draft: NewSubject) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            workload_hours: draft.workload_hours,
            professor: draft.professor,
        }
    }

    fn search_text(&self) -> [&str; 2] {
        [&self.name, &self.description]
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome" => folded_cmp(&self.name, &other.name),
            "descricao" => folded_cmp(&self.description, &other.description),
            "cargaHoraria" => self.workload_hours.cmp(&other.workload_hours),
            "professor" => self.professor.cmp(&other.professor),
            _ => self.id.cmp(&other.id),
        }
    }
}
