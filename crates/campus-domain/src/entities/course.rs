//! Course (Curso) entity.

use crate::folded_cmp;
use campus_core::{CourseId, ProfessorId, Resource};
use std::cmp::Ordering;

/// Minimum course workload in hours.
pub const COURSE_MIN_HOURS: i32 = 2400;
/// Maximum course workload in hours.
pub const COURSE_MAX_HOURS: i32 = 7200;

/// A course, optionally coordinated by one professor.
///
/// A professor coordinates at most one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub workload_hours: i32,
    pub professor: Option<ProfessorId>,
}

/// Fields of a course that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
    pub workload_hours: i32,
    pub professor: Option<ProfessorId>,
}

impl Course {
    /// Replaces the updatable fields, keeping the identifier.
    pub fn apply(&mut self, changes: NewCourse) {
        self.name = changes.name;
        self.description = changes.description;
        self.workload_hours = changes.workload_hours;
        self.professor = changes.professor;
    }
}

impl Resource for Course {
    type Id = CourseId;
    type Draft = NewCourse;

    const NAME: &'static str = "Curso";
    const PATH: &'static str = "cursos";
    const SORT_FIELDS: &'static [&'static str] =
        &["id", "nome", "descricao", "cargaHoraria", "professor"];

    fn id(&self) -> CourseId {
        self.id
    }

    fn from_draft(id: CourseId, draft: NewCourse) -> Self {
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

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::SortSpec;

    fn course(id: i64, hours: i32, professor: Option<i64>) -> Course {
        Course::from_draft(
            CourseId(id),
            NewCourse {
                name: format!("Curso {}", id),
                description: "Descrição".to_string(),
                workload_hours: hours,
                professor: professor.map(ProfessorId),
            },
        )
    }

    #[test]
    fn test_sort_by_workload() {
        let mut items = vec![course(1, 3600, None), course(2, 2400, None), course(3, 7200, None)];
        SortSpec::resolve(Some("cargaHoraria"), None, Course::SORT_FIELDS).sort(&mut items);
        let ids: Vec<i64> = items.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_professor_puts_unassigned_first() {
        let mut items = vec![course(1, 3600, Some(9)), course(2, 3600, None), course(3, 3600, Some(4))];
        SortSpec::resolve(Some("professor"), None, Course::SORT_FIELDS).sort(&mut items);
        let ids: Vec<i64> = items.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_search_text_is_name_and_description() {
        let calc = Course::from_draft(
            CourseId(1),
            NewCourse {
                name: "Matemática".to_string(),
                description: "Cálculo avançado".to_string(),
                workload_hours: 3000,
                professor: None,
            },
        );
        assert_eq!(calc.search_text(), ["Matemática", "Cálculo avançado"]);
    }
}
