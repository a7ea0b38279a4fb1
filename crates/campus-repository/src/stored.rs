//! Storage metadata for the four resources.
//!
//! [`Stored`] adds what both backends need on top of [`Resource`]:
//! the SQL table layout for MySQL and the table slot for the in-memory store.

use crate::memory::{Table, Tables};
use crate::mysql::rows::{CourseRow, ProfessorRow, StudentRow, SubjectRow};
use campus_core::{CampusResult, Resource};
use campus_domain::{Course, NewCourse, NewProfessor, NewStudent, NewSubject, Professor, Student, Subject};
use sqlx::mysql::{MySql, MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::FromRow;

/// A MySQL statement with positional arguments.
pub type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// A resource both backends know how to persist.
pub trait Stored: Resource {
    /// Table name.
    const TABLE: &'static str;

    /// Writable columns, in bind order. The `id` column is implied.
    const FIELDS: &'static [&'static str];

    /// Columns free-text search looks at.
    const SEARCH_COLUMNS: [&'static str; 2];

    /// Sort whitelist entries mapped to their column.
    const SORT_COLUMNS: &'static [(&'static str, &'static str)];

    /// Row shape decoded from `SELECT id, FIELDS...`.
    type Row: for<'r> FromRow<'r, MySqlRow> + Send + Unpin;

    /// Converts a decoded row.
    fn from_row(row: Self::Row) -> CampusResult<Self>;

    /// The updatable fields of a stored instance.
    fn to_draft(&self) -> Self::Draft;

    /// Binds the draft's values in [`Stored::FIELDS`] order.
    fn bind_draft<'q>(query: MySqlQuery<'q>, draft: &Self::Draft) -> MySqlQuery<'q>;

    /// The in-memory table holding this resource.
    fn table(tables: &Tables) -> &Table<Self>;

    /// Mutable access to the in-memory table.
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;

    /// Column for a resolved sort field; unknown fields map to `id`.
    fn column_for(field: &str) -> &'static str {
        Self::SORT_COLUMNS
            .iter()
            .find(|(name, _)| *name == field)
            .map_or("id", |&(_, column)| column)
    }
}

impl Stored for Student {
    const TABLE: &'static str = "students";
    const FIELDS: &'static [&'static str] = &["name", "email", "sex"];
    const SEARCH_COLUMNS: [&'static str; 2] = ["name", "email"];
    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("nome", "name"),
        ("email", "email"),
        ("sexo", "sex"),
    ];

    type Row = StudentRow;

    fn from_row(row: StudentRow) -> CampusResult<Self> {
        Self::try_from(row)
    }

    fn to_draft(&self) -> NewStudent {
        NewStudent {
            name: self.name.clone(),
            email: self.email.clone(),
            sex: self.sex,
        }
    }

    fn bind_draft<'q>(query: MySqlQuery<'q>, draft: &NewStudent) -> MySqlQuery<'q> {
        query
            .bind(draft.name.clone())
            .bind(draft.email.as_str().to_owned())
            .bind(draft.sex.as_str())
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.students
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.students
    }
}

impl Stored for Course {
    const TABLE: &'static str = "courses";
    const FIELDS: &'static [&'static str] =
        &["name", "description", "workload_hours", "professor_id"];
    const SEARCH_COLUMNS: [&'static str; 2] = ["name", "description"];
    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("nome", "name"),
        ("descricao", "description"),
        ("cargaHoraria", "workload_hours"),
        ("professor", "professor_id"),
    ];

    type Row = CourseRow;

    fn from_row(row: CourseRow) -> CampusResult<Self> {
        Ok(Self::from(row))
    }

    fn to_draft(&self) -> NewCourse {
        NewCourse {
            name: self.name.clone(),
            description: self.description.clone(),
            workload_hours: self.workload_hours,
            professor: self.professor,
        }
    }

    fn bind_draft<'q>(query: MySqlQuery<'q>, draft: &NewCourse) -> MySqlQuery<'q> {
        query
            .bind(draft.name.clone())
            .bind(draft.description.clone())
            .bind(draft.workload_hours)
            .bind(draft.professor.map(i64::from))
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.courses
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.courses
    }
}

impl Stored for Professor {
    const TABLE: &'static str = "professors";
    const FIELDS: &'static [&'static str] = &["name", "email"];
    const SEARCH_COLUMNS: [&'static str; 2] = ["name", "email"];
    const SORT_COLUMNS: &'static [(&'static str, &'static str)] =
        &[("id", "id"), ("nome", "name"), ("email", "email")];

    type Row = ProfessorRow;

    fn from_row(row: ProfessorRow) -> CampusResult<Self> {
        Ok(Self::from(row))
    }

    fn to_draft(&self) -> NewProfessor {
        NewProfessor {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    fn bind_draft<'q>(query: MySqlQuery<'q>, draft: &NewProfessor) -> MySqlQuery<'q> {
        query
            .bind(draft.name.clone())
            .bind(draft.email.as_str().to_owned())
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.professors
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.professors
    }
}

impl Stored for Subject {
    const TABLE: &'static str = "subjects";
    const FIELDS: &'static [&'static str] =
        &["name", "description", "workload_hours", "professor_id"];
    const SEARCH_COLUMNS: [&'static str; 2] = ["name", "description"];
    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("nome", "name"),
        ("descricao", "description"),
        ("cargaHoraria", "workload_hours"),
        ("professor", "professor_id"),
    ];

    type Row = SubjectRow;

    fn from_row(row: SubjectRow) -> CampusResult<Self> {
        Ok(Self::from(row))
    }

    fn to_draft(&self) -> NewSubject {
        NewSubject {
            name: self.name.clone(),
            description: self.description.clone(),
            workload_hours: self.workload_hours,
            professor: self.professor,
        }
    }

    fn bind_draft<'q>(query: MySqlQuery<'q>, draft: &NewSubject) -> MySqlQuery<'q> {
        query
            .bind(draft.name.clone())
            .bind(draft.description.clone())
            .bind(draft.workload_hours)
            .bind(draft.professor.map(i64::from))
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.subjects
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.subjects
    }
}
