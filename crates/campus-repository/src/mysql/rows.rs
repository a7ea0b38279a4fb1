//! Database row shapes.

use campus_core::{CampusError, CampusResult};
use campus_domain::{Course, Email, Professor, Student, Subject};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct StudentRow {
    id: i64,
    name: String,
    email: String,
    sex: String,
}

impl TryFrom<StudentRow> for Student {
    type Error = CampusError;

    fn try_from(row: StudentRow) -> CampusResult<Self> {
        let sex = row
            .sex
            .parse()
            .map_err(|e| CampusError::Internal(format!("Invalid sex in database: {}", e)))?;

        Ok(Student {
            id: row.id.into(),
            name: row.name,
            email: Email::new_unchecked(row.email),
            sex,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct CourseRow {
    id: i64,
    name: String,
    description: String,
    workload_hours: i32,
    professor_id: Option<i64>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id.into(),
            name: row.name,
            description: row.description,
            workload_hours: row.workload_hours,
            professor: row.professor_id.map(Into::into),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProfessorRow {
    id: i64,
    name: String,
    email: String,
}

impl From<ProfessorRow> for Professor {
    fn from(row: ProfessorRow) -> Self {
        Professor {
            id: row.id.into(),
            name: row.name,
            email: Email::new_unchecked(row.email),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct SubjectRow {
    id: i64,
    name: String,
    description: String,
    workload_hours: i32,
    professor_id: Option<i64>,
}

impl From<SubjectRow> for Subject {
    fn from(row: SubjectRow) -> Self {
        Subject {
            id: row.id.into(),
            name: row.name,
            description: row.description,
            workload_hours: row.workload_hours,
            professor: row.professor_id.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::Sex;

    #[test]
    fn test_student_row_conversion() {
        let row = StudentRow {
            id: 7,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            sex: "FEMININO".to_string(),
        };
        let student = Student::try_from(row).unwrap();
        assert_eq!(student.id.into_inner(), 7);
        assert_eq!(student.sex, Sex::Female);
        assert_eq!(student.email.as_str(), "ana@x.com");
    }

    #[test]
    fn test_student_row_with_unknown_sex_is_rejected() {
        let row = StudentRow {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            sex: "X".to_string(),
        };
        assert!(matches!(
            Student::try_from(row),
            Err(CampusError::Internal(_))
        ));
    }

    #[test]
    fn test_course_row_without_professor() {
        let course = Course::from(CourseRow {
            id: 3,
            name: "Calc".to_string(),
            description: "Cálculo".to_string(),
            workload_hours: 3000,
            professor_id: None,
        });
        assert!(course.professor.is_none());
        assert_eq!(course.workload_hours, 3000);
    }
}
