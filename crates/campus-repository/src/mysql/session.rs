//! Transaction-scoped MySQL session.

use crate::stored::Stored;
use crate::traits::Session;
use campus_core::{
    CampusError, CampusResult, CourseId, Page, PageRequest, ProfessorId, SortSpec, StudentId,
    TextFilter,
};
use campus_domain::{Course, Enrollment, Student, Subject};
use async_trait::async_trait;
use sqlx::{MySql, Transaction};
use tracing::debug;

/// A MySQL transaction. Dropping it uncommitted rolls back.
pub struct MySqlSession {
    tx: Transaction<'static, MySql>,
}

impl MySqlSession {
    pub(crate) fn new(tx: Transaction<'static, MySql>) -> Self {
        Self { tx }
    }
}

impl std::fmt::Debug for MySqlSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlSession").finish_non_exhaustive()
    }
}

/// `id, col1, col2, ...`, optionally qualified with a table alias.
fn columns<T: Stored>(alias: Option<&str>) -> String {
    std::iter::once("id")
        .chain(T::FIELDS.iter().copied())
        .map(|column| match alias {
            Some(alias) => format!("{alias}.{column}"),
            None => column.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// ORDER BY clause for a resolved sort; ties break on ascending id.
fn order_by<T: Stored>(sort: SortSpec) -> String {
    let column = T::column_for(sort.field());
    let direction = sort.direction().as_sql();
    if column == "id" {
        format!("id {direction}")
    } else {
        format!("{column} {direction}, id ASC")
    }
}

fn search_clause<T: Stored>() -> String {
    let [first, second] = T::SEARCH_COLUMNS;
    format!(" WHERE LOWER({first}) LIKE ? OR LOWER({second}) LIKE ?")
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn rows_into<T: Stored>(rows: Vec<T::Row>) -> CampusResult<Vec<T>> {
    rows.into_iter().map(T::from_row).collect()
}

#[async_trait]
impl Session for MySqlSession {
    async fn find<T: Stored>(&mut self, id: T::Id) -> CampusResult<Option<T>> {
        debug!("Finding {} by id: {}", T::NAME, id);

        let sql = format!("SELECT {} FROM {} WHERE id = ?", columns::<T>(None), T::TABLE);
        let id: i64 = id.into();
        let row = sqlx::query_as::<_, T::Row>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;

        row.map(T::from_row).transpose()
    }

    async fn search<T: Stored>(
        &mut self,
        filter: &TextFilter,
        sort: SortSpec,
        page: PageRequest,
    ) -> CampusResult<Page<T>> {
        debug!(
            "Searching {}, page: {}, size: {}",
            T::TABLE,
            page.page,
            page.size
        );

        let pattern = filter.like_pattern();
        let where_clause = if pattern.is_some() {
            search_clause::<T>()
        } else {
            String::new()
        };

        let count_sql = format!("SELECT COUNT(*) FROM {}{}", T::TABLE, where_clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(pattern) = &pattern {
            count = count.bind(pattern.clone()).bind(pattern.clone());
        }
        let total = count.fetch_one(&mut *self.tx).await?;

        let select_sql = format!(
            "SELECT {} FROM {}{} ORDER BY {} LIMIT ? OFFSET ?",
            columns::<T>(None),
            T::TABLE,
            where_clause,
            order_by::<T>(sort)
        );
        let mut select = sqlx::query_as::<_, T::Row>(&select_sql);
        if let Some(pattern) = pattern {
            select = select.bind(pattern.clone()).bind(pattern);
        }
        let rows = select
            .bind(to_i64(page.limit()))
            .bind(to_i64(page.offset()))
            .fetch_all(&mut *self.tx)
            .await?;

        let total = u64::try_from(total).unwrap_or(0);
        Ok(Page::new(rows_into::<T>(rows)?, page, total))
    }

    async fn list_all<T: Stored>(&mut self, sort: SortSpec) -> CampusResult<Vec<T>> {
        debug!("Listing all {}", T::TABLE);

        let sql = format!(
            "SELECT {} FROM {} ORDER BY {}",
            columns::<T>(None),
            T::TABLE,
            order_by::<T>(sort)
        );
        let rows = sqlx::query_as::<_, T::Row>(&sql)
            .fetch_all(&mut *self.tx)
            .await?;

        rows_into::<T>(rows)
    }

    async fn insert<T: Stored>(&mut self, draft: T::Draft) -> CampusResult<T> {
        debug!("Inserting into {}", T::TABLE);

        let placeholders = vec!["?"; T::FIELDS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::TABLE,
            T::FIELDS.join(", "),
            placeholders
        );
        let result = T::bind_draft(sqlx::query(&sql), &draft)
            .execute(&mut *self.tx)
            .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| CampusError::internal("Generated id out of range"))?;
        Ok(T::from_draft(T::Id::from(id), draft))
    }

    async fn update<T: Stored>(&mut self, item: &T) -> CampusResult<bool> {
        debug!("Updating {} {}", T::NAME, item.id());

        let assignments = T::FIELDS
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", T::TABLE, assignments);
        let id: i64 = item.id().into();
        let result = T::bind_draft(sqlx::query(&sql), &item.to_draft())
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete<T: Stored>(&mut self, id: T::Id) -> CampusResult<bool> {
        debug!("Deleting {} {}", T::NAME, id);

        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let id: i64 = id.into();
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_enrolled(&mut self, pair: Enrollment) -> CampusResult<bool> {
        let found: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM enrollments WHERE student_id = ? AND course_id = ? LIMIT 1",
        )
        .bind(pair.student.into_inner())
        .bind(pair.course.into_inner())
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(found.is_some())
    }

    async fn enroll(&mut self, pair: Enrollment) -> CampusResult<bool> {
        debug!("Enrolling {}", pair);

        if self.is_enrolled(pair).await? {
            return Ok(false);
        }

        sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES (?, ?)")
            .bind(pair.student.into_inner())
            .bind(pair.course.into_inner())
            .execute(&mut *self.tx)
            .await?;

        Ok(true)
    }

    async fn unenroll(&mut self, pair: Enrollment) -> CampusResult<bool> {
        debug!("Unenrolling {}", pair);

        let result = sqlx::query("DELETE FROM enrollments WHERE student_id = ? AND course_id = ?")
            .bind(pair.student.into_inner())
            .bind(pair.course.into_inner())
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn courses_of_student(&mut self, student: StudentId) -> CampusResult<Vec<Course>> {
        let sql = format!(
            "SELECT {} FROM courses c \
             JOIN enrollments e ON e.course_id = c.id \
             WHERE e.student_id = ? ORDER BY c.id",
            columns::<Course>(Some("c"))
        );
        let rows = sqlx::query_as::<_, <Course as Stored>::Row>(&sql)
            .bind(student.into_inner())
            .fetch_all(&mut *self.tx)
            .await?;

        rows_into::<Course>(rows)
    }

    async fn students_of_course(&mut self, course: CourseId) -> CampusResult<Vec<Student>> {
        let sql = format!(
            "SELECT {} FROM students s \
             JOIN enrollments e ON e.student_id = s.id \
             WHERE e.course_id = ? ORDER BY s.id",
            columns::<Student>(Some("s"))
        );
        let rows = sqlx::query_as::<_, <Student as Stored>::Row>(&sql)
            .bind(course.into_inner())
            .fetch_all(&mut *self.tx)
            .await?;

        rows_into::<Student>(rows)
    }

    async fn clear_enrollments_for_student(&mut self, student: StudentId) -> CampusResult<u64> {
        let result = sqlx::query("DELETE FROM enrollments WHERE student_id = ?")
            .bind(student.into_inner())
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected())
    }

    async fn clear_enrollments_for_course(&mut self, course: CourseId) -> CampusResult<u64> {
        let result = sqlx::query("DELETE FROM enrollments WHERE course_id = ?")
            .bind(course.into_inner())
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected())
    }

    async fn course_coordinated_by(
        &mut self,
        professor: ProfessorId,
    ) -> CampusResult<Option<Course>> {
        let sql = format!(
            "SELECT {} FROM courses WHERE professor_id = ? LIMIT 1",
            columns::<Course>(None)
        );
        let row = sqlx::query_as::<_, <Course as Stored>::Row>(&sql)
            .bind(professor.into_inner())
            .fetch_optional(&mut *self.tx)
            .await?;

        row.map(Course::from_row).transpose()
    }

    async fn detach_professor(&mut self, professor: ProfessorId) -> CampusResult<()> {
        for table in [Course::TABLE, Subject::TABLE] {
            let sql = format!("UPDATE {} SET professor_id = NULL WHERE professor_id = ?", table);
            sqlx::query(&sql)
                .bind(professor.into_inner())
                .execute(&mut *self.tx)
                .await?;
        }
        Ok(())
    }

    async fn commit(self) -> CampusResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::{Resource, SortDirection};
    use campus_domain::Professor;

    #[test]
    fn test_columns() {
        assert_eq!(columns::<Professor>(None), "id, name, email");
        assert_eq!(
            columns::<Course>(Some("c")),
            "c.id, c.name, c.description, c.workload_hours, c.professor_id"
        );
    }

    #[test]
    fn test_order_by_adds_id_tiebreak() {
        let sort = SortSpec::resolve(Some("nome"), Some("desc"), Student::SORT_FIELDS);
        assert_eq!(order_by::<Student>(sort), "name DESC, id ASC");
        assert_eq!(order_by::<Student>(SortSpec::by_id()), "id ASC");
        assert_eq!(sort.direction(), SortDirection::Desc);
    }

    #[test]
    fn test_search_clause() {
        assert_eq!(
            search_clause::<Course>(),
            " WHERE LOWER(name) LIKE ? OR LOWER(description) LIKE ?"
        );
    }
}
