//! Lock-holding in-memory session.

use super::Tables;
use crate::stored::Stored;
use crate::traits::Session;
use campus_core::{
    CampusResult, CourseId, Page, PageRequest, ProfessorId, SortSpec, StudentId, TextFilter,
};
use campus_domain::{Course, Enrollment, Student};
use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;
use tracing::debug;

/// A unit of work over the in-memory tables.
///
/// The tables are copied before the first write; dropping the session
/// without [`Session::commit`] puts that copy back.
pub struct MemorySession {
    tables: OwnedMutexGuard<Tables>,
    snapshot: Option<Tables>,
    committed: bool,
}

impl MemorySession {
    pub(crate) fn new(tables: OwnedMutexGuard<Tables>) -> Self {
        Self {
            tables,
            snapshot: None,
            committed: false,
        }
    }

    fn write(&mut self) -> &mut Tables {
        if self.snapshot.is_none() {
            self.snapshot = Some((*self.tables).clone());
        }
        &mut self.tables
    }

    fn len_u64(len: usize) -> u64 {
        u64::try_from(len).unwrap_or(u64::MAX)
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Some(snapshot) = self.snapshot.take() {
            debug!("Rolling back uncommitted in-memory session");
            *self.tables = snapshot;
        }
    }
}

#[async_trait]
impl Session for MemorySession {
    async fn find<T: Stored>(&mut self, id: T::Id) -> CampusResult<Option<T>> {
        debug!("Finding {} by id: {}", T::NAME, id);
        Ok(T::table(&self.tables).get(id))
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

        let mut matches: Vec<T> = T::table(&self.tables)
            .values()
            .filter(|item| filter.matches_resource(*item))
            .cloned()
            .collect();
        sort.sort(&mut matches);

        let total = Self::len_u64(matches.len());
        Ok(Page::new(page.slice(matches), page, total))
    }

    async fn list_all<T: Stored>(&mut self, sort: SortSpec) -> CampusResult<Vec<T>> {
        debug!("Listing all {}", T::TABLE);
        let mut items: Vec<T> = T::table(&self.tables).values().cloned().collect();
        sort.sort(&mut items);
        Ok(items)
    }

    async fn insert<T: Stored>(&mut self, draft: T::Draft) -> CampusResult<T> {
        debug!("Inserting into {}", T::TABLE);
        Ok(T::table_mut(self.write()).insert(draft))
    }

    async fn update<T: Stored>(&mut self, item: &T) -> CampusResult<bool> {
        debug!("Updating {} {}", T::NAME, item.id());
        Ok(T::table_mut(self.write()).replace(item))
    }

    async fn delete<T: Stored>(&mut self, id: T::Id) -> CampusResult<bool> {
        debug!("Deleting {} {}", T::NAME, id);
        Ok(T::table_mut(self.write()).remove(id))
    }

    async fn is_enrolled(&mut self, pair: Enrollment) -> CampusResult<bool> {
        Ok(self.tables.enrollments.contains(pair))
    }

    async fn enroll(&mut self, pair: Enrollment) -> CampusResult<bool> {
        debug!("Enrolling {}", pair);
        Ok(self.write().enrollments.insert(pair))
    }

    async fn unenroll(&mut self, pair: Enrollment) -> CampusResult<bool> {
        debug!("Unenrolling {}", pair);
        Ok(self.write().enrollments.remove(pair))
    }

    async fn courses_of_student(&mut self, student: StudentId) -> CampusResult<Vec<Course>> {
        let tables = &*self.tables;
        Ok(tables
            .enrollments
            .courses_of(student)
            .into_iter()
            .filter_map(|course| tables.courses.get(course))
            .collect())
    }

    async fn students_of_course(&mut self, course: CourseId) -> CampusResult<Vec<Student>> {
        let tables = &*self.tables;
        Ok(tables
            .enrollments
            .students_of(course)
            .into_iter()
            .filter_map(|student| tables.students.get(student))
            .collect())
    }

    async fn clear_enrollments_for_student(&mut self, student: StudentId) -> CampusResult<u64> {
        let removed = self.write().enrollments.remove_student(student);
        Ok(Self::len_u64(removed))
    }

    async fn clear_enrollments_for_course(&mut self, course: CourseId) -> CampusResult<u64> {
        let removed = self.write().enrollments.remove_course(course);
        Ok(Self::len_u64(removed))
    }

    async fn course_coordinated_by(
        &mut self,
        professor: ProfessorId,
    ) -> CampusResult<Option<Course>> {
        Ok(self
            .tables
            .courses
            .values()
            .find(|course| course.professor == Some(professor))
            .cloned())
    }

    async fn detach_professor(&mut self, professor: ProfessorId) -> CampusResult<()> {
        let tables = self.write();
        for course in tables.courses.values_mut() {
            if course.professor == Some(professor) {
                course.professor = None;
            }
        }
        for subject in tables.subjects.values_mut() {
            if subject.professor == Some(professor) {
                subject.professor = None;
            }
        }
        Ok(())
    }

    async fn commit(mut self) -> CampusResult<()> {
        self.committed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{InMemoryStore, Session, Store};
    use campus_core::{PageRequest, SortSpec, TextFilter};
    use campus_domain::{
        Course, Email, Enrollment, NewCourse, NewProfessor, NewStudent, NewSubject, Professor,
        Sex, Student, Subject,
    };

    fn student(name: &str, email: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            email: Email::new_unchecked(email),
            sex: Sex::Female,
        }
    }

    fn course(name: &str) -> NewCourse {
        NewCourse {
            name: name.to_string(),
            description: format!("Curso de {}", name),
            workload_hours: 3000,
            professor: None,
        }
    }

    async fn seed_students(store: &InMemoryStore, names: &[&str]) {
        let mut session = store.begin().await.unwrap();
        for name in names {
            let email = format!("{}@campus.edu", name.to_lowercase());
            session.insert::<Student>(student(name, &email)).await.unwrap();
        }
        session.commit().await.unwrap();
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let ana = session
            .insert::<Student>(student("Ana", "ana@x.com"))
            .await
            .unwrap();
        session.commit().await.unwrap();

        let mut session = store.begin().await.unwrap();
        let found = session.find::<Student>(ana.id).await.unwrap().unwrap();
        assert_eq!(found, ana);
    }

    #[tokio::test]
    async fn test_uncommitted_session_rolls_back() {
        let store = InMemoryStore::new();
        seed_students(&store, &["Ana"]).await;

        {
            let mut session = store.begin().await.unwrap();
            session
                .insert::<Student>(student("Bruno", "bruno@x.com"))
                .await
                .unwrap();
            let all = session.list_all::<Student>(SortSpec::by_id()).await.unwrap();
            assert_eq!(all.len(), 2);
        }

        let mut session = store.begin().await.unwrap();
        let all = session.list_all::<Student>(SortSpec::by_id()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_search_counts_before_paging() {
        let store = InMemoryStore::new();
        seed_students(&store, &["Joana", "Pedro", "João", "Jorge", "Maria"]).await;

        let mut session = store.begin().await.unwrap();
        let page = session
            .search::<Student>(
                &TextFilter::new(Some("jo")),
                SortSpec::by_id(),
                PageRequest::new(1, 2),
            )
            .await
            .unwrap();

        assert_eq!(page.total_elements(), 3);
        assert_eq!(page.total_pages(), 2);
        let names: Vec<_> = page.content.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Joana", "João"]);
    }

    #[tokio::test]
    async fn test_search_beyond_last_page_is_empty() {
        let store = InMemoryStore::new();
        seed_students(&store, &["Ana", "Bia", "Carla"]).await;

        let mut session = store.begin().await.unwrap();
        let page = session
            .search::<Student>(&TextFilter::all(), SortSpec::by_id(), PageRequest::new(5, 2))
            .await
            .unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total_elements(), 3);
        assert_eq!(page.total_pages(), 2);
    }

    #[tokio::test]
    async fn test_search_sorts_by_name_descending() {
        let store = InMemoryStore::new();
        seed_students(&store, &["bia", "Ana", "Carla"]).await;

        let mut session = store.begin().await.unwrap();
        let sort = SortSpec::for_resource::<Student>(Some("nome"), Some("DESC"));
        let page = session
            .search::<Student>(&TextFilter::all(), sort, PageRequest::first())
            .await
            .unwrap();

        let names: Vec<_> = page.content.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Carla", "bia", "Ana"]);
    }

    #[tokio::test]
    async fn test_enrollment_views_and_cascade() {
        let store = InMemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let ana = session
            .insert::<Student>(student("Ana", "ana@x.com"))
            .await
            .unwrap();
        let calc = session.insert::<Course>(course("Calc")).await.unwrap();
        let pair = Enrollment::new(ana.id, calc.id);

        assert!(session.enroll(pair).await.unwrap());
        assert!(!session.enroll(pair).await.unwrap());
        assert!(session.is_enrolled(pair).await.unwrap());
        assert_eq!(session.courses_of_student(ana.id).await.unwrap(), vec![calc.clone()]);
        assert_eq!(session.students_of_course(calc.id).await.unwrap(), vec![ana.clone()]);

        assert_eq!(session.clear_enrollments_for_course(calc.id).await.unwrap(), 1);
        assert!(session.courses_of_student(ana.id).await.unwrap().is_empty());
        assert!(!session.unenroll(pair).await.unwrap());
        session.commit().await.unwrap();
    }

    #[tokio::test]
    async fn test_detach_professor() {
        let store = InMemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let rita = session
            .insert::<Professor>(NewProfessor {
                name: "Rita".to_string(),
                email: Email::new_unchecked("rita@x.com"),
            })
            .await
            .unwrap();
        let mut draft = course("Calc");
        draft.professor = Some(rita.id);
        let calc = session.insert::<Course>(draft).await.unwrap();
        let algebra = session
            .insert::<Subject>(NewSubject {
                name: "Álgebra".to_string(),
                description: "Álgebra linear".to_string(),
                workload_hours: 60,
                professor: Some(rita.id),
            })
            .await
            .unwrap();

        assert_eq!(
            session.course_coordinated_by(rita.id).await.unwrap(),
            Some(calc.clone())
        );

        session.detach_professor(rita.id).await.unwrap();
        assert!(session.course_coordinated_by(rita.id).await.unwrap().is_none());
        let subject = session.find::<Subject>(algebra.id).await.unwrap().unwrap();
        assert!(subject.professor.is_none());
        let course = session.find::<Course>(calc.id).await.unwrap().unwrap();
        assert!(course.professor.is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = InMemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let mut ana = session
            .insert::<Student>(student("Ana", "ana@x.com"))
            .await
            .unwrap();

        ana.name = "Ana Maria".to_string();
        assert!(session.update(&ana).await.unwrap());
        assert_eq!(
            session.find::<Student>(ana.id).await.unwrap().unwrap().name,
            "Ana Maria"
        );

        assert!(session.delete::<Student>(ana.id).await.unwrap());
        assert!(!session.delete::<Student>(ana.id).await.unwrap());
        assert!(!session.update(&ana).await.unwrap());
    }
}
