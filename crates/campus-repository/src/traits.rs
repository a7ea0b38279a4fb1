//! Storage trait definitions.

use crate::Stored;
use campus_core::{
    CampusResult, CourseId, HealthCheck, Page, PageRequest, ProfessorId, SortSpec, StudentId,
    TextFilter,
};
use campus_domain::{Course, Enrollment, Student};
use async_trait::async_trait;

/// A storage backend that hands out sessions.
///
/// Services never hold two sessions of the same store at once.
#[async_trait]
pub trait Store: HealthCheck + Send + Sync + 'static {
    /// The unit of work this backend produces.
    type Session: Session;

    /// Opens a new session.
    async fn begin(&self) -> CampusResult<Self::Session>;
}

/// One unit of work against the store.
///
/// Changes become visible to other sessions only after [`Session::commit`];
/// dropping a session without committing rolls all of them back.
#[async_trait]
pub trait Session: Send {
    /// Finds a resource by ID.
    async fn find<T: Stored>(&mut self, id: T::Id) -> CampusResult<Option<T>>;

    /// Filters, counts, sorts and pages a resource collection.
    ///
    /// The total counts every match, not just the returned slice.
    async fn search<T: Stored>(
        &mut self,
        filter: &TextFilter,
        sort: SortSpec,
        page: PageRequest,
    ) -> CampusResult<Page<T>>;

    /// Lists the whole collection in the given order.
    async fn list_all<T: Stored>(&mut self, sort: SortSpec) -> CampusResult<Vec<T>>;

    /// Persists a new resource and returns it with its assigned ID.
    async fn insert<T: Stored>(&mut self, draft: T::Draft) -> CampusResult<T>;

    /// Overwrites the stored fields of an existing resource.
    /// Returns `false` if no row has that ID.
    async fn update<T: Stored>(&mut self, item: &T) -> CampusResult<bool>;

    /// Deletes a resource by ID. Returns `true` if deleted.
    async fn delete<T: Stored>(&mut self, id: T::Id) -> CampusResult<bool>;

    /// Checks whether the pair is enrolled.
    async fn is_enrolled(&mut self, pair: Enrollment) -> CampusResult<bool>;

    /// Adds the pair. Returns `false` if it was already present.
    async fn enroll(&mut self, pair: Enrollment) -> CampusResult<bool>;

    /// Removes the pair. Returns `false` if it was not present.
    async fn unenroll(&mut self, pair: Enrollment) -> CampusResult<bool>;

    /// Courses the student is enrolled in, by ascending ID.
    async fn courses_of_student(&mut self, student: StudentId) -> CampusResult<Vec<Course>>;

    /// Students enrolled in the course, by ascending ID.
    async fn students_of_course(&mut self, course: CourseId) -> CampusResult<Vec<Student>>;

    /// Drops every enrollment of the student. Returns how many were removed.
    async fn clear_enrollments_for_student(&mut self, student: StudentId) -> CampusResult<u64>;

    /// Drops every enrollment in the course. Returns how many were removed.
    async fn clear_enrollments_for_course(&mut self, course: CourseId) -> CampusResult<u64>;

    /// The course the professor coordinates, if any.
    async fn course_coordinated_by(&mut self, professor: ProfessorId)
        -> CampusResult<Option<Course>>;

    /// Clears the professor reference on every course and subject.
    async fn detach_professor(&mut self, professor: ProfessorId) -> CampusResult<()>;

    /// Makes the session's changes durable.
    async fn commit(self) -> CampusResult<()>;
}
