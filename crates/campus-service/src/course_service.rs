//! Course service trait definition.

use crate::dto::{CourseRepresentation, CourseRequest, CourseSearchResponse};
use async_trait::async_trait;
use campus_core::{CampusResult, CourseId, LinkBase, SearchParams, StudentId};

/// Course service trait.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Lists every course, by ascending ID.
    async fn list_courses(&self, base: &LinkBase) -> CampusResult<Vec<CourseRepresentation>>;

    /// Gets a course by ID.
    async fn get_course(&self, id: CourseId, base: &LinkBase) -> CampusResult<CourseRepresentation>;

    /// Searches, sorts and pages courses.
    async fn search_courses(&self, params: SearchParams, base: &LinkBase) -> CampusResult<CourseSearchResponse>;

    /// Creates a new course. A referenced professor must exist and must not
    /// coordinate another course.
    async fn create_course(&self, request: CourseRequest, base: &LinkBase) -> CampusResult<CourseRepresentation>;

    /// Replaces a course's fields. Enrollments are kept.
    async fn update_course(
        &self,
        id: CourseId,
        request: CourseRequest,
        base: &LinkBase,
    ) -> CampusResult<CourseRepresentation>;

    /// Deletes a course and its enrollments.
    async fn delete_course(&self, id: CourseId) -> CampusResult<()>;

    /// Enrolls a student in the course and returns the refreshed course.
    async fn enroll_student(
        &self,
        id: CourseId,
        student: StudentId,
        base: &LinkBase,
    ) -> CampusResult<CourseRepresentation>;

    /// The course with its enrolled students.
    async fn course_students(&self, id: CourseId, base: &LinkBase) -> CampusResult<CourseRepresentation>;

    /// Removes a student from the course.
    async fn unenroll_student(&self, id: CourseId, student: StudentId) -> CampusResult<()>;
}
