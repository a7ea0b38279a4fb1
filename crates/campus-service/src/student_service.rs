//! Student service trait definition.

use crate::dto::{StudentRepresentation, StudentRequest, StudentSearchResponse};
use async_trait::async_trait;
use campus_core::{CampusResult, CourseId, LinkBase, SearchParams, StudentId};

/// Student service trait.
///
/// Every operation that returns a representation takes the base URI its
/// links are built from.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Lists every student, by ascending ID.
    async fn list_students(&self, base: &LinkBase) -> CampusResult<Vec<StudentRepresentation>>;

    /// Gets a student by ID.
    async fn get_student(&self, id: StudentId, base: &LinkBase) -> CampusResult<StudentRepresentation>;

    /// Searches, sorts and pages students.
    async fn search_students(&self, params: SearchParams, base: &LinkBase) -> CampusResult<StudentSearchResponse>;

    /// Creates a new student.
    async fn create_student(&self, request: StudentRequest, base: &LinkBase) -> CampusResult<StudentRepresentation>;

    /// Replaces a student's fields. Enrollments are kept.
    async fn update_student(
        &self,
        id: StudentId,
        request: StudentRequest,
        base: &LinkBase,
    ) -> CampusResult<StudentRepresentation>;

    /// Deletes a student and its enrollments.
    async fn delete_student(&self, id: StudentId) -> CampusResult<()>;

    /// Enrolls the student in a course and returns the refreshed student.
    async fn enroll_in_course(
        &self,
        id: StudentId,
        course: CourseId,
        base: &LinkBase,
    ) -> CampusResult<StudentRepresentation>;

    /// The student with its enrolled courses.
    async fn student_courses(&self, id: StudentId, base: &LinkBase) -> CampusResult<StudentRepresentation>;

    /// Removes the student from a course.
    async fn unenroll_from_course(&self, id: StudentId, course: CourseId) -> CampusResult<()>;
}
