//! OpenAPI documentation configuration.

use crate::controllers::{
    course_controller, health_controller, professor_controller, student_controller,
    subject_controller, HealthResponse, ReadinessResponse,
};
use campus_core::{CourseId, ErrorResponse, FieldError, PageInfo, ProfessorId, StudentId, SubjectId};
use campus_domain::Sex;
use campus_service::{
    CourseRepresentation, CourseRequest, CourseSearchResponse, CourseSummary, ProfessorRef,
    ProfessorRepresentation, ProfessorRequest, ProfessorSearchResponse, ProfessorView,
    StudentRepresentation, StudentRequest, StudentSearchResponse, StudentSummary,
    SubjectRepresentation, SubjectRequest, SubjectSearchResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the campus records API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Records API",
        version = "1.0.0",
        description = "Students, courses, professors, subjects and enrollments",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Students
        student_controller::list_students,
        student_controller::get_student,
        student_controller::search_students,
        student_controller::create_student,
        student_controller::update_student,
        student_controller::delete_student,
        student_controller::student_courses,
        student_controller::enroll,
        student_controller::unenroll,
        // Courses
        course_controller::list_courses,
        course_controller::get_course,
        course_controller::search_courses,
        course_controller::create_course,
        course_controller::update_course,
        course_controller::delete_course,
        course_controller::course_students,
        course_controller::enroll,
        course_controller::unenroll,
        // Professors
        professor_controller::list_professors,
        professor_controller::get_professor,
        professor_controller::search_professors,
        professor_controller::create_professor,
        professor_controller::update_professor,
        professor_controller::delete_professor,
        // Subjects
        subject_controller::list_subjects,
        subject_controller::get_subject,
        subject_controller::search_subjects,
        subject_controller::create_subject,
        subject_controller::update_subject,
        subject_controller::delete_subject,
        // Health
        health_controller::health_check,
        health_controller::readiness_check,
        health_controller::liveness_check,
    ),
    components(
        schemas(
            StudentId,
            CourseId,
            ProfessorId,
            SubjectId,
            Sex,
            PageInfo,
            ErrorResponse,
            FieldError,
            ProfessorRef,
            StudentRequest,
            StudentRepresentation,
            StudentSearchResponse,
            CourseSummary,
            CourseRequest,
            CourseRepresentation,
            CourseSearchResponse,
            StudentSummary,
            ProfessorView,
            ProfessorRequest,
            ProfessorRepresentation,
            ProfessorSearchResponse,
            SubjectRequest,
            SubjectRepresentation,
            SubjectSearchResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "alunos", description = "Students and their enrollments"),
        (name = "cursos", description = "Courses and their enrolled students"),
        (name = "professores", description = "Professors"),
        (name = "disciplinas", description = "Subjects"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_resource_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/alunos", "/alunos/{id}/cursos/{curso_id}", "/cursos/search", "/disciplinas/{id}", "/ready"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
