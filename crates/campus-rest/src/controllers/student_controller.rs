//! Student (Aluno) controller, including enrollment from the student side.

use crate::{
    extractors::{parse_id, BaseUri, JsonBody, SearchQuery},
    responses::{created, found, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use campus_core::{CourseId, StudentId};
use campus_service::{StudentRepresentation, StudentRequest, StudentSearchResponse};
use tracing::debug;

/// Creates the student router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/search", get(search_students))
        .route("/:id", get(get_student).put(update_student).delete(delete_student))
        .route("/:id/cursos", get(student_courses))
        .route("/:id/cursos/:curso_id", post(enroll).delete(unenroll))
}

/// Lists every student.
#[utoipa::path(
    get,
    path = "/alunos",
    tag = "alunos",
    responses((status = 200, description = "All students", body = [StudentRepresentation]))
)]
pub async fn list_students(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
) -> ApiResult<Vec<StudentRepresentation>> {
    debug!("List students request");
    ok(state.student_service.list_students(&base).await?)
}

/// Gets a student by ID.
#[utoipa::path(
    get,
    path = "/alunos/{id}",
    tag = "alunos",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = StudentRepresentation),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
) -> Response {
    debug!("Get student request: {}", id);

    let result = match parse_id::<StudentId>(&id, "Aluno") {
        Ok(id) => state.student_service.get_student(id, &base).await,
        Err(err) => Err(err),
    };
    found(result)
}

/// Searches students by name or email.
#[utoipa::path(
    get,
    path = "/alunos/search",
    tag = "alunos",
    params(SearchQuery),
    responses((status = 200, description = "One page of students", body = StudentSearchResponse))
)]
pub async fn search_students(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Query(query): Query<SearchQuery>,
) -> ApiResult<StudentSearchResponse> {
    debug!("Search students request: {:?}", query);
    ok(state.student_service.search_students(query.into(), &base).await?)
}

/// Creates a student.
#[utoipa::path(
    post,
    path = "/alunos",
    tag = "alunos",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentRepresentation),
        (status = 400, description = "Invalid request", body = campus_core::ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    JsonBody(request): JsonBody<StudentRequest>,
) -> Result<(StatusCode, Json<StudentRepresentation>), AppError> {
    debug!("Create student request: {}", request.name);

    let response = state.student_service.create_student(request, &base).await?;
    Ok(created(response))
}

/// Replaces a student's fields.
#[utoipa::path(
    put,
    path = "/alunos/{id}",
    tag = "alunos",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentRepresentation),
        (status = 400, description = "Invalid request", body = campus_core::ErrorResponse),
        (status = 404, description = "Student not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<StudentRequest>,
) -> ApiResult<StudentRepresentation> {
    debug!("Update student request: {}", id);

    let id = parse_id::<StudentId>(&id, "Aluno")?;
    ok(state.student_service.update_student(id, request, &base).await?)
}

/// Deletes a student and its enrollments.
#[utoipa::path(
    delete,
    path = "/alunos/{id}",
    tag = "alunos",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete student request: {}", id);

    let id = parse_id::<StudentId>(&id, "Aluno")?;
    state.student_service.delete_student(id).await?;
    Ok(no_content())
}

/// The student with its enrolled courses.
#[utoipa::path(
    get,
    path = "/alunos/{id}/cursos",
    tag = "alunos",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student with courses", body = StudentRepresentation),
        (status = 404, description = "Student not found")
    )
)]
pub async fn student_courses(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
) -> Response {
    debug!("Student courses request: {}", id);

    let result = match parse_id::<StudentId>(&id, "Aluno") {
        Ok(id) => state.student_service.student_courses(id, &base).await,
        Err(err) => Err(err),
    };
    found(result)
}

/// Enrolls the student in a course.
#[utoipa::path(
    post,
    path = "/alunos/{id}/cursos/{curso_id}",
    tag = "alunos",
    params(
        ("id" = i64, Path, description = "Student ID"),
        ("curso_id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrolled", body = StudentRepresentation),
        (status = 404, description = "Student or course not found", body = campus_core::ErrorResponse),
        (status = 409, description = "Already enrolled", body = campus_core::ErrorResponse)
    )
)]
pub async fn enroll(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path((id, course_id)): Path<(String, String)>,
) -> ApiResult<StudentRepresentation> {
    debug!("Enroll request: aluno {} / curso {}", id, course_id);

    let id = parse_id::<StudentId>(&id, "Aluno")?;
    let course = parse_id::<CourseId>(&course_id, "Curso")?;
    ok(state.student_service.enroll_in_course(id, course, &base).await?)
}

/// Removes the student from a course.
#[utoipa::path(
    delete,
    path = "/alunos/{id}/cursos/{curso_id}",
    tag = "alunos",
    params(
        ("id" = i64, Path, description = "Student ID"),
        ("curso_id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Unenrolled"),
        (status = 400, description = "Not enrolled", body = campus_core::ErrorResponse),
        (status = 404, description = "Student or course not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn unenroll(
    State(state): State<AppState>,
    Path((id, course_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    debug!("Unenroll request: aluno {} / curso {}", id, course_id);

    let id = parse_id::<StudentId>(&id, "Aluno")?;
    let course = parse_id::<CourseId>(&course_id, "Curso")?;
    state.student_service.unenroll_from_course(id, course).await?;
    Ok(no_content())
}
