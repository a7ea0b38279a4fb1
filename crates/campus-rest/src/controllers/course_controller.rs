//! Course (Curso) controller, including enrollment from the course side.

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
use campus_service::{CourseRepresentation, CourseRequest, CourseSearchResponse};
use tracing::debug;

/// Creates the course router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/search", get(search_courses))
        .route("/:id", get(get_course).put(update_course).delete(delete_course))
        .route("/:id/alunos", get(course_students))
        .route("/:id/alunos/:aluno_id", post(enroll).delete(unenroll))
}

/// Lists every course.
#[utoipa::path(
    get,
    path = "/cursos",
    tag = "cursos",
    responses((status = 200, description = "All courses", body = [CourseRepresentation]))
)]
pub async fn list_courses(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
) -> ApiResult<Vec<CourseRepresentation>> {
    debug!("List courses request");
    ok(state.course_service.list_courses(&base).await?)
}

/// Gets a course by ID.
#[utoipa::path(
    get,
    path = "/cursos/{id}",
    tag = "cursos",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = CourseRepresentation),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
) -> Response {
    debug!("Get course request: {}", id);

    let result = match parse_id::<CourseId>(&id, "Curso") {
        Ok(id) => state.course_service.get_course(id, &base).await,
        Err(err) => Err(err),
    };
    found(result)
}

/// Searches courses by name or description.
#[utoipa::path(
    get,
    path = "/cursos/search",
    tag = "cursos",
    params(SearchQuery),
    responses((status = 200, description = "One page of courses", body = CourseSearchResponse))
)]
pub async fn search_courses(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Query(query): Query<SearchQuery>,
) -> ApiResult<CourseSearchResponse> {
    debug!("Search courses request: {:?}", query);
    ok(state.course_service.search_courses(query.into(), &base).await?)
}

/// Creates a course.
#[utoipa::path(
    post,
    path = "/cursos",
    tag = "cursos",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseRepresentation),
        (status = 400, description = "Invalid request", body = campus_core::ErrorResponse),
        (status = 404, description = "Professor not found", body = campus_core::ErrorResponse),
        (status = 409, description = "Professor already coordinates a course", body = campus_core::ErrorResponse)
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    JsonBody(request): JsonBody<CourseRequest>,
) -> Result<(StatusCode, Json<CourseRepresentation>), AppError> {
    debug!("Create course request: {}", request.name);

    let response = state.course_service.create_course(request, &base).await?;
    Ok(created(response))
}

/// Replaces a course's fields.
#[utoipa::path(
    put,
    path = "/cursos/{id}",
    tag = "cursos",
    params(("id" = i64, Path, description = "Course ID")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseRepresentation),
        (status = 400, description = "Invalid request", body = campus_core::ErrorResponse),
        (status = 404, description = "Course or professor not found", body = campus_core::ErrorResponse),
        (status = 409, description = "Professor already coordinates a course", body = campus_core::ErrorResponse)
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<CourseRequest>,
) -> ApiResult<CourseRepresentation> {
    debug!("Update course request: {}", id);

    let id = parse_id::<CourseId>(&id, "Curso")?;
    ok(state.course_service.update_course(id, request, &base).await?)
}

/// Deletes a course and its enrollments.
#[utoipa::path(
    delete,
    path = "/cursos/{id}",
    tag = "cursos",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete course request: {}", id);

    let id = parse_id::<CourseId>(&id, "Curso")?;
    state.course_service.delete_course(id).await?;
    Ok(no_content())
}

/// The course with its enrolled students.
#[utoipa::path(
    get,
    path = "/cursos/{id}/alunos",
    tag = "cursos",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course with students", body = CourseRepresentation),
        (status = 404, description = "Course not found")
    )
)]
pub async fn course_students(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
) -> Response {
    debug!("Course students request: {}", id);

    let result = match parse_id::<CourseId>(&id, "Curso") {
        Ok(id) => state.course_service.course_students(id, &base).await,
        Err(err) => Err(err),
    };
    found(result)
}

/// Enrolls a student in the course.
#[utoipa::path(
    post,
    path = "/cursos/{id}/alunos/{aluno_id}",
    tag = "cursos",
    params(
        ("id" = i64, Path, description = "Course ID"),
        ("aluno_id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Enrolled", body = CourseRepresentation),
        (status = 404, description = "Course or student not found", body = campus_core::ErrorResponse),
        (status = 409, description = "Already enrolled", body = campus_core::ErrorResponse)
    )
)]
pub async fn enroll(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path((id, student_id)): Path<(String, String)>,
) -> ApiResult<CourseRepresentation> {
    debug!("Enroll request: curso {} / aluno {}", id, student_id);

    let id = parse_id::<CourseId>(&id, "Curso")?;
    let student = parse_id::<StudentId>(&student_id, "Aluno")?;
    ok(state.course_service.enroll_student(id, student, &base).await?)
}

/// Removes a student from the course.
#[utoipa::path(
    delete,
    path = "/cursos/{id}/alunos/{aluno_id}",
    tag = "cursos",
    params(
        ("id" = i64, Path, description = "Course ID"),
        ("aluno_id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Unenrolled"),
        (status = 400, description = "Not enrolled", body = campus_core::ErrorResponse),
        (status = 404, description = "Course or student not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn unenroll(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    debug!("Unenroll request: curso {} / aluno {}", id, student_id);

    let id = parse_id::<CourseId>(&id, "Curso")?;
    let student = parse_id::<StudentId>(&student_id, "Aluno")?;
    state.course_service.unenroll_student(id, student).await?;
    Ok(no_content())
}
