//! Professor controller.

use crate::{
    extractors::{parse_id, BaseUri, JsonBody, SearchQuery},
    responses::{created, found, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use campus_core::ProfessorId;
use campus_service::{ProfessorRepresentation, ProfessorRequest, ProfessorSearchResponse};
use tracing::debug;

/// Creates the professor router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_professors).post(create_professor))
        .route("/search", get(search_professors))
        .route(
            "/:id",
            get(get_professor).put(update_professor).delete(delete_professor),
        )
}

#[utoipa::path(
    get,
    path = "/professores",
    tag = "professores",
    responses((status = 200, description = "All professors", body = [ProfessorRepresentation]))
)]
pub async fn list_professors(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
) -> ApiResult<Vec<ProfessorRepresentation>> {
    debug!("List professors request");
    ok(state.professor_service.list_professors(&base).await?)
}

#[utoipa::path(
    get,
    path = "/professores/{id}",
    tag = "professores",
    params(("id" = i64, Path, description = "Professor ID")),
    responses(
        (status = 200, description = "Professor found", body = ProfessorRepresentation),
        (status = 404, description = "Professor not found")
    )
)]
pub async fn get_professor(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
) -> Response {
    debug!("Get professor request: {}", id);

    let result = match parse_id::<ProfessorId>(&id, "Professor") {
        Ok(id) => state.professor_service.get_professor(id, &base).await,
        Err(err) => Err(err),
    };
    found(result)
}

/// Searches professors by name or email.
#[utoipa::path(
    get,
    path = "/professores/search",
    tag = "professores",
    params(SearchQuery),
    responses((status = 200, description = "One page of professors", body = ProfessorSearchResponse))
)]
pub async fn search_professors(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Query(query): Query<SearchQuery>,
) -> ApiResult<ProfessorSearchResponse> {
    debug!("Search professors request: {:?}", query);
    ok(state.professor_service.search_professors(query.into(), &base).await?)
}

#[utoipa::path(
    post,
    path = "/professores",
    tag = "professores",
    request_body = ProfessorRequest,
    responses(
        (status = 201, description = "Professor created", body = ProfessorRepresentation),
        (status = 400, description = "Invalid request", body = campus_core::ErrorResponse)
    )
)]
pub async fn create_professor(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    JsonBody(request): JsonBody<ProfessorRequest>,
) -> Result<(StatusCode, Json<ProfessorRepresentation>), AppError> {
    debug!("Create professor request: {}", request.name);

    let response = state.professor_service.create_professor(request, &base).await?;
    Ok(created(response))
}

#[utoipa::path(
    put,
    path = "/professores/{id}",
    tag = "professores",
    params(("id" = i64, Path, description = "Professor ID")),
    request_body = ProfessorRequest,
    responses(
        (status = 200, description = "Professor updated", body = ProfessorRepresentation),
        (status = 400, description = "Invalid request", body = campus_core::ErrorResponse),
        (status = 404, description = "Professor not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn update_professor(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<ProfessorRequest>,
) -> ApiResult<ProfessorRepresentation> {
    debug!("Update professor request: {}", id);

    let id = parse_id::<ProfessorId>(&id, "Professor")?;
    ok(state.professor_service.update_professor(id, request, &base).await?)
}

/// Deletes a professor; courses and subjects it was assigned to keep
/// existing without one.
#[utoipa::path(
    delete,
    path = "/professores/{id}",
    tag = "professores",
    params(("id" = i64, Path, description = "Professor ID")),
    responses(
        (status = 204, description = "Professor deleted"),
        (status = 404, description = "Professor not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn delete_professor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete professor request: {}", id);

    let id = parse_id::<ProfessorId>(&id, "Professor")?;
    state.professor_service.delete_professor(id).await?;
    Ok(no_content())
}
