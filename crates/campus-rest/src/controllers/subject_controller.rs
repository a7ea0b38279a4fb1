//! Subject (Disciplina) controller.

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
use campus_core::SubjectId;
use campus_service::{SubjectRepresentation, SubjectRequest, SubjectSearchResponse};
use tracing::debug;

/// Creates the subject router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subjects).post(create_subject))
        .route("/search", get(search_subjects))
        .route("/:id", get(get_subject).put(update_subject).delete(delete_subject))
}

#[utoipa::path(
    get,
    path = "/disciplinas",
    tag = "disciplinas",
    responses((status = 200, description = "All subjects", body = [SubjectRepresentation]))
)]
pub async fn list_subjects(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
) -> ApiResult<Vec<SubjectRepresentation>> {
    debug!("List subjects request");
    ok(state.subject_service.list_subjects(&base).await?)
}

#[utoipa::path(
    get,
    path = "/disciplinas/{id}",
    tag = "disciplinas",
    params(("id" = i64, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject found", body = SubjectRepresentation),
        (status = 404, description = "Subject not found")
    )
)]
pub async fn get_subject(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
) -> Response {
    debug!("Get subject request: {}", id);

    let result = match parse_id::<SubjectId>(&id, "Disciplina") {
        Ok(id) => state.subject_service.get_subject(id, &base).await,
        Err(err) => Err(err),
    };
    found(result)
}

/// Searches subjects by name or description.
#[utoipa::path(
    get,
    path = "/disciplinas/search",
    tag = "disciplinas",
    params(SearchQuery),
    responses((status = 200, description = "One page of subjects", body = SubjectSearchResponse))
)]
pub async fn search_subjects(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Query(query): Query<SearchQuery>,
) -> ApiResult<SubjectSearchResponse> {
    debug!("Search subjects request: {:?}", query);
    ok(state.subject_service.search_subjects(query.into(), &base).await?)
}

#[utoipa::path(
    post,
    path = "/disciplinas",
    tag = "disciplinas",
    request_body = SubjectRequest,
    responses(
        (status = 201, description = "Subject created", body = SubjectRepresentation),
        (status = 400, description = "Invalid request", body = campus_core::ErrorResponse),
        (status = 404, description = "Professor not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn create_subject(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    JsonBody(request): JsonBody<SubjectRequest>,
) -> Result<(StatusCode, Json<SubjectRepresentation>), AppError> {
    debug!("Create subject request: {}", request.name);

    let response = state.subject_service.create_subject(request, &base).await?;
    Ok(created(response))
}

#[utoipa::path(
    put,
    path = "/disciplinas/{id}",
    tag = "disciplinas",
    params(("id" = i64, Path, description = "Subject ID")),
    request_body = SubjectRequest,
    responses(
        (status = 200, description = "Subject updated", body = SubjectRepresentation),
        (status = 400, description = "Invalid request", body = campus_core::ErrorResponse),
        (status = 404, description = "Subject or professor not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn update_subject(
    State(state): State<AppState>,
    BaseUri(base): BaseUri,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<SubjectRequest>,
) -> ApiResult<SubjectRepresentation> {
    debug!("Update subject request: {}", id);

    let id = parse_id::<SubjectId>(&id, "Disciplina")?;
    ok(state.subject_service.update_subject(id, request, &base).await?)
}

#[utoipa::path(
    delete,
    path = "/disciplinas/{id}",
    tag = "disciplinas",
    params(("id" = i64, Path, description = "Subject ID")),
    responses(
        (status = 204, description = "Subject deleted"),
        (status = 404, description = "Subject not found", body = campus_core::ErrorResponse)
    )
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete subject request: {}", id);

    let id = parse_id::<SubjectId>(&id, "Disciplina")?;
    state.subject_service.delete_subject(id).await?;
    Ok(no_content())
}
