//! Project directory endpoint.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::enrichment::types::IdQuery;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::projects::directory::ProjectList;

/// `GET /api/mock/hypothesis/projects`: with `?id=` returns the full record
/// (or 404); without, an abbreviated listing of both fixed records.
pub async fn list_or_get(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Response {
    match query.id {
        Some(id) => match state.projects.get(&id) {
            Some(project) => Json(project.clone()).into_response(),
            None => {
                tracing::warn!(project_id = %id, "Lookup for unknown project");
                ApiError::ProjectNotFound.into_response()
            }
        },
        None => Json(ProjectList {
            projects: state.projects.summaries(),
        })
        .into_response(),
    }
}
