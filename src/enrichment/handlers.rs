//! Axum handlers for the four-step enrichment flow.
//!
//! # Data Flow
//! ```text
//! POST /enrich      → submit_enrichment    (register, 202)
//! GET  /hypothesis  → hypothesis_status    (poll, lazy flip, 200/404)
//! GET  /enrich      → enrichment_results   (fixed payload, 200)
//! POST /hypothesis  → finalize_hypothesis  (canned graph, 201)
//! ```

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::enrichment::types::{
    EnrichmentResponse, FinalizeRequest, GoTerm, HypothesisResponse, IdQuery, StatusResponse,
    SubmitRequest, SubmitResponse, CAUSAL_GENE, GO_TERM_ID, GO_TERM_NAME,
};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Step 1: register an enrichment request. Always succeeds.
pub async fn submit_enrichment(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> impl IntoResponse {
    let record = state.store.submit(request.variant);

    tracing::debug!(
        hypothesis_id = %record.id,
        enrich_id = %record.enrich_id,
        variant = %record.variant,
        "Enrichment submitted"
    );

    (
        StatusCode::ACCEPTED,
        Json(SubmitResponse {
            hypothesis_id: record.id,
            project_id: request.project_id,
        }),
    )
}

/// Step 2: poll request status. The pending→completed transition happens
/// here, on read, once the processing delay has elapsed.
pub async fn hypothesis_status(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Response {
    let Some(id) = query.id else {
        return ApiError::HypothesisNotFound.into_response();
    };

    match state.store.status(&id) {
        Some(record) => (
            StatusCode::OK,
            Json(StatusResponse {
                id: record.id,
                status: record.status,
                phenotype: state.phenotype.clone(),
                enrich_id: record.enrich_id,
            }),
        )
            .into_response(),
        None => {
            tracing::warn!(hypothesis_id = %id, "Status poll for unknown hypothesis");
            ApiError::HypothesisNotFound.into_response()
        }
    }
}

/// Step 3: fetch enrichment results. No lookup at all; the id is echoed
/// back (null included) with the fixed gene and GO term.
pub async fn enrichment_results(Query(query): Query<IdQuery>) -> impl IntoResponse {
    Json(EnrichmentResponse {
        id: query.id,
        causal_gene: CAUSAL_GENE.to_string(),
        go_terms: vec![GoTerm {
            id: GO_TERM_ID.to_string(),
            name: GO_TERM_NAME.to_string(),
        }],
    })
}

/// Step 4: produce the final hypothesis. The supplied id is matched against
/// stored `enrich_id`s to recover the submitted variant; an unrecognized id
/// falls back to the default variant.
pub async fn finalize_hypothesis(
    State(state): State<AppState>,
    Json(request): Json<FinalizeRequest>,
) -> impl IntoResponse {
    let variant = match request.id.as_deref() {
        Some(enrich_id) => state.store.variant_for_enrich_id(enrich_id),
        None => state.store.default_variant().to_string(),
    };

    tracing::debug!(variant = %variant, "Hypothesis finalized");

    (StatusCode::CREATED, Json(HypothesisResponse::for_variant(&variant)))
}
