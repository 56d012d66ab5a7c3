// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Similar-examples endpoint handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info};

use super::request::SimilarParams;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// GET /api/similar - find examples similar to an existing one.
///
/// Skips the embedder entirely: the backend already holds the embedding for
/// the given example id.
///
/// # Errors
/// - 400 Bad Request: `id` missing or empty (no downstream calls made)
/// - 500 Internal Server Error: backend failure, body
///   `{"error": "Similar examples search failed", "details": ...}`
pub async fn similar_handler(
    State(state): State<AppState>,
    Query(params): Query<SimilarParams>,
) -> Result<Json<Value>, ApiError> {
    let example_id = params
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::missing_parameter("id"))?;

    info!(
        example_id,
        embedding_type = %params.embedding_type,
        limit = params.limit,
        "Processing similar examples query"
    );

    let payload = json!({
        "example_id": example_id,
        "embedding_type": params.embedding_type,
        "result_limit": params.limit,
        "category_filter": params.category,
        "complexity_filter": params.complexity,
    });

    let result = state
        .postgrest
        .rpc("find_similar_examples", &payload)
        .await
        .map_err(|e| {
            error!(example_id, "Similar examples error: {}", e);
            ApiError::search_failed("Similar examples search failed", e.to_string())
        })?;

    Ok(Json(result))
}
