// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multi-modality search endpoint handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info};

use super::request::MultiSearchParams;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// GET /api/multi-search - embed the query text and search across every
/// embedding column, relaying the backend's JSON result verbatim.
///
/// # Errors
/// - 400 Bad Request: `q` missing or empty (no downstream calls made)
/// - 500 Internal Server Error: embedding or backend failure, body
///   `{"error": "Multi-search failed", "details": ...}`
pub async fn multi_search_handler(
    State(state): State<AppState>,
    Query(params): Query<MultiSearchParams>,
) -> Result<Json<Value>, ApiError> {
    let query = params
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::missing_parameter("q"))?;

    info!(query, limit = params.limit, "Processing multi-search query");

    let embedding = state.embedder.embed_query(query).await.map_err(|e| {
        error!(query, "Multi-search error: {}", e);
        ApiError::search_failed(
            "Multi-search failed",
            format!("Embedding generation failed: {e}"),
        )
    })?;

    let payload = json!({
        "query_embedding": embedding,
        "result_limit": params.limit,
        "category_filter": params.category,
        "complexity_filter": params.complexity,
    });

    let result = state
        .postgrest
        .rpc("multi_vector_search", &payload)
        .await
        .map_err(|e| {
            error!(query, "Multi-search error: {}", e);
            ApiError::search_failed("Multi-search failed", e.to_string())
        })?;

    Ok(Json(result))
}
