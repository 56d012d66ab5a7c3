// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content search endpoint handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info};

use super::request::ContentSearchParams;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// GET /api/search - embed the query text and run a single-modality
/// vector search, relaying the backend's JSON result verbatim.
///
/// # Errors
/// - 400 Bad Request: `q` missing or empty (no downstream calls made)
/// - 500 Internal Server Error: embedding or backend failure, body
///   `{"error": "Search failed", "details": ...}`
pub async fn content_search_handler(
    State(state): State<AppState>,
    Query(params): Query<ContentSearchParams>,
) -> Result<Json<Value>, ApiError> {
    let query = params
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::missing_parameter("q"))?;

    info!(
        query,
        embedding_type = %params.embedding_type,
        limit = params.limit,
        "Processing search query"
    );

    let embedding = state.embedder.embed_query(query).await.map_err(|e| {
        error!(query, "Search error: {}", e);
        ApiError::search_failed("Search failed", format!("Embedding generation failed: {e}"))
    })?;

    let payload = json!({
        "query_embedding": embedding,
        "embedding_type": params.embedding_type,
        "result_limit": params.limit,
        "category_filter": params.category,
        "complexity_filter": params.complexity,
    });

    let result = state
        .postgrest
        .rpc("vector_search", &payload)
        .await
        .map_err(|e| {
            error!(query, "Search error: {}", e);
            ApiError::search_failed("Search failed", e.to_string())
        })?;

    Ok(Json(result))
}
