use axum::{
    routing::{any, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{multi_search, proxy, search, similar};
use crate::config::MiddlewareConfig;
use crate::embeddings::{EmbeddingProvider, GeminiEmbedder};
use crate::postgrest::PostgrestClient;

/// Shared per-process state: read-only configuration plus the shared
/// outbound client and the two services built on it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MiddlewareConfig>,
    pub embedder: Arc<dyn EmbeddingProvider>,
    pub postgrest: PostgrestClient,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: MiddlewareConfig, http: reqwest::Client) -> Self {
        let embedder = Arc::new(GeminiEmbedder::new(
            config.google_api_key.clone(),
            http.clone(),
        ));
        let postgrest = PostgrestClient::new(config.postgrest_url.clone(), http.clone());
        Self {
            config: Arc::new(config),
            embedder,
            postgrest,
            http,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Embedding-based search endpoints
        .route("/api/search", get(search::content_search_handler))
        .route("/api/multi-search", get(multi_search::multi_search_handler))
        .route("/api/similar", get(similar::similar_handler))
        // Transparent passthrough to PostgREST
        .route("/direct/*path", any(proxy::proxy_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let port = state.config.port;
    let postgrest_url = state.config.postgrest_url.clone();
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Middleware listening on port {}", port);
    tracing::info!("Connected to PostgREST at {}", postgrest_url);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Liveness probe: constant payload, no dependency checks. Readiness is a
/// different concern and deliberately not conflated with it.
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
