// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google Generative Language API embedding provider
//!
//! Calls `models/text-embedding-004:embedContent` with the
//! `RETRIEVAL_QUERY` task type. Using the document-side task type here
//! degrades retrieval quality, so the tag is fixed.

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::{EmbeddingError, EmbeddingProvider};
use crate::http_client::REQUEST_TIMEOUT_SECS;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const EMBEDDING_MODEL: &str = "models/text-embedding-004";
const TASK_TYPE_QUERY: &str = "RETRIEVAL_QUERY";

/// Gemini embedding client backed by the shared HTTP client
#[derive(Debug, Clone)]
pub struct GeminiEmbedder {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GeminiEmbedder {
    /// Create a new embedder.
    ///
    /// # Arguments
    /// * `api_key` - Google Generative Language API key
    /// * `client` - shared outbound HTTP client
    pub fn new(api_key: String, client: Client) -> Self {
        Self {
            api_key,
            base_url: GEMINI_API_BASE.to_string(),
            client,
        }
    }

    /// Point the embedder at a different API base (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbedder {
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        info!("Generating embedding for query: \"{}\"", text);

        let url = format!(
            "{}/{}:embedContent?key={}",
            self.base_url, EMBEDDING_MODEL, self.api_key
        );

        let request = EmbedContentRequest {
            model: EMBEDDING_MODEL,
            content: Content {
                parts: vec![Part { text }],
            },
            task_type: TASK_TYPE_QUERY,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EmbeddingError::Timeout {
                        timeout_ms: REQUEST_TIMEOUT_SECS * 1000,
                    }
                } else {
                    EmbeddingError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: EmbedContentResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::InvalidResponse(e.to_string()))?;

        let values = data.embedding.values;
        info!("Generated embedding with {} dimensions", values.len());

        Ok(values)
    }
}

#[derive(Debug, serde::Serialize)]
struct EmbedContentRequest<'a> {
    model: &'a str,
    content: Content<'a>,
    #[serde(rename = "taskType")]
    task_type: &'a str,
}

#[derive(Debug, serde::Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct EmbedContentResponse {
    embedding: EmbeddingValues,
}

#[derive(Debug, serde::Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}
