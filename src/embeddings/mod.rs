// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query embedding generation
//!
//! Turns free text into a fixed-length vector via an external embedding
//! provider. Embeddings are generated per request and never cached.

mod gemini;

pub use gemini::GeminiEmbedder;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while generating an embedding
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Non-success status from the embedding API
    #[error("Embedding API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body returned by the provider
        message: String,
    },

    /// The provider call timed out
    #[error("Embedding request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Transport-level failure before a response was received
    #[error("Embedding request failed: {0}")]
    Request(String),

    /// The provider responded with a body we could not parse
    #[error("Invalid embedding response: {0}")]
    InvalidResponse(String),
}

/// A provider that can embed search queries.
///
/// Query embeddings are distinct from document embeddings for providers with
/// asymmetric models; implementations must request the query-side objective.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a non-empty query string, returning the raw vector.
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}
