// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! PostgREST RPC client
//!
//! Invokes named remote procedures (`/rpc/{function}`) with a JSON payload
//! and returns the backend's JSON body. One call per request, no retries.

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::ensure_ipv4_url;

/// Errors from a PostgREST remote procedure call
#[derive(Debug, Error)]
pub enum RpcError {
    /// Transport-level failure before a response was received
    #[error("PostgREST request failed: {0}")]
    Transport(String),

    /// Non-success status from the backend
    #[error("PostgREST error: {status} - {body}")]
    ErrorStatus {
        /// HTTP status code
        status: u16,
        /// Error body returned by the backend
        body: String,
    },

    /// The backend responded with a body we could not parse as JSON
    #[error("Invalid PostgREST response: {0}")]
    InvalidResponse(String),
}

/// Client for the PostgREST query backend
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    base_url: String,
    client: Client,
}

impl PostgrestClient {
    /// Create a client for the given base URL, rewriting `localhost` to an
    /// IPv4 literal once up front.
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: ensure_ipv4_url(&base_url.into()),
            client,
        }
    }

    /// Base URL of the backend (IPv4-rewritten, no trailing slash expected)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke a named remote procedure with a JSON payload.
    pub async fn rpc(&self, function: &str, payload: &Value) -> Result<Value, RpcError> {
        let url = format!("{}/rpc/{}", self.base_url, function);
        info!("Making request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::ErrorStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))
    }
}
