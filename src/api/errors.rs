// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::fmt;

/// Errors surfaced to API callers as JSON bodies
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A required query parameter was absent; no downstream calls were made
    MissingParameter { name: &'static str },
    /// A search handler failed; `details` carries the underlying failure
    SearchFailed {
        error: &'static str,
        details: String,
    },
    /// The transparent proxy could not reach the backend at all
    ProxyFailed,
}

impl ApiError {
    pub fn missing_parameter(name: &'static str) -> Self {
        ApiError::MissingParameter { name }
    }

    pub fn search_failed(error: &'static str, details: impl Into<String>) -> Self {
        ApiError::SearchFailed {
            error,
            details: details.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            ApiError::SearchFailed { .. } | ApiError::ProxyFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> Value {
        match self {
            ApiError::MissingParameter { name } => {
                json!({ "error": format!("Query parameter \"{}\" is required", name) })
            }
            ApiError::SearchFailed { error, details } => {
                json!({ "error": error, "details": details })
            }
            ApiError::ProxyFailed => json!({ "error": "Proxy request failed" }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingParameter { name } => {
                write!(f, "Query parameter \"{}\" is required", name)
            }
            ApiError::SearchFailed { error, details } => write!(f, "{}: {}", error, details),
            ApiError::ProxyFailed => write!(f, "Proxy request failed"),
        }
    }
}

impl std::error::Error for ApiError {}
