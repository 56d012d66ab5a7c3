// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query-string parameters for GET /api/search

use serde::Deserialize;

use crate::api::query::{default_embedding_type, default_limit, lenient_limit};

/// Parameters for the content search endpoint.
///
/// Filter values are passed through to the backend as-is; the PostgREST
/// procedures are the source of truth for valid vocabulary.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentSearchParams {
    /// Free-text search query (required)
    pub q: Option<String>,

    /// Number of results to return (default 5, lenient parsing)
    #[serde(default = "default_limit", deserialize_with = "lenient_limit")]
    pub limit: u32,

    /// Which embedding column to search against (default "content")
    #[serde(default = "default_embedding_type")]
    pub embedding_type: String,

    /// Optional category filter
    #[serde(default)]
    pub category: Option<String>,

    /// Optional complexity filter
    #[serde(default)]
    pub complexity: Option<String>,
}
