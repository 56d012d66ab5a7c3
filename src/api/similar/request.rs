// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query-string parameters for GET /api/similar

use serde::Deserialize;

use crate::api::query::{default_embedding_type, default_limit, lenient_limit};

/// Parameters for the similar-examples endpoint. Keyed by an existing
/// example id rather than free text, so no embedding is generated.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarParams {
    /// Identifier of the example to find neighbours of (required)
    pub id: Option<String>,

    /// Number of results to return (default 5, lenient parsing)
    #[serde(default = "default_limit", deserialize_with = "lenient_limit")]
    pub limit: u32,

    /// Which embedding column to compare on (default "content")
    #[serde(default = "default_embedding_type")]
    pub embedding_type: String,

    /// Optional category filter
    #[serde(default)]
    pub category: Option<String>,

    /// Optional complexity filter
    #[serde(default)]
    pub complexity: Option<String>,
}
