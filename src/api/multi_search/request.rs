// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query-string parameters for GET /api/multi-search

use serde::Deserialize;

use crate::api::query::{default_limit, lenient_limit};

/// Parameters for the multi-modality search endpoint.
///
/// Unlike the content search there is no `embedding_type`: the backend
/// procedure searches across every embedding column.
#[derive(Debug, Clone, Deserialize)]
pub struct MultiSearchParams {
    /// Free-text search query (required)
    pub q: Option<String>,

    /// Number of results to return (default 5, lenient parsing)
    #[serde(default = "default_limit", deserialize_with = "lenient_limit")]
    pub limit: u32,

    /// Optional category filter
    #[serde(default)]
    pub category: Option<String>,

    /// Optional complexity filter
    #[serde(default)]
    pub complexity: Option<String>,
}
