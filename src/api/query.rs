// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared query-string parameter helpers for the search endpoints

use serde::{Deserialize, Deserializer};

/// Result limit used when `limit` is absent or malformed
pub const DEFAULT_RESULT_LIMIT: u32 = 5;

pub(crate) fn default_limit() -> u32 {
    DEFAULT_RESULT_LIMIT
}

pub(crate) fn default_embedding_type() -> String {
    "content".to_string()
}

/// Lenient `limit` parsing: anything that is not an integer coalesces to the
/// default instead of rejecting the request.
pub(crate) fn lenient_limit<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<u32>().unwrap_or(DEFAULT_RESULT_LIMIT))
}
