// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Environment-sourced middleware configuration

use std::env;
use thiserror::Error;

/// Default listen port when `MIDDLEWARE_PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Default PostgREST base URL when `POSTGREST_URL` is unset
pub const DEFAULT_POSTGREST_URL: &str = "http://127.0.0.1:3001";

/// Configuration loaded once at startup and shared read-only afterwards
#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    /// Port the middleware listens on
    pub port: u16,
    /// Base URL of the PostgREST backend (already rewritten to IPv4)
    pub postgrest_url: String,
    /// Google Generative Language API key
    pub google_api_key: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY is not set in environment variables")]
    MissingApiKey,
}

impl MiddlewareConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing or empty `GOOGLE_API_KEY` is fatal; the other options fall
    /// back to defaults. An unparseable `MIDDLEWARE_PORT` also falls back.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("MIDDLEWARE_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let postgrest_url =
            env::var("POSTGREST_URL").unwrap_or_else(|_| DEFAULT_POSTGREST_URL.to_string());

        let google_api_key = env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            port,
            postgrest_url: ensure_ipv4_url(&postgrest_url),
            google_api_key,
        })
    }
}

/// Rewrite `localhost` to `127.0.0.1` so outbound calls never resolve to
/// `::1` on dual-stack hosts.
pub fn ensure_ipv4_url(url: &str) -> String {
    url.replace("localhost", "127.0.0.1")
}
