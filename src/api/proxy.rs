// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Transparent proxy to the PostgREST backend
//!
//! Any request under `/direct` is forwarded with the prefix stripped. The
//! response body is streamed through chunk by chunk, never buffered, so
//! memory use stays bounded for large result sets.

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

const DIRECT_PREFIX: &str = "/direct";

/// ANY /direct/*path - relay the request to the backend byte-for-byte.
///
/// Downstream non-success statuses are not errors on this path; status,
/// headers, and body are relayed as-is. Only a transport-level failure
/// produces a local 500.
pub async fn proxy_handler(State(state): State<AppState>, req: Request) -> Response {
    match relay(state, req).await {
        Ok(response) => response,
        Err(e) => {
            error!("PostgREST proxy error: {}", e);
            ApiError::ProxyFailed.into_response()
        }
    }
}

async fn relay(state: AppState, req: Request) -> Result<Response> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let stripped = path_and_query
        .strip_prefix(DIRECT_PREFIX)
        .unwrap_or(path_and_query);
    let target = format!("{}{}", state.postgrest.base_url(), stripped);

    info!("Proxying request to: {}", target);

    // axum and reqwest pin different `http` major versions, so method and
    // header values cross the boundary as bytes.
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())?;

    let mut headers = reqwest::header::HeaderMap::new();
    for (name, value) in req.headers() {
        if name == header::HOST {
            continue;
        }
        headers.append(
            reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes())?,
            reqwest::header::HeaderValue::from_bytes(value.as_bytes())?,
        );
    }

    let body = axum::body::to_bytes(req.into_body(), usize::MAX).await?;

    let upstream = state
        .http
        .request(method, &target)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let mut builder = Response::builder().status(StatusCode::from_u16(upstream.status().as_u16())?);
    if let Some(response_headers) = builder.headers_mut() {
        for (name, value) in upstream.headers() {
            // The server frames its own response; relaying hop-by-hop
            // framing headers would corrupt it.
            if name == reqwest::header::CONNECTION || name == reqwest::header::TRANSFER_ENCODING {
                continue;
            }
            response_headers.append(
                HeaderName::from_bytes(name.as_str().as_bytes())?,
                HeaderValue::from_bytes(value.as_bytes())?,
            );
        }
    }

    Ok(builder.body(Body::from_stream(upstream.bytes_stream()))?)
}
