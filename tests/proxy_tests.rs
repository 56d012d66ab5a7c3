// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Integration tests for the transparent /direct proxy: forwarding
//! semantics against a mockito backend, and incremental (unbuffered)
//! delivery against a real streaming backend.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use bytes::Bytes;
use futures_util::{stream, StreamExt};
use htmx_search_middleware::{
    api::{router, AppState},
    config::MiddlewareConfig,
    embeddings::GeminiEmbedder,
    postgrest::PostgrestClient,
};
use mockito::Matcher;
use serde_json::json;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tower::ServiceExt;

fn test_state(postgrest_base: &str) -> AppState {
    let http = reqwest::Client::new();
    let config = MiddlewareConfig {
        port: 0,
        postgrest_url: postgrest_base.to_string(),
        google_api_key: "test-key".to_string(),
    };
    AppState {
        embedder: Arc::new(GeminiEmbedder::new(
            config.google_api_key.clone(),
            http.clone(),
        )),
        postgrest: PostgrestClient::new(postgrest_base, http.clone()),
        http,
        config: Arc::new(config),
    }
}

#[tokio::test]
async fn proxy_forwards_method_body_and_headers_without_host() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("PUT", "/foo/bar")
        .match_header("x-custom", "1")
        // The inbound Host must not leak through; reqwest sets the
        // backend's own host instead.
        .match_header("host", Matcher::Regex(r"127\.0\.0\.1:\d+".to_string()))
        .match_body(r#"{"value": 41}"#)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("x-backend-version", "9.1")
        .with_body(r#"{"updated": true}"#)
        .expect(1)
        .create_async()
        .await;

    let response = router(test_state(&server.url()))
        .oneshot(
            Request::put("/direct/foo/bar")
                .header("host", "client.example.com")
                .header("x-custom", "1")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"value": 41}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-backend-version").unwrap(),
        "9.1"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], br#"{"updated": true}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn proxy_preserves_query_string() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/examples")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("select".into(), "id".into()),
            Matcher::UrlEncoded("limit".into(), "3".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let response = router(test_state(&server.url()))
        .oneshot(
            Request::get("/direct/examples?select=id&limit=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    mock.assert_async().await;
}

#[tokio::test]
async fn proxy_relays_downstream_error_status_and_body() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/broken")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"reason":"overloaded"}"#)
        .create_async()
        .await;

    let response = router(test_state(&server.url()))
        .oneshot(Request::get("/direct/broken").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // Downstream status passes through untouched on the proxy path.
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], br#"{"reason":"overloaded"}"#);
}

#[tokio::test]
async fn proxy_reports_500_when_backend_unreachable() {
    let response = router(test_state("http://127.0.0.1:9"))
        .oneshot(Request::get("/direct/anything").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Proxy request failed" }));
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Backend whose body stalls after the first chunk until `notify` fires.
/// If the proxy buffered the whole body, nothing would reach the client
/// before the notification.
fn chunked_backend(notify: Arc<Notify>) -> Router {
    Router::new().route(
        "/stream",
        get(move || {
            let notify = notify.clone();
            async move {
                let body_stream = stream::unfold(0u8, move |step| {
                    let notify = notify.clone();
                    async move {
                        match step {
                            0 => Some((
                                Ok::<Bytes, Infallible>(Bytes::from_static(b"chunk-one;")),
                                1,
                            )),
                            1 => {
                                notify.notified().await;
                                Some((Ok(Bytes::from_static(b"chunk-two")), 2))
                            }
                            _ => None,
                        }
                    }
                });
                Body::from_stream(body_stream)
            }
        }),
    )
}

#[tokio::test]
async fn proxy_streams_response_without_full_buffering() {
    let notify = Arc::new(Notify::new());
    let backend_addr = spawn(chunked_backend(notify.clone())).await;
    let middleware_addr = spawn(router(test_state(&format!("http://{backend_addr}")))).await;

    let response = reqwest::get(format!("http://{middleware_addr}/direct/stream"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let mut body_stream = response.bytes_stream();

    // The first chunk must arrive while the backend is still holding the
    // second one back.
    let mut first = Vec::new();
    while first.len() < b"chunk-one;".len() {
        let chunk = tokio::time::timeout(Duration::from_secs(5), body_stream.next())
            .await
            .expect("first chunk should arrive before the backend finishes")
            .expect("stream ended early")
            .unwrap();
        first.extend_from_slice(&chunk);
    }
    assert_eq!(first, b"chunk-one;");

    notify.notify_one();

    let mut rest = Vec::new();
    while let Some(chunk) = body_stream.next().await {
        rest.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(rest, b"chunk-two");
}
