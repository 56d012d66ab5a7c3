// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use htmx_search_middleware::{
    api::{start_server, AppState},
    config::MiddlewareConfig,
    http_client,
};
use std::env;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging()?;

    let config = match MiddlewareConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let http = http_client::build_shared_client()?;
    let state = AppState::new(config, http);

    start_server(state).await
}

/// Console plus two JSON file sinks: everything to `combined.log`, errors
/// additionally to `error.log`.
fn init_logging() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    let combined = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("combined.log")?;
    let errors = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("error.log")?;

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(combined)),
        )
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(errors))
                .with_filter(LevelFilter::ERROR),
        )
        .init();

    Ok(())
}
