// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API surface
//!
//! Four handler groups: health probe, the three search endpoints, and the
//! transparent `/direct` proxy.

pub mod errors;
pub mod http_server;
pub mod multi_search;
pub mod proxy;
pub mod query;
pub mod search;
pub mod similar;

pub use errors::ApiError;
pub use http_server::{router, start_server, AppState};
