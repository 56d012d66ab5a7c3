// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /api/multi-search - multi-modality vector search

mod handler;
mod request;

pub use handler::multi_search_handler;
pub use request::MultiSearchParams;
