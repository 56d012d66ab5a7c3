// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /api/search - single-modality content search

mod handler;
mod request;

pub use handler::content_search_handler;
pub use request::ContentSearchParams;
