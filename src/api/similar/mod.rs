// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /api/similar - similarity by existing example id

mod handler;
mod request;

pub use handler::similar_handler;
pub use request::SimilarParams;
