// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Semantic search middleware for the HTMX examples database.
//!
//! Converts natural-language queries into embeddings via the Google
//! Generative Language API and forwards them to a PostgREST backend for
//! vector similarity search. Requests under `/direct` are proxied to the
//! backend unchanged.

pub mod api;
pub mod config;
pub mod embeddings;
pub mod http_client;
pub mod postgrest;
