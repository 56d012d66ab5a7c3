// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process-wide outbound HTTP client
//!
//! One client (and connection pool) is built at startup and shared by the
//! embedder, the PostgREST RPC client, and the transparent proxy.

use reqwest::Client;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// Fixed per-call deadline for every outbound request
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Build the shared outbound client.
///
/// The local side is bound to an IPv4 address so connections never go out
/// over IPv6. Environment-compatibility requirement, not a performance one.
pub fn build_shared_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        assert!(build_shared_client().is_ok());
    }
}
