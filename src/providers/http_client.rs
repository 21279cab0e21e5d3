// ABOUTME: Shared HTTP client with connection pooling for relay API calls
// ABOUTME: Singleton pattern with configurable timeouts initialized at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

use crate::constants::{defaults, http};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration.
///
/// Call once at startup before the first live request. If never called,
/// the defaults from [`crate::constants::defaults`] apply. Later calls are
/// no-ops.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Get the shared HTTP client for relay API calls.
///
/// The client pools connections and sends the upstream API's required
/// User-Agent and Accept headers on every request.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((defaults::HTTP_TIMEOUT_SECS, defaults::CONNECT_TIMEOUT_SECS));

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(http::USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(http::GITHUB_ACCEPT));

        ClientBuilder::new()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
