// ABOUTME: System-wide constants and configuration defaults for octoscope
// ABOUTME: Contains environment variable names, relay defaults, and HTTP metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! # Constants Module
//!
//! Hardcoded constants and the names of the environment variables that
//! override them. Parsing and fallback behavior lives in [`crate::config`].

/// Environment variable names
pub mod env_config {
    /// Overrides the relay base prefix for live requests
    pub const RELAY_URL: &str = "OCTOSCOPE_RELAY_URL";

    /// Overrides the total HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "OCTOSCOPE_HTTP_TIMEOUT_SECS";

    /// Overrides the HTTP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "OCTOSCOPE_CONNECT_TIMEOUT_SECS";

    /// Overrides the artificial synthetic-mode latency in milliseconds
    pub const SYNTHETIC_DELAY_MS: &str = "OCTOSCOPE_SYNTHETIC_DELAY_MS";
}

/// Default configuration values
pub mod defaults {
    /// Path-prefix relay routing requests to the upstream API, bypassing
    /// same-origin restrictions: `{relay}/users/{username}` must resolve.
    pub const RELAY_BASE: &str = "https://cors.isomorphic-git.org/https://api.github.com";

    /// Total request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Artificial latency applied once per synthetic acquisition; 0 disables
    pub const SYNTHETIC_DELAY_MS: u64 = 400;
}

/// HTTP request metadata for the upstream API
pub mod http {
    /// User-Agent sent on every live request (the upstream API rejects
    /// anonymous clients)
    pub const USER_AGENT: &str = concat!("octoscope/", env!("CARGO_PKG_VERSION"));

    /// GitHub v3 media type
    pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

    /// First page only, sorted by last update upstream
    pub const REPOS_PER_PAGE: u8 = 10;
}
