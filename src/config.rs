// ABOUTME: Environment-based runtime configuration for the acquisition core
// ABOUTME: Parses override variables with typed fallbacks to built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! # Configuration
//!
//! Environment-only configuration: every knob has a built-in default and an
//! override variable named in [`crate::constants::env_config`]. Invalid
//! values fall back to the default with a warning rather than failing
//! startup.

use crate::constants::{defaults, env_config};
use std::env;
use tracing::warn;
use url::Url;

/// Runtime configuration for both data sources
#[derive(Debug, Clone)]
pub struct AcquisitionConfig {
    /// Relay base prefix; `{relay_base}/users/{username}` must resolve
    pub relay_base: String,
    /// Total HTTP request timeout in seconds
    pub http_timeout_secs: u64,
    /// HTTP connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Artificial synthetic-mode latency in milliseconds; 0 disables
    pub synthetic_delay_ms: u64,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            relay_base: defaults::RELAY_BASE.to_owned(),
            http_timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
            synthetic_delay_ms: defaults::SYNTHETIC_DELAY_MS,
        }
    }
}

impl AcquisitionConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for unset or invalid values.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            relay_base: relay_base_from_env(),
            http_timeout_secs: env_u64(env_config::HTTP_TIMEOUT_SECS, defaults::HTTP_TIMEOUT_SECS),
            connect_timeout_secs: env_u64(
                env_config::CONNECT_TIMEOUT_SECS,
                defaults::CONNECT_TIMEOUT_SECS,
            ),
            synthetic_delay_ms: env_u64(
                env_config::SYNTHETIC_DELAY_MS,
                defaults::SYNTHETIC_DELAY_MS,
            ),
        }
    }
}

/// Read a u64 variable, warning and defaulting on parse failure
fn env_u64(name: &str, default: u64) -> u64 {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(var = name, value = %raw, "invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Read the relay base, rejecting values that are not absolute URLs
fn relay_base_from_env() -> String {
    match env::var(env_config::RELAY_URL) {
        Ok(raw) => {
            let trimmed = raw.trim_end_matches('/');
            if Url::parse(trimmed).is_ok() {
                trimmed.to_owned()
            } else {
                warn!(var = env_config::RELAY_URL, value = %raw, "not an absolute URL, using default relay");
                defaults::RELAY_BASE.to_owned()
            }
        }
        Err(_) => defaults::RELAY_BASE.to_owned(),
    }
}
