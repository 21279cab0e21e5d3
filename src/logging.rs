// ABOUTME: Structured logging setup for the acquisition core
// ABOUTME: Configures env-filtered tracing output in pretty, compact, or JSON form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! Logging configuration with structured output for embedders.
//!
//! The library itself only emits `tracing` events; embedding applications
//! (or tests) call [`LoggingConfig::init`] once to install a subscriber.

use anyhow::{anyhow, Result};
use std::env;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format for development
    Pretty,
    /// Single-line format for space-constrained environments
    Compact,
    /// `JSON` format for production log pipelines
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `octoscope=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Build configuration from `RUST_LOG` and `LOG_FORMAT`
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
        Self { level, format }
    }

    /// Install the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"))
            // Quiet the HTTP stack regardless of the application level
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "reqwest=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            );

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();
                registry
                    .with(layer)
                    .try_init()
                    .map_err(|e| anyhow!("failed to install subscriber: {e}"))
            }
            LogFormat::Pretty => {
                let layer = fmt::layer().with_target(true).with_writer(io::stdout);
                registry
                    .with(layer)
                    .try_init()
                    .map_err(|e| anyhow!("failed to install subscriber: {e}"))
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stdout)
                    .compact();
                registry
                    .with(layer)
                    .try_init()
                    .map_err(|e| anyhow!("failed to install subscriber: {e}"))
            }
        }
    }
}
