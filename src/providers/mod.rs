// ABOUTME: Data source implementations for profile analytics acquisition
// ABOUTME: Unifies live relay-routed fetching and seeded synthetic generation behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! # Data Sources
//!
//! Both acquisition modes implement [`core::ProfileDataSource`], so the
//! orchestrator sequences one trait regardless of where the data comes
//! from. [`create_source`] is the factory the orchestrator uses to select
//! an implementation per mode.

use crate::config::AcquisitionConfig;
use crate::models::SourceMode;
use std::sync::Arc;
use std::time::Duration;

/// Shared request/response trait for data sources
pub mod core;

/// Live fetcher routed through the CORS relay
pub mod github;

/// Shared HTTP client with configured timeouts
pub mod http_client;

/// Seed derivation and the deterministic dataset generator
pub mod synthetic;

/// Create a data source instance for the given mode
#[must_use]
pub fn create_source(mode: SourceMode, config: &AcquisitionConfig) -> Arc<dyn core::ProfileDataSource> {
    match mode {
        SourceMode::Synthetic => Arc::new(synthetic::SyntheticSource::with_delay(
            Duration::from_millis(config.synthetic_delay_ms),
        )),
        SourceMode::Remote => Arc::new(github::GitHubSource::new(config.relay_base.clone())),
    }
}
