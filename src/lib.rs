// ABOUTME: Main library entry point for the octoscope profile analytics core
// ABOUTME: Provides synthetic and live GitHub data sources behind one acquisition orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

#![deny(unsafe_code)]

//! # Octoscope
//!
//! The data-acquisition core of a profile-analytics view for a GitHub
//! account. Given a username, it resolves a profile, a repository list, and
//! a 31-day commit-activity series from one of two interchangeable sources
//! and owns the request lifecycle state the presentation layer reads.
//!
//! ## Features
//!
//! - **Two data sources**: a live fetcher routed through a CORS relay, and a
//!   seeded synthetic generator producing self-consistent demo data
//! - **Deterministic synthesis**: the whole synthetic dataset is reproducible
//!   from the username-derived seed
//! - **Typed failures**: every non-success outcome is classified into a
//!   single user-facing message; consumers never see raw errors
//! - **Lifecycle state machine**: Idle → Loading → Success/Error with
//!   wholesale snapshot replacement and no stale partial results
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octoscope::config::AcquisitionConfig;
//! use octoscope::models::SourceMode;
//! use octoscope::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() {
//!     let orchestrator = Orchestrator::new(&AcquisitionConfig::from_env());
//!     orchestrator.acquire("octocat", SourceMode::Synthetic).await;
//!     let state = orchestrator.snapshot();
//!     println!("{:?}: {} repositories", state.phase, state.repositories.len());
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Providers**: the [`providers::core::ProfileDataSource`] trait with
//!   synthetic and GitHub implementations
//! - **Models**: shared domain structs for profiles, repositories, and
//!   commit activity
//! - **Orchestrator**: the single mutating entry point owning
//!   [`orchestrator::RequestState`]
//! - **Config**: environment-driven runtime configuration

/// Environment-based runtime configuration
pub mod config;

/// System-wide constants and defaults
pub mod constants;

/// Acquisition error taxonomy and HTTP status classification
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Shared domain models
pub mod models;

/// Acquisition orchestrator and request lifecycle state
pub mod orchestrator;

/// Data source implementations (synthetic and live)
pub mod providers;
