// ABOUTME: Core data source trait for unified profile data access
// ABOUTME: Defines the shared request/response contract both sources implement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! # Data Source Trait
//!
//! The shared contract for resolving a username into profile data.
//! Implementations convert their internal representation (wire DTOs for the
//! live source, generator output for the synthetic one) into the shared
//! domain models in [`crate::models`], and classify their failures into
//! [`AcquireError`]. Commit activity is deliberately absent from this
//! trait: it is always produced by the seeded generator, never fetched.

use crate::errors::AcquireError;
use crate::models::{Profile, Repository};
use async_trait::async_trait;

/// A source of profile and repository data for a username.
///
/// Implementations must be cheap to construct and hold no per-request
/// state; the orchestrator creates results fresh on every acquisition.
#[async_trait]
pub trait ProfileDataSource: Send + Sync {
    /// Stable identifier used in logs
    fn name(&self) -> &'static str;

    /// Resolve a username to its profile.
    ///
    /// # Errors
    ///
    /// Returns a classified [`AcquireError`] on lookup failure. The
    /// synthetic implementation never fails for a valid username.
    async fn fetch_profile(&self, username: &str) -> Result<Profile, AcquireError>;

    /// Resolve a username to its repositories (first page, capped at 10,
    /// sorted by last update).
    ///
    /// # Errors
    ///
    /// Returns a classified [`AcquireError`] on lookup failure. The
    /// synthetic implementation never fails for a valid username.
    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>, AcquireError>;
}
