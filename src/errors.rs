// ABOUTME: Acquisition error taxonomy and HTTP status classification
// ABOUTME: Converts non-success responses into typed errors with user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! # Error Handling
//!
//! Every failure an acquisition can hit maps to exactly one variant here,
//! and every variant renders a single human-readable message. Errors are
//! terminal for the current attempt; nothing is retried. They are caught
//! at the orchestrator boundary, so no error value ever reaches the
//! presentation layer.

use thiserror::Error;

/// Which upstream endpoint a response came from.
///
/// Classification differs between the two: a 404 on the profile lookup
/// names the missing user, while a 404 on the repositories endpoint after a
/// successful profile fetch is not expected and gets a generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// `GET {relay}/users/{username}`
    Profile,
    /// `GET {relay}/users/{username}/repos`
    Repositories,
}

/// Typed failure taxonomy for one acquisition attempt
#[derive(Debug, Error)]
pub enum AcquireError {
    /// Username was empty after trimming; no request was made
    #[error("Please enter a username")]
    EmptyUsername,

    /// Profile lookup returned 404
    #[error("User '{username}' not found")]
    NotFound {
        /// The username that was looked up
        username: String,
    },

    /// Either endpoint returned 403
    #[error("API rate limit exceeded, try again later")]
    RateLimited,

    /// Repositories endpoint returned 404
    #[error("Failed to fetch repositories")]
    RepositoriesUnavailable,

    /// Any other non-2xx response
    #[error("API error: {status}")]
    Remote {
        /// The HTTP status code received
        status: u16,
    },

    /// Transport-level failure (unreachable relay, timeout, bad body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl AcquireError {
    /// Classify a non-success HTTP status for the given endpoint.
    #[must_use]
    pub fn from_status(status: u16, kind: FetchKind, username: &str) -> Self {
        match (status, kind) {
            (404, FetchKind::Profile) => Self::NotFound {
                username: username.to_owned(),
            },
            (404, FetchKind::Repositories) => Self::RepositoriesUnavailable,
            (403, _) => Self::RateLimited,
            (status, _) => Self::Remote { status },
        }
    }
}
