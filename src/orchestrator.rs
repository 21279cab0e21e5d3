// ABOUTME: Acquisition orchestrator owning the request lifecycle state machine
// ABOUTME: Sequences source calls, classifies failures, and guards against interleaved requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! # Acquisition Orchestrator
//!
//! The single mutating entry point of the crate. One [`Orchestrator`] owns
//! one [`RequestState`]; consumers read cloned snapshots and never observe
//! partial updates. An acquisition transitions Idle/previous → Loading →
//! Success or Error, clearing all three result collections together at
//! every boundary so no stale mix of usernames can ever be displayed.
//!
//! At most one acquisition is in flight: a second `acquire` while Loading
//! is rejected as a no-op. A request generation captured at start and
//! checked at commit time drops results of superseded requests, and the
//! in-flight flag is released by a drop guard even if the calling future
//! is cancelled mid-await.

use crate::config::AcquisitionConfig;
use crate::errors::AcquireError;
use crate::models::{CommitActivityPoint, Profile, Repository, SourceMode};
use crate::providers::core::ProfileDataSource;
use crate::providers::http_client::initialize_shared_client;
use crate::providers::{create_source, synthetic};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Phase of the current acquisition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPhase {
    /// No acquisition has run yet
    #[default]
    Idle,
    /// An acquisition is in flight
    Loading,
    /// The last acquisition completed and its data is populated
    Success,
    /// The last acquisition failed and `error` holds the message
    Error,
}

/// The single mutable record describing the current acquisition.
///
/// Exactly one of Success-with-data, Error-with-message, or
/// Idle/Loading-with-empty-data holds at any time.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct RequestState {
    /// Current lifecycle phase
    pub phase: RequestPhase,
    /// Resolved profile, populated only in Success
    pub profile: Option<Profile>,
    /// Resolved repositories, populated only in Success
    pub repositories: Vec<Repository>,
    /// Commit-activity series, populated only in Success
    pub activity: Vec<CommitActivityPoint>,
    /// User-facing message, populated only in Error
    pub error: Option<String>,
}

/// What happened to an `acquire` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// The request ran to completion and its result was applied
    Applied,
    /// Another acquisition was already in flight; this call was a no-op
    Busy,
    /// A newer acquisition superseded this one; its result was dropped
    Superseded,
}

/// Releases the in-flight flag on every exit path, including cancellation
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Public entry point: selects a data source per request, sequences the
/// calls, and owns the lifecycle state consumers read.
pub struct Orchestrator {
    state: Arc<RwLock<RequestState>>,
    generation: AtomicU64,
    in_flight: Arc<AtomicBool>,
    remote: Arc<dyn ProfileDataSource>,
    synthetic: Arc<dyn ProfileDataSource>,
}

impl Orchestrator {
    /// Create an orchestrator with sources built from the given config.
    ///
    /// Also initializes the shared HTTP client timeouts; the first
    /// constructed orchestrator wins, later calls are no-ops.
    #[must_use]
    pub fn new(config: &AcquisitionConfig) -> Self {
        initialize_shared_client(config.http_timeout_secs, config.connect_timeout_secs);
        Self::with_sources(
            create_source(SourceMode::Remote, config),
            create_source(SourceMode::Synthetic, config),
        )
    }

    /// Create an orchestrator with explicit source implementations
    #[must_use]
    pub fn with_sources(
        remote: Arc<dyn ProfileDataSource>,
        synthetic: Arc<dyn ProfileDataSource>,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(RequestState::default())),
            generation: AtomicU64::new(0),
            in_flight: Arc::new(AtomicBool::new(false)),
            remote,
            synthetic,
        }
    }

    /// Read-only snapshot of the current request state
    #[must_use]
    pub fn snapshot(&self) -> RequestState {
        self.state
            .read()
            .map_or_else(|poisoned| poisoned.into_inner().clone(), |guard| guard.clone())
    }

    /// Current lifecycle phase
    #[must_use]
    pub fn phase(&self) -> RequestPhase {
        self.snapshot().phase
    }

    /// Run one acquisition for `username` against the source selected by
    /// `mode`, replacing the owned state wholesale on completion.
    ///
    /// An empty or whitespace-only username transitions straight to Error
    /// without any I/O. While an acquisition is in flight, further calls
    /// are rejected as no-ops.
    pub async fn acquire(&self, username: &str, mode: SourceMode) -> AcquireOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!(username, "acquisition already in flight, ignoring request");
            return AcquireOutcome::Busy;
        }
        let _guard = InFlightGuard {
            flag: Arc::clone(&self.in_flight),
        };

        let username = username.trim();
        if username.is_empty() {
            self.fail(&AcquireError::EmptyUsername.to_string());
            return AcquireOutcome::Applied;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.write_state(|state| {
            state.phase = RequestPhase::Loading;
            state.error = None;
            state.profile = None;
            state.repositories.clear();
            state.activity.clear();
        });

        let source = match mode {
            SourceMode::Remote => Arc::clone(&self.remote),
            SourceMode::Synthetic => Arc::clone(&self.synthetic),
        };
        info!(username, source = source.name(), "starting acquisition");

        let result = run_acquisition(source.as_ref(), username).await;

        if generation != self.generation.load(Ordering::SeqCst) {
            debug!(username, "stale acquisition superseded, dropping result");
            return AcquireOutcome::Superseded;
        }

        match result {
            Ok((profile, repositories, activity)) => {
                info!(
                    username,
                    repositories = repositories.len(),
                    "acquisition succeeded"
                );
                self.write_state(|state| {
                    state.phase = RequestPhase::Success;
                    state.error = None;
                    state.profile = Some(profile);
                    state.repositories = repositories;
                    state.activity = activity;
                });
            }
            Err(err) => {
                warn!(username, error = %err, "acquisition failed");
                self.fail(&err.to_string());
            }
        }
        AcquireOutcome::Applied
    }

    /// Transition to Error with `message`, clearing all result collections
    fn fail(&self, message: &str) {
        self.write_state(|state| {
            state.phase = RequestPhase::Error;
            state.error = Some(message.to_owned());
            state.profile = None;
            state.repositories.clear();
            state.activity.clear();
        });
    }

    fn write_state(&self, mutate: impl FnOnce(&mut RequestState)) {
        // Writers only assign fields, so a poisoned lock still holds a
        // consistent state and can be recovered
        let mut guard = match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        mutate(&mut guard);
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(&AcquisitionConfig::default())
    }
}

/// Fetch profile and repositories from the source, then derive the
/// commit-activity series from the seeded generator. Activity is never
/// fetched remotely; both modes shape it from the username seed. Nothing
/// is committed unless every step succeeds, so a repository failure
/// discards the already-fetched profile.
async fn run_acquisition(
    source: &dyn ProfileDataSource,
    username: &str,
) -> Result<(Profile, Vec<Repository>, Vec<CommitActivityPoint>), AcquireError> {
    let profile = source.fetch_profile(username).await?;
    let repositories = source.fetch_repositories(username).await?;
    let activity = synthetic::commit_activity(
        synthetic::derive_seed(username),
        Utc::now().date_naive(),
    );
    Ok((profile, repositories, activity))
}
