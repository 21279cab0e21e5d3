// ABOUTME: Shared domain models for profiles, repositories, and commit activity
// ABOUTME: Source-agnostic structs consumed by the orchestrator and presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! # Domain Models
//!
//! The shared response-side contract for both data sources. Live wire
//! formats are converted into these structs inside the fetcher; the
//! synthetic generator produces them directly. All entities are created
//! fresh per acquisition and replaced wholesale; nothing is cached or
//! reused across usernames.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Selects which data source backs an acquisition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Fabricated data from the seeded generator
    Synthetic,
    /// Live data through the relay
    Remote,
}

/// A hosting-account profile resolved from a username
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Public login handle, the lookup key (non-empty)
    pub login: String,
    /// Display name, when the account has one set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Avatar image reference (opaque URI)
    pub avatar_url: String,
    /// Free-form biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Public repository count; upper-bounds synthetic repository generation
    pub public_repos: u32,
    /// Follower count
    pub followers: u32,
    /// Following count
    pub following: u32,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

/// A repository belonging to exactly one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    /// Positive identifier, unique within a result set
    pub id: u64,
    /// Repository name
    pub name: String,
    /// Short description, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Web URL of the repository
    pub url: String,
    /// Star count
    pub stars: u32,
    /// Fork count
    pub forks: u32,
    /// Primary language, drawn from a fixed set for synthetic data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Repository creation time
    pub created_at: DateTime<Utc>,
}

/// One day of commit activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitActivityPoint {
    /// Calendar date (no time component)
    pub date: NaiveDate,
    /// Commit count for that day, in `0..=11`
    pub count: u32,
}

/// The complete result of one synthetic generation pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    /// Fabricated profile for the username
    pub profile: Profile,
    /// Fabricated repositories, capped by `profile.public_repos`
    pub repositories: Vec<Repository>,
    /// 31-day commit activity series, oldest first
    pub activity: Vec<CommitActivityPoint>,
}
