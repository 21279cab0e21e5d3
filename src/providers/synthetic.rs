// ABOUTME: Seed derivation and deterministic synthetic dataset generation
// ABOUTME: Fabricates self-consistent profile, repository, and commit-activity data from a username
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! # Synthetic Source
//!
//! Fabricates a plausible dataset for any username without touching the
//! network. A single [`StdRng`] seeded from [`derive_seed`] drives every
//! generated field, so the whole dataset is reproducible for a fixed
//! username and reference time. The commit-activity series uses a closed
//! formula over the seed and calendar date instead of the RNG stream,
//! which keeps it reproducible independently of field generation order.
//!
//! Generation never fails for a valid, non-empty username; callers trim
//! and validate before calling.

use super::core::ProfileDataSource;
use crate::errors::AcquireError;
use crate::models::{CommitActivityPoint, Dataset, Profile, Repository};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration as StdDuration;
use tracing::debug;

/// Fixed language set for synthetic repositories
pub const LANGUAGES: [&str; 10] = [
    "JavaScript",
    "TypeScript",
    "Python",
    "Rust",
    "Go",
    "Java",
    "Kotlin",
    "Swift",
    "Ruby",
    "C++",
];

/// Bio templates, one chosen per profile when a bio is rolled
const BIOS: [&str; 5] = [
    "Building things one commit at a time",
    "Open source enthusiast",
    "Software developer and lifelong learner",
    "Turning coffee into code",
    "Working on developer tools",
];

/// Days in the window a synthetic account may have been created in
const PROFILE_AGE_DAYS: u32 = 5 * 365;

/// Days in the window a synthetic repository may have been created in
const REPOSITORY_AGE_DAYS: u32 = 3 * 365;

/// Number of points in a commit-activity series: today plus 30 prior days
const ACTIVITY_DAYS: i64 = 31;

/// Derive the numeric seed for a username: the sum of its character codes.
///
/// Case-sensitive, no normalization. Pure and deterministic.
#[must_use]
pub fn derive_seed(username: &str) -> u64 {
    username.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Generate the full synthetic dataset for a username at the current time.
#[must_use]
pub fn generate_dataset(username: &str) -> Dataset {
    generate_dataset_at(username, Utc::now())
}

/// Generate the full synthetic dataset for a username at a fixed reference
/// time. The explicit `now` makes the output reproducible in tests.
#[must_use]
pub fn generate_dataset_at(username: &str, now: DateTime<Utc>) -> Dataset {
    let seed = derive_seed(username);
    let mut rng = StdRng::seed_from_u64(seed);
    debug!(username, seed, "generating synthetic dataset");

    let profile = synth_profile(username, now, &mut rng);
    let repositories = synth_repositories(username, profile.public_repos, now, &mut rng);
    let activity = commit_activity(seed, now.date_naive());

    Dataset {
        profile,
        repositories,
        activity,
    }
}

/// Compute the 31-day commit-activity series ending `today`, oldest first.
///
/// For each day: `day_value = day_of_month + zero_based_month * 30`,
/// `factor = sin(seed * day_value * 0.1) * 0.5 + 0.5`, and the count is
/// `floor(factor * 12)` held within `0..=11`. One point per calendar day,
/// strictly increasing, no gaps.
#[must_use]
pub fn commit_activity(seed: u64, today: NaiveDate) -> Vec<CommitActivityPoint> {
    let mut points = Vec::with_capacity(usize::try_from(ACTIVITY_DAYS).unwrap_or(31));
    for offset in (0..ACTIVITY_DAYS).rev() {
        let date = today - Duration::days(offset);
        let day_value = f64::from(date.day() + date.month0() * 30);
        // Seeds are small char-code sums, far below f64's exact-integer range
        #[allow(clippy::cast_precision_loss)]
        let factor = ((seed as f64) * day_value * 0.1).sin() * 0.5 + 0.5;
        // factor is in [0, 1]; sin(x) == 1.0 exactly would floor to 12
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = (((factor * 12.0).floor()) as u32).min(11);
        points.push(CommitActivityPoint { date, count });
    }
    points
}

fn synth_profile(username: &str, now: DateTime<Utc>, rng: &mut StdRng) -> Profile {
    let public_repos = rng.gen_range(2..=31);
    let followers = rng.gen_range(10..=1009);
    let following = rng.gen_range(5..=204);
    let created_at = now - Duration::days(i64::from(rng.gen_range(0..=PROFILE_AGE_DAYS)));
    let bio = rng
        .gen_bool(0.7)
        .then(|| BIOS.choose(rng).copied().unwrap_or(BIOS[0]).to_owned());

    let initial = username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    Profile {
        login: username.to_owned(),
        display_name: Some(capitalize(username)),
        avatar_url: format!("https://ui-avatars.com/api/?name={initial}"),
        bio,
        public_repos,
        followers,
        following,
        created_at,
    }
}

fn synth_repositories(
    username: &str,
    cap: u32,
    now: DateTime<Utc>,
    rng: &mut StdRng,
) -> Vec<Repository> {
    let count = rng.gen_range(3..=10u32).min(cap);
    let mut repositories = Vec::with_capacity(count as usize);

    for i in 1..=count {
        let name = format!("{username}-project-{i}");
        let url = format!("https://github.com/{username}/{name}");
        let stars = rng.gen_range(0..=499);
        let forks = rng.gen_range(0..=199);
        let language = rng.gen_bool(0.9).then(|| pick_language(rng));
        let description = rng.gen_bool(0.8).then(|| {
            // Reference the repository language, re-rolling one when absent
            let lang = language.unwrap_or_else(|| pick_language(rng));
            format!("A {lang} project by {username}")
        });
        let created_at = now - Duration::days(i64::from(rng.gen_range(0..=REPOSITORY_AGE_DAYS)));

        repositories.push(Repository {
            id: u64::from(i),
            name,
            description,
            url,
            stars,
            forks,
            language: language.map(str::to_owned),
            created_at,
        });
    }

    repositories
}

fn pick_language(rng: &mut StdRng) -> &'static str {
    LANGUAGES.choose(rng).copied().unwrap_or(LANGUAGES[0])
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out: String = first.to_uppercase().collect();
        out.push_str(chars.as_str());
        out
    })
}

/// Synthetic data source, driving the generator through the shared trait.
///
/// Both fetch methods project the same deterministic dataset, so the
/// repository count always respects the profile's `public_repos` cap even
/// across separate calls. An optional artificial delay simulates remote
/// latency; it is applied once per acquisition, on the profile fetch.
pub struct SyntheticSource {
    delay: StdDuration,
}

impl SyntheticSource {
    /// Create a source with no artificial latency
    #[must_use]
    pub fn new() -> Self {
        Self {
            delay: StdDuration::ZERO,
        }
    }

    /// Create a source that sleeps for `delay` before resolving a profile
    #[must_use]
    pub fn with_delay(delay: StdDuration) -> Self {
        Self { delay }
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileDataSource for SyntheticSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn fetch_profile(&self, username: &str) -> Result<Profile, AcquireError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(generate_dataset(username).profile)
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>, AcquireError> {
        Ok(generate_dataset(username).repositories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_the_sum_of_character_codes() {
        assert_eq!(derive_seed("abc"), 294);
        assert_eq!(derive_seed("octocat"), 749);
    }

    #[test]
    fn seed_is_case_sensitive() {
        assert_ne!(derive_seed("A"), derive_seed("a"));
        assert_eq!(derive_seed("A"), 65);
        assert_eq!(derive_seed("a"), 97);
    }

    #[test]
    fn capitalize_uppercases_only_the_first_character() {
        assert_eq!(capitalize("octocat"), "Octocat");
        assert_eq!(capitalize("o"), "O");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn activity_counts_stay_below_twelve() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        for seed in 0..500 {
            for point in commit_activity(seed, today) {
                assert!(point.count <= 11, "seed {seed} produced {}", point.count);
            }
        }
    }
}
