// ABOUTME: Test suite for seed derivation and the deterministic synthetic generator
// ABOUTME: Verifies dataset invariants, reproducibility, and the commit-activity formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Datelike, Duration, NaiveDate};
use octoscope::providers::core::ProfileDataSource;
use octoscope::providers::synthetic::{
    commit_activity, derive_seed, generate_dataset_at, SyntheticSource, LANGUAGES,
};

// ============================================================================
// Seed Derivation
// ============================================================================

#[test]
fn test_seed_is_deterministic() {
    common::init_test_logging();
    for username in ["octocat", "torvalds", "a", "MixedCase123"] {
        assert_eq!(derive_seed(username), derive_seed(username));
    }
}

#[test]
fn test_known_seed_values() {
    assert_eq!(derive_seed("abc"), 294);
    assert_eq!(derive_seed("octocat"), 749);
}

// ============================================================================
// Commit Activity Series
// ============================================================================

#[test]
fn test_activity_has_31_consecutive_days_ending_today() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let series = commit_activity(derive_seed("octocat"), today);

    assert_eq!(series.len(), 31);
    assert_eq!(series.first().unwrap().date, today - Duration::days(30));
    assert_eq!(series.last().unwrap().date, today);
    for window in series.windows(2) {
        assert_eq!(
            window[1].date,
            window[0].date + Duration::days(1),
            "series must be strictly increasing with no gaps"
        );
    }
}

#[test]
fn test_activity_counts_are_bounded() {
    let today = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
    for username in ["octocat", "torvalds", "x", "someone-else"] {
        for point in commit_activity(derive_seed(username), today) {
            assert!(point.count <= 11);
        }
    }
}

#[test]
fn test_activity_matches_closed_formula() {
    // count = floor((sin(seed * (day + month0 * 30) * 0.1) * 0.5 + 0.5) * 12)
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let series = commit_activity(294, today);
    let expected = [
        1, 3, 11, 3, 2, 11, 4, 1, 11, 5, 0, 10, 7, 0, 9, 8, 8, 9, 0, 7, 10, 0, 5, 11, 1, 4, 11,
        2, 3, 11, 3,
    ];
    let counts: Vec<u32> = series.iter().map(|p| p.count).collect();
    assert_eq!(counts, expected);

    let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let series = commit_activity(1040, today);
    let expected = [
        4, 9, 1, 11, 0, 11, 1, 8, 4, 5, 8, 1, 11, 0, 11, 0, 9, 3, 6, 7, 2, 10, 0, 11, 0, 10, 2,
        7, 6, 3, 9,
    ];
    let counts: Vec<u32> = series.iter().map(|p| p.count).collect();
    assert_eq!(counts, expected);
}

#[test]
fn test_activity_is_reproducible() {
    let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
    assert_eq!(commit_activity(749, today), commit_activity(749, today));
}

// ============================================================================
// Dataset Generation
// ============================================================================

#[test]
fn test_dataset_is_reproducible_for_fixed_time() {
    let now = common::fixed_now();
    let first = generate_dataset_at("octocat", now);
    let second = generate_dataset_at("octocat", now);
    assert_eq!(first, second);
}

#[test]
fn test_profile_fields_stay_in_contract_ranges() {
    let now = common::fixed_now();
    for i in 0..50 {
        let username = format!("user{i}");
        let profile = generate_dataset_at(&username, now).profile;

        assert_eq!(profile.login, username);
        assert!((2..=31).contains(&profile.public_repos));
        assert!((10..=1009).contains(&profile.followers));
        assert!((5..=204).contains(&profile.following));
        assert!(profile.created_at <= now);
        assert!(profile.created_at >= now - Duration::days(5 * 365));
    }
}

#[test]
fn test_display_name_is_capitalized_username() {
    let dataset = generate_dataset_at("octocat", common::fixed_now());
    assert_eq!(dataset.profile.display_name.as_deref(), Some("Octocat"));
}

#[test]
fn test_avatar_is_parameterized_by_uppercased_initial() {
    let dataset = generate_dataset_at("octocat", common::fixed_now());
    assert!(dataset.profile.avatar_url.contains("name=O"));
}

#[test]
fn test_repositories_respect_contract_invariants() {
    let now = common::fixed_now();
    for i in 0..50 {
        let username = format!("user{i}");
        let dataset = generate_dataset_at(&username, now);
        let repositories = &dataset.repositories;

        let count = u32::try_from(repositories.len()).unwrap();
        let floor = dataset.profile.public_repos.min(3);
        assert!(count <= 10);
        assert!(count >= floor);
        assert!(
            count <= dataset.profile.public_repos,
            "repository count may never exceed the profile cap"
        );

        for (index, repository) in repositories.iter().enumerate() {
            let ordinal = index + 1;
            assert_eq!(repository.id, u64::try_from(ordinal).unwrap());
            assert_eq!(repository.name, format!("{username}-project-{ordinal}"));
            assert_eq!(
                repository.url,
                format!("https://github.com/{username}/{username}-project-{ordinal}")
            );
            assert!(repository.stars <= 499);
            assert!(repository.forks <= 199);
            if let Some(language) = &repository.language {
                assert!(LANGUAGES.contains(&language.as_str()));
            }
            if let Some(description) = &repository.description {
                assert!(LANGUAGES.iter().any(|lang| description.contains(lang)));
            }
            assert!(repository.created_at <= now);
            assert!(repository.created_at >= now - Duration::days(3 * 365));
        }
    }
}

#[test]
fn test_activity_dates_end_on_the_reference_day() {
    let now = common::fixed_now();
    let dataset = generate_dataset_at("octocat", now);
    assert_eq!(dataset.activity.len(), 31);
    let last = dataset.activity.last().unwrap();
    assert_eq!(last.date.day(), now.day());
    assert_eq!(last.date.month(), now.month());
}

// ============================================================================
// Trait Implementation
// ============================================================================

#[tokio::test]
async fn test_synthetic_source_never_fails() {
    common::init_test_logging();
    let source = SyntheticSource::new();

    let profile = source.fetch_profile("octocat").await.unwrap();
    assert_eq!(profile.login, "octocat");

    let repositories = source.fetch_repositories("octocat").await.unwrap();
    assert!(!repositories.is_empty());
}

#[tokio::test]
async fn test_trait_projections_are_mutually_consistent() {
    // Separate calls project the same deterministic dataset, so the
    // repository count still honors the profile cap
    let source = SyntheticSource::new();
    let profile = source.fetch_profile("octocat").await.unwrap();
    let repositories = source.fetch_repositories("octocat").await.unwrap();
    assert!(u32::try_from(repositories.len()).unwrap() <= profile.public_repos);
}

#[test]
fn test_source_name() {
    assert_eq!(SyntheticSource::new().name(), "synthetic");
}
