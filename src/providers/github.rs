// ABOUTME: Live GitHub data source routed through a CORS-bypassing relay
// ABOUTME: Fetches profile and repositories with typed classification of HTTP failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Octoscope Contributors

//! # GitHub Source
//!
//! Performs the two live HTTP calls through a fixed relay prefix and
//! converts wire responses into the shared domain models. Each call is a
//! single attempt; non-success statuses are classified per endpoint by
//! [`AcquireError::from_status`], and transport failures surface as
//! [`AcquireError::Network`].

use super::core::ProfileDataSource;
use super::http_client::shared_client;
use crate::constants::http;
use crate::errors::{AcquireError, FetchKind};
use crate::models::{Profile, Repository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

/// Wire response for `GET /users/{username}`
#[derive(Debug, Deserialize)]
struct GitHubUserResponse {
    login: String,
    avatar_url: String,
    name: Option<String>,
    bio: Option<String>,
    public_repos: u32,
    followers: u32,
    following: u32,
    created_at: DateTime<Utc>,
}

impl From<GitHubUserResponse> for Profile {
    fn from(user: GitHubUserResponse) -> Self {
        Self {
            login: user.login,
            display_name: user.name,
            avatar_url: user.avatar_url,
            bio: user.bio,
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            created_at: user.created_at,
        }
    }
}

/// Wire response for one element of `GET /users/{username}/repos`
#[derive(Debug, Deserialize)]
struct GitHubRepoResponse {
    id: u64,
    name: String,
    description: Option<String>,
    html_url: String,
    stargazers_count: u32,
    forks_count: u32,
    language: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<GitHubRepoResponse> for Repository {
    fn from(repo: GitHubRepoResponse) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            description: repo.description,
            url: repo.html_url,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo.language,
            created_at: repo.created_at,
        }
    }
}

/// Live data source for the GitHub API behind a relay prefix
pub struct GitHubSource {
    relay_base: String,
}

impl GitHubSource {
    /// Create a source routing requests through the given relay prefix.
    ///
    /// A trailing slash on the prefix is tolerated and trimmed.
    #[must_use]
    pub fn new(relay_base: impl Into<String>) -> Self {
        let relay_base = relay_base.into();
        Self {
            relay_base: relay_base.trim_end_matches('/').to_owned(),
        }
    }

    /// The relay prefix this source routes through
    #[must_use]
    pub fn relay_base(&self) -> &str {
        &self.relay_base
    }

    fn profile_endpoint(&self, username: &str) -> String {
        format!("{}/users/{username}", self.relay_base)
    }

    fn repos_endpoint(&self, username: &str) -> String {
        format!(
            "{}/users/{username}/repos?sort=updated&per_page={}",
            self.relay_base,
            http::REPOS_PER_PAGE
        )
    }
}

#[async_trait]
impl ProfileDataSource for GitHubSource {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn fetch_profile(&self, username: &str) -> Result<Profile, AcquireError> {
        let url = self.profile_endpoint(username);
        debug!(username, url = %url, "fetching profile");

        let response = shared_client().get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!(username, status, "profile request failed");
            return Err(AcquireError::from_status(status, FetchKind::Profile, username));
        }

        let user: GitHubUserResponse = response.json().await?;
        Ok(user.into())
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>, AcquireError> {
        let url = self.repos_endpoint(username);
        debug!(username, url = %url, "fetching repositories");

        let response = shared_client().get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!(username, status, "repositories request failed");
            return Err(AcquireError::from_status(
                status,
                FetchKind::Repositories,
                username,
            ));
        }

        let repos: Vec<GitHubRepoResponse> = response.json().await?;
        // The relay may ignore per_page; enforce the first-page cap locally too
        let mut repositories: Vec<Repository> = repos.into_iter().map(Repository::from).collect();
        repositories.truncate(usize::from(http::REPOS_PER_PAGE));
        Ok(repositories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_relay_prefix() {
        let source = GitHubSource::new("https://relay.example.com/github/");
        assert_eq!(source.relay_base(), "https://relay.example.com/github");
        assert_eq!(
            source.profile_endpoint("octocat"),
            "https://relay.example.com/github/users/octocat"
        );
        assert_eq!(
            source.repos_endpoint("octocat"),
            "https://relay.example.com/github/users/octocat/repos?sort=updated&per_page=10"
        );
    }

    #[test]
    fn user_response_maps_to_profile() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "name": "The Octocat",
            "bio": null,
            "public_repos": 8,
            "followers": 12345,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z"
        }"#;

        let user: GitHubUserResponse = serde_json::from_str(json).unwrap();
        let profile = Profile::from(user);
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.display_name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.bio, None);
        assert_eq!(profile.public_repos, 8);
        assert_eq!(profile.followers, 12345);
        assert_eq!(profile.created_at.to_rfc3339(), "2011-01-25T18:44:36+00:00");
    }

    #[test]
    fn repo_response_maps_to_repository() {
        let json = r#"[{
            "id": 132935648,
            "name": "boysenberry-repo-1",
            "description": "Testing",
            "html_url": "https://github.com/octocat/boysenberry-repo-1",
            "stargazers_count": 327,
            "forks_count": 10,
            "language": "Ruby",
            "created_at": "2018-05-10T17:51:29Z"
        }]"#;

        let repos: Vec<GitHubRepoResponse> = serde_json::from_str(json).unwrap();
        let repository = Repository::from(repos.into_iter().next().unwrap());
        assert_eq!(repository.id, 132935648);
        assert_eq!(repository.name, "boysenberry-repo-1");
        assert_eq!(
            repository.url,
            "https://github.com/octocat/boysenberry-repo-1"
        );
        assert_eq!(repository.stars, 327);
        assert_eq!(repository.forks, 10);
        assert_eq!(repository.language.as_deref(), Some("Ruby"));
    }

    #[test]
    fn unknown_wire_fields_are_ignored() {
        let json = r#"{
            "login": "octocat",
            "avatar_url": "https://example.com/a.png",
            "name": null,
            "bio": null,
            "public_repos": 2,
            "followers": 0,
            "following": 0,
            "created_at": "2020-01-01T00:00:00Z",
            "hireable": true,
            "company": "@github"
        }"#;

        let user: GitHubUserResponse = serde_json::from_str(json).unwrap();
        assert_eq!(user.public_repos, 2);
    }
}
