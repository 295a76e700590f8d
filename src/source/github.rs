use crate::types::account::{DeveloperAccount, RepositorySummary};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repositories kept per account, matching one `per_page=100` listing.
pub const REPO_FETCH_LIMIT: usize = 100;

/// A `/users/{login}` profile with its `/users/{login}/repos` listing
/// attached under `repos`.
#[derive(Debug, Deserialize)]
pub struct GithubUserPayload {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub repos: Vec<GithubRepoPayload>,
}

#[derive(Debug, Deserialize)]
pub struct GithubRepoPayload {
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<GithubUserPayload> for DeveloperAccount {
    fn from(payload: GithubUserPayload) -> Self {
        let name = payload
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| payload.login.clone());

        DeveloperAccount {
            login: payload.login,
            name,
            bio: payload.bio.unwrap_or_default(),
            followers: payload.followers,
            following: payload.following,
            public_repo_count: payload.public_repos,
            created_at: payload.created_at,
            repositories: payload
                .repos
                .into_iter()
                .take(REPO_FETCH_LIMIT)
                .map(RepositorySummary::from)
                .collect(),
        }
    }
}

impl From<GithubRepoPayload> for RepositorySummary {
    fn from(payload: GithubRepoPayload) -> Self {
        RepositorySummary {
            primary_language: payload.language.filter(|language| !language.is_empty()),
            star_count: payload.stargazers_count,
            is_fork: payload.fork,
            updated_at: payload.updated_at,
        }
    }
}
