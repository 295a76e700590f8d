use chrono::{DateTime, Utc};

/// A GitHub account as seen by the compatibility engine.
///
/// Built by [`crate::source`] from a profile document; `name` and `bio` are
/// always populated (falling back to the login and an empty string).
#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperAccount {
    pub login: String,
    pub name: String,
    pub bio: String,
    pub followers: u64,
    pub following: u64,
    pub public_repo_count: u64,
    pub created_at: DateTime<Utc>,
    pub repositories: Vec<RepositorySummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepositorySummary {
    pub primary_language: Option<String>,
    pub star_count: u64,
    pub is_fork: bool,
    pub updated_at: DateTime<Utc>,
}

impl DeveloperAccount {
    /// Distinct primary languages in first-seen order.
    pub fn languages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for language in self.repositories.iter().filter_map(RepositorySummary::language) {
            if !seen.contains(&language) {
                seen.push(language);
            }
        }
        seen
    }

    pub fn is_same_login(&self, other: &DeveloperAccount) -> bool {
        self.login.eq_ignore_ascii_case(&other.login)
    }
}

impl RepositorySummary {
    /// The primary language, treating an empty string as absent.
    pub fn language(&self) -> Option<&str> {
        self.primary_language
            .as_deref()
            .filter(|language| !language.is_empty())
    }
}
