use super::round_score;
use crate::types::account::DeveloperAccount;
use crate::types::report::{FactorKind, FactorResult};

/// Compares average stars per repository as a proxy for project scale.
pub fn scope_factor(first: &DeveloperAccount, second: &DeveloperAccount) -> FactorResult {
    let first_average = average_stars(first);
    let second_average = average_stars(second);

    let larger = first_average.max(second_average);
    let smaller = first_average.min(second_average);
    let star_ratio = if larger > 0.0 { smaller / larger } else { 1.0 };

    let score = round_score(40.0 + star_ratio * 60.0);

    let description = if score >= 80 {
        "You both tend to work on similar-sized projects based on GitHub stars."
    } else if score >= 60 {
        "There's some difference in the project sizes you typically work on."
    } else {
        "You tend to work on projects of different scales and complexity."
    };

    FactorResult::new(FactorKind::Scope, score, description)
}

fn average_stars(account: &DeveloperAccount) -> f64 {
    if account.repositories.is_empty() {
        return 0.0;
    }
    let total = account
        .repositories
        .iter()
        .fold(0u64, |sum, repo| sum.saturating_add(repo.star_count));
    total as f64 / account.repositories.len() as f64
}
