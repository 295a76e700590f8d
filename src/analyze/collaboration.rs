use super::round_score;
use crate::types::account::DeveloperAccount;
use crate::types::report::{FactorKind, FactorResult};

pub fn collaboration_factor(first: &DeveloperAccount, second: &DeveloperAccount) -> FactorResult {
    let first_ratio = fork_ratio(first);
    let second_ratio = fork_ratio(second);

    let score = round_score(100.0 - (first_ratio - second_ratio).abs() * 100.0);

    // bands use the raw ratios, not the score
    let description = if first_ratio > 0.5 && second_ratio > 0.5 {
        "You both actively contribute to existing projects, suggesting a collaborative style."
    } else if first_ratio < 0.3 && second_ratio < 0.3 {
        "You both prefer creating original projects rather than contributing to existing ones."
    } else {
        "You have different approaches to collaboration vs. original work."
    };

    FactorResult::new(FactorKind::Collaboration, score, description)
}

fn fork_ratio(account: &DeveloperAccount) -> f64 {
    if account.repositories.is_empty() {
        return 0.0;
    }
    let forks = account.repositories.iter().filter(|repo| repo.is_fork).count();
    forks as f64 / account.repositories.len() as f64
}
