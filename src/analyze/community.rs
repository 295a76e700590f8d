use super::round_score;
use crate::types::account::DeveloperAccount;
use crate::types::report::{FactorKind, FactorResult};

pub fn community_factor(first: &DeveloperAccount, second: &DeveloperAccount) -> FactorResult {
    let first_ratio = follower_ratio(first);
    let second_ratio = follower_ratio(second);

    let larger = first_ratio.max(second_ratio);
    let smaller = first_ratio.min(second_ratio);
    // two zero ratios (no followers, following others) are identical
    let similarity = if larger > 0.0 { smaller / larger } else { 1.0 };

    let score = round_score(40.0 + similarity * 60.0);

    let description = if first_ratio > 1.5 && second_ratio > 1.5 {
        "You're both community leaders with more followers than people you follow."
    } else if first_ratio < 0.7 && second_ratio < 0.7 {
        "You both actively follow others, suggesting you're community-focused learners."
    } else if similarity > 0.7 {
        "You have similar approaches to community engagement on GitHub."
    } else {
        "You engage with the GitHub community in different ways."
    };

    FactorResult::new(FactorKind::Community, score, description)
}

fn follower_ratio(account: &DeveloperAccount) -> f64 {
    if account.following == 0 {
        return if account.followers > 0 { 2.0 } else { 1.0 };
    }
    account.followers as f64 / account.following as f64
}
