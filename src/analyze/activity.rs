use super::{one_year_ago, round_score};
use crate::types::account::DeveloperAccount;
use crate::types::report::{FactorKind, FactorResult};
use chrono::{DateTime, Utc};

const MILLIS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 365.0;
const MAX_AGE_PENALTY: f64 = 30.0;
const MAX_ACTIVITY_PENALTY: f64 = 40.0;
const MIN_SCORE: f64 = 40.0;

pub fn activity_factor(
    first: &DeveloperAccount,
    second: &DeveloperAccount,
    now: DateTime<Utc>,
) -> FactorResult {
    let age_difference_years = age_difference_years(first, second);

    let first_activity = recent_update_count(first, now);
    let second_activity = recent_update_count(second, now);
    let activity_ratio = activity_ratio(first_activity, second_activity);

    let mut score: f64 = 100.0;
    score -= (age_difference_years * 10.0).min(MAX_AGE_PENALTY);
    score -= ((1.0 - activity_ratio) * MAX_ACTIVITY_PENALTY).min(MAX_ACTIVITY_PENALTY);
    let score = score.max(MIN_SCORE);

    let description = if score >= 80.0 {
        "You both have similar GitHub activity patterns and experience levels."
    } else if score >= 60.0 {
        "Your GitHub activity rhythms are somewhat aligned, though with some differences."
    } else {
        "Your GitHub activity patterns differ significantly, which may require adjusting expectations."
    };

    FactorResult::new(FactorKind::Activity, round_score(score), description)
}

/// Difference in account age, in 365-day years. Both ages share one `now`,
/// so this is the distance between creation dates.
fn age_difference_years(first: &DeveloperAccount, second: &DeveloperAccount) -> f64 {
    let millis = (first.created_at - second.created_at)
        .num_milliseconds()
        .abs();
    millis as f64 / MILLIS_PER_YEAR
}

/// Repositories updated within the 365 days before `now`.
pub(crate) fn recent_update_count(account: &DeveloperAccount, now: DateTime<Utc>) -> usize {
    let cutoff = one_year_ago(now);
    account
        .repositories
        .iter()
        .filter(|repo| repo.updated_at > cutoff)
        .count()
}

fn activity_ratio(first: usize, second: usize) -> f64 {
    let larger = first.max(second);
    if larger == 0 {
        return 0.0;
    }
    first.min(second) as f64 / larger as f64
}
