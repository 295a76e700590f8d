pub mod activity;
pub mod aggregate;
pub mod collaboration;
pub mod community;
pub mod overlap;
pub mod scope;
pub mod tags;
pub mod tech_stack;

use crate::types::account::DeveloperAccount;
use crate::types::config::Weights;
use crate::types::report::{CompatibilityReport, FactorResult};
use chrono::{DateTime, Duration, Utc};

/// Everything the tag rules look at besides the clock.
#[derive(Debug, Clone, Copy)]
pub struct MatchInputs<'a> {
    pub first: &'a DeveloperAccount,
    pub second: &'a DeveloperAccount,
    pub factors: &'a [FactorResult; 5],
    pub overall_score: u8,
}

/// Scores how well two accounts match.
///
/// `now` is sampled once by the caller and shared by every age and recency
/// calculation, so identical inputs always produce identical reports.
pub fn compatibility(
    first: &DeveloperAccount,
    second: &DeveloperAccount,
    weights: &Weights,
    now: DateTime<Utc>,
) -> CompatibilityReport {
    let language_overlap = overlap::language_overlap(first, second);

    let factors = [
        tech_stack::tech_stack_factor(&language_overlap),
        activity::activity_factor(first, second, now),
        scope::scope_factor(first, second),
        collaboration::collaboration_factor(first, second),
        community::community_factor(first, second),
    ];
    for factor in &factors {
        tracing::debug!(factor = factor.name, score = factor.score, "factor scored");
    }

    let overall_score = aggregate::overall_score(&factors, weights);
    let match_tags = tags::match_tags(
        &MatchInputs {
            first,
            second,
            factors: &factors,
            overall_score,
        },
        now,
    );

    tracing::info!(
        first = %first.login,
        second = %second.login,
        overall_score,
        languages = language_overlap.len(),
        "compatibility computed"
    );

    CompatibilityReport {
        overall_score,
        factors,
        match_tags,
        language_overlap,
    }
}

pub(crate) fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

const RECENT_YEAR_DAYS: i64 = 365;
const RECENT_MONTH_DAYS: i64 = 30;

/// Start of the 365-day activity window ending at `now`.
pub(crate) fn one_year_ago(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RECENT_YEAR_DAYS)
}

/// Start of the 30-day window used for recent joint activity.
pub(crate) fn one_month_ago(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RECENT_MONTH_DAYS)
}
