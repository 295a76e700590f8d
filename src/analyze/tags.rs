use super::{one_month_ago, MatchInputs};
use crate::types::account::DeveloperAccount;
use crate::types::report::{FactorKind, MatchTag};
use chrono::{DateTime, Utc};

pub const MAX_TAGS: usize = 4;

const MENTOR_FOLLOWER_MULTIPLIER: u64 = 5;
const MENTOR_MIN_FOLLOWERS: u64 = 100;
const MIN_UNIQUE_LANGUAGES: usize = 3;

/// Evaluates the badge rules in a fixed order and keeps the first
/// [`MAX_TAGS`] that fire.
pub fn match_tags(inputs: &MatchInputs<'_>, now: DateTime<Utc>) -> Vec<MatchTag> {
    let MatchInputs {
        first,
        second,
        factors,
        overall_score,
    } = *inputs;
    let mut tags = Vec::new();

    if overall_score >= 85 {
        tags.push(MatchTag::DreamTeam);
    } else if overall_score >= 75 {
        tags.push(MatchTag::GreatMatch);
    } else if overall_score >= 60 {
        tags.push(MatchTag::SolidMatch);
    }

    if factors[FactorKind::TechStack as usize].score >= 80 {
        tags.push(MatchTag::TechStackAligned);
    }
    if factors[FactorKind::Activity as usize].score >= 75 {
        tags.push(MatchTag::InSync);
    }

    let total_repos = first
        .public_repo_count
        .saturating_add(second.public_repo_count);
    if total_repos > 50 {
        tags.push(MatchTag::ExperiencedDuo);
    }
    if total_repos > 100 {
        tags.push(MatchTag::PowerCoders);
    }

    if is_mentor_of(first, second) || is_mentor_of(second, first) {
        tags.push(MatchTag::MentorMentee);
    }

    if has_complementary_skills(first, second) {
        tags.push(MatchTag::ComplementarySkills);
    }

    if overall_score >= 65 && updated_recently(first, now) && updated_recently(second, now) {
        tags.push(MatchTag::HackathonReady);
    }

    tracing::debug!(fired = tags.len(), "match tags evaluated");
    tags.truncate(MAX_TAGS);
    tags
}

fn is_mentor_of(mentor: &DeveloperAccount, mentee: &DeveloperAccount) -> bool {
    mentor.followers > mentee.followers.saturating_mul(MENTOR_FOLLOWER_MULTIPLIER)
        && mentor.followers > MENTOR_MIN_FOLLOWERS
}

fn has_complementary_skills(first: &DeveloperAccount, second: &DeveloperAccount) -> bool {
    let first_languages = first.languages();
    let second_languages = second.languages();

    let unique_to_first = first_languages
        .iter()
        .filter(|language| !second_languages.contains(language))
        .count();
    let unique_to_second = second_languages
        .iter()
        .filter(|language| !first_languages.contains(language))
        .count();

    unique_to_first >= MIN_UNIQUE_LANGUAGES && unique_to_second >= MIN_UNIQUE_LANGUAGES
}

fn updated_recently(account: &DeveloperAccount, now: DateTime<Utc>) -> bool {
    let cutoff = one_month_ago(now);
    account.repositories.iter().any(|repo| repo.updated_at > cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::{account, fixed_now, repo, repo_updated};
    use crate::types::report::FactorResult;
    use chrono::{Duration, TimeZone};

    fn factors(tech_stack: u8, activity: u8) -> [FactorResult; 5] {
        [
            FactorResult::new(FactorKind::TechStack, tech_stack, ""),
            FactorResult::new(FactorKind::Activity, activity, ""),
            FactorResult::new(FactorKind::Scope, 50, ""),
            FactorResult::new(FactorKind::Collaboration, 50, ""),
            FactorResult::new(FactorKind::Community, 50, ""),
        ]
    }

    fn tags_for(
        first: &DeveloperAccount,
        second: &DeveloperAccount,
        factors: &[FactorResult; 5],
        overall_score: u8,
    ) -> Vec<MatchTag> {
        let inputs = MatchInputs {
            first,
            second,
            factors,
            overall_score,
        };
        match_tags(&inputs, fixed_now())
    }

    #[test]
    fn score_bands_are_mutually_exclusive() {
        let first = account("first", Vec::new());
        let second = account("second", Vec::new());
        let low = factors(30, 40);

        assert_eq!(tags_for(&first, &second, &low, 85), vec![MatchTag::DreamTeam]);
        assert_eq!(tags_for(&first, &second, &low, 84), vec![MatchTag::GreatMatch]);
        assert_eq!(tags_for(&first, &second, &low, 60), vec![MatchTag::SolidMatch]);
        assert!(tags_for(&first, &second, &low, 59).is_empty());
    }

    #[test]
    fn repo_count_tags_can_both_fire() {
        let mut first = account("first", Vec::new());
        let mut second = account("second", Vec::new());
        first.public_repo_count = 60;
        second.public_repo_count = 41;

        let tags = tags_for(&first, &second, &factors(30, 40), 0);
        assert_eq!(tags, vec![MatchTag::ExperiencedDuo, MatchTag::PowerCoders]);

        second.public_repo_count = 40;
        let tags = tags_for(&first, &second, &factors(30, 40), 0);
        assert_eq!(tags, vec![MatchTag::ExperiencedDuo]);
    }

    #[test]
    fn mentor_tag_fires_once_in_either_direction() {
        let mut first = account("first", Vec::new());
        let mut second = account("second", Vec::new());
        first.followers = 20;
        second.followers = 101;

        let tags = tags_for(&first, &second, &factors(30, 40), 0);
        assert_eq!(tags, vec![MatchTag::MentorMentee]);

        // large but not dominant enough
        second.followers = 100;
        first.followers = 0;
        assert!(tags_for(&first, &second, &factors(30, 40), 0).is_empty());
    }

    #[test]
    fn complementary_skills_need_three_unique_languages_each() {
        let first = account(
            "first",
            vec![repo(Some("Rust")), repo(Some("Go")), repo(Some("C")), repo(Some("Zig"))],
        );
        let second = account(
            "second",
            vec![
                repo(Some("Python")),
                repo(Some("Ruby")),
                repo(Some("Elixir")),
                repo(Some("Rust")),
            ],
        );
        let tags = tags_for(&first, &second, &factors(30, 40), 0);
        assert_eq!(tags, vec![MatchTag::ComplementarySkills]);

        let second = account(
            "second",
            vec![repo(Some("Python")), repo(Some("Ruby")), repo(Some("Rust"))],
        );
        assert!(tags_for(&first, &second, &factors(30, 40), 0).is_empty());
    }

    #[test]
    fn hackathon_ready_needs_recent_activity_on_both_sides() {
        let now = fixed_now();
        let first = account("first", vec![repo_updated(now - Duration::days(3))]);
        let second = account("second", vec![repo_updated(now - Duration::days(20))]);
        let tags = tags_for(&first, &second, &factors(30, 40), 65);
        assert_eq!(tags, vec![MatchTag::SolidMatch, MatchTag::HackathonReady]);

        let tags = tags_for(&first, &second, &factors(30, 40), 64);
        assert_eq!(tags, vec![MatchTag::SolidMatch]);

        let stale = account("second", vec![repo_updated(now - Duration::days(45))]);
        let tags = tags_for(&first, &stale, &factors(30, 40), 70);
        assert_eq!(tags, vec![MatchTag::SolidMatch]);
    }

    #[test]
    fn hackathon_window_is_thirty_days() {
        let now = fixed_now();
        let fresh = account("first", vec![repo_updated(now - Duration::days(29))]);
        let also_fresh = account("second", vec![repo_updated(now - Duration::days(29))]);
        let tags = tags_for(&fresh, &also_fresh, &factors(30, 40), 70);
        assert_eq!(tags, vec![MatchTag::SolidMatch, MatchTag::HackathonReady]);

        let stale = account("second", vec![repo_updated(now - Duration::days(31))]);
        let tags = tags_for(&fresh, &stale, &factors(30, 40), 70);
        assert_eq!(tags, vec![MatchTag::SolidMatch]);
    }

    #[test]
    fn hackathon_window_ignores_month_length() {
        let now = Utc.with_ymd_and_hms(2025, 7, 31, 12, 0, 0).unwrap();
        let first = account("first", vec![repo_updated(now - Duration::hours(30 * 24 + 12))]);
        let second = account("second", vec![repo_updated(now - Duration::days(1))]);
        let inputs = MatchInputs {
            first: &first,
            second: &second,
            factors: &factors(30, 40),
            overall_score: 70,
        };
        assert_eq!(match_tags(&inputs, now), vec![MatchTag::SolidMatch]);
    }

    #[test]
    fn repo_totals_saturate() {
        let mut first = account("first", Vec::new());
        let mut second = account("second", Vec::new());
        first.public_repo_count = u64::MAX;
        second.public_repo_count = u64::MAX;

        let tags = tags_for(&first, &second, &factors(30, 40), 50);
        assert_eq!(tags, vec![MatchTag::ExperiencedDuo, MatchTag::PowerCoders]);
    }

    #[test]
    fn tags_are_cut_to_first_four_fired() {
        let now = fixed_now();
        let mut first = account("first", vec![repo_updated(now)]);
        let mut second = account("second", vec![repo_updated(now)]);
        first.public_repo_count = 80;
        second.public_repo_count = 80;
        first.followers = 1_000;

        let tags = tags_for(&first, &second, &factors(100, 100), 95);
        assert_eq!(
            tags,
            vec![
                MatchTag::DreamTeam,
                MatchTag::TechStackAligned,
                MatchTag::InSync,
                MatchTag::ExperiencedDuo,
            ]
        );
    }
}
