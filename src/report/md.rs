use crate::types::account::DeveloperAccount;
use crate::types::report::{CompatibilityReport, LanguageCounts};
use chrono::{DateTime, Utc};

/// Languages shown in the overlap table.
pub const TOP_LANGUAGES: usize = 6;

pub fn to_markdown(
    report: &CompatibilityReport,
    (first, second): (&DeveloperAccount, &DeveloperAccount),
    now: DateTime<Utc>,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Developer Match: {} x {}\n\n",
        display_name(first),
        display_name(second)
    ));

    output.push_str("## Profiles\n\n");
    output.push_str(&profile_section(first, now));
    output.push_str(&profile_section(second, now));

    output.push_str(&format!(
        "Overall score: {}/100 - {}\n\n",
        report.overall_score,
        verdict(report.overall_score)
    ));

    output.push_str("## Match Tags\n\n");
    if report.match_tags.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for tag in &report.match_tags {
            output.push_str(&format!("- {} {}\n", tag.emoji(), tag.label()));
        }
        output.push('\n');
    }

    output.push_str("## Factors\n\n");
    for factor in &report.factors {
        output.push_str(&format!(
            "- {} {}: {} {}\n  {}\n",
            factor.icon,
            factor.name,
            factor.score,
            score_bar(factor.score),
            factor.description
        ));
    }
    output.push('\n');

    output.push_str(&languages_table(report, first, second));
    output
}

/// Headline for an overall score.
pub fn verdict(overall_score: u8) -> &'static str {
    match overall_score {
        90..=u8::MAX => "Perfect Match!",
        75..=89 => "Great Match!",
        60..=74 => "Good Match",
        40..=59 => "Potential Match",
        _ => "Keep Looking",
    }
}

fn profile_section(account: &DeveloperAccount, now: DateTime<Utc>) -> String {
    let mut output = format!("### {}\n\n", display_name(account));
    if !account.bio.is_empty() {
        output.push_str(&format!("> {}\n\n", account.bio));
    }
    output.push_str(&format!(
        "- Repos: {}\n- Followers: {}\n- Joined: {}\n\n",
        account.public_repo_count,
        account.followers,
        joined_ago(account.created_at, now)
    ));
    output
}

fn joined_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - created_at).num_days().max(0);
    let (amount, unit) = match days {
        0 => return "today".to_string(),
        1..=29 => (days, "day"),
        30..=364 => (days / 30, "month"),
        _ => (days / 365, "year"),
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

/// Markdown table of the most used languages, with each account's repository
/// count and its share of that account's languaged repositories.
pub fn languages_table(
    report: &CompatibilityReport,
    first: &DeveloperAccount,
    second: &DeveloperAccount,
) -> String {
    let mut output = String::new();
    output.push_str("## Language Overlap\n\n");
    if report.language_overlap.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    let first_total: u32 = report.language_overlap.values().map(|counts| counts.first).sum();
    let second_total: u32 = report.language_overlap.values().map(|counts| counts.second).sum();

    // stable sort keeps first-seen order among equal totals
    let mut ranked: Vec<(&String, &LanguageCounts)> = report.language_overlap.iter().collect();
    ranked.sort_by(|a, b| b.1.combined().cmp(&a.1.combined()));
    ranked.truncate(TOP_LANGUAGES);

    output.push_str(&format!("| Language | {} | {} |\n", first.login, second.login));
    output.push_str("|---|---:|---:|\n");
    for (language, counts) in ranked {
        let marker = if counts.is_shared() { " (shared)" } else { "" };
        output.push_str(&format!(
            "| {language}{marker} | {} ({}%) | {} ({}%) |\n",
            counts.first,
            share(counts.first, first_total),
            counts.second,
            share(counts.second, second_total)
        ));
    }
    output
}

fn share(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(count) / f64::from(total) * 100.0).round() as u32
}

fn display_name(account: &DeveloperAccount) -> String {
    if account.name == account.login {
        format!("@{}", account.login)
    } else {
        format!("{} (@{})", account.name, account.login)
    }
}

// ten-cell bar, one cell per 10 points
fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) / 10;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}
