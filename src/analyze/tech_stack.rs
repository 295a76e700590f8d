use super::round_score;
use crate::types::report::{FactorKind, FactorResult, LanguageUsageMap};

const MIN_SCORE: u8 = 30;

pub fn tech_stack_factor(languages: &LanguageUsageMap) -> FactorResult {
    let shared = languages.values().filter(|counts| counts.is_shared()).count();
    let total = languages.len();

    let overlap_percentage = if total > 0 {
        round_score(shared as f64 / total as f64 * 100.0)
    } else {
        0
    };

    // strict comparison keeps the first language on ties
    let mut most_common_shared = "";
    let mut max_shared_count = 0;
    for (language, counts) in languages {
        if counts.is_shared() && counts.combined() > max_shared_count {
            max_shared_count = counts.combined();
            most_common_shared = language.as_str();
        }
    }

    let description = describe(overlap_percentage, most_common_shared);
    FactorResult::new(
        FactorKind::TechStack,
        overlap_percentage.max(MIN_SCORE),
        description,
    )
}

fn describe(overlap_percentage: u8, most_common_shared: &str) -> String {
    if overlap_percentage >= 70 {
        if most_common_shared.is_empty() {
            "Excellent tech stack alignment! You both work with many of the same languages."
                .to_string()
        } else {
            format!(
                "Excellent tech stack alignment! You both work with many of the same languages, especially {most_common_shared}."
            )
        }
    } else if overlap_percentage >= 40 {
        if most_common_shared.is_empty() {
            "Good overlap in programming languages.".to_string()
        } else {
            format!("Good overlap in programming languages with a shared focus on {most_common_shared}.")
        }
    } else if overlap_percentage > 0 {
        let shared = if most_common_shared.is_empty() {
            "a few languages"
        } else {
            most_common_shared
        };
        format!("Limited tech stack overlap, but you share experience with {shared}.")
    } else {
        "Your tech stacks are completely different, which could bring diverse perspectives."
            .to_string()
    }
}
