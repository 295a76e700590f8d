use crate::types::account::DeveloperAccount;
use crate::types::report::{LanguageCounts, LanguageUsageMap};

/// Counts repositories per primary language for both accounts.
///
/// Keys keep first-seen order: the first account's languages, then any new
/// ones introduced by the second account.
pub fn language_overlap(first: &DeveloperAccount, second: &DeveloperAccount) -> LanguageUsageMap {
    let mut languages = LanguageUsageMap::new();

    for language in first.repositories.iter().filter_map(|repo| repo.language()) {
        languages
            .entry(language.to_string())
            .or_insert_with(LanguageCounts::default)
            .first += 1;
    }
    for language in second.repositories.iter().filter_map(|repo| repo.language()) {
        languages
            .entry(language.to_string())
            .or_insert_with(LanguageCounts::default)
            .second += 1;
    }

    languages
}
