pub mod github;

use crate::error::{DevMatchError, Result};
use crate::types::account::DeveloperAccount;
use github::GithubUserPayload;
use std::path::Path;

/// Reads one account document from disk.
pub fn load_account(path: &Path) -> Result<DeveloperAccount> {
    if !path.exists() {
        return Err(DevMatchError::AccountNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let payload: GithubUserPayload = serde_json::from_str(&content)
        .map_err(|e| DevMatchError::AccountParse(format!("{}: {}", path.display(), e)))?;

    let account = DeveloperAccount::from(payload);
    tracing::debug!(
        login = %account.login,
        repositories = account.repositories.len(),
        "account loaded"
    );
    Ok(account)
}

/// Loads both accounts and refuses to compare an account with itself.
pub fn load_pair(first: &Path, second: &Path) -> Result<(DeveloperAccount, DeveloperAccount)> {
    let first = load_account(first)?;
    let second = load_account(second)?;
    if first.is_same_login(&second) {
        return Err(DevMatchError::SameAccount(first.login));
    }
    Ok((first, second))
}
