pub mod json;
pub mod md;

use crate::error::DevMatchError;
use crate::types::account::DeveloperAccount;
use crate::types::report::CompatibilityReport;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    report: &CompatibilityReport,
    pair: (&DeveloperAccount, &DeveloperAccount),
    format: OutputFormat,
    now: DateTime<Utc>,
) -> Result<String, DevMatchError> {
    match format {
        OutputFormat::Json => json::to_json(report, pair).map_err(DevMatchError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, pair, now)),
    }
}
