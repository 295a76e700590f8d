use crate::types::account::DeveloperAccount;
use crate::types::report::CompatibilityReport;
use serde::Serialize;

#[derive(Serialize)]
struct Rendered<'a> {
    first: &'a str,
    second: &'a str,
    #[serde(flatten)]
    report: &'a CompatibilityReport,
}

pub fn to_json(
    report: &CompatibilityReport,
    (first, second): (&DeveloperAccount, &DeveloperAccount),
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Rendered {
        first: &first.login,
        second: &second.login,
        report,
    })
}
