/// Report adapters rendering gated findings for people and for TeamCity
mod finding_text;
mod teamcity_reporter;
mod user_reporter;

pub use finding_text::{format_finding, format_findings, vuln_view_url};
pub use teamcity_reporter::{TeamCityReporter, TEAMCITY_PACKAGE_NAME};
pub use user_reporter::UserReporter;
