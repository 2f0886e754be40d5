use super::finding_text::format_findings;
use crate::application::dto::AuditReport;
use crate::audit::services::{ComponentVerdict, FindingCorrelator};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Package name reported with every test event
pub const TEAMCITY_PACKAGE_NAME: &str = "github.com/ozonru/dtrack-audit/cmd/dtrack-audit";

/// One `go test -json` style event understood by TeamCity
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TeamCityMessage<'a> {
    time: DateTime<Local>,
    action: &'a str,
    package: &'a str,
    test: &'a str,
    output: &'a str,
}

/// TeamCityReporter adapter emitting one test per SBOM component
///
/// This adapter implements the ReportFormatter port. Every component yields
/// a `run` event followed by `pass`, or by `output` and `fail` when findings
/// were attached to it. Components are visited in SBOM order.
pub struct TeamCityReporter {
    api_url: String,
}

impl TeamCityReporter {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
        }
    }

    fn push_event(lines: &mut String, action: &str, test: &str, output: &str) -> Result<()> {
        let message = TeamCityMessage {
            time: Local::now(),
            action,
            package: TEAMCITY_PACKAGE_NAME,
            test,
            output,
        };
        lines.push_str(&serde_json::to_string(&message)?);
        lines.push('\n');
        Ok(())
    }
}

impl ReportFormatter for TeamCityReporter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let Some(bom) = report.bom.as_ref() else {
            return Ok(String::new());
        };

        let mut lines = String::new();
        for (component, verdict) in FindingCorrelator::verdicts(bom) {
            let test = component.coordinate();
            Self::push_event(&mut lines, "run", &test, "")?;
            if verdict == ComponentVerdict::Fail {
                let output = format_findings(&self.api_url, &component.findings);
                Self::push_event(&mut lines, "output", &test, &output)?;
            }
            Self::push_event(&mut lines, verdict.as_action(), &test, "")?;
        }
        Ok(lines)
    }
}
