use super::finding_text::format_findings;
use crate::application::dto::AuditReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// UserReporter adapter rendering findings as human-readable text
///
/// This adapter implements the ReportFormatter port. A report without
/// findings renders as an empty string.
pub struct UserReporter {
    api_url: String,
    colored: bool,
}

impl UserReporter {
    /// Creates a reporter; the header is colored only when stdout is a terminal
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            colored: std::io::stdout().is_terminal(),
        }
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn header(&self, count: usize) -> String {
        let header = format!("{} vulnerabilities found!", count);
        if self.colored {
            header.red().bold().to_string()
        } else {
            header
        }
    }
}

impl ReportFormatter for UserReporter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        if !report.has_findings() {
            return Ok(String::new());
        }

        let mut output = self.header(report.findings.len());
        output.push_str("\n\n");
        output.push_str(&format_findings(&self.api_url, &report.findings));
        Ok(output)
    }
}
