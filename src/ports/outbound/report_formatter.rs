use crate::application::dto::AuditReport;
use crate::shared::Result;

/// ReportFormatter port for rendering audit results
///
/// This port abstracts the two output flavours (human-readable text and
/// TeamCity service messages) over the same filtered findings.
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Returns
    /// The text to present; empty when there is nothing to show
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &AuditReport) -> Result<String>;
}
