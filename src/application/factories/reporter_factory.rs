use crate::adapters::outbound::reporters::{TeamCityReporter, UserReporter};
use crate::application::dto::OutputMode;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report renderers
///
/// This factory selects the infrastructure adapter that renders the gated
/// findings for the requested output mode.
pub struct ReporterFactory;

impl ReporterFactory {
    /// Creates a reporter for the specified output mode
    ///
    /// # Arguments
    /// * `mode` - The output mode to create a reporter for
    /// * `api_url` - Dependency-Track base URL used to build vulnerability links
    ///
    /// # Examples
    /// ```
    /// use dtrack_audit::application::dto::OutputMode;
    /// use dtrack_audit::application::factories::ReporterFactory;
    ///
    /// let reporter = ReporterFactory::create(OutputMode::User, "https://dtrack.example.com");
    /// ```
    pub fn create(mode: OutputMode, api_url: &str) -> Box<dyn ReportFormatter> {
        match mode {
            OutputMode::User => Box::new(UserReporter::new(api_url)),
            OutputMode::TeamCity => Box::new(TeamCityReporter::new(api_url)),
        }
    }

    /// Returns the progress message for the specified output mode
    ///
    /// # Examples
    /// ```
    /// use dtrack_audit::application::dto::OutputMode;
    /// use dtrack_audit::application::factories::ReporterFactory;
    ///
    /// let message = ReporterFactory::progress_message(OutputMode::TeamCity);
    /// assert_eq!(message, "📝 Rendering TeamCity test events...");
    /// ```
    pub fn progress_message(mode: OutputMode) -> &'static str {
        match mode {
            OutputMode::User => "📝 Rendering vulnerability report...",
            OutputMode::TeamCity => "📝 Rendering TeamCity test events...",
        }
    }
}
