use super::OutputMode;
use std::path::PathBuf;
use std::time::Duration;

/// Default SBOM file name
pub const DEFAULT_INPUT_FILE: &str = "bom.xml";

/// Default upper bound for waiting on the analysis
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

/// AuditRequest - the configuration of one audit run
///
/// Built once at startup from flags, environment and config file, then
/// passed by reference through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    /// SBOM file to upload
    pub input_path: PathBuf,
    /// Project UUID; when set it is used as-is
    pub project_id: String,
    /// Project name for lookup/auto-creation
    pub project_name: String,
    /// Project version for lookup/auto-creation
    pub project_version: String,
    /// Minimum severity to report; empty disables filtering
    pub severity_filter: String,
    /// Upper bound for waiting on the analysis
    pub timeout: Duration,
    /// Create the project when it cannot be found
    pub auto_create_project: bool,
    /// Wait for the analysis and report findings
    pub sync_mode: bool,
    pub output_mode: OutputMode,
}

impl AuditRequest {
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            input_path,
            ..Default::default()
        }
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn with_project(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.project_name = name.into();
        self.project_version = version.into();
        self
    }

    pub fn with_severity_filter(mut self, severity_filter: impl Into<String>) -> Self {
        self.severity_filter = severity_filter.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_auto_create(mut self, auto_create_project: bool) -> Self {
        self.auto_create_project = auto_create_project;
        self
    }

    pub fn with_sync_mode(mut self, sync_mode: bool) -> Self {
        self.sync_mode = sync_mode;
        self
    }

    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }
}

impl Default for AuditRequest {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            project_id: String::new(),
            project_name: String::new(),
            project_version: String::new(),
            severity_filter: String::new(),
            timeout: DEFAULT_TIMEOUT,
            auto_create_project: false,
            sync_mode: false,
            output_mode: OutputMode::User,
        }
    }
}
