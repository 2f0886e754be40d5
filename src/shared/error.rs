use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no findings at or above the severity filter
    Success = 0,
    /// Findings were reported for the audited project
    VulnerabilitiesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors, missing API settings)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::VulnerabilitiesDetected => write!(f, "Vulnerabilities Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// HTTP-level failures reported by the Dependency-Track API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// 404
    ProjectNotFound,
    /// 401
    AuthError,
    /// 403
    PermissionError,
    /// Any other non-2xx status
    UnexpectedStatus(u16),
}

impl RemoteErrorKind {
    /// Maps a non-success HTTP status code to its error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => RemoteErrorKind::ProjectNotFound,
            401 => RemoteErrorKind::AuthError,
            403 => RemoteErrorKind::PermissionError,
            other => RemoteErrorKind::UnexpectedStatus(other),
        }
    }
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteErrorKind::ProjectNotFound => {
                write!(f, "The project could not be found or invalid API URL.")
            }
            RemoteErrorKind::AuthError => write!(f, "Authentication/Authorization error."),
            RemoteErrorKind::PermissionError => write!(
                f,
                "Permission error. Check that you have all required permissions."
            ),
            RemoteErrorKind::UnexpectedStatus(status) => {
                write!(f, "Unexpected HTTP status code {}.", status)
            }
        }
    }
}

/// Application-specific errors for the audit pipeline.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to read SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a CycloneDX XML or JSON document")]
    InvalidBom { path: PathBuf, details: String },

    #[error("Dependency-Track API error during {operation}: {kind}\n\n💡 Hint: Check the API URL, the API key and the project identifier")]
    Remote {
        kind: RemoteErrorKind,
        operation: String,
    },

    #[error("Failed to decode Dependency-Track response during {operation}\nDetails: {details}")]
    DecodeError { operation: String, details: String },

    #[error("Project ID is required\n\n💡 Hint: Pass a project ID with -p, or enable auto-creation with -a and give a project name with -n")]
    MissingProjectError,

    #[error("Project name is required for project auto-creation\n\n💡 Hint: Pass a project name with -n or set DTRACK_PROJECT_NAME")]
    MissingProjectName,

    #[error("Unable to find or create project '{name}'")]
    ProjectNotCreated { name: String },

    #[error("Token was not received\n\n💡 Hint: Dependency-Track rejected the SBOM without queuing it for analysis; check that the file is a valid SBOM")]
    TokenNotIssuedError,

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl AuditError {
    /// Exit code the top-level handler uses for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AuditError::InvalidConfiguration { .. }
            | AuditError::MissingProjectError
            | AuditError::MissingProjectName => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}
