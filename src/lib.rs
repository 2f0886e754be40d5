//! dtrack-audit - Dependency-Track audit client
//!
//! This library uploads an SBOM to Dependency-Track, waits for the analysis
//! to finish and reports the findings at or above a severity threshold,
//! either for people or as TeamCity test events. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`audit`): Findings, projects, SBOM components, the severity gate
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dtrack_audit::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let api = DtrackClient::new("https://dtrack.example.com", "api-key");
//! let sbom_reader = FileSystemReader::new();
//! let clock = SystemClock::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RunAuditUseCase::new(api, sbom_reader, clock, progress_reporter);
//!
//! // Execute
//! let request = AuditRequest::new(PathBuf::from("bom.xml"))
//!     .with_project_id("6b3c1f0e-0000-4000-8000-000000000000")
//!     .with_severity_filter("high")
//!     .with_sync_mode(true);
//! let response = use_case.execute(&request)?;
//!
//! // Format output
//! if let Some(report) = response.report {
//!     let reporter = UserReporter::new("https://dtrack.example.com");
//!     print!("{}", reporter.format(&report)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        StderrProgressReporter, StdoutPresenter, SystemClock,
    };
    pub use crate::adapters::outbound::filesystem::FileSystemReader;
    pub use crate::adapters::outbound::network::DtrackClient;
    pub use crate::adapters::outbound::reporters::{TeamCityReporter, UserReporter};
    pub use crate::application::dto::{AuditReport, AuditRequest, AuditResponse, OutputMode};
    pub use crate::application::factories::ReporterFactory;
    pub use crate::application::use_cases::RunAuditUseCase;
    pub use crate::audit::domain::{Bom, BomComponent, Finding, Project, Severity};
    pub use crate::audit::policies::SeverityGate;
    pub use crate::ports::inbound::AuditPort;
    pub use crate::ports::outbound::{
        Clock, DtrackApi, OutputPresenter, ProgressReporter, ReportFormatter, SbomReader,
    };
    pub use crate::shared::Result;
}
