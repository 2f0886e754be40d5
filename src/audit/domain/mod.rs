pub mod bom;
pub mod finding;
pub mod project;
pub mod severity;
pub mod upload;

pub use bom::{Bom, BomComponent};
pub use finding::{Analysis, Component, Finding, Vulnerability};
pub use project::{Project, ProjectSearchResult, Tag};
pub use severity::Severity;
pub use upload::{BomSubmission, ProcessingState, UploadResult};
