use crate::audit::domain::{BomSubmission, Finding, ProcessingState, Project, UploadResult};
use crate::shared::Result;

/// DtrackApi port for the Dependency-Track REST API
///
/// This port abstracts every remote call the audit pipeline makes, so the
/// use cases can be exercised without a running server.
///
/// # Errors
/// Implementations return an error for transport failures, for non-2xx
/// statuses (see [`AuditError::Remote`](crate::shared::error::AuditError::Remote))
/// and for bodies that cannot be decoded.
pub trait DtrackApi {
    /// Submits a BOM for analysis (`PUT /api/v1/bom`).
    fn upload_bom(&self, submission: &BomSubmission) -> Result<UploadResult>;

    /// Reports whether the analysis behind `token` is still running
    /// (`GET /api/v1/bom/token/{token}`).
    fn processing_state(&self, token: &str) -> Result<ProcessingState>;

    /// Fetches every finding of a project (`GET /api/v1/finding/project/{id}`).
    fn get_findings(&self, project_id: &str) -> Result<Vec<Finding>>;

    /// Looks a project up by exact name and version.
    ///
    /// # Returns
    /// `None` when the service answers 404.
    fn lookup_project(&self, name: &str, version: &str) -> Result<Option<Project>>;

    /// Lists active projects (first page of 600).
    fn list_active_projects(&self) -> Result<Vec<Project>>;

    /// Creates a project and returns it with its freshly issued UUID.
    fn create_project(&self, name: &str, version: &str) -> Result<Project>;

    /// Sets the version of an existing project (`PATCH /api/v1/project/{id}`).
    fn update_project_version(&self, project_id: &str, version: &str) -> Result<()>;
}
