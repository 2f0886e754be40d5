use crate::application::dto::{AuditRequest, AuditResponse};
use crate::shared::Result;

/// AuditPort - Inbound port for the SBOM audit use case
///
/// This port defines the interface that external adapters (CLI, CI glue)
/// use to trigger an audit run.
pub trait AuditPort {
    /// Uploads the request's SBOM and, in sync mode, collects the gated
    /// findings
    ///
    /// # Errors
    /// Returns an error if:
    /// - No project can be resolved
    /// - The SBOM file cannot be read or, in TeamCity mode, parsed
    /// - Dependency-Track rejects a call or answers with an undecodable body
    /// - The upload yields no processing token
    fn run_audit(&self, request: &AuditRequest) -> Result<AuditResponse>;
}
