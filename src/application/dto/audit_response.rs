use crate::audit::domain::{Bom, Finding};

/// Findings that passed the severity gate, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditReport {
    pub findings: Vec<Finding>,
    /// SBOM annotated with findings; only present for TeamCity output
    pub bom: Option<Bom>,
    /// Findings that matched no SBOM component
    pub unmatched_findings: usize,
}

impl AuditReport {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self {
            findings,
            bom: None,
            unmatched_findings: 0,
        }
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// AuditResponse - result of one audit run
#[derive(Debug, Clone, PartialEq)]
pub struct AuditResponse {
    /// Processing token issued for the upload
    pub token: String,
    /// Project the SBOM was uploaded to
    pub project_id: String,
    /// `None` when sync mode is off and findings were not requested
    pub report: Option<AuditReport>,
}

impl AuditResponse {
    pub fn has_findings(&self) -> bool {
        self.report.as_ref().is_some_and(AuditReport::has_findings)
    }
}
