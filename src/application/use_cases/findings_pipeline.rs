use crate::audit::domain::{Bom, Finding};
use crate::audit::policies::SeverityGate;
use crate::audit::services::FindingCorrelator;
use crate::ports::outbound::DtrackApi;
use crate::shared::Result;

/// FindingsPipeline - fetches a project's findings, applies the severity
/// gate and correlates the survivors with SBOM components
pub struct FindingsPipeline<'a, A: DtrackApi> {
    api: &'a A,
}

impl<'a, A: DtrackApi> FindingsPipeline<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Fetches all findings of `project_id` and keeps those at least as
    /// severe as `min_severity`. An empty or unknown `min_severity` keeps
    /// every finding with a recognized severity.
    pub fn get_findings(&self, project_id: &str, min_severity: &str) -> Result<Vec<Finding>> {
        let findings = self.api.get_findings(project_id)?;
        Ok(SeverityGate::from_filter(min_severity).apply(findings))
    }

    /// Annotates `bom` with `findings` and returns the number of findings
    /// that matched no component.
    pub fn correlate(bom: &mut Bom, findings: &[Finding]) -> usize {
        FindingCorrelator::annotate(bom, findings)
    }
}
