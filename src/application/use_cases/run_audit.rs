use super::{CompletionPoller, FindingsPipeline, PollOutcome, ProjectResolver, UploadSession};
use crate::application::dto::{AuditReport, AuditRequest, AuditResponse};
use crate::audit::domain::Bom;
use crate::ports::inbound::AuditPort;
use crate::ports::outbound::{Clock, DtrackApi, ProgressReporter, SbomReader};
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::time::Duration;

/// RunAuditUseCase - Core use case for auditing an SBOM
///
/// This use case runs the pipeline stages strictly in sequence:
/// resolve project, reconcile version, upload, wait, fetch and gate
/// findings, correlate with the SBOM.
///
/// # Type Parameters
/// * `A` - DtrackApi implementation
/// * `R` - SbomReader implementation
/// * `C` - Clock implementation
/// * `P` - ProgressReporter implementation
pub struct RunAuditUseCase<A, R, C, P> {
    api: A,
    sbom_reader: R,
    clock: C,
    progress_reporter: P,
    poll_interval: Option<Duration>,
}

impl<A, R, C, P> RunAuditUseCase<A, R, C, P>
where
    A: DtrackApi,
    R: SbomReader,
    C: Clock,
    P: ProgressReporter,
{
    /// Creates a new RunAuditUseCase with injected dependencies
    pub fn new(api: A, sbom_reader: R, clock: C, progress_reporter: P) -> Self {
        Self {
            api,
            sbom_reader,
            clock,
            progress_reporter,
            poll_interval: None,
        }
    }

    /// Overrides the status polling interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Executes the audit
    ///
    /// # Errors
    /// Every stage failure aborts the run. An upload without token fails with
    /// [`AuditError::TokenNotIssuedError`] before any polling happens.
    pub fn execute(&self, request: &AuditRequest) -> Result<AuditResponse> {
        // Step 1: Resolve the project
        if request.project_id.is_empty() {
            self.progress_reporter.report(&format!(
                "🔎 Resolving Dependency-Track project '{}' {}",
                request.project_name, request.project_version
            ));
        }

        let resolved = ProjectResolver::new(&self.api).resolve(
            &request.project_id,
            &request.project_name,
            &request.project_version,
            request.auto_create_project,
        )?;
        let project_id = resolved.project_id;

        if resolved.version_different && !request.project_version.is_empty() {
            self.progress_reporter.report(&format!(
                "🔄 Updating project {} to version {}",
                project_id, request.project_version
            ));
            self.api
                .update_project_version(&project_id, &request.project_version)?;
        }

        // Step 2: Upload the SBOM
        self.progress_reporter.report(&format!(
            "📤 Uploading SBOM file: {}",
            request.input_path.display()
        ));

        let upload = UploadSession::new(&self.api, &self.sbom_reader)
            .upload(&request.input_path, &project_id)?;
        let token = upload
            .token()
            .ok_or(AuditError::TokenNotIssuedError)?
            .to_string();

        self.progress_reporter.report(&format!(
            "SBOM file is successfully uploaded to DTrack API. Result token is {}",
            token
        ));

        if !request.sync_mode {
            return Ok(AuditResponse {
                token,
                project_id,
                report: None,
            });
        }

        // Step 3: Wait for the analysis
        self.wait_for_analysis(&token, request.timeout)?;

        // Step 4: Fetch and gate findings
        self.progress_reporter
            .report(&format!("📥 Fetching findings for project {}", project_id));

        let findings =
            FindingsPipeline::new(&self.api).get_findings(&project_id, &request.severity_filter)?;
        let mut report = AuditReport::new(findings);

        // Step 5: Correlate with SBOM components for per-component output
        if request.output_mode.needs_bom() {
            let mut bom = self.load_bom(request)?;
            report.unmatched_findings =
                FindingsPipeline::<A>::correlate(&mut bom, &report.findings);
            if report.unmatched_findings > 0 {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {} finding(s) matched no component of the SBOM",
                    report.unmatched_findings
                ));
            }
            report.bom = Some(bom);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Audit complete: {} finding(s) reported",
            report.findings.len()
        ));

        Ok(AuditResponse {
            token,
            project_id,
            report: Some(report),
        })
    }

    fn wait_for_analysis(&self, token: &str, timeout: Duration) -> Result<()> {
        self.progress_reporter
            .report("⏳ Waiting for Dependency-Track to finish the analysis...");

        let mut poller = CompletionPoller::new(&self.api, &self.clock);
        if let Some(interval) = self.poll_interval {
            poller = poller.with_interval(interval);
        }

        let total = timeout.as_secs() as usize;
        let mut on_check = |waited: Duration| {
            self.progress_reporter.report_progress(
                (waited.as_secs() as usize).min(total),
                total,
                Some("Waiting for analysis"),
            );
        };

        match poller.poll_with_progress(token, timeout, &mut on_check)? {
            PollOutcome::Completed { .. } => {
                self.progress_reporter.report("✅ Analysis finished");
            }
            PollOutcome::TimedOut { .. } => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Analysis did not finish within {}s; reporting the findings available now.",
                    timeout.as_secs()
                ));
            }
        }
        Ok(())
    }

    fn load_bom(&self, request: &AuditRequest) -> Result<Bom> {
        let content = self.sbom_reader.read_sbom(&request.input_path)?;
        Bom::parse(&content).map_err(|e| {
            AuditError::InvalidBom {
                path: request.input_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl<A, R, C, P> AuditPort for RunAuditUseCase<A, R, C, P>
where
    A: DtrackApi,
    R: SbomReader,
    C: Clock,
    P: ProgressReporter,
{
    fn run_audit(&self, request: &AuditRequest) -> Result<AuditResponse> {
        self.execute(request)
    }
}
