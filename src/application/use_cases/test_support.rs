//! In-memory port implementations shared by the use case unit tests.

use crate::audit::domain::{
    BomSubmission, Component, Finding, ProcessingState, Project, UploadResult, Vulnerability,
};
use crate::ports::outbound::{Clock, DtrackApi, ProgressReporter, SbomReader};
use crate::shared::error::{AuditError, RemoteErrorKind};
use crate::shared::Result;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::Path;
use std::time::{Duration, Instant};

/// Records every call and answers from canned data.
pub struct MockDtrackApi {
    pub upload_token: String,
    pub upload_status: Option<u16>,
    pub states: RefCell<VecDeque<ProcessingState>>,
    pub fallback_state: ProcessingState,
    pub fail_status_check: bool,
    pub findings: Vec<Finding>,
    pub exact_match: Option<Project>,
    pub projects: Vec<Project>,
    pub next_uuid: String,
    pub calls: RefCell<Vec<String>>,
    pub submissions: RefCell<Vec<BomSubmission>>,
}

impl MockDtrackApi {
    pub fn new() -> Self {
        Self {
            upload_token: "t1".to_string(),
            upload_status: None,
            states: RefCell::new(VecDeque::new()),
            fallback_state: ProcessingState::Done,
            fail_status_check: false,
            findings: Vec::new(),
            exact_match: None,
            projects: Vec::new(),
            next_uuid: "new-uuid".to_string(),
            calls: RefCell::new(Vec::new()),
            submissions: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl DtrackApi for MockDtrackApi {
    fn upload_bom(&self, submission: &BomSubmission) -> Result<UploadResult> {
        self.record(format!("upload {}", submission.project));
        self.submissions.borrow_mut().push(submission.clone());
        if let Some(status) = self.upload_status {
            return Err(AuditError::Remote {
                kind: RemoteErrorKind::from_status(status),
                operation: "BOM upload".to_string(),
            }
            .into());
        }
        Ok(UploadResult {
            token: self.upload_token.clone(),
        })
    }

    fn processing_state(&self, token: &str) -> Result<ProcessingState> {
        self.record(format!("status {}", token));
        if self.fail_status_check {
            anyhow::bail!("connection reset");
        }
        Ok(self
            .states
            .borrow_mut()
            .pop_front()
            .unwrap_or(self.fallback_state))
    }

    fn get_findings(&self, project_id: &str) -> Result<Vec<Finding>> {
        self.record(format!("findings {}", project_id));
        Ok(self.findings.clone())
    }

    fn lookup_project(&self, name: &str, version: &str) -> Result<Option<Project>> {
        self.record(format!("lookup {} {}", name, version));
        Ok(self.exact_match.clone())
    }

    fn list_active_projects(&self) -> Result<Vec<Project>> {
        self.record("list".to_string());
        Ok(self.projects.clone())
    }

    fn create_project(&self, name: &str, version: &str) -> Result<Project> {
        self.record(format!("create {} {}", name, version));
        Ok(Project {
            uuid: self.next_uuid.clone(),
            ..Project::new(name, version)
        })
    }

    fn update_project_version(&self, project_id: &str, version: &str) -> Result<()> {
        self.record(format!("patch {} {}", project_id, version));
        Ok(())
    }
}

/// Virtual clock; `sleep` advances time instantly.
pub struct FakeClock {
    start: Instant,
    offset: Cell<Duration>,
    pub sleeps: RefCell<Vec<Duration>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Cell::new(Duration::ZERO),
            sleeps: RefCell::new(Vec::new()),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.start + self.offset.get()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
        self.offset.set(self.offset.get() + duration);
    }
}

pub struct MemorySbomReader {
    pub content: Option<Vec<u8>>,
}

impl MemorySbomReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.as_bytes().to_vec()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl SbomReader for MemorySbomReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        self.content.clone().ok_or_else(|| {
            AuditError::FileReadError {
                path: path.to_path_buf(),
                details: "No such file or directory".to_string(),
            }
            .into()
        })
    }
}

#[derive(Default)]
pub struct SilentProgressReporter {
    pub messages: RefCell<Vec<String>>,
}

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub fn project(uuid: &str, name: &str, version: &str) -> Project {
    Project {
        uuid: uuid.to_string(),
        ..Project::new(name, version)
    }
}

pub fn finding(name: &str, version: &str, vuln_id: &str, severity: &str) -> Finding {
    Finding {
        component: Component {
            name: name.to_string(),
            version: version.to_string(),
            ..Default::default()
        },
        vulnerability: Vulnerability {
            vuln_id: vuln_id.to_string(),
            source: "NVD".to_string(),
            severity: severity.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}
