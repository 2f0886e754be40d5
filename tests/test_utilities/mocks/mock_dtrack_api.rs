use dtrack_audit::audit::domain::{BomSubmission, ProcessingState, UploadResult};
use dtrack_audit::prelude::*;
use dtrack_audit::shared::error::{AuditError, RemoteErrorKind};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    projects: Vec<Project>,
    created: usize,
    token: String,
    processing: VecDeque<bool>,
    findings: HashMap<String, Vec<Finding>>,
    failures: HashMap<&'static str, u16>,
    calls: Vec<String>,
}

/// Stateful in-memory Dependency-Track
///
/// Created projects and version updates persist across calls, so repeated
/// audits against the same instance behave like runs against one server.
#[derive(Clone, Default)]
pub struct MockDtrackApi {
    state: Arc<Mutex<State>>,
}

impl MockDtrackApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state.lock().unwrap().token = "t1".to_string();
        api
    }

    pub fn with_project(self, uuid: &str, name: &str, version: &str) -> Self {
        self.state.lock().unwrap().projects.push(Project {
            uuid: uuid.to_string(),
            ..Project::new(name, version)
        });
        self
    }

    pub fn with_token(self, token: &str) -> Self {
        self.state.lock().unwrap().token = token.to_string();
        self
    }

    /// Answers of successive status checks; `Done` once exhausted
    pub fn with_processing(self, states: &[bool]) -> Self {
        self.state
            .lock()
            .unwrap()
            .processing
            .extend(states.iter().copied());
        self
    }

    pub fn with_findings(self, project_id: &str, findings: Vec<Finding>) -> Self {
        self.state
            .lock()
            .unwrap()
            .findings
            .insert(project_id.to_string(), findings);
        self
    }

    /// Makes the operation named like the recorded call prefix fail
    pub fn failing(self, operation: &'static str, status: u16) -> Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(operation, status);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.lock().unwrap().projects.clone()
    }

    fn record(&self, operation: &'static str, detail: String) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("{} {}", operation, detail).trim_end().to_string());
        match state.failures.get(operation) {
            Some(status) => Err(AuditError::Remote {
                kind: RemoteErrorKind::from_status(*status),
                operation: operation.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl DtrackApi for MockDtrackApi {
    fn upload_bom(&self, submission: &BomSubmission) -> Result<UploadResult> {
        self.record("upload", submission.project.clone())?;
        Ok(UploadResult {
            token: self.state.lock().unwrap().token.clone(),
        })
    }

    fn processing_state(&self, token: &str) -> Result<ProcessingState> {
        self.record("status", token.to_string())?;
        let processing = self
            .state
            .lock()
            .unwrap()
            .processing
            .pop_front()
            .unwrap_or(false);
        Ok(ProcessingState::from_processing_flag(processing))
    }

    fn get_findings(&self, project_id: &str) -> Result<Vec<Finding>> {
        self.record("findings", project_id.to_string())?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .findings
            .get(project_id)
            .cloned()
            .unwrap_or_default())
    }

    fn lookup_project(&self, name: &str, version: &str) -> Result<Option<Project>> {
        self.record("lookup", format!("{} {}", name, version))?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .projects
            .iter()
            .find(|p| p.name == name && p.version == version)
            .cloned())
    }

    fn list_active_projects(&self) -> Result<Vec<Project>> {
        self.record("list", String::new())?;
        Ok(self.projects())
    }

    fn create_project(&self, name: &str, version: &str) -> Result<Project> {
        self.record("create", format!("{} {}", name, version))?;
        let mut state = self.state.lock().unwrap();
        state.created += 1;
        let project = Project {
            uuid: format!("generated-{}", state.created),
            ..Project::new(name, version)
        };
        state.projects.push(project.clone());
        Ok(project)
    }

    fn update_project_version(&self, project_id: &str, version: &str) -> Result<()> {
        self.record("patch", format!("{} {}", project_id, version))?;
        let mut state = self.state.lock().unwrap();
        if let Some(project) = state.projects.iter_mut().find(|p| p.uuid == project_id) {
            project.version = version.to_string();
        }
        Ok(())
    }
}
