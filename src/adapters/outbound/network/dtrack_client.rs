use crate::audit::domain::{BomSubmission, Finding, ProcessingState, Project, UploadResult};
use crate::ports::outbound::DtrackApi;
use crate::shared::error::{AuditError, RemoteErrorKind};
use crate::shared::security::validate_path_segment;
use crate::shared::Result;
use anyhow::Context;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const BOM_UPLOAD_PATH: &str = "/api/v1/bom";
const BOM_TOKEN_PATH: &str = "/api/v1/bom/token";
const PROJECT_FINDINGS_PATH: &str = "/api/v1/finding/project";
const PROJECT_LOOKUP_PATH: &str = "/api/v1/project/lookup";
const PROJECT_PATH: &str = "/api/v1/project";

#[derive(Debug, Deserialize)]
struct ProcessState {
    #[serde(default)]
    processing: bool,
}

/// DtrackClient adapter for the Dependency-Track REST API
///
/// This adapter implements the DtrackApi port on top of a blocking reqwest
/// client. Every call builds its own short-lived client, so no connection
/// state survives between pipeline stages.
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Tokens and project IDs are checked before being spliced into a path
/// - Certificate validation is only disabled with `--insecure`
pub struct DtrackClient {
    api_url: String,
    api_key: String,
    insecure: bool,
}

impl DtrackClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for `api_url` (without trailing slash)
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            insecure: false,
        }
    }

    /// Accepts invalid TLS certificates (self-signed test instances)
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    fn http_client(&self) -> Result<Client> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dtrack-audit/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .danger_accept_invalid_certs(self.insecure)
            .build()?;
        Ok(client)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = format!("{}{}", self.api_url, path);
        Ok(self
            .http_client()?
            .request(method, url)
            .header("X-API-Key", &self.api_key)
            .header(CONTENT_TYPE, "application/json"))
    }

    fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response> {
        request
            .send()
            .with_context(|| format!("Failed to reach Dependency-Track during {}", operation))
    }

    fn check_status(response: &Response, operation: &str) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(AuditError::Remote {
            kind: RemoteErrorKind::from_status(status.as_u16()),
            operation: operation.to_string(),
        }
        .into())
    }

    fn decode<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T> {
        let body = response
            .text()
            .with_context(|| format!("Failed to read response body during {}", operation))?;
        serde_json::from_str(&body).map_err(|e| {
            AuditError::DecodeError {
                operation: operation.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl DtrackApi for DtrackClient {
    fn upload_bom(&self, submission: &BomSubmission) -> Result<UploadResult> {
        let operation = "BOM upload";
        let request = self.request(Method::PUT, BOM_UPLOAD_PATH)?.json(submission);
        let response = self.send(request, operation)?;
        Self::check_status(&response, operation)?;
        Self::decode(response, operation)
    }

    fn processing_state(&self, token: &str) -> Result<ProcessingState> {
        let operation = "token status check";
        validate_path_segment(token, "Token")?;
        let path = format!("{}/{}", BOM_TOKEN_PATH, token);
        let response = self.send(self.request(Method::GET, &path)?, operation)?;
        Self::check_status(&response, operation)?;
        let state: ProcessState = Self::decode(response, operation)?;
        Ok(ProcessingState::from_processing_flag(state.processing))
    }

    fn get_findings(&self, project_id: &str) -> Result<Vec<Finding>> {
        let operation = "findings retrieval";
        validate_path_segment(project_id, "Project ID")?;
        let path = format!("{}/{}", PROJECT_FINDINGS_PATH, project_id);
        let response = self.send(self.request(Method::GET, &path)?, operation)?;
        Self::check_status(&response, operation)?;
        Self::decode(response, operation)
    }

    fn lookup_project(&self, name: &str, version: &str) -> Result<Option<Project>> {
        let operation = "project lookup";
        let path = format!(
            "{}?name={}&version={}",
            PROJECT_LOOKUP_PATH,
            urlencoding::encode(name),
            urlencoding::encode(version)
        );
        let response = self.send(self.request(Method::GET, &path)?, operation)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::check_status(&response, operation)?;
        Ok(Some(Self::decode(response, operation)?))
    }

    fn list_active_projects(&self) -> Result<Vec<Project>> {
        let operation = "project listing";
        let path = format!(
            "{}?excludeInactive=true&pageSize=600&pageNumber=1",
            PROJECT_PATH
        );
        let response = self.send(self.request(Method::GET, &path)?, operation)?;
        Self::check_status(&response, operation)?;
        Self::decode(response, operation)
    }

    fn create_project(&self, name: &str, version: &str) -> Result<Project> {
        let operation = "project creation";
        let request = self
            .request(Method::PUT, PROJECT_PATH)?
            .json(&Project::new(name, version));
        let response = self.send(request, operation)?;
        Self::check_status(&response, operation)?;
        // Only 201 carries the created project; other 2xx leave the UUID empty.
        if response.status() != StatusCode::CREATED {
            return Ok(Project::default());
        }
        Self::decode(response, operation)
    }

    fn update_project_version(&self, project_id: &str, version: &str) -> Result<()> {
        let operation = "project version update";
        validate_path_segment(project_id, "Project ID")?;
        let path = format!("{}/{}", PROJECT_PATH, project_id);
        let request = self
            .request(Method::PATCH, &path)?
            .json(&json!({ "version": version }));
        let response = self.send(request, operation)?;
        Self::check_status(&response, operation)
    }
}
