use serde::{Deserialize, Serialize};

/// JSON body of `PUT /api/v1/bom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BomSubmission {
    /// Project UUID
    pub project: String,
    /// Base64-encoded SBOM document
    pub bom: String,
}

/// Response of a BOM upload. An empty token means the service rejected the
/// document without queuing it for analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub token: String,
}

impl UploadResult {
    pub fn token(&self) -> Option<&str> {
        if self.token.trim().is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }
}

/// Analysis state of an upload token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingState {
    Processing,
    Done,
}

impl ProcessingState {
    pub fn from_processing_flag(processing: bool) -> Self {
        if processing {
            ProcessingState::Processing
        } else {
            ProcessingState::Done
        }
    }
}
