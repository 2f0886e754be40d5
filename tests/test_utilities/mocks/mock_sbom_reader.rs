use dtrack_audit::prelude::*;
use dtrack_audit::shared::error::AuditError;
use std::path::Path;

/// Mock SbomReader serving fixed content for any path
pub struct MockSbomReader {
    content: Option<Vec<u8>>,
}

impl MockSbomReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.as_bytes().to_vec()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        self.content.clone().ok_or_else(|| {
            AuditError::FileReadError {
                path: path.to_path_buf(),
                details: "No such file or directory (os error 2)".to_string(),
            }
            .into()
        })
    }
}
