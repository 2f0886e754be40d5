use crate::audit::domain::{BomSubmission, UploadResult};
use crate::ports::outbound::{DtrackApi, SbomReader};
use crate::shared::Result;
use base64::Engine;
use std::path::Path;

/// UploadSession - submits an SBOM file and obtains a processing token
pub struct UploadSession<'a, A: DtrackApi, R: SbomReader> {
    api: &'a A,
    reader: &'a R,
}

impl<'a, A: DtrackApi, R: SbomReader> UploadSession<'a, A, R> {
    pub fn new(api: &'a A, reader: &'a R) -> Self {
        Self { api, reader }
    }

    /// Uploads the SBOM at `path` to `project_id`
    ///
    /// # Returns
    /// The service's answer. Its token is empty when the BOM was rejected
    /// synchronously; callers must then skip polling and reporting.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the upload fails.
    pub fn upload(&self, path: &Path, project_id: &str) -> Result<UploadResult> {
        let content = self.reader.read_sbom(path)?;
        let submission = BomSubmission {
            project: project_id.to_string(),
            bom: base64::engine::general_purpose::STANDARD.encode(&content),
        };
        self.api.upload_bom(&submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{MemorySbomReader, MockDtrackApi};
    use crate::shared::error::{AuditError, RemoteErrorKind};

    #[test]
    fn test_upload_encodes_bom_as_base64() {
        let api = MockDtrackApi::new();
        let reader = MemorySbomReader::new("<bom/>");

        let result = UploadSession::new(&api, &reader)
            .upload(Path::new("bom.xml"), "abc")
            .unwrap();

        assert_eq!(result.token(), Some("t1"));
        let submissions = api.submissions.borrow();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].project, "abc");
        assert_eq!(submissions[0].bom, "PGJvbS8+");
    }

    #[test]
    fn test_upload_returns_empty_token_without_error() {
        let mut api = MockDtrackApi::new();
        api.upload_token = String::new();
        let reader = MemorySbomReader::new("<bom/>");

        let result = UploadSession::new(&api, &reader)
            .upload(Path::new("bom.xml"), "abc")
            .unwrap();

        assert_eq!(result.token(), None);
    }

    #[test]
    fn test_unreadable_file_is_file_read_error() {
        let api = MockDtrackApi::new();
        let reader = MemorySbomReader::missing();

        let err = UploadSession::new(&api, &reader)
            .upload(Path::new("missing.xml"), "abc")
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AuditError>(),
            Some(AuditError::FileReadError { .. })
        ));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_remote_error_is_propagated() {
        let mut api = MockDtrackApi::new();
        api.upload_status = Some(403);
        let reader = MemorySbomReader::new("<bom/>");

        let err = UploadSession::new(&api, &reader)
            .upload(Path::new("bom.xml"), "abc")
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AuditError>(),
            Some(AuditError::Remote {
                kind: RemoteErrorKind::PermissionError,
                ..
            })
        ));
    }
}
