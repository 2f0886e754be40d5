use crate::ports::outbound::SbomReader;
use crate::shared::error::AuditError;
use crate::shared::security::validate_sbom_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading SBOM files from the file system
///
/// This adapter implements the SbomReader port. The file is validated
/// (regular file behind any symlinks, size limit) before it is read into memory.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        let read_error = |details: String| AuditError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        validate_sbom_file(path).map_err(|e| read_error(e.to_string()))?;
        Ok(fs::read(path).map_err(|e| read_error(e.to_string()))?)
    }
}
