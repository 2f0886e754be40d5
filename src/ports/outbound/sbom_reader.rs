use crate::shared::Result;
use std::path::Path;

/// SbomReader port for reading the SBOM document to audit
pub trait SbomReader {
    /// Reads the whole SBOM file into memory
    ///
    /// # Errors
    /// Returns [`AuditError::FileReadError`](crate::shared::error::AuditError::FileReadError)
    /// if the file does not exist, is not a regular file, or cannot be read.
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>>;
}
