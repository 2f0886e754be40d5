use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum SBOM file size (100 MB)
/// This prevents DoS attacks via excessively large files
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and resolves to a regular file
///
/// Symbolic links are followed; the checks apply to the target.
///
/// # Errors
/// Returns an error if:
/// - The path (or its link target) doesn't exist
/// - The target is not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
pub fn validate_sbom_file(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read SBOM file metadata: {}", e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates a value that is spliced into an API path (token, project UUID).
///
/// # Security
/// Prevents path traversal against the Dependency-Track API: the value must
/// be a single, non-empty path segment.
pub fn validate_path_segment(value: &str, description: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} must not be empty", description);
    }

    if value.contains('/') || value.contains('\\') || value.contains("..") {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            description
        );
    }

    if value.contains('#') || value.contains('?') {
        anyhow::bail!("Security: {} contains URL-unsafe characters", description);
    }

    Ok(())
}

/// Validates the Dependency-Track base URL and returns it without trailing slashes.
pub fn normalize_api_url(api_url: &str) -> Result<String> {
    let trimmed = api_url.trim().trim_end_matches('/');

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        anyhow::bail!(
            "API URL must start with http:// or https:// (got '{}')",
            api_url
        );
    }

    Ok(trimmed.to_string())
}
