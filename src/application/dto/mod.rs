/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod audit_request;
mod audit_response;
mod output_mode;

pub use audit_request::{AuditRequest, DEFAULT_INPUT_FILE, DEFAULT_TIMEOUT};
pub use audit_response::{AuditReport, AuditResponse};
pub use output_mode::OutputMode;
