/// Use cases module containing application business logic orchestration
mod completion_poller;
mod findings_pipeline;
mod project_resolver;
mod run_audit;
mod upload_session;

#[cfg(test)]
pub(crate) mod test_support;

pub use completion_poller::{CompletionPoller, PollOutcome, POLL_INTERVAL};
pub use findings_pipeline::FindingsPipeline;
pub use project_resolver::{ProjectResolver, ResolvedProject};
pub use run_audit::RunAuditUseCase;
pub use upload_session::UploadSession;
