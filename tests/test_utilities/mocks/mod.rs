/// Mock implementations for testing
mod fake_clock;
mod mock_dtrack_api;
mod mock_progress_reporter;
mod mock_sbom_reader;

pub use fake_clock::FakeClock;
pub use mock_dtrack_api::MockDtrackApi;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_reader::MockSbomReader;
