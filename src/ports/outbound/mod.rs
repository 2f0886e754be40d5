/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (Dependency-Track, file system, clock, console).
pub mod clock;
pub mod dtrack_api;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod sbom_reader;

pub use clock::Clock;
pub use dtrack_api::DtrackApi;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use sbom_reader::SbomReader;
