/// Console adapters: stdout report output, stderr progress and wall-clock time
mod progress_reporter;
mod stdout_presenter;
mod system_clock;

pub use progress_reporter::StderrProgressReporter;
pub use stdout_presenter::StdoutPresenter;
pub use system_clock::SystemClock;
