use std::time::{Duration, Instant};

/// Clock port used by the completion poller.
///
/// Abstracting time keeps the polling loop testable without real sleeps.
pub trait Clock {
    fn now(&self) -> Instant;

    /// Blocks the current thread for `duration`.
    fn sleep(&self, duration: Duration);
}
