use crate::audit::domain::ProcessingState;
use crate::ports::outbound::{Clock, DtrackApi};
use crate::shared::Result;
use std::time::Duration;

/// Wait between two status checks; Dependency-Track never finishes faster.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How a wait ended. Neither outcome is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The service reported the analysis as finished
    Completed { checks: usize },
    /// The timeout elapsed first; findings are fetched anyway
    TimedOut { checks: usize },
}

impl PollOutcome {
    pub fn checks(self) -> usize {
        match self {
            PollOutcome::Completed { checks } | PollOutcome::TimedOut { checks } => checks,
        }
    }
}

/// Callback invoked before each status check with the time waited so far
pub type PollProgressCallback<'a> = &'a mut dyn FnMut(Duration);

/// CompletionPoller - blocks until a token's analysis is done or the
/// timeout elapses
pub struct CompletionPoller<'a, A: DtrackApi, C: Clock> {
    api: &'a A,
    clock: &'a C,
    interval: Duration,
}

impl<'a, A: DtrackApi, C: Clock> CompletionPoller<'a, A, C> {
    pub fn new(api: &'a A, clock: &'a C) -> Self {
        Self {
            api,
            clock,
            interval: POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn poll(&self, token: &str, timeout: Duration) -> Result<PollOutcome> {
        self.poll_with_progress(token, timeout, &mut |_: Duration| {})
    }

    /// Sleeps one interval, then checks the status once per interval until
    /// the service reports `Done` or more than `timeout` has passed since the
    /// call started.
    ///
    /// # Errors
    /// A failed status check aborts the wait and is returned as-is.
    pub fn poll_with_progress(
        &self,
        token: &str,
        timeout: Duration,
        on_check: PollProgressCallback<'_>,
    ) -> Result<PollOutcome> {
        let started = self.clock.now();
        let mut checks = 0;

        self.clock.sleep(self.interval);
        loop {
            let waited = self.clock.now().duration_since(started);
            if waited > timeout {
                return Ok(PollOutcome::TimedOut { checks });
            }

            on_check(waited);
            checks += 1;
            match self.api.processing_state(token)? {
                ProcessingState::Done => return Ok(PollOutcome::Completed { checks }),
                ProcessingState::Processing => self.clock.sleep(self.interval),
            }
        }
    }
}
