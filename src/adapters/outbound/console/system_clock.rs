use crate::ports::outbound::Clock;
use std::thread;
use std::time::{Duration, Instant};

/// SystemClock adapter backed by the monotonic clock and a blocking sleep
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
