use dtrack_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// One call made on the reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Info(String),
    Waiting { waited: usize, timeout: usize },
    Warning(String),
    Completed(String),
}

impl ProgressEvent {
    fn text(&self) -> String {
        match self {
            ProgressEvent::Info(m) | ProgressEvent::Warning(m) | ProgressEvent::Completed(m) => {
                m.clone()
            }
            ProgressEvent::Waiting { waited, timeout } => format!("{}/{}", waited, timeout),
        }
    }
}

/// Records everything the audit reports on stderr, by channel
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// True when any message, on any channel, contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.events().iter().any(|e| e.text().contains(needle))
    }

    /// Messages sent through `report_error`
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Warning(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    /// Seconds waited at each status check, as reported to the progress bar
    pub fn waited_seconds(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Waiting { waited, .. } => Some(waited),
                _ => None,
            })
            .collect()
    }

    pub fn completion(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|e| match e {
            ProgressEvent::Completed(m) => Some(m),
            _ => None,
        })
    }

    fn push(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ProgressEvent::Info(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.push(ProgressEvent::Waiting {
            waited: current,
            timeout: total,
        });
    }

    fn report_error(&self, message: &str) {
        self.push(ProgressEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ProgressEvent::Completed(message.to_string()));
    }
}
