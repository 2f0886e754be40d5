use crate::audit::domain::{Finding, Severity};

/// Minimum-urgency threshold for reported findings.
///
/// A finding passes when its severity is at least as urgent as the threshold
/// (`rank(finding) <= rank(threshold)`). Findings whose severity cannot be
/// parsed never pass. Without a threshold every finding with a recognized
/// severity passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityGate {
    threshold: Option<Severity>,
}

impl SeverityGate {
    pub fn new(threshold: Option<Severity>) -> Self {
        Self { threshold }
    }

    /// Builds a gate from a user-supplied filter; empty or unrecognized
    /// values disable filtering.
    pub fn from_filter(filter: &str) -> Self {
        Self::new(filter.parse().ok())
    }

    pub fn threshold(&self) -> Option<Severity> {
        self.threshold
    }

    pub fn evaluate(&self, finding: &Finding) -> bool {
        let Some(severity) = finding.severity() else {
            return false;
        };

        match self.threshold {
            Some(threshold) => severity.rank() <= threshold.rank(),
            None => true,
        }
    }

    /// Keeps the findings that pass the gate, preserving order.
    pub fn apply(&self, findings: Vec<Finding>) -> Vec<Finding> {
        findings.into_iter().filter(|f| self.evaluate(f)).collect()
    }
}
