use super::Severity;
use serde::{Deserialize, Serialize};

/// Component a finding was reported against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub vuln_id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Raw severity string; kept as text so unknown values survive decoding.
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub recommendation: String,
}

impl Vulnerability {
    /// Parsed severity, `None` when the service sent something unrecognized.
    pub fn severity(&self) -> Option<Severity> {
        self.severity.parse().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(default)]
    pub analysis_state: String,
}

/// A (component, vulnerability, analysis) triple from `/api/v1/finding/project/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(default)]
    pub component: Component,
    #[serde(default)]
    pub vulnerability: Vulnerability,
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub matrix: String,
}

impl Finding {
    pub fn severity(&self) -> Option<Severity> {
        self.vulnerability.severity()
    }
}
