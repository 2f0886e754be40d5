/// Output mode for audit reports
///
/// Both the CLI (inbound adapter) and the report formatters (outbound
/// adapters) need to agree on it, so it lives in the application layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable findings list (default)
    #[default]
    User,
    /// One TeamCity test per SBOM component, as JSON lines
    TeamCity,
}

impl OutputMode {
    pub fn from_teamcity_flag(use_teamcity_output: bool) -> Self {
        if use_teamcity_output {
            OutputMode::TeamCity
        } else {
            OutputMode::User
        }
    }

    /// Whether rendering needs the SBOM parsed and correlated with findings.
    pub fn needs_bom(self) -> bool {
        matches!(self, OutputMode::TeamCity)
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::User => write!(f, "user"),
            OutputMode::TeamCity => write!(f, "teamcity"),
        }
    }
}
