use clap::Parser;
use std::path::PathBuf;

/// Send an SBOM file to Dependency-Track for audit
#[derive(Parser, Debug)]
#[command(name = "dtrack-audit")]
#[command(version)]
#[command(
    about = "Send an SBOM file to Dependency-Track for audit",
    after_help = "API key and API URL are required, either as flags or environment variables."
)]
pub struct Args {
    /// Target SBOM file (CycloneDX XML or JSON) [default: bom.xml]
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Project ID
    #[arg(short = 'p', long, env = "DTRACK_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Project name, used to look up or auto-create the project
    #[arg(short = 'n', long, env = "DTRACK_PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Project version, used to look up or auto-create the project
    #[arg(short = 'v', long, env = "DTRACK_PROJECT_VERSION")]
    pub project_version: Option<String>,

    /// API key
    #[arg(short = 'k', long, env = "DTRACK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API URL, e.g. https://dtrack.example.com
    #[arg(short = 'u', long, env = "DTRACK_API_URL")]
    pub api_url: Option<String>,

    /// In sync mode, report and fail on findings of this severity or higher.
    /// Severity levels are: critical, high, medium, low, info, unassigned
    #[arg(short = 'g', long, env = "DTRACK_SEVERITY_FILTER")]
    pub severity_filter: Option<String>,

    /// Sync mode: upload the SBOM, wait for the analysis, show findings and
    /// exit with a non-zero code when there are any [env: DTRACK_SYNC_MODE]
    #[arg(short = 's', long = "sync")]
    pub sync: bool,

    /// Auto-create the project from its name when it does not exist
    /// [env: DTRACK_AUTO_CREATE_PROJECT]
    #[arg(short = 'a', long = "auto-create")]
    pub auto_create: bool,

    /// Use TeamCity output [env: DTRACK_TEAMCITY_OUTPUT]
    #[arg(short = 'T', long = "teamcity")]
    pub teamcity: bool,

    /// Max time in seconds to wait for the analysis [default: 25]
    #[arg(short = 't', long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Path to a config file (defaults to dtrack-audit.config.yml in the
    /// current directory when present)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Reads a boolean environment switch.
///
/// Accepts the usual spellings (`1`, `t`, `true`, any case) as `true`.
/// A set variable with any other value is `false`; an unset one is `None`.
pub fn parse_env_bool(value: Option<&str>) -> Option<bool> {
    let value = value?.trim().to_lowercase();
    Some(matches!(value.as_str(), "1" | "t" | "true"))
}
