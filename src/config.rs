//! Configuration file support for dtrack-audit.
//!
//! Provides YAML-based configuration through `dtrack-audit.config.yml` files
//! and merges it with command-line flags and environment variables into the
//! settings of one audit run.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::{parse_env_bool, Args};
use dtrack_audit::application::dto::{AuditRequest, OutputMode, DEFAULT_INPUT_FILE, DEFAULT_TIMEOUT};
use dtrack_audit::audit::domain::Severity;
use dtrack_audit::shared::error::AuditError;
use dtrack_audit::shared::security::normalize_api_url;
use dtrack_audit::shared::Result;

pub const CONFIG_FILENAME: &str = "dtrack-audit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub input: Option<PathBuf>,
    pub project_name: Option<String>,
    pub project_version: Option<String>,
    pub severity_filter: Option<String>,
    pub timeout: Option<u64>,
    pub auto_create_project: Option<bool>,
    pub sync_mode: Option<bool>,
    pub teamcity_output: Option<bool>,
    pub insecure: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Everything `main` needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub request: AuditRequest,
    pub api_url: String,
    pub api_key: String,
    pub insecure: bool,
}

fn invalid(message: String) -> anyhow::Error {
    AuditError::InvalidConfiguration { message }.into()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        invalid(format!(
            "Failed to read config file: {}\nDetails: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display(),
            e
        ))
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        invalid(format!(
            "Failed to parse config file: {}\nDetails: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display(),
            e
        ))
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout == Some(0) {
        return Err(invalid(
            "timeout must be greater than 0.\n\n💡 Hint: Set 'timeout' to the number of seconds to wait for the analysis (e.g., 25).".to_string(),
        ));
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        if key == "api_key" {
            eprintln!(
                "⚠️  Warning: 'api_key' is never read from the config file; use -k or DTRACK_API_KEY."
            );
        } else {
            eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Merges flags, environment and config file, highest precedence first.
///
/// String options already carry their environment value through clap;
/// boolean switches are looked up with `env` so unparseable values can
/// fall back to `false` instead of failing the run.
pub fn resolve_settings(
    args: &Args,
    file: Option<&ConfigFile>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings> {
    let default_file = ConfigFile::default();
    let file = file.unwrap_or(&default_file);

    let switch = |flag: bool, env_name: &str, from_file: Option<bool>| -> bool {
        flag || parse_env_bool(env(env_name).as_deref())
            .or(from_file)
            .unwrap_or(false)
    };

    let api_key = non_empty(args.api_key.clone()).ok_or_else(|| {
        invalid(
            "API key is required.\n\n💡 Hint: Pass it with -k or set DTRACK_API_KEY.".to_string(),
        )
    })?;

    let api_url = non_empty(args.api_url.clone())
        .or_else(|| non_empty(file.api_url.clone()))
        .ok_or_else(|| {
            invalid(
                "API URL is required.\n\n💡 Hint: Pass it with -u, set DTRACK_API_URL or add 'api_url' to the config file.".to_string(),
            )
        })?;
    let api_url = normalize_api_url(&api_url).map_err(|e| invalid(e.to_string()))?;

    let severity_filter = args
        .severity_filter
        .clone()
        .or_else(|| file.severity_filter.clone())
        .unwrap_or_default();
    if !severity_filter.trim().is_empty() && severity_filter.parse::<Severity>().is_err() {
        eprintln!(
            "⚠️  Warning: Unknown severity filter '{}'; all findings will be reported.",
            severity_filter
        );
    }

    let input = args
        .input
        .clone()
        .or_else(|| file.input.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));
    let timeout = args
        .timeout
        .or(file.timeout)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    let request = AuditRequest::new(input)
        .with_project_id(args.project_id.clone().unwrap_or_default())
        .with_project(
            args.project_name
                .clone()
                .or_else(|| file.project_name.clone())
                .unwrap_or_default(),
            args.project_version
                .clone()
                .or_else(|| file.project_version.clone())
                .unwrap_or_default(),
        )
        .with_severity_filter(severity_filter)
        .with_timeout(timeout)
        .with_auto_create(switch(
            args.auto_create,
            "DTRACK_AUTO_CREATE_PROJECT",
            file.auto_create_project,
        ))
        .with_sync_mode(switch(args.sync, "DTRACK_SYNC_MODE", file.sync_mode))
        .with_output_mode(OutputMode::from_teamcity_flag(switch(
            args.teamcity,
            "DTRACK_TEAMCITY_OUTPUT",
            file.teamcity_output,
        )));

    Ok(Settings {
        request,
        api_url,
        api_key,
        insecure: args.insecure || file.insecure.unwrap_or(false),
    })
}
