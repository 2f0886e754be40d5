mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, resolve_settings};
use dtrack_audit::adapters::outbound::console::{
    StderrProgressReporter, StdoutPresenter, SystemClock,
};
use dtrack_audit::adapters::outbound::filesystem::FileSystemReader;
use dtrack_audit::adapters::outbound::network::DtrackClient;
use dtrack_audit::application::factories::ReporterFactory;
use dtrack_audit::application::use_cases::RunAuditUseCase;
use dtrack_audit::ports::inbound::AuditPort;
use dtrack_audit::ports::outbound::OutputPresenter;
use dtrack_audit::shared::error::{AuditError, ExitCode};
use dtrack_audit::shared::Result;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<AuditError>()
        .map(AuditError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load config file: explicit path must exist, auto-discovery is optional
    let config_file = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    let settings = resolve_settings(&args, config_file.as_ref(), |name| {
        std::env::var(name).ok()
    })?;
    let request = &settings.request;

    // Create adapters (Dependency Injection)
    let api = DtrackClient::new(settings.api_url.as_str(), settings.api_key.as_str())
        .with_insecure(settings.insecure);
    let use_case = RunAuditUseCase::new(
        api,
        FileSystemReader::new(),
        SystemClock::new(),
        StderrProgressReporter::new(),
    );

    // Execute use case
    let response = use_case.run_audit(request)?;

    let Some(report) = response.report else {
        return Ok(ExitCode::Success);
    };

    // Render and present the report
    eprintln!("{}", ReporterFactory::progress_message(request.output_mode));
    let reporter = ReporterFactory::create(request.output_mode, &settings.api_url);
    let output = reporter.format(&report)?;
    StdoutPresenter::new().present(&output)?;

    if report.has_findings() {
        Ok(ExitCode::VulnerabilitiesDetected)
    } else {
        Ok(ExitCode::Success)
    }
}
