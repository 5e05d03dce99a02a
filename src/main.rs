mod cli;

use cli::Args;
use sbom_test_app::config::{discover_config, load_config_from_path, ConfigFile, Settings};
use sbom_test_app::prelude::*;
use sbom_test_app::shared::error::ExitCode;
use std::path::Path;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(config, args.overrides())?;

    // Create adapters (Dependency Injection)
    let mut http_client_factory = ReqwestClientFactory::new().with_timeout(settings.http_timeout);
    if let Some(user_agent) = settings.user_agent.clone() {
        http_client_factory = http_client_factory.with_user_agent(user_agent);
    }

    let use_case = RunApplicationUseCase::new(
        RustlsRuntime::new(),
        ProcessWorkingDirectory::new(),
        http_client_factory,
        SqliteConnector::in_memory(),
        ZlibCompressor::with_level(settings.compression_level),
        StdoutReporter::new(),
    );

    let response = use_case.run(RunRequest::new(settings.input))?;
    log::debug!(
        "run finished: http_client_ready={} database_connected={} compressed={:?}",
        response.http_client_ready,
        response.database_connected,
        response.summary.compressed_len()
    );

    Ok(())
}

/// Explicit `--config` wins; otherwise look for a config in the current directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path)).map(Some),
        None => discover_config(Path::new(".")),
    }
}
