mod cli;

use cli::Args;
use std::io;
use std::path::Path;
use std::process;
use totool::adapters::outbound::console::StderrReporter;
use totool::adapters::outbound::process::OtoolProber;
use totool::application::dto::WalkRequest;
use totool::application::use_cases::PrintDependenciesUseCase;
use totool::config::{self, ConfigFile};
use totool::shared::error::ExitCode;
use totool::shared::Result;

fn main() {
    let args = Args::parse_args();

    if args.files.is_empty() {
        eprintln!("{}", Args::usage());
        eprintln!("\nFor more information, try '--help'.");
        process::exit(ExitCode::UsageError.as_i32());
    }

    if let Err(e) = run(args) {
        eprintln!("totool: {}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let reporter = StderrReporter::new();

    let config = load_config(args.config.as_deref())?;
    if let Some(ref config) = config {
        config::warn_unknown_fields(config, &reporter);
    }
    let settings = config::resolve_settings(args.overrides(), config.as_ref())?;

    // Create adapters (Dependency Injection)
    let prober = OtoolProber::new(settings.tool);
    let use_case = PrintDependenciesUseCase::new(prober, reporter);

    let request = WalkRequest::new(args.files, settings.format, settings.verbose);

    // Per-root failures are reported by the use case and do not affect the exit code
    use_case.execute(&request, io::stdout())?;

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}
