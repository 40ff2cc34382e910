//! verbump - Semantic version change classifier
//!
//! Reads old and new versions from the command line and/or a TOML module
//! list and reports the dominant change across all modules.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use verbump::cli::CliArgs;
use verbump::error::AppError;
use verbump::orchestrator::{Orchestrator, OrchestratorResult};
use verbump::output::{create_formatter, OutputConfig, OutputFormat};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(&output_config);

    match reconcile(&args) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            formatter.format(&result, &mut stdout)?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            // JSON consumers read errors from stdout
            if output_config.format == OutputFormat::Json {
                let mut stdout = io::stdout().lock();
                formatter.format_error(&e, &mut stdout)?;
                stdout.flush()?;
            } else {
                formatter.format_error(&e, &mut io::stderr().lock())?;
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Validate arguments, collect modules and reconcile them
fn reconcile(args: &CliArgs) -> Result<OrchestratorResult, AppError> {
    args.validate()?;
    verbump::logging::init(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let orchestrator = Orchestrator::new(args)?;
    if args.verbose {
        eprintln!("verbump v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Modules: {}", orchestrator.module_count());
    }

    Ok(orchestrator.run()?)
}
