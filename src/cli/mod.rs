//! The harness command-line interface.
//!
//! Entry point for all modes; orchestrates the core library functions and
//! converts errors into rendered diagnostics plus a failing exit code.

use std::process::ExitCode;

use clap::Parser;

use crate::cli::args::HarnessArgs;
use crate::cli::output::OutputConfig;
use crate::errors::HarnessError;
use crate::runner::{rebuild_interpreter, ProcessRunner};
use crate::suite::{self, BENCHMARK_DIR};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = HarnessArgs::parse();
    let config = OutputConfig::default();

    match dispatch(&args, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}

fn dispatch(args: &HarnessArgs, config: &OutputConfig) -> Result<ExitCode, HarnessError> {
    if args.recompile {
        rebuild_interpreter(&args.backend.source_dir())?;
    }

    let binary = args
        .interpreter
        .clone()
        .unwrap_or_else(|| args.backend.default_binary());
    let runner = ProcessRunner::new(binary);

    if args.benchmark {
        suite::run_benchmark(&runner, &args.path.join(BENCHMARK_DIR), config)?;
        return Ok(ExitCode::SUCCESS);
    }

    if !args.path.is_dir() {
        let verdict = suite::run_file(&runner, &args.path)?;
        output::print_verdict(&verdict, config);
        return Ok(exit_for(verdict.failed));
    }

    let result = suite::run_tree(&runner, &args.path, config)?;
    Ok(exit_for(result.failed > 0))
}

fn exit_for(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
