// Harness entry point: parse arguments, run the requested mode, and report
// failure through the exit code.

use std::process::ExitCode;

fn main() -> ExitCode {
    loxtest::cli::run()
}
