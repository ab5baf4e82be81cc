//! User-facing output for the harness.
//!
//! Centralizing verdict and summary printing here keeps every execution mode
//! reporting the same way. Mismatch blocks print as soon as a file completes
//! so long suite runs stay observable; the summary prints once at the end.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::compare::{FileVerdict, Mismatch};
use crate::suite::SuiteResult;

/// Controls whether reports are colorized.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub color: ColorChoice,
}

impl OutputConfig {
    /// Uncolored output, for captured or piped runs.
    pub fn plain() -> Self {
        Self {
            color: ColorChoice::Never,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        let color = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self { color }
    }
}

/// Prints one file's verdict, with a diagnostic block per mismatched line.
pub fn print_verdict(verdict: &FileVerdict, config: &OutputConfig) {
    let mut stdout = StandardStream::stdout(config.color);

    if !verdict.failed {
        print_tag(&mut stdout, "PASS", Color::Green);
        println!(": {}", verdict.path.display());
        return;
    }

    print_tag(&mut stdout, "FAIL", Color::Red);
    println!(": {}", verdict.path.display());
    for mismatch in &verdict.mismatches {
        print_mismatch(&mut stdout, mismatch);
    }
}

/// Prints the end-of-run summary with the failure rate.
pub fn print_summary(result: &SuiteResult) {
    println!(
        "\nFailed: {} ({:.0}%)",
        result.failed,
        result.failure_rate()
    );
}

fn print_mismatch(stdout: &mut StandardStream, mismatch: &Mismatch) {
    println!("  [line {:2}] {}", mismatch.line_number, mismatch.source_code);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    println!("  Expected: {}", mismatch.expected);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    println!("  Actual:   {}", mismatch.actual);
    let _ = stdout.reset();
}

fn print_tag(stdout: &mut StandardStream, tag: &str, color: Color) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    print!("{}", tag);
    let _ = stdout.reset();
}
