//! Command-line arguments for the harness.
//!
//! Uses the `clap` crate with its "derive" feature for a declarative,
//! type-safe argument surface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "loxtest",
    version,
    about = "Golden-output test harness for Lox interpreter backends."
)]
pub struct HarnessArgs {
    /// A test file, or the root of a fixture tree.
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Interpreter backend to exercise.
    #[arg(long, value_enum, default_value = "treewalk")]
    pub backend: Backend,

    /// Override the backend's interpreter binary location.
    #[arg(long)]
    pub interpreter: Option<PathBuf>,

    /// Rebuild the interpreter before running any tests.
    #[arg(short, long)]
    pub recompile: bool,

    /// Run every file in the benchmark directory, without pass/fail
    /// accounting.
    #[arg(short, long)]
    pub benchmark: bool,
}

/// The interpreter implementations the harness can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Tree-walking interpreter.
    Treewalk,
    /// Bytecode virtual machine.
    Bytecode,
}

impl Backend {
    /// Directory holding the backend's sources and build recipe.
    pub fn source_dir(self) -> PathBuf {
        match self {
            Backend::Treewalk => PathBuf::from("../treewalk"),
            Backend::Bytecode => PathBuf::from("../bytecode"),
        }
    }

    /// Location of the compiled interpreter binary.
    pub fn default_binary(self) -> PathBuf {
        self.source_dir().join("lox")
    }
}
