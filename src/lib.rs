//! Specforge Library
//!
//! Command handlers and argument types for the `specforge` binary. The
//! engine itself lives in two crates:
//!
//! - `spec_core` - specification model, shorthand keys, generated values
//! - `spec_generator` - suppliers, type registry, loader, record generation
//!
//! # CLI Usage
//!
//! ```bash
//! specforge generate --spec users.yaml --iterations 5 --format jsonl
//! specforge check --spec users.yaml
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

pub mod commands;

/// Record output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A single pretty-printed JSON array
    Json,
    /// One compact JSON object per line
    Jsonl,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Specification file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long)]
    pub spec: PathBuf,

    /// Number of records to generate
    #[arg(long, default_value_t = 10)]
    pub iterations: u64,

    /// Iteration index of the first record
    #[arg(long, default_value_t = 0)]
    pub start: u64,

    /// Base seed for random values
    #[arg(long, default_value_t = 0, env = "SPECFORGE_SEED")]
    pub seed: u64,

    /// Only generate the fields of this field group
    #[arg(long)]
    pub group: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Specification file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long)]
    pub spec: PathBuf,

    /// Base seed for random values
    #[arg(long, default_value_t = 0, env = "SPECFORGE_SEED")]
    pub seed: u64,
}
