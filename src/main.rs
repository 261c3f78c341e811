//! Command-line interface for specforge
//!
//! # Usage Examples
//!
//! ## Generate Records
//! ```bash
//! # Ten records as a JSON array on stdout
//! specforge generate --spec users.yaml
//!
//! # Records 100..1100 of one field group as JSON lines
//! specforge generate --spec users.json --start 100 --iterations 1000 \
//!   --group keys --format jsonl --output keys.jsonl
//!
//! # Different random values for the same specification
//! SPECFORGE_SEED=7 specforge generate --spec users.yaml
//! ```
//!
//! ## Check a Specification
//! ```bash
//! specforge check --spec users.yaml
//! ```
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=spec_generator=debug`.

use clap::{Parser, Subcommand};
use specforge::commands::{run_check, run_generate};
use specforge::{CheckArgs, GenerateArgs};

#[derive(Parser)]
#[command(name = "specforge")]
#[command(about = "Generate synthetic records from a field specification")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records from a specification
    Generate(GenerateArgs),

    /// Resolve every field of a specification without generating records
    Check(CheckArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Check(args) => run_check(args),
    }
}
