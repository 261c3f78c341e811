//! Generate command handler.

use super::load_spec;
use crate::{GenerateArgs, OutputFormat};
use anyhow::Context;
use spec_generator::RecordGenerator;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let loader = load_spec(&args.spec, args.seed)?;

    let generator = match &args.group {
        Some(group) => RecordGenerator::for_group(&loader, group),
        None => RecordGenerator::new(&loader),
    }
    .with_context(|| format!("Failed to resolve specification: {}", args.spec.display()))?;
    let mut generator = generator.with_start_index(args.start);

    tracing::info!(
        "Generating {} records from index {} ({} fields)",
        args.iterations,
        args.start,
        generator.field_names().len()
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file: {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        OutputFormat::Jsonl => {
            for record in generator.records(args.iterations) {
                let record = record.context("Failed to generate record")?;
                serde_json::to_writer(&mut out, &record.to_json())?;
                writeln!(out)?;
            }
        }
        OutputFormat::Json => {
            let records = generator
                .records(args.iterations)
                .map(|record| record.map(|r| r.to_json()))
                .collect::<Result<Vec<_>, _>>()
                .context("Failed to generate record")?;
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if let Some(path) = &args.output {
        tracing::info!("Wrote {} records to {}", args.iterations, path.display());
    }
    Ok(())
}
