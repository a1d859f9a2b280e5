//! Replay loop: file in, records out.
//!
//! The driver owns all recovery policy. The engine's only failure is a
//! duplicate live order id, and here that aborts the run; everything
//! the engine produced up to that point is simply dropped with the
//! process, same as any other fatal error. Malformed input lines are
//! logged and skipped, so they never reach the core.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use exchange_core::{MatchingEngine, OutputMessage};
use exchange_protocol::{format_output_line, parse_input_line};

use crate::cli::Cli;

/// Run the whole replay: parse, match, flush.
pub fn run(cli: &Cli) -> Result<()> {
    let records = process_file(&cli.input)?;
    write_records(&cli.output, &records)?;

    info!(
        records = records.len(),
        output = %cli.output.display(),
        "replay complete"
    );
    Ok(())
}

/// Feed every event in `path` through a fresh engine, collecting all
/// records in production order.
fn process_file(path: &Path) -> Result<Vec<OutputMessage>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut engine = MatchingEngine::new();
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line
            .with_context(|| format!("failed to read line {} of {}", line_no, path.display()))?;

        let Some(event) = parse_input_line(&line) else {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                warn!(line_no, line = trimmed, "skipping malformed input line");
            }
            continue;
        };

        debug!(line_no, ?event, "processing event");
        engine
            .process_event(event, &mut records)
            .with_context(|| format!("event at line {} of {}", line_no, path.display()))?;
    }

    Ok(records)
}

/// Write all records to `path`, one line each.
fn write_records(path: &Path, records: &[OutputMessage]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writeln!(writer, "{}", format_output_line(record))
            .with_context(|| format!("failed to write to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))
}
