//! Ingestor — reads newline-delimited JSON entries, runs them through a
//! [`Pipeline`], and writes the results as newline-delimited JSON.
//!
//! Blank lines are ignored. Lines that don't decode as an [`Entry`] are
//! skipped with a warning so one bad record never stops the stream.

use std::io::{BufRead, Write};
use tenantline_core::{Entry, Pipeline};

/// Counters reported when the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub processed: usize,
    pub skipped: usize,
    pub tenanted: usize,
}

pub fn run<R: BufRead, W: Write>(
    pipeline: &Pipeline,
    input: R,
    mut output: W,
) -> anyhow::Result<IngestStats> {
    let mut stats = IngestStats::default();

    for (lineno, line) in input.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        // Invalid UTF-8 fails here too, like any other undecodable line.
        let mut entry: Entry = match serde_json::from_slice(&line) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(line = lineno + 1, error = %err, "skipping malformed entry");
                stats.skipped += 1;
                continue;
            }
        };

        pipeline.process(&mut entry);
        if entry.tenant().is_some() {
            stats.tenanted += 1;
        }
        stats.processed += 1;

        serde_json::to_writer(&mut output, &entry)?;
        output.write_all(b"\n")?;
    }

    output.flush()?;
    Ok(stats)
}
