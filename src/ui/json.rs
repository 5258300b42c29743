//! NDJSON helpers shared by `--json` output paths.

use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line) and flush.
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    writeln!(out, "{}", event)?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
