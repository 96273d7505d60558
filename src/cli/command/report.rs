//! Read a readings file and print one report line per record.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::Result;
use log::{debug, error, info, trace, warn};

use crate::reading::parse_line;

/// Line counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub parsed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Reports every reading in `path` to `out`.
///
/// A missing or unreadable file is reported on `out` and yields an empty
/// summary. Only a failure to write to `out` is returned as an error.
pub fn report<W: Write>(path: &Path, out: &mut W) -> Result<Summary> {
    if !path.exists() {
        error!("readings file {} does not exist", path.display());
        writeln!(out, "File not found: {}", path.display())?;
        return Ok(Summary::default());
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("failed to read {}: {}", path.display(), e);
            writeln!(out, "Critical error: {}", e)?;
            return Ok(Summary::default());
        }
    };

    // Undecodable bytes become U+FFFD so they only affect their own line
    let contents = String::from_utf8_lossy(&bytes);
    let summary = process_lines(split_lines(&contents), out)?;
    info!(
        "{}: {} parsed, {} failed, {} blank",
        path.display(),
        summary.parsed,
        summary.failed,
        summary.skipped
    );

    Ok(summary)
}

/// Splits on `\r\n`, `\n` or a lone `\r`. A final terminator does not start
/// another line.
fn split_lines(contents: &str) -> Vec<&str> {
    let contents = contents
        .strip_suffix("\r\n")
        .or_else(|| contents.strip_suffix(|c: char| c == '\r' || c == '\n'))
        .unwrap_or(contents);

    if contents.is_empty() {
        return Vec::new();
    }

    contents
        .split("\r\n")
        .flat_map(|chunk| chunk.split(|c: char| c == '\r' || c == '\n'))
        .collect()
}

/// Parses each line in order, writing a reading or an error for every
/// non-blank one. A bad line never stops the ones after it.
pub fn process_lines<'a, W: Write>(
    lines: impl IntoIterator<Item = &'a str>,
    out: &mut W,
) -> io::Result<Summary> {
    let mut summary = Summary::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_number = idx + 1;

        if line.trim().is_empty() {
            trace!("line {}: blank", line_number);
            summary.skipped += 1;
            continue;
        }

        match parse_line(line) {
            Ok(reading) => {
                debug!("line {}: {:?}", line_number, reading);
                writeln!(out, "{}", reading)?;
                summary.parsed += 1;
            }
            Err(e) => {
                warn!("line {}: {}", line_number, e);
                writeln!(out, "Error processing line '{}': {}", line, e)?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

// -- Tests -------------------------------------------------------------------
