//! Command line interface.

pub mod command;

use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::{command, Parser};

/// Readings file used when no path is given.
pub const DEFAULT_READINGS_FILE: &str = "readings.txt";

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Parses a file of utility meter readings and prints a report
pub struct Cli {
    /// Path of the readings file
    #[arg(default_value = DEFAULT_READINGS_FILE)]
    pub path: PathBuf,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}

/// Prints the exit prompt and waits for one line on stdin when interactive.
pub fn pause<W: Write>(out: &mut W, wait: bool) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Press Enter to exit...")?;
    out.flush()?;

    let stdin = io::stdin();
    if wait && stdin.is_terminal() {
        let mut line = String::new();
        // EOF or a broken stdin both count as acknowledgment
        if let Err(e) = stdin.lock().read_line(&mut line) {
            log::debug!("stdin closed while waiting: {}", e);
        }
    }

    Ok(())
}

// -- Tests -------------------------------------------------------------------
