mod cli;
mod reading;

use std::io;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, pause, Cli};
use env_logger::Env;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    command::report(&cli.path, &mut stdout)?;
    pause(&mut stdout, !cli.no_pause)?;

    Ok(())
}
