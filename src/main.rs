mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use custom_date::CustomDate;
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let current = CustomDate::new(cli.day, cli.month, cli.year)
        .context("failed to build the starting date")?;
    writeln!(out, "Current Date: {current}")?;

    let shifted = current
        .add_days(cli.offset)
        .with_context(|| format!("failed to add {} days to {current}", cli.offset))?;
    info!(%current, %shifted, offset = cli.offset, "shifted date");
    writeln!(out, "New Date (currentDate + {} days): {shifted}", cli.offset)?;

    writeln!(out, "Are current date and new date equal? {}", current == shifted)?;
    writeln!(out, "Long date format: {}", current.long())?;

    Ok(())
}
