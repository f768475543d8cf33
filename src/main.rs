use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use kimberlynet::config::AppPaths;
use kimberlynet::shell::{Console, Shell, StdinInput};
use kimberlynet::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kimberlynet",
    version,
    about = "Interactive property listing finder",
    long_about = "Kimberlynet filters and sorts the property listings in Sales.csv \
                  against your interest rate, deposit, tax deduction and the \
                  thresholds kept in Settings.csv, both read from the current \
                  directory. Listings and thresholds are saved back when you exit. \
                  The program takes no arguments; everything is asked interactively."
)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let paths = AppPaths::new()?;
    let storage = Storage::load(paths.clone()).with_context(|| {
        format!(
            "Could not load listings and settings from {}",
            paths.base_dir().display()
        )
    })?;

    let console = Console::new(StdinInput::new(), io::stdout());
    let mut shell = Shell::new(storage, console);
    shell.run().context("Session ended before exit; nothing was saved")?;

    Ok(())
}
