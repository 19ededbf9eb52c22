//! graphgen — prints the operation stream of a seeded random graph.
//!
//! ```text
//! graphgen stream --seed seed1 --nodes 50 --model dnd
//! graphgen batch a b c --settings settings.json
//! ```

mod cli;
mod logging;


use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use cli::{run_cli, Cli};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_cli(cli, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = format!("{err:#}"), "graphgen failed");
            ExitCode::FAILURE
        }
    }
}
