//! Per-file processing for blp-converter

pub mod convert;
pub mod info;

use crate::cli::Cli;
use anyhow::Result;
use blp_decode::load_blp;
use std::path::Path;

/// Files processed in one run and how many of them succeeded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Files handed to the run
    pub total: usize,
    /// Files converted (or inspected) without error
    pub succeeded: usize,
}

/// Process every file named on the command line.
///
/// A failing file is reported on stderr and skipped; it never aborts the run.
#[allow(clippy::print_stdout, clippy::print_stderr)]
pub fn execute(cli: &Cli) -> Tally {
    let mut tally = Tally::default();

    for file in &cli.files {
        tally.total += 1;
        match process_file(cli, file) {
            Ok(()) => tally.succeeded += 1,
            Err(e) => {
                log::debug!("{}: {e:?}", file.display());
                eprintln!("{}: {e:#}", file.display());
            }
        }
    }

    if !cli.infos && !cli.quiet {
        println!("Converted {}/{} file(s)", tally.succeeded, tally.total);
    }
    tally
}

#[allow(clippy::print_stdout)]
fn process_file(cli: &Cli, file: &Path) -> Result<()> {
    let blp = load_blp(file)?;

    if cli.infos {
        info::show_blp_info(file, &blp)
    } else {
        let output = convert::convert_blp(&blp, file, &cli.dest, cli.format, cli.miplevel)?;
        log::info!("Wrote {}", output.display());
        if !cli.quiet {
            println!("{}: OK", file.display());
        }
        Ok(())
    }
}
