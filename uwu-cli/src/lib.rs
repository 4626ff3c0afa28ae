#![deny(unused_crate_dependencies)]

#[cfg(test)]
mod test;

use std::{io, path::PathBuf};

use clap::{ArgAction, Parser};
use run::RunError;
use tracing::Level;
use uwu_diagnostic::Diagnostic;

use crate::version::VERSION;

pub mod programs;
pub mod run;
pub mod version;

fn report_run_error(err: RunError) -> io::Result<()> {
    let mut diagnostic = Diagnostic::new();
    err.report(&mut diagnostic);
    diagnostic.report_all(&mut io::stderr())
}

#[derive(Parser)]
#[command(name = "uwu", disable_version_flag = true)]
struct Cli {
    /// The example program to run. Runs every program if omitted.
    program: Option<String>,

    /// List the example programs.
    #[arg(long)]
    list: bool,

    /// Sort the JSON array in FILE with both sorting algorithms.
    #[arg(long, value_name = "FILE")]
    sort: Option<PathBuf>,

    /// Log to stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print the current version.
    #[arg(long)]
    version: bool,
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// The entrypoint to the CLI.
///
/// It's defined in this library to avoid false positives associated with the
/// [`#![deny(unused_crate_dependencies)]` attribute](https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html#unused-crate-dependencies).
pub fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("uwu {}", VERSION);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let config = run::Config {
        program: cli.program,
        list: cli.list,
        sort: cli.sort,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run::run(config, &mut out) {
        Ok(()) => Ok(()),
        Err(err) => {
            report_run_error(err)?;
            std::process::exit(1)
        }
    }
}
