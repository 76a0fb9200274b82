//! skeleton - A minimal application skeleton
//!
//! Prints a welcome banner, a greeting and a sum, then exits.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::io;
use std::process;

use clap::Parser;
use skeleton::output::OutputMode;

/// skeleton - A minimal application skeleton
#[derive(Parser, Debug)]
#[command(
    name = "skeleton",
    version,
    about = "A minimal application skeleton",
    long_about = "Prints a welcome banner, a greeting and a sum.\n\n\
                  Serves as a starting template for new applications."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    json: bool,
}

/// Main entry point for the skeleton CLI
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let status = skeleton::app::run(output_mode, &mut io::stdout().lock())?;
    process::exit(status)
}
