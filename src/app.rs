//! Application entry sequence

use std::io::Write;

use anyhow::Context;
use log::debug;

use crate::example_module::{calculate_sum, greet};
use crate::output::{OutputMode, Summary};

/// Banner printed first
pub const WELCOME: &str = "Welcome to the Python Application Skeleton!";

/// Build the summary the entry point prints
#[must_use]
pub fn summary() -> Summary {
    let greeting = greet("World");
    let result = calculate_sum(10, 20);
    debug!("calculate_sum(10, 20) = {result}");

    Summary {
        welcome: WELCOME.to_string(),
        greeting,
        sum: format!("Sum of 10 and 20 is: {result}"),
    }
}

/// Run the application, writing to `out`
///
/// Returns the process exit status, which is always 0 unless writing fails.
pub fn run<W: Write>(mode: OutputMode, out: &mut W) -> anyhow::Result<i32> {
    summary().render(mode, out).context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(0)
}
