//! Output formatting for human and JSON modes
//!
//! The entry point collects its results into a [`Summary`], which can be
//! rendered either as the plain console lines or as a JSON document.

use std::io::{self, Write};

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Everything the entry point prints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Welcome banner
    pub welcome: String,
    /// Greeting message
    pub greeting: String,
    /// Sum line
    pub sum: String,
}

impl Summary {
    /// Render the summary to `out` based on output mode
    pub fn render<W: Write>(&self, mode: OutputMode, out: &mut W) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.render_human(out),
            OutputMode::Json => self.render_json(out),
        }
    }

    fn render_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.welcome)?;
        writeln!(out, "{}", self.greeting)?;
        writeln!(out, "{}", self.sum)
    }

    fn render_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}
