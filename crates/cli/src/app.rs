//! Run wiring: config resolution, input loading, outcome rendering.

use std::io::Write;
use std::path::PathBuf;

use skuforge_registry::{RunSummary, Runner};

use crate::cli::{Cli, OutputFormatArg};
use crate::dto::OutcomeLine;
use crate::input;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: Option<PathBuf>,
    pub current_year: i32,
    pub output: OutputFormatArg,
}

impl RunConfig {
    /// `clock_year` is used only when no year was given on the command line
    /// or in the environment.
    pub fn from_cli(cli: &Cli, clock_year: i32) -> Self {
        Self {
            input: cli.input.clone(),
            current_year: cli.current_year.unwrap_or(clock_year),
            output: cli.output,
        }
    }
}

/// Process every record and write one line per outcome to `out`.
///
/// Record rejections are part of the output, not errors. Only input loading
/// and write failures are returned as `Err`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> anyhow::Result<RunSummary> {
    let inputs = match &config.input {
        Some(path) => input::load(path)?,
        None => input::demo_catalogue(),
    };
    tracing::info!(
        records = inputs.len(),
        source = %config
            .input
            .as_deref()
            .map_or_else(|| "demo".to_string(), |p| p.display().to_string()),
        "loaded products"
    );

    let mut runner = Runner::new(config.current_year);
    let outcomes = runner.run(&inputs);

    for outcome in &outcomes {
        match config.output {
            OutputFormatArg::Text => writeln!(out, "{outcome}")?,
            OutputFormatArg::Json => {
                serde_json::to_writer(&mut *out, &OutcomeLine::from(outcome))?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;

    Ok(RunSummary::from_outcomes(&outcomes))
}
