//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use skuforge_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "skuforge",
    version,
    about = "Validate product attributes and issue unique SKUs",
    long_about = "Validate product attribute records and issue a unique SKU for each.\n\n\
                  Prints `[APPROVED] <SKU>` or `[REJECTED] <reason>` per record, in input order.\n\
                  Without INPUT, the built-in demo catalogue is processed."
)]
pub struct Cli {
    /// JSON file holding an array of product attribute objects.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Latest accepted model year (default: the current UTC year).
    #[arg(long = "current-year", value_name = "YEAR", env = "SKUFORGE_CURRENT_YEAR")]
    pub current_year: Option<i32>,

    /// Outcome rendering on stdout.
    #[arg(
        long = "output",
        value_enum,
        default_value = "text",
        env = "SKUFORGE_OUTPUT"
    )]
    pub output: OutputFormatArg,

    /// Log output format (logs go to stderr).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        env = "SKUFORGE_LOG_FORMAT"
    )]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// `[APPROVED] <SKU>` / `[REJECTED] <reason>` lines.
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
