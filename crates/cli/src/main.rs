use chrono::{Datelike, Utc};
use clap::Parser;

use skuforge_cli::app::{self, RunConfig};
use skuforge_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    skuforge_observability::init(cli.log_format.into());

    let config = RunConfig::from_cli(&cli, Utc::now().year());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(error) = app::run(&config, &mut out) {
        tracing::error!(error = %format!("{error:#}"), "run failed");
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
