//! `cert-scaffold` entry-point: load configuration, render templates, print
//! a summary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cert_scaffold::cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cert_scaffold::run(&cli, &mut std::io::stdout().lock())?;
    Ok(())
}
