use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use callmemaybe::Cli;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    callmemaybe::run(&cli)
}
