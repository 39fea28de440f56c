use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use binsort::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("binsort=warn")),
        )
        .init();

    let config = Config::parse().resolve()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    binsort::run(&config, &mut out)?;

    Ok(())
}
