//! Pigment - blend-mode and curve calculator
//!
//! Evaluates single blend operators and tone curves from the command line.

mod cli;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG overrides the default level.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let command = cli::parse(std::env::args().skip(1))?;
    debug!(?command, "Running");
    print!("{}", cli::run(&command)?);
    if !matches!(command, cli::Command::List) {
        println!();
    }
    Ok(())
}
