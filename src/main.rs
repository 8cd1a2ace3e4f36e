use anyhow::Context;
use clap::Parser;
use ledgerwriter_validator::{
    config::{Config, DEFAULT_CONFIG_PATH},
    intake::process_requests,
    TransactionValidator,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// JSON-lines request file. Reads stdin when omitted.
    input: Option<PathBuf>,
}

/// Validates each request read from the input and prints one verdict per line.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only verdicts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    info!("Validator starting with config: {:?}", config);

    let validator = TransactionValidator::new(config.ledger.local_routing_number);

    let stdout = io::stdout();
    let summary = match cli.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            process_requests(&validator, BufReader::new(file), stdout.lock())?
        }
        None => process_requests(&validator, io::stdin().lock(), stdout.lock())?,
    };

    info!(
        "Processed requests: {} accepted, {} rejected, {} malformed",
        summary.accepted, summary.rejected, summary.malformed
    );

    Ok(())
}
