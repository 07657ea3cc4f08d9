use std::path::PathBuf;

use clap::Parser;
use rxseed_generate::{DEFAULT_ROWS, DatasetEngine, DatasetOptions, GenerationError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(
    name = "rxseed",
    version,
    about = "Generate a synthetic prescription-delivery dataset as CSV files"
)]
struct Cli {
    /// Output directory for the generated CSV files.
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// Rows generated for every table.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u32,
    /// Seed for a reproducible run; a random seed is drawn and reported
    /// when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let options = DatasetOptions {
        out_dir: cli.out,
        rows: cli.rows,
        seed: cli.seed,
    };

    let result = DatasetEngine::new(options).run()?;
    println!("out_dir={}", result.out_dir.display());
    Ok(())
}
