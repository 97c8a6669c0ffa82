//! lingup - Main Entry Point

use anyhow::Result;
use clap::Parser;
use lingup::{pipeline, Config};
use lingup_common::init_logging;
use std::path::PathBuf;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the .ts catalog files
    #[arg(short, long)]
    catalog_dir: Option<PathBuf>,

    /// Root directory of the extension metadata tree
    #[arg(short, long)]
    metadata_dir: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    let mut config = Config::from_env();
    if let Some(dir) = args.catalog_dir {
        config.catalog_dir = dir;
    }
    if let Some(dir) = args.metadata_dir {
        config.metadata_dir = dir;
    }

    info!(
        "updating catalogs in {} from metadata under {}",
        config.catalog_dir.display(),
        config.metadata_dir.display()
    );

    pipeline::run(&config)?;
    Ok(())
}
