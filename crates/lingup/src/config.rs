//! Run configuration

use std::env;
use std::path::PathBuf;

/// Where catalogs live and where metadata is scanned from.
///
/// Defaults mirror the conventional layout: catalogs next to the working
/// directory, metadata under `data/extensions`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the `.ts` catalog files (non-recursive)
    pub catalog_dir: PathBuf,
    /// Root of the extension metadata tree (recursive)
    pub metadata_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from("."),
            metadata_dir: PathBuf::from("data/extensions"),
        }
    }
}

impl Config {
    /// Build a configuration from defaults with environment overrides.
    ///
    /// `LINGUP_CATALOG_DIR` and `LINGUP_METADATA_DIR` override the defaults;
    /// command line flags are applied on top by the caller.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var("LINGUP_CATALOG_DIR") {
            config.catalog_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("LINGUP_METADATA_DIR") {
            config.metadata_dir = PathBuf::from(dir);
        }
        config
    }
}
