//! The extract-merge-write pipeline

use crate::config::Config;
use lingup_catalog::{Catalog, CatalogOptions};
use lingup_common::{LingupError, Result};
use lingup_extract::{extract_source, scan_metadata_files};
use std::fs;
use tracing::{debug, info};

/// Catalog options the pipeline always runs with: obsolete entries are
/// tracked, update summaries are logged, per-message decisions go to the
/// debug log.
const CATALOG_OPTIONS: CatalogOptions = CatalogOptions {
    no_obsolete: false,
    no_summary: false,
    verbose: true,
};

/// Aggregated counts of one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Catalogs loaded and written back
    pub catalogs: usize,
    /// Metadata files that produced a source unit
    pub sources: usize,
    /// Metadata files skipped for lack of a translation context
    pub skipped: usize,
    /// Messages added across all catalogs
    pub added: usize,
    /// Messages matched with existing entries across all catalogs
    pub matched: usize,
    /// Messages marked obsolete across all catalogs
    pub obsoleted: usize,
}

/// Run the full pipeline: load catalogs, scan metadata, merge, write.
///
/// Either the whole sequence completes or the first I/O or parse error
/// aborts the run with nothing guaranteed about already-merged in-memory
/// state; files on disk are only touched in the final write phase.
pub fn run(config: &Config) -> Result<PipelineReport> {
    let mut catalogs = discover_catalogs(config)?;
    let mut report = PipelineReport {
        catalogs: catalogs.len(),
        ..PipelineReport::default()
    };

    let metadata_files = scan_metadata_files(&config.metadata_dir)?;
    info!(
        "found {} catalog(s), {} metadata file(s)",
        catalogs.len(),
        metadata_files.len()
    );

    for file in &metadata_files {
        let Some(source) = extract_source(&file.path, &file.metadata) else {
            debug!(
                "skipping {}: no translation context",
                file.path.display()
            );
            report.skipped += 1;
            continue;
        };
        report.sources += 1;

        for catalog in &mut catalogs {
            let summary = catalog.update(&source);
            report.added += summary.added;
            report.matched += summary.matched;
            report.obsoleted += summary.obsoleted;
        }
    }

    for catalog in &catalogs {
        catalog.write()?;
    }

    info!(
        "done: {} catalog(s) written, {} source(s) merged, {} skipped, {} added, {} obsoleted",
        report.catalogs, report.sources, report.skipped, report.added, report.obsoleted
    );
    Ok(report)
}

/// Load every `.ts` file in the catalog directory, in sorted order
fn discover_catalogs(config: &Config) -> Result<Vec<Catalog>> {
    let dir = &config.catalog_dir;
    if !dir.is_dir() {
        return Err(LingupError::config(format!(
            "catalog directory does not exist: {}",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("ts") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut catalogs = Vec::with_capacity(paths.len());
    for path in paths {
        catalogs.push(Catalog::load(&path, CATALOG_OPTIONS)?);
    }
    Ok(catalogs)
}
