//! lingup - updates Qt Linguist translation catalogs from extension metadata
//!
//! The pipeline is a single forward pass: load every `.ts` catalog from the
//! catalog directory, walk the metadata tree for extension JSON files,
//! extract their translatable strings, merge them into every catalog, then
//! write all catalogs back in place.

pub mod config;
pub mod pipeline;

pub use config::Config;
pub use pipeline::{run, PipelineReport};
