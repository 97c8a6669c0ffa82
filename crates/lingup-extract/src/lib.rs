//! Extension metadata scanning and message extraction for lingup
//!
//! This crate walks a metadata directory tree, parses each extension's JSON
//! metadata and turns the translatable `name` / `description` strings into
//! source units that translation catalogs can be updated from.

pub mod error;
pub mod extract;
pub mod metadata;
pub mod scanner;

pub use error::{ScanError, ScanResult};
pub use extract::extract_source;
pub use metadata::ExtensionMetadata;
pub use scanner::{scan_metadata_files, MetadataFile};
