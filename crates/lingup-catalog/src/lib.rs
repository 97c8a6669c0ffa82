//! Qt Linguist translation catalog support for lingup
//!
//! This crate implements the `.ts` catalog file format (TS version 2.1) and
//! the update semantics lingup relies on:
//!
//! - Catalog loading and writing
//! - Context and message value objects
//! - Merging messages extracted from source files, with obsolete tracking
//!
//! # Example
//!
//! ```rust,no_run
//! use lingup_catalog::{Catalog, CatalogOptions, Context, Message, SourceFile};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = Catalog::load("app_de.ts", CatalogOptions::default())?;
//!
//! let mut source = SourceFile::new("data/extensions/foo/metadata.json");
//! let mut context = Context::new("Foo");
//! context.messages.push(
//!     Message::new("Foo Ext").with_location("data/extensions/foo/metadata.json", None),
//! );
//! source.contexts.push(context);
//!
//! catalog.update(&source);
//! catalog.write()?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod message;
pub mod reader;
pub mod writer;

pub use catalog::{Catalog, CatalogOptions, UpdateSummary};
pub use error::{CatalogError, CatalogResult};
pub use message::{Context, Location, Message, SourceFile, Translation, TranslationState};
