//! Extension metadata records

use serde::Deserialize;

/// The translatable subset of one extension's metadata file.
///
/// Every field is optional; unknown keys are ignored. A record without a
/// `translation-context` contributes nothing to the catalogs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtensionMetadata {
    /// Context name grouping this extension's messages
    #[serde(rename = "translation-context")]
    pub translation_context: Option<String>,
    /// Display name of the extension
    pub name: Option<String>,
    /// Short description of the extension
    pub description: Option<String>,
}

impl ExtensionMetadata {
    /// The translatable field values in extraction order
    pub fn translatable_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
    }
}
