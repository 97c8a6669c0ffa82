//! Turning metadata records into translation source units

use crate::metadata::ExtensionMetadata;
use lingup_catalog::{Context, Message, SourceFile};
use std::path::Path;
use tracing::debug;

/// Build the source unit for one metadata file.
///
/// Returns `None` when the record declares no `translation-context`; such
/// files contribute nothing and are silently skipped. Otherwise the unit
/// holds exactly one context, with one message per present translatable
/// field. Messages carry the file path as their location, no line number,
/// no comment and no plural form.
pub fn extract_source(path: &Path, metadata: &ExtensionMetadata) -> Option<SourceFile> {
    let context_name = metadata.translation_context.as_deref()?;

    let mut source = SourceFile::new(path);
    let location = source.location_name();

    let mut context = Context::new(context_name);
    for value in metadata.translatable_fields() {
        context
            .messages
            .push(Message::new(value).with_location(&location, None));
    }

    debug!(
        "extracted {} message(s) for context '{}' from {}",
        context.messages.len(),
        context_name,
        path.display()
    );

    source.contexts.push(context);
    Some(source)
}
