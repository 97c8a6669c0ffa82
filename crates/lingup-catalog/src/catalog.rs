//! Translation catalog loading, merging and writing

use crate::error::CatalogResult;
use crate::message::{Context, Message, SourceFile, TranslationState};
use crate::{reader, writer};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options a catalog is loaded with
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogOptions {
    /// Drop messages that are no longer produced instead of marking them obsolete
    pub no_obsolete: bool,
    /// Suppress the per-update summary log line
    pub no_summary: bool,
    /// Log every message decision at debug level
    pub verbose: bool,
}

/// Counts of what one update pass did to a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Messages not previously tracked that were appended
    pub added: usize,
    /// Messages reconciled with an existing entry
    pub matched: usize,
    /// Messages newly marked obsolete
    pub obsoleted: usize,
    /// Messages dropped outright (only with `no_obsolete`)
    pub removed: usize,
}

/// One translation file: all known messages and their translated forms for
/// one target language.
///
/// Loaded once, mutated in place by [`Catalog::update`] across all source
/// units, written back once at the end of the run.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
    version: String,
    /// Target language attribute of the TS document
    pub language: Option<String>,
    /// Source language attribute of the TS document
    pub source_language: Option<String>,
    /// All contexts in document order
    pub contexts: Vec<Context>,
    options: CatalogOptions,
}

impl Catalog {
    /// Create a new empty catalog that will be written to `path`
    pub fn new(path: impl Into<PathBuf>, options: CatalogOptions) -> Self {
        Self {
            path: path.into(),
            version: "2.1".to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
            options,
        }
    }

    /// Load a catalog from a `.ts` file
    pub fn load(path: impl AsRef<Path>, options: CatalogOptions) -> CatalogResult<Self> {
        let path = path.as_ref();
        debug!("loading catalog: {}", path.display());

        let content = fs::read_to_string(path)?;
        let parsed = reader::parse(&content)?;

        Ok(Self {
            path: path.to_path_buf(),
            version: parsed.version.unwrap_or_else(|| "2.1".to_string()),
            language: parsed.language,
            source_language: parsed.source_language,
            contexts: parsed.contexts,
            options,
        })
    }

    /// Path the catalog was loaded from and will be written to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// TS format version of the document
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Options the catalog was loaded with
    pub fn options(&self) -> CatalogOptions {
        self.options
    }

    /// Find a context by name
    pub fn find_context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Find a message by context name and source text
    pub fn find_message(&self, context: &str, source: &str) -> Option<&Message> {
        self.find_context(context)?
            .messages
            .iter()
            .find(|m| m.source == source)
    }

    /// Merge the messages of one source unit into the catalog.
    ///
    /// Messages are matched by context name plus exact source text. New
    /// messages are appended, matched ones keep their translation (reviving
    /// obsolete entries), and messages previously tracked for this source
    /// file but no longer produced are marked obsolete (or dropped when the
    /// catalog was loaded with `no_obsolete`).
    pub fn update(&mut self, source: &SourceFile) -> UpdateSummary {
        let options = self.options;
        let source_name = source.location_name();
        let mut summary = UpdateSummary::default();

        // Source texts reconciled in this pass, per context name.
        let mut seen: HashMap<String, HashSet<String>> = HashMap::new();

        for incoming_context in &source.contexts {
            let index = match self
                .contexts
                .iter()
                .position(|c| c.name == incoming_context.name)
            {
                Some(index) => index,
                None => {
                    self.contexts.push(Context::new(&incoming_context.name));
                    self.contexts.len() - 1
                }
            };
            let context = &mut self.contexts[index];
            let seen_here = seen.entry(incoming_context.name.clone()).or_default();

            for incoming in &incoming_context.messages {
                seen_here.insert(incoming.source.clone());

                if let Some(existing) = context
                    .messages
                    .iter_mut()
                    .find(|m| m.source == incoming.source)
                {
                    existing.locations = incoming.locations.clone();
                    existing.comment = incoming.comment.clone();
                    if existing.translation.state.is_obsolete() {
                        existing.translation.state = if existing.translation.text.is_empty() {
                            TranslationState::Unfinished
                        } else {
                            TranslationState::Finished
                        };
                    }
                    summary.matched += 1;
                    if options.verbose {
                        debug!(
                            "matched message in {}: '{}'",
                            incoming_context.name, incoming.source
                        );
                    }
                } else {
                    context.messages.push(incoming.clone());
                    summary.added += 1;
                    if options.verbose {
                        debug!(
                            "added message to {}: '{}'",
                            incoming_context.name, incoming.source
                        );
                    }
                }
            }
        }

        // Messages previously extracted from this file but not produced this
        // time around.
        for context in &mut self.contexts {
            let seen_here = seen.get(&context.name);
            if options.no_obsolete {
                let before = context.messages.len();
                context.messages.retain(|m| {
                    !m.located_in(&source_name)
                        || seen_here.is_some_and(|s| s.contains(&m.source))
                });
                summary.removed += before - context.messages.len();
            } else {
                for message in &mut context.messages {
                    if message.located_in(&source_name)
                        && !seen_here.is_some_and(|s| s.contains(&message.source))
                        && !message.translation.state.is_obsolete()
                    {
                        message.translation.state = TranslationState::Obsolete;
                        summary.obsoleted += 1;
                        if options.verbose {
                            debug!(
                                "obsoleted message in {}: '{}'",
                                context.name, message.source
                            );
                        }
                    }
                }
            }
        }
        if options.no_obsolete {
            self.contexts.retain(|c| !c.messages.is_empty());
        }

        if !options.no_summary {
            info!(
                "{}: {} added, {} matched, {} obsoleted from {}",
                self.path.display(),
                summary.added,
                summary.matched,
                summary.obsoleted,
                source.path.display()
            );
        }

        summary
    }

    /// Serialize the catalog to TS document text
    pub fn to_ts_string(&self) -> String {
        writer::to_ts_string(self)
    }

    /// Persist the catalog to the file it was loaded from
    pub fn write(&self) -> CatalogResult<()> {
        fs::write(&self.path, self.to_ts_string())?;
        debug!("wrote catalog: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with(path: &str, context: &str, texts: &[&str]) -> SourceFile {
        let mut source = SourceFile::new(path);
        let mut ctx = Context::new(context);
        for text in texts {
            ctx.messages
                .push(Message::new(*text).with_location(path, None));
        }
        source.contexts.push(ctx);
        source
    }

    #[test]
    fn test_update_adds_new_messages() {
        let mut catalog = Catalog::new("x.ts", CatalogOptions::default());
        let source = source_with("meta.json", "Foo", &["Foo Ext", "Does a thing"]);

        let summary = catalog.update(&source);

        assert_eq!(summary.added, 2);
        assert_eq!(summary.matched, 0);
        assert_eq!(summary.obsoleted, 0);

        let context = catalog.find_context("Foo").unwrap();
        assert_eq!(context.messages.len(), 2);
        assert_eq!(context.messages[0].source, "Foo Ext");
        assert_eq!(
            context.messages[0].translation.state,
            TranslationState::Unfinished
        );
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut catalog = Catalog::new("x.ts", CatalogOptions::default());
        let source = source_with("meta.json", "Foo", &["Foo Ext"]);

        catalog.update(&source);
        let first = catalog.clone();
        let summary = catalog.update(&source);

        assert_eq!(summary.added, 0);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.obsoleted, 0);
        assert_eq!(catalog.to_ts_string(), first.to_ts_string());
    }

    #[test]
    fn test_update_keeps_existing_translation() {
        let mut catalog = Catalog::new("x.ts", CatalogOptions::default());
        let source = source_with("meta.json", "Foo", &["Foo Ext"]);
        catalog.update(&source);

        {
            let message = &mut catalog.contexts[0].messages[0];
            message.translation.text = "Extension Foo".to_string();
            message.translation.state = TranslationState::Finished;
        }

        catalog.update(&source);

        let message = catalog.find_message("Foo", "Foo Ext").unwrap();
        assert_eq!(message.translation.text, "Extension Foo");
        assert_eq!(message.translation.state, TranslationState::Finished);
    }

    #[test]
    fn test_update_marks_dropped_messages_obsolete() {
        let mut catalog = Catalog::new("x.ts", CatalogOptions::default());
        catalog.update(&source_with("meta.json", "Foo", &["Foo Ext", "Does a thing"]));

        // "description" was deleted from the metadata between runs.
        let summary = catalog.update(&source_with("meta.json", "Foo", &["Foo Ext"]));

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.obsoleted, 1);

        let message = catalog.find_message("Foo", "Does a thing").unwrap();
        assert_eq!(message.translation.state, TranslationState::Obsolete);
        // Obsolete entries are kept, not deleted.
        assert_eq!(catalog.find_context("Foo").unwrap().messages.len(), 2);
    }

    #[test]
    fn test_update_obsoletes_only_this_source() {
        let mut catalog = Catalog::new("x.ts", CatalogOptions::default());
        catalog.update(&source_with("a.json", "Shared", &["from a"]));
        catalog.update(&source_with("b.json", "Shared", &["from b"]));

        // Re-running a must not obsolete b's messages even in the same context.
        let summary = catalog.update(&source_with("a.json", "Shared", &["from a"]));

        assert_eq!(summary.obsoleted, 0);
        assert_eq!(
            catalog
                .find_message("Shared", "from b")
                .unwrap()
                .translation
                .state,
            TranslationState::Unfinished
        );
    }

    #[test]
    fn test_update_revives_obsolete_message() {
        let mut catalog = Catalog::new("x.ts", CatalogOptions::default());
        catalog.update(&source_with("meta.json", "Foo", &["Foo Ext"]));

        {
            let message = &mut catalog.contexts[0].messages[0];
            message.translation.text = "Extension Foo".to_string();
            message.translation.state = TranslationState::Finished;
        }

        // Dropped in one run, back in the next.
        catalog.update(&source_with("meta.json", "Foo", &[]));
        assert_eq!(
            catalog
                .find_message("Foo", "Foo Ext")
                .unwrap()
                .translation
                .state,
            TranslationState::Obsolete
        );

        catalog.update(&source_with("meta.json", "Foo", &["Foo Ext"]));
        let message = catalog.find_message("Foo", "Foo Ext").unwrap();
        assert_eq!(message.translation.state, TranslationState::Finished);
        assert_eq!(message.translation.text, "Extension Foo");
    }

    #[test]
    fn test_update_with_no_obsolete_removes_messages() {
        let options = CatalogOptions {
            no_obsolete: true,
            ..CatalogOptions::default()
        };
        let mut catalog = Catalog::new("x.ts", options);
        catalog.update(&source_with("meta.json", "Foo", &["Foo Ext", "Does a thing"]));

        let summary = catalog.update(&source_with("meta.json", "Foo", &["Foo Ext"]));

        assert_eq!(summary.removed, 1);
        assert!(catalog.find_message("Foo", "Does a thing").is_none());
        assert_eq!(catalog.find_context("Foo").unwrap().messages.len(), 1);
    }

    #[test]
    fn test_update_renamed_context_obsoletes_old_messages() {
        let mut catalog = Catalog::new("x.ts", CatalogOptions::default());
        catalog.update(&source_with("meta.json", "Old", &["Foo Ext"]));
        catalog.update(&source_with("meta.json", "New", &["Foo Ext"]));

        assert_eq!(
            catalog
                .find_message("Old", "Foo Ext")
                .unwrap()
                .translation
                .state,
            TranslationState::Obsolete
        );
        assert_eq!(
            catalog
                .find_message("New", "Foo Ext")
                .unwrap()
                .translation
                .state,
            TranslationState::Unfinished
        );
    }

    #[test]
    fn test_messages_without_matching_location_untouched() {
        let mut catalog = Catalog::new("x.ts", CatalogOptions::default());
        let mut context = Context::new("Foo");
        context
            .messages
            .push(Message::new("hand written").with_location("widget.cpp", Some(10)));
        catalog.contexts.push(context);

        catalog.update(&source_with("meta.json", "Foo", &["Foo Ext"]));

        assert_eq!(
            catalog
                .find_message("Foo", "hand written")
                .unwrap()
                .translation
                .state,
            TranslationState::Unfinished
        );
    }
}
