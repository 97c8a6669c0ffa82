//! Context and message value objects shared by catalogs and source files

use std::path::{Path, PathBuf};

/// A source code location attached to a message.
///
/// The line number is optional; messages extracted from structured data
/// files carry a filename but no meaningful line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// File the message was extracted from
    pub filename: String,
    /// Line within the file, when applicable
    pub line: Option<u32>,
}

impl Location {
    /// Create a new location
    pub fn new(filename: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

/// Translation state of a message, as encoded in the TS `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationState {
    /// Not yet translated, or the translation needs review
    #[default]
    Unfinished,
    /// Translated (no `type` attribute in the TS file)
    Finished,
    /// No longer produced by any source; kept for reference
    Obsolete,
    /// Qt Linguist's variant of obsolete, preserved round-trip
    Vanished,
}

impl TranslationState {
    /// The value of the TS `type` attribute, or `None` for finished entries
    pub fn as_type_attr(self) -> Option<&'static str> {
        match self {
            Self::Unfinished => Some("unfinished"),
            Self::Finished => None,
            Self::Obsolete => Some("obsolete"),
            Self::Vanished => Some("vanished"),
        }
    }

    /// Parse the TS `type` attribute
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "obsolete" => Some(Self::Obsolete),
            "vanished" => Some(Self::Vanished),
            _ => None,
        }
    }

    /// Whether the entry is no longer produced by any source
    pub fn is_obsolete(self) -> bool {
        matches!(self, Self::Obsolete | Self::Vanished)
    }
}

/// The translated form of a message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    /// Translated text; empty when untranslated
    pub text: String,
    /// Translation state
    pub state: TranslationState,
    /// Plural forms for numerus messages, preserved round-trip
    pub numerus_forms: Vec<String>,
}

/// One translatable unit of source text plus its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Locations the message was extracted from
    pub locations: Vec<Location>,
    /// The literal source text
    pub source: String,
    /// Translator comment (`extracomment` in the TS file)
    pub comment: Option<String>,
    /// Whether the message has plural forms
    pub numerus: bool,
    /// Current translation
    pub translation: Translation,
}

impl Message {
    /// Create a new untranslated message for the given source text
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            locations: Vec::new(),
            source: source.into(),
            comment: None,
            numerus: false,
            translation: Translation::default(),
        }
    }

    /// Attach a location
    pub fn with_location(mut self, filename: impl Into<String>, line: Option<u32>) -> Self {
        self.locations.push(Location::new(filename, line));
        self
    }

    /// Attach a translator comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Whether any location points at the given file
    pub fn located_in(&self, filename: &str) -> bool {
        self.locations.iter().any(|l| l.filename == filename)
    }
}

/// A named grouping of messages sharing a logical origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Context name
    pub name: String,
    /// Messages belonging to this context
    pub messages: Vec<Message>,
}

impl Context {
    /// Create a new empty context
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// One source file's worth of extracted messages.
///
/// A source file owns the contexts extracted from it and exists only for the
/// duration of the extraction pass; catalogs are updated from it and it is
/// then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path of the file the messages were extracted from
    pub path: PathBuf,
    /// Contexts extracted from this file
    pub contexts: Vec<Context>,
}

impl SourceFile {
    /// Create a new source file with no contexts
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contexts: Vec::new(),
        }
    }

    /// The path as it is recorded in message locations
    pub fn location_name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Path of the source file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
