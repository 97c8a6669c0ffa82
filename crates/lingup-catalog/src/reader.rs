//! Pull parser for Qt Linguist `.ts` files
//!
//! Understands the TS 2.1 structure the writer emits plus the plural
//! (`numerus`) entries Qt Linguist produces. Unknown elements are skipped.

use crate::error::{CatalogError, CatalogResult};
use crate::message::{Context, Location, Message, TranslationState};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// The parsed content of one TS document
#[derive(Debug, Clone, Default)]
pub struct ParsedTs {
    /// TS format version attribute
    pub version: Option<String>,
    /// Target language attribute
    pub language: Option<String>,
    /// Source language attribute
    pub source_language: Option<String>,
    /// All contexts in document order
    pub contexts: Vec<Context>,
}

/// Which element's character data is currently being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    None,
    ContextName,
    Source,
    TranslationText,
    NumerusForm,
    Comment,
}

/// Parse a TS document from a string
pub fn parse(content: &str) -> CatalogResult<ParsedTs> {
    let mut reader = Reader::from_str(content);
    let mut parsed = ParsedTs::default();

    let mut current_context: Option<Context> = None;
    let mut current_message: Option<Message> = None;
    let mut saw_source = false;
    let mut in_translation = false;
    let mut target = TextTarget::None;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"TS" => {
                read_ts_attributes(&e, &mut parsed)?;
            }
            Event::Start(e) => match e.name().as_ref() {
                b"context" => {
                    current_context = Some(Context::new(""));
                }
                b"name" if current_context.is_some() && current_message.is_none() => {
                    target = TextTarget::ContextName;
                }
                b"message" => {
                    if current_context.is_none() {
                        return Err(CatalogError::format("message element outside a context"));
                    }
                    let mut message = Message::new("");
                    message.numerus = has_attribute(&e, b"numerus", "yes")?;
                    current_message = Some(message);
                    saw_source = false;
                }
                b"location" => {
                    if let Some(message) = current_message.as_mut() {
                        message.locations.push(read_location(&e)?);
                    }
                }
                b"source" if current_message.is_some() => {
                    target = TextTarget::Source;
                    saw_source = true;
                }
                b"extracomment" if current_message.is_some() => {
                    target = TextTarget::Comment;
                }
                b"translation" => {
                    if let Some(message) = current_message.as_mut() {
                        message.translation.state = read_translation_state(&e)?;
                        in_translation = true;
                        target = TextTarget::TranslationText;
                    }
                }
                b"numerusform" if in_translation => {
                    if let Some(message) = current_message.as_mut() {
                        message.translation.numerus_forms.push(String::new());
                    }
                    target = TextTarget::NumerusForm;
                }
                _ => {
                    // Unknown container element; stop collecting text so its
                    // content is not misattributed.
                    target = TextTarget::None;
                }
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"location" => {
                    if let Some(message) = current_message.as_mut() {
                        message.locations.push(read_location(&e)?);
                    }
                }
                b"source" if current_message.is_some() => {
                    saw_source = true;
                }
                b"translation" => {
                    if let Some(message) = current_message.as_mut() {
                        message.translation.state = read_translation_state(&e)?;
                    }
                }
                b"numerusform" if in_translation => {
                    if let Some(message) = current_message.as_mut() {
                        message.translation.numerus_forms.push(String::new());
                    }
                }
                _ => {}
            },
            Event::Text(t) => {
                let text = t.unescape()?;
                append_text(
                    target,
                    &text,
                    current_context.as_mut(),
                    current_message.as_mut(),
                );
            }
            Event::CData(t) => {
                let bytes = t.into_inner();
                let text = String::from_utf8_lossy(&bytes);
                append_text(
                    target,
                    &text,
                    current_context.as_mut(),
                    current_message.as_mut(),
                );
            }
            Event::End(e) => match e.name().as_ref() {
                b"name" | b"source" | b"extracomment" | b"numerusform" => {
                    target = TextTarget::None;
                }
                b"translation" => {
                    in_translation = false;
                    target = TextTarget::None;
                }
                b"message" => {
                    let message = current_message
                        .take()
                        .ok_or_else(|| CatalogError::format("unbalanced message element"))?;
                    if !saw_source {
                        return Err(CatalogError::format("message without a source element"));
                    }
                    if let Some(context) = current_context.as_mut() {
                        context.messages.push(message);
                    }
                }
                b"context" => {
                    let context = current_context
                        .take()
                        .ok_or_else(|| CatalogError::format("unbalanced context element"))?;
                    parsed.contexts.push(context);
                }
                _ => {}
            },
            Event::Eof => {
                if current_message.is_some() || current_context.is_some() {
                    return Err(CatalogError::format("unexpected end of document"));
                }
                break;
            }
            // Declaration, doctype, comments and processing instructions
            // carry nothing we track.
            _ => {}
        }
    }

    Ok(parsed)
}

fn append_text(
    target: TextTarget,
    text: &str,
    context: Option<&mut Context>,
    message: Option<&mut Message>,
) {
    match target {
        TextTarget::ContextName => {
            if let Some(context) = context {
                context.name.push_str(text);
            }
        }
        TextTarget::Source => {
            if let Some(message) = message {
                message.source.push_str(text);
            }
        }
        TextTarget::TranslationText => {
            if let Some(message) = message {
                message.translation.text.push_str(text);
            }
        }
        TextTarget::NumerusForm => {
            if let Some(message) = message {
                if let Some(form) = message.translation.numerus_forms.last_mut() {
                    form.push_str(text);
                }
            }
        }
        TextTarget::Comment => {
            if let Some(message) = message {
                message
                    .comment
                    .get_or_insert_with(String::new)
                    .push_str(text);
            }
        }
        TextTarget::None => {}
    }
}

fn read_ts_attributes(e: &BytesStart<'_>, parsed: &mut ParsedTs) -> CatalogResult<()> {
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.as_ref() {
            b"version" => parsed.version = Some(value),
            b"language" => parsed.language = Some(value),
            b"sourcelanguage" => parsed.source_language = Some(value),
            _ => {}
        }
    }
    Ok(())
}

fn read_location(e: &BytesStart<'_>) -> CatalogResult<Location> {
    let mut filename = String::new();
    let mut line = None;
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"filename" => filename = value.into_owned(),
            b"line" => {
                line = Some(value.parse::<u32>().map_err(|_| {
                    CatalogError::format(format!("invalid location line number: {value}"))
                })?);
            }
            _ => {}
        }
    }
    Ok(Location::new(filename, line))
}

fn read_translation_state(e: &BytesStart<'_>) -> CatalogResult<TranslationState> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"type" {
            let value = attr.unescape_value()?;
            return TranslationState::from_type_attr(&value).ok_or_else(|| {
                CatalogError::format(format!("unknown translation type: {value}"))
            });
        }
    }
    Ok(TranslationState::Finished)
}

fn has_attribute(e: &BytesStart<'_>, key: &[u8], expected: &str) -> CatalogResult<bool> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(attr.unescape_value()? == expected);
        }
    }
    Ok(false)
}
