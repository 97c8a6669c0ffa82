//! Serializer for Qt Linguist `.ts` files
//!
//! Emits the layout Qt's own tooling produces (4-space indentation, paired
//! `translation` tags, declaration and doctype lines) so that repeated runs
//! over unchanged input reproduce the file byte for byte.

use crate::catalog::Catalog;
use crate::message::{Context, Message};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Serialize a catalog to TS document text
pub fn to_ts_string(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n");

    out.push_str("<TS version=\"");
    out.push_str(&escape(catalog.version()));
    out.push('"');
    if let Some(language) = &catalog.language {
        let _ = write!(out, " language=\"{}\"", escape(language));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape(source_language));
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        write_context(&mut out, context);
    }

    out.push_str("</TS>\n");
    out
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    let _ = writeln!(out, "    <name>{}</name>", escape(&context.name));
    for message in &context.messages {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, message: &Message) {
    if message.numerus {
        out.push_str("    <message numerus=\"yes\">\n");
    } else {
        out.push_str("    <message>\n");
    }

    for location in &message.locations {
        match location.line {
            Some(line) => {
                let _ = writeln!(
                    out,
                    "        <location filename=\"{}\" line=\"{}\"/>",
                    escape(&location.filename),
                    line
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "        <location filename=\"{}\"/>",
                    escape(&location.filename)
                );
            }
        }
    }

    let _ = writeln!(out, "        <source>{}</source>", escape(&message.source));

    if let Some(comment) = &message.comment {
        let _ = writeln!(
            out,
            "        <extracomment>{}</extracomment>",
            escape(comment)
        );
    }

    write_translation(out, message);
    out.push_str("    </message>\n");
}

fn write_translation(out: &mut String, message: &Message) {
    let type_attr = match message.translation.state.as_type_attr() {
        Some(value) => format!(" type=\"{value}\""),
        None => String::new(),
    };

    if message.numerus {
        let _ = writeln!(out, "        <translation{type_attr}>");
        for form in &message.translation.numerus_forms {
            let _ = writeln!(out, "            <numerusform>{}</numerusform>", escape(form));
        }
        out.push_str("        </translation>\n");
    } else {
        let _ = writeln!(
            out,
            "        <translation{type_attr}>{}</translation>",
            escape(&message.translation.text)
        );
    }
}
