//! Integration tests for catalog load / update / write cycles

use lingup_catalog::{Catalog, CatalogOptions, Context, Message, SourceFile, TranslationState};
use std::fs;
use tempfile::TempDir;

fn options() -> CatalogOptions {
    CatalogOptions {
        no_obsolete: false,
        no_summary: true,
        verbose: false,
    }
}

fn write_seed_catalog(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(
        &path,
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de_DE" sourcelanguage="en_US">
<context>
    <name>Foo</name>
    <message>
        <location filename="meta.json"/>
        <source>Foo Ext</source>
        <translation>Erweiterung Foo</translation>
    </message>
</context>
</TS>
"#,
    )
    .unwrap();
    path
}

fn source_unit(path: &str, context: &str, texts: &[&str]) -> SourceFile {
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
fn test_load_preserves_document_attributes() {
    let dir = TempDir::new().unwrap();
    let path = write_seed_catalog(&dir, "app_de.ts");

    let catalog = Catalog::load(&path, options()).unwrap();

    assert_eq!(catalog.path(), path);
    assert_eq!(catalog.version(), "2.1");
    assert_eq!(catalog.language.as_deref(), Some("de_DE"));
    assert_eq!(catalog.source_language.as_deref(), Some("en_US"));
    assert_eq!(catalog.contexts.len(), 1);
}

#[test]
fn test_update_write_reload_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = write_seed_catalog(&dir, "app_de.ts");

    let mut catalog = Catalog::load(&path, options()).unwrap();
    catalog.update(&source_unit("meta.json", "Foo", &["Foo Ext", "Does a thing"]));
    catalog.write().unwrap();

    let reloaded = Catalog::load(&path, options()).unwrap();
    let kept = reloaded.find_message("Foo", "Foo Ext").unwrap();
    assert_eq!(kept.translation.text, "Erweiterung Foo");
    assert_eq!(kept.translation.state, TranslationState::Finished);

    let added = reloaded.find_message("Foo", "Does a thing").unwrap();
    assert_eq!(added.translation.state, TranslationState::Unfinished);
    assert_eq!(added.locations.len(), 1);
    assert_eq!(added.locations[0].filename, "meta.json");
    assert_eq!(added.locations[0].line, None);
}

#[test]
fn test_second_run_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = write_seed_catalog(&dir, "app_de.ts");
    let source = source_unit("meta.json", "Foo", &["Foo Ext", "Does a thing"]);

    let mut catalog = Catalog::load(&path, options()).unwrap();
    catalog.update(&source);
    catalog.write().unwrap();
    let first = fs::read(&path).unwrap();

    let mut catalog = Catalog::load(&path, options()).unwrap();
    catalog.update(&source);
    catalog.write().unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_obsolete_survives_write_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = write_seed_catalog(&dir, "app_de.ts");

    let mut catalog = Catalog::load(&path, options()).unwrap();
    catalog.update(&source_unit("meta.json", "Foo", &[]));
    catalog.write().unwrap();

    let reloaded = Catalog::load(&path, options()).unwrap();
    let message = reloaded.find_message("Foo", "Foo Ext").unwrap();
    assert_eq!(message.translation.state, TranslationState::Obsolete);
    assert_eq!(message.translation.text, "Erweiterung Foo");
}

#[test]
fn test_special_characters_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app_fr.ts");
    fs::write(&path, "<TS version=\"2.1\" language=\"fr\">\n</TS>\n").unwrap();

    let value = r#"Uses <b> & "quotes" literally"#;
    let mut catalog = Catalog::load(&path, options()).unwrap();
    catalog.update(&source_unit("meta.json", "Foo", &[value]));
    catalog.write().unwrap();

    let reloaded = Catalog::load(&path, options()).unwrap();
    assert!(reloaded.find_message("Foo", value).is_some());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    assert!(Catalog::load(dir.path().join("absent.ts"), options()).is_err());
}

#[test]
fn test_load_malformed_catalog_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.ts");
    fs::write(&path, "<TS version=\"2.1\"><context>").unwrap();

    assert!(Catalog::load(&path, options()).is_err());
}
