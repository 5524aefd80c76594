//! Integration tests for file I/O operations.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use soupwalk::config::Config;
use soupwalk::document::criteria::MatchCriteria;
use soupwalk::document::node::{Mutable, Queryable};
use soupwalk::file::loader::load_html_file;
use soupwalk::file::saver::save_html_file;
use std::fs;
use std::io::{Read, Write};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_simple_html_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, r#"<ul><li>one</li><li>two</li></ul>"#).unwrap();

    let doc = load_html_file(temp_file.path()).unwrap();
    let items = doc.root().find_all(&MatchCriteria::tag("li"));
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].text_content(), "two");
}

#[test]
fn test_load_gzipped_html_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.html.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b"<h1>compressed</h1>").unwrap();
    fs::write(&path, encoder.finish().unwrap()).unwrap();

    let doc = load_html_file(&path).unwrap();
    let h1 = doc.root().find_first(&MatchCriteria::tag("h1")).unwrap();
    assert_eq!(h1.text_content(), "compressed");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    assert!(load_html_file(dir.path().join("nope.html")).is_err());
}

#[test]
fn test_load_malformed_markup_recovers() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "<div><p>unclosed<div>second").unwrap();

    let doc = load_html_file(temp_file.path()).unwrap();
    assert_eq!(doc.root().find_all(&MatchCriteria::tag("div")).len(), 2);
}

#[test]
fn test_replace_and_save_round_trip() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("in.html");
    let target = dir.path().join("out.html");
    fs::write(&source, r#"<p>keep</p><script>track()</script><script>more()</script>"#).unwrap();

    let mut doc = load_html_file(&source).unwrap();
    assert_eq!(doc.replace_with_text(&MatchCriteria::tag("script"), ""), 2);
    save_html_file(&target, &doc, &Config::default()).unwrap();

    let reloaded = load_html_file(&target).unwrap();
    assert!(reloaded
        .root()
        .find_first(&MatchCriteria::tag("script"))
        .is_none());
    assert_eq!(
        reloaded
            .root()
            .find_first(&MatchCriteria::tag("p"))
            .unwrap()
            .text_content(),
        "keep"
    );
}

#[test]
fn test_save_gzipped() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out.html.gz");
    let doc = soupwalk::document::tree::HtmlDocument::parse("<p>zip me</p>");

    save_html_file(&target, &doc, &Config::default()).unwrap();

    let mut decoder = GzDecoder::new(fs::File::open(&target).unwrap());
    let mut content = String::new();
    decoder.read_to_string(&mut content).unwrap();
    assert!(content.contains("<p>zip me</p>"));

    let reloaded = load_html_file(&target).unwrap();
    assert!(reloaded.root().find_first(&MatchCriteria::tag("p")).is_some());
}
