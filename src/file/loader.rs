//! HTML file loading functionality.
//!
//! This module provides functions to load HTML documents from files or stdin,
//! parsing them into `HtmlDocument` structures that paths can be followed through.

use crate::document::tree::HtmlDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses an HTML file from the filesystem.
///
/// Files ending in `.gz` are decompressed first. Parsing itself never fails:
/// malformed markup is recovered by the HTML parser.
///
/// # Examples
///
/// ```no_run
/// use soupwalk::file::loader::load_html_file;
///
/// let doc = load_html_file("page.html").unwrap();
/// println!("{}", doc.to_html());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - A `.gz` file is corrupted
/// - The contents are not valid UTF-8
pub fn load_html_file<P: AsRef<Path>>(path: P) -> Result<HtmlDocument> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    tracing::debug!(path = %path_ref.display(), bytes = content.len(), "loaded html");
    Ok(parse_html(&content))
}

/// Reads an HTML document from stdin.
///
/// Gzip input is detected by its magic bytes.
pub fn load_html_from_stdin() -> Result<HtmlDocument> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    Ok(parse_html(&decode_bytes(buffer)?))
}

/// Decodes raw input bytes, decompressing gzip (0x1f 0x8b) when present.
pub fn decode_bytes(buffer: Vec<u8>) -> Result<String> {
    if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)
    } else {
        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

/// Parses markup as a full document, logging any recovered parse errors.
pub fn parse_html(content: &str) -> HtmlDocument {
    let doc = HtmlDocument::parse(content);
    let errors = doc.parse_errors().count();
    if errors > 0 {
        tracing::debug!(errors, "html parser recovered from errors");
    }
    doc
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip input")?;
    Ok(content)
}
