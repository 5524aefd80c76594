//! HTML file saving functionality.
//!
//! This module writes `HtmlDocument` structures back to disk with atomic write
//! operations, optional gzip compression and optional backup creation.

use crate::config::Config;
use crate::document::tree::HtmlDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Saves a document to a file.
///
/// The document is serialized with `HtmlDocument::to_html` and written
/// atomically (temp file, then rename) so the target is never left partially
/// written. A target ending in `.gz` is gzip-compressed. When
/// `config.create_backup` is set and the target exists, it is first copied to
/// `<name>.bak`.
///
/// # Examples
///
/// ```no_run
/// use soupwalk::config::Config;
/// use soupwalk::document::tree::HtmlDocument;
/// use soupwalk::file::saver::save_html_file;
///
/// let doc = HtmlDocument::parse("<p>hello</p>");
/// save_html_file("out.html", &doc, &Config::default()).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - Writing to the temp file fails
/// - Renaming the temp file to the target fails
pub fn save_html_file<P: AsRef<Path>>(path: P, doc: &HtmlDocument, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let should_compress = path.to_string_lossy().ends_with(".gz");

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    let mut html = doc.to_html();
    if !html.ends_with('\n') {
        html.push('\n');
    }

    write_file_atomic(path, html.as_bytes(), should_compress)?;
    tracing::info!(path = %path.display(), compressed = should_compress, "saved document");

    Ok(())
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Writes data to a file atomically, optionally compressing with gzip.
fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}
