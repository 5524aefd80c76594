//! Browser previews of single elements.
//!
//! A preview writes the prettified element to a temporary `.html` file and
//! launches a browser on it. The file is kept on disk because the browser reads
//! it after `open_tag_in_browser` returns; its path is returned so the caller
//! can remove it.

use crate::document::pretty::prettify;
use scraper::ElementRef;
use std::io::{self, Write};
use std::path::PathBuf;

/// Errors from writing or opening a preview.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("Failed to write preview file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to launch {browser} for {}: {source}", .path.display())]
    Launch {
        browser: String,
        path: PathBuf,
        source: io::Error,
    },
}

/// Where and how previews are written and opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Browser program; `None` uses the desktop's default opener.
    pub browser: Option<String>,
    /// Directory for preview files; `None` uses the system temp dir.
    pub dir: Option<PathBuf>,
    /// Spaces per nesting level in the written markup.
    pub indent_size: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            browser: Some("firefox".to_string()),
            dir: None,
            indent_size: 1,
        }
    }
}

/// Writes the prettified element to a new, kept temporary file.
pub fn write_preview(tag: ElementRef<'_>, options: &PreviewOptions) -> Result<PathBuf, PreviewError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("soupwalk-").suffix(".html");

    let mut file = match &options.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            builder.tempfile_in(dir)?
        }
        None => builder.tempfile()?,
    };

    // Until kept, a failed write removes the file when `file` drops.
    file.write_all(prettify(tag, options.indent_size).as_bytes())?;
    file.flush()?;

    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}

/// Writes a preview of `tag` and opens it in the configured browser.
///
/// Blocks on the file write and the process launch. Returns the preview file's
/// path; the file is not cleaned up.
pub fn open_tag_in_browser(
    tag: ElementRef<'_>,
    options: &PreviewOptions,
) -> Result<PathBuf, PreviewError> {
    let path = write_preview(tag, options)?;

    let launched = match &options.browser {
        Some(browser) => open::with_detached(&path, browser.as_str()),
        None => open::that_detached(&path),
    };
    launched.map_err(|source| PreviewError::Launch {
        browser: options
            .browser
            .clone()
            .unwrap_or_else(|| "default browser".to_string()),
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), browser = ?options.browser, "opened preview");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::criteria::MatchCriteria;
    use crate::document::node::Queryable;
    use crate::document::tree::HtmlDocument;
    use tempfile::TempDir;

    #[test]
    fn test_write_preview_in_configured_dir() {
        let dir = TempDir::new().unwrap();
        let doc = HtmlDocument::parse(r#"<div id="card"><p>Body</p></div>"#);
        let card = doc.root().find_first(&MatchCriteria::tag("div")).unwrap();

        let options = PreviewOptions {
            dir: Some(dir.path().join("previews")),
            ..PreviewOptions::default()
        };
        let path = write_preview(card, &options).unwrap();

        assert!(path.starts_with(dir.path().join("previews")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "<div id=\"card\">\n <p>\n  Body\n </p>\n</div>\n");
    }

    #[test]
    fn test_write_preview_leaves_only_the_kept_file() {
        let dir = TempDir::new().unwrap();
        let doc = HtmlDocument::parse("<p>one</p>");
        let p = doc.root().find_first(&MatchCriteria::tag("p")).unwrap();

        let options = PreviewOptions {
            dir: Some(dir.path().to_path_buf()),
            ..PreviewOptions::default()
        };
        let path = write_preview(p, &options).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(entries, vec![path.clone()]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>\n one\n</p>\n");
    }
}
