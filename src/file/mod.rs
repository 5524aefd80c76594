//! File I/O operations for HTML documents.
//!
//! This module provides functionality to load HTML from disk or stdin, save
//! documents back to files with atomic writes and optional backups, and write
//! element previews for a browser.

pub mod loader;
pub mod preview;
pub mod saver;
