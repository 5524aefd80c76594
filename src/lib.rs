//! soupwalk - declarative path traversal and extraction helpers for parsed HTML.
//!
//! Documents are parsed by `scraper`; this crate adds a small query layer on top:
//!
//! - [`tagpath`] - follow a path of find / find-all steps through a tree
//! - [`extract`] - pull text and attributes out of matches, replace matches with text
//! - [`file`] - load and save documents, preview elements in a browser
//! - [`config`] - user settings from `~/.config/soupwalk/config.toml`
//!
//! # Example
//!
//! ```
//! use soupwalk::document::tree::HtmlDocument;
//! use soupwalk::tagpath::{get_elements, parse_path};
//! use soupwalk::document::node::Queryable;
//!
//! let doc = HtmlDocument::parse(r#"
//!     <div class="item"><span>one</span></div>
//!     <div class="item"><span>two</span></div>
//! "#);
//! let path = parse_path(r#"[["div", {"class": "item"}], "span"]"#).unwrap();
//! let spans = get_elements([doc.root()], path.segments()).unwrap();
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[1].text_content(), "two");
//! ```

pub mod config;
pub mod document;
pub mod extract;
pub mod file;
pub mod tagpath;
