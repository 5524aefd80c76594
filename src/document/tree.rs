//! Owned HTML documents.
//!
//! `HtmlDocument` owns a parsed `scraper::Html` and is the only type in the crate
//! that implements `Mutable`. Queries go through its root element, which borrows
//! the document immutably; replacements take `&mut self`, so a document cannot be
//! mutated while any element borrowed from it is alive.
//!
//! # Example
//!
//! ```
//! use soupwalk::document::criteria::MatchCriteria;
//! use soupwalk::document::node::{Mutable, Queryable};
//! use soupwalk::document::tree::HtmlDocument;
//!
//! let mut doc = HtmlDocument::parse_fragment("<p>a <em>b</em> <em>c</em></p>");
//! assert_eq!(doc.root().find_all(&MatchCriteria::tag("em")).len(), 2);
//!
//! let replaced = doc.replace_with_text(&MatchCriteria::tag("em"), "_");
//! assert_eq!(replaced, 2);
//! assert!(doc.root().find_all(&MatchCriteria::tag("em")).is_empty());
//! ```

use super::criteria::MatchCriteria;
use super::node::{Mutable, Queryable};
use scraper::node::Text;
use scraper::{ElementRef, Html, Node};
use std::ops::Deref;

/// A parsed HTML document or fragment.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a complete document. Missing `html`, `head` and `body` elements
    /// are synthesized by the parser.
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
        }
    }

    /// Parses a fragment. The fragment's top-level nodes become children of a
    /// synthesized root element.
    pub fn parse_fragment(content: &str) -> Self {
        Self {
            html: Html::parse_fragment(content),
        }
    }

    /// The root element. Queries from here search the whole document.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Parse errors reported by the HTML parser. These are recoverable; the tree
    /// is always built.
    pub fn parse_errors(&self) -> impl Iterator<Item = &str> {
        self.html.errors.iter().map(|error| &**error)
    }

    /// Serializes the whole document back to markup.
    pub fn to_html(&self) -> String {
        self.html.html()
    }
}

impl From<Html> for HtmlDocument {
    fn from(html: Html) -> Self {
        Self { html }
    }
}

impl Mutable for HtmlDocument {
    fn replace_with_text(&mut self, criteria: &MatchCriteria, text: &str) -> usize {
        let ids = {
            let matches = self.root().find_all(criteria);
            let mut ids = Vec::with_capacity(matches.len());
            for element in &matches {
                let node = Deref::deref(element);
                // Nested matches go away with their outermost matching ancestor.
                if node.ancestors().any(|ancestor| ids.contains(&ancestor.id())) {
                    continue;
                }
                ids.push(node.id());
            }
            ids
        };

        for id in &ids {
            if let Some(mut node) = self.html.tree.get_mut(*id) {
                node.insert_before(Node::Text(Text { text: text.into() }));
                node.detach();
            }
        }

        tracing::debug!(count = ids.len(), %criteria, "replaced elements with text");
        ids.len()
    }
}
