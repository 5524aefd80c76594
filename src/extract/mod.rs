//! Small extraction helpers over queryable trees.
//!
//! These are thin layers over `Queryable` and `Mutable`: pull the text of the
//! first match into a record, read a set of attributes, find a root ancestor,
//! or replace every match with plain text.
//!
//! # Example
//!
//! ```
//! use soupwalk::document::criteria::MatchCriteria;
//! use soupwalk::document::tree::HtmlDocument;
//! use soupwalk::extract::{add_text_to_parse_dict, ParseDict, TextTransform};
//!
//! let doc = HtmlDocument::parse(r#"<h1> Widget </h1><span class="price">$5</span>"#);
//! let mut record = ParseDict::new();
//! add_text_to_parse_dict(&doc.root(), &mut record, "title", &MatchCriteria::tag("h1"), TextTransform::Trim);
//! add_text_to_parse_dict(&doc.root(), &mut record, "sku", &MatchCriteria::tag("code"), TextTransform::Trim);
//!
//! assert_eq!(record.get("title").map(String::as_str), Some("Widget"));
//! assert!(!record.contains_key("sku"));
//! ```

pub mod transform;

pub use transform::TextTransform;

use crate::document::criteria::MatchCriteria;
use crate::document::node::{Mutable, Queryable};
use indexmap::IndexMap;

/// An ordered record of extracted text fields.
pub type ParseDict = IndexMap<String, String>;

/// Returns the outermost element enclosing `node`, or `None` if `node` has no
/// enclosing element.
pub fn root_parent<N: Queryable>(node: &N) -> Option<N> {
    let mut current = node.parent_element()?;
    while let Some(parent) = current.parent_element() {
        current = parent;
    }
    Some(current)
}

/// Stores the text of the first match under `key`.
///
/// The text goes through `transform` first. When nothing matches, `parse_dict`
/// is left untouched. The dictionary is returned for chaining.
pub fn add_text_to_parse_dict<'d, N: Queryable>(
    tree: &N,
    parse_dict: &'d mut ParseDict,
    key: impl Into<String>,
    criteria: &MatchCriteria,
    transform: TextTransform,
) -> &'d mut ParseDict {
    if let Some(tag) = tree.find_first(criteria) {
        parse_dict.insert(key.into(), transform.apply(&tag.text_content()));
    }
    parse_dict
}

/// Reads the requested attributes of `tag`, in request order.
///
/// Attributes the tag does not carry are left out rather than mapped to an
/// empty value.
pub fn extract_attributes<N, I, S>(tag: &N, attributes: I) -> IndexMap<String, String>
where
    N: Queryable,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    attributes
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            tag.attribute(name)
                .map(|value| (name.to_string(), value.to_string()))
        })
        .collect()
}

/// Returns the text of the first match, if any.
pub fn text_of_first_found<N: Queryable>(tree: &N, criteria: &MatchCriteria) -> Option<String> {
    tree.find_first(criteria).map(|tag| tag.text_content())
}

/// Replaces every match in `document` with `replacement_text`.
///
/// Returns how many replacements are visible in the document afterwards. A
/// match nested in another match is not counted.
pub fn replace_tag_with_text<M: Mutable>(
    document: &mut M,
    criteria: &MatchCriteria,
    replacement_text: &str,
) -> usize {
    document.replace_with_text(criteria, replacement_text)
}
