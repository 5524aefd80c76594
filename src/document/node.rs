//! Node capabilities used by the path interpreter and the extraction helpers.
//!
//! Tree access is split into two narrow traits. `Queryable` covers read-only
//! queries (find-first, find-all, text, attributes, parent) and is all the path
//! interpreter ever needs. `Mutable` covers in-place replacement and is only
//! implemented by owners of a whole document.
//!
//! `scraper::ElementRef` implements `Queryable`, so any element borrowed out of a
//! parsed `scraper::Html` can be queried directly.
//!
//! # Example
//!
//! ```
//! use scraper::Html;
//! use soupwalk::document::criteria::MatchCriteria;
//! use soupwalk::document::node::Queryable;
//!
//! let html = Html::parse_document(r#"<ul><li id="a">one</li><li id="b">two</li></ul>"#);
//! let root = html.root_element();
//!
//! let items = root.find_all(&MatchCriteria::tag("li"));
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[1].attribute("id"), Some("b"));
//! assert_eq!(items[0].text_content(), "one");
//! ```

use super::criteria::MatchCriteria;
use scraper::ElementRef;

/// Read-only query capability of a tree node.
pub trait Queryable: Clone {
    /// Returns all matching descendants (or children, for non-recursive criteria)
    /// in document order, honoring `criteria.limit`.
    fn find_all(&self, criteria: &MatchCriteria) -> Vec<Self>;

    /// Returns the first matching descendant, if any.
    fn find_first(&self, criteria: &MatchCriteria) -> Option<Self> {
        let mut first = criteria.clone();
        first.limit = Some(1);
        self.find_all(&first).into_iter().next()
    }

    /// Returns the enclosing element, if there is one.
    fn parent_element(&self) -> Option<Self>;

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self) -> String;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Serialized markup of this node, including its own tag.
    fn outer_html(&self) -> String;
}

/// In-place mutation capability of a document.
pub trait Mutable {
    /// Replaces every element matching `criteria` with a literal text node.
    ///
    /// Matches nested inside another match disappear with it. Returns the number
    /// of text nodes inserted, one per outermost match.
    fn replace_with_text(&mut self, criteria: &MatchCriteria, text: &str) -> usize;
}

/// Tests a single element against criteria, ignoring `recursive` and `limit`.
pub fn element_matches(criteria: &MatchCriteria, element: ElementRef<'_>) -> bool {
    let value = element.value();
    if !criteria.accepts_name(value.name()) {
        return false;
    }
    if !criteria.accepts_attrs(|name| value.attr(name)) {
        return false;
    }
    match &criteria.text {
        Some(expected) => element.text().collect::<String>() == *expected,
        None => true,
    }
}

impl<'a> Queryable for ElementRef<'a> {
    fn find_all(&self, criteria: &MatchCriteria) -> Vec<Self> {
        // bs-style limits: zero or absent means unbounded
        let limit = match criteria.limit {
            Some(0) | None => usize::MAX,
            Some(limit) => limit,
        };

        if criteria.recursive {
            self.descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .filter(|element| element_matches(criteria, *element))
                .take(limit)
                .collect()
        } else {
            self.children()
                .filter_map(ElementRef::wrap)
                .filter(|element| element_matches(criteria, *element))
                .take(limit)
                .collect()
        }
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn outer_html(&self) -> String {
        self.html()
    }
}
