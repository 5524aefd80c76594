//! Match criteria for find-first and find-all queries.
//!
//! A `MatchCriteria` is the normalized argument set of one tree query: which tag
//! names qualify, which attributes must be present (or absent, or carry a given
//! value), whether to descend past direct children, what text the element must
//! hold, and how many results a find-all may return.
//!
//! # Example
//!
//! ```
//! use soupwalk::document::criteria::{AttrMatch, MatchCriteria};
//!
//! let criteria = MatchCriteria::tag("a")
//!     .with_class("external")
//!     .with_attr("href", true)
//!     .with_limit(3);
//!
//! assert_eq!(criteria.names, vec!["a".to_string()]);
//! assert_eq!(criteria.attrs.get("href"), Some(&AttrMatch::Present(true)));
//! assert_eq!(criteria.to_string(), "a[class=\"external\"][href][limit=3]");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A constraint on a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrMatch {
    /// `true` requires the attribute, `false` requires its absence.
    Present(bool),
    /// The attribute must equal this value. For `class`, matching any token is enough.
    Exact(String),
    /// The attribute must equal one of these values.
    AnyOf(Vec<String>),
}

impl AttrMatch {
    /// Tests an attribute value (or its absence) against this constraint.
    ///
    /// # Example
    ///
    /// ```
    /// use soupwalk::document::criteria::AttrMatch;
    ///
    /// let item = AttrMatch::Exact("item".to_string());
    /// assert!(item.matches("class", Some("item featured")));
    /// assert!(!item.matches("id", Some("item featured")));
    /// assert!(AttrMatch::Present(false).matches("hidden", None));
    /// ```
    pub fn matches(&self, attribute: &str, value: Option<&str>) -> bool {
        match (self, value) {
            (AttrMatch::Present(wanted), value) => *wanted == value.is_some(),
            (_, None) => false,
            (AttrMatch::Exact(expected), Some(actual)) => value_matches(attribute, expected, actual),
            (AttrMatch::AnyOf(options), Some(actual)) => options
                .iter()
                .any(|expected| value_matches(attribute, expected, actual)),
        }
    }
}

/// `class` is a multi-valued attribute: a value matches the whole string or any single token.
fn value_matches(attribute: &str, expected: &str, actual: &str) -> bool {
    actual == expected
        || (attribute.eq_ignore_ascii_case("class")
            && actual.split_ascii_whitespace().any(|token| token == expected))
}

impl From<bool> for AttrMatch {
    fn from(present: bool) -> Self {
        AttrMatch::Present(present)
    }
}

impl From<&str> for AttrMatch {
    fn from(value: &str) -> Self {
        AttrMatch::Exact(value.to_string())
    }
}

impl From<String> for AttrMatch {
    fn from(value: String) -> Self {
        AttrMatch::Exact(value)
    }
}

impl From<Vec<String>> for AttrMatch {
    fn from(values: Vec<String>) -> Self {
        AttrMatch::AnyOf(values)
    }
}

impl fmt::Display for AttrMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrMatch::Present(_) => Ok(()),
            AttrMatch::Exact(value) => write!(f, "=\"{}\"", value),
            AttrMatch::AnyOf(values) => write!(f, " in {:?}", values),
        }
    }
}

/// The normalized arguments of one find-first or find-all query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCriteria {
    /// Acceptable tag names. Empty means any tag.
    #[serde(default)]
    pub names: Vec<String>,
    /// Attribute constraints, all of which must hold.
    #[serde(default)]
    pub attrs: IndexMap<String, AttrMatch>,
    /// Search all descendants (`true`) or direct children only.
    #[serde(default = "default_recursive")]
    pub recursive: bool,
    /// Exact text content the element must have.
    #[serde(default)]
    pub text: Option<String>,
    /// Maximum number of find-all results.
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_recursive() -> bool {
    true
}

impl Default for MatchCriteria {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            attrs: IndexMap::new(),
            recursive: default_recursive(),
            text: None,
            limit: None,
        }
    }
}

impl MatchCriteria {
    /// Criteria that match every element.
    pub fn any() -> Self {
        Self::default()
    }

    /// Criteria that match elements with the given tag name.
    ///
    /// An empty name matches any tag.
    pub fn tag(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut criteria = Self::default();
        if !name.is_empty() {
            criteria.names.push(name);
        }
        criteria
    }

    /// Adds another acceptable tag name.
    pub fn or_tag(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, constraint: impl Into<AttrMatch>) -> Self {
        self.attrs.insert(name.into(), constraint.into());
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", AttrMatch::Exact(class.into()))
    }

    /// Restricts the query to direct children.
    pub fn non_recursive(mut self) -> Self {
        self.recursive = false;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true if the tag name is acceptable.
    pub fn accepts_name(&self, name: &str) -> bool {
        self.names.is_empty() || self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Returns true if every attribute constraint holds, given a lookup function.
    pub fn accepts_attrs<'v>(&self, lookup: impl Fn(&str) -> Option<&'v str>) -> bool {
        self.attrs
            .iter()
            .all(|(name, constraint)| constraint.matches(name, lookup(name)))
    }
}

impl fmt::Display for MatchCriteria {
    /// Renders a compact selector-like description, used in error messages and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            write!(f, "*")?;
        } else {
            write!(f, "{}", self.names.join("|"))?;
        }
        for (name, constraint) in &self.attrs {
            match constraint {
                AttrMatch::Present(false) => write!(f, "[!{}]", name)?,
                other => write!(f, "[{}{}]", name, other)?,
            }
        }
        if let Some(text) = &self.text {
            write!(f, "[text=\"{}\"]", text)?;
        }
        if !self.recursive {
            write!(f, "[children]")?;
        }
        if let Some(limit) = self.limit {
            write!(f, "[limit={}]", limit)?;
        }
        Ok(())
    }
}
