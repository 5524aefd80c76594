//! Text transforms applied to extracted text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How extracted text is cleaned before it is stored.
///
/// Passed explicitly to each extraction call; there is no shared default beyond
/// `TextTransform::default()` (`Trim`).
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    /// Keep the text as-is.
    Raw,
    /// Strip leading and trailing whitespace.
    #[default]
    Trim,
    /// Trim, then collapse inner whitespace runs to a single space.
    CollapseWhitespace,
    /// A caller-supplied function. Not configurable from files.
    #[serde(skip)]
    Custom(fn(&str) -> String),
}

impl TextTransform {
    /// Applies the transform.
    ///
    /// # Example
    ///
    /// ```
    /// use soupwalk::extract::TextTransform;
    ///
    /// assert_eq!(TextTransform::Trim.apply("  a  b \n"), "a  b");
    /// assert_eq!(TextTransform::CollapseWhitespace.apply("  a \n b "), "a b");
    /// assert_eq!(TextTransform::Custom(|s| s.to_uppercase()).apply("ab"), "AB");
    /// ```
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextTransform::Raw => text.to_string(),
            TextTransform::Trim => text.trim().to_string(),
            TextTransform::CollapseWhitespace => {
                text.split_whitespace().collect::<Vec<_>>().join(" ")
            }
            TextTransform::Custom(transform) => transform(text),
        }
    }
}

impl fmt::Debug for TextTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextTransform::Raw => write!(f, "Raw"),
            TextTransform::Trim => write!(f, "Trim"),
            TextTransform::CollapseWhitespace => write!(f, "CollapseWhitespace"),
            TextTransform::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_trim() {
        assert!(matches!(TextTransform::default(), TextTransform::Trim));
    }

    #[test]
    fn test_raw_keeps_whitespace() {
        assert_eq!(TextTransform::Raw.apply(" x "), " x ");
    }

    #[test]
    fn test_serde_names() {
        let parsed: TextTransform = serde_json::from_str("\"collapse_whitespace\"").unwrap();
        assert!(matches!(parsed, TextTransform::CollapseWhitespace));
        assert_eq!(serde_json::to_string(&TextTransform::Raw).unwrap(), "\"raw\"");
    }
}
