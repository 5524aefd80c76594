//! Reading tag paths from text.
//!
//! Two notations are accepted:
//!
//! - A segment list in JSON or YAML, recognized by a leading `[` or `-`:
//!   `["div.item", {"class": "price"}]` or a YAML block sequence.
//! - A shorthand of whitespace-separated selectors: `div.item span`.

use super::ast::{PathSegment, TagPath};
use super::error::PathError;

/// Parses a tag path in list or shorthand notation.
///
/// # Example
///
/// ```
/// use soupwalk::tagpath::{parse_path, PathSegment};
///
/// let shorthand = parse_path("table.prices tr").unwrap();
/// assert_eq!(shorthand.segments(), &[PathSegment::from("table.prices"), PathSegment::from("tr")]);
///
/// let list = parse_path(r#"["table.prices", {"name": "tr", "recursive": false}]"#).unwrap();
/// assert_eq!(list.len(), 2);
/// ```
pub fn parse_path(input: &str) -> Result<TagPath, PathError> {
    let trimmed = input.trim();
    if trimmed.starts_with('[') || trimmed.starts_with('-') {
        parse_segment_list(trimmed)
    } else {
        Ok(parse_shorthand(trimmed))
    }
}

/// Parses a JSON or YAML sequence of segments.
pub fn parse_segment_list(input: &str) -> Result<TagPath, PathError> {
    serde_yaml::from_str::<TagPath>(input).map_err(|e| PathError::InvalidSyntax {
        message: e.to_string(),
    })
}

/// Splits whitespace-separated selectors into one segment each.
pub fn parse_shorthand(input: &str) -> TagPath {
    input
        .split_whitespace()
        .map(PathSegment::from)
        .collect()
}
