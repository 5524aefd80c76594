//! Path segment types and their normalization into match criteria.

use crate::document::criteria::{AttrMatch, MatchCriteria};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::PathError;

/// Positional argument order, mirroring find / find-all signatures.
const POSITIONAL_ARGS: [&str; 5] = ["name", "attrs", "recursive", "text", "limit"];

/// One step of a tag path.
///
/// Deserializes untagged, so in JSON or YAML a segment is written as a string,
/// a mapping or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Period-delimited positional arguments: `"div.item"` is `["div", "item"]`.
    Selector(String),
    /// Named criteria (`name`, `attrs`, `class`, `recursive`, `text`, `limit`);
    /// any other key is an attribute constraint.
    Keyed(IndexMap<String, Value>),
    /// Positional criteria in `[name, attrs, recursive, text, limit]` order.
    Positional(Vec<Value>),
}

impl PathSegment {
    pub fn selector(selector: impl Into<String>) -> Self {
        PathSegment::Selector(selector.into())
    }

    pub fn keyed<K: Into<String>>(criteria: impl IntoIterator<Item = (K, Value)>) -> Self {
        PathSegment::Keyed(
            criteria
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn positional(args: impl IntoIterator<Item = Value>) -> Self {
        PathSegment::Positional(args.into_iter().collect())
    }

    /// Normalizes this segment into match criteria.
    ///
    /// `index` is the segment's position in its path and is only used for error
    /// reporting.
    ///
    /// # Example
    ///
    /// ```
    /// use soupwalk::document::criteria::MatchCriteria;
    /// use soupwalk::tagpath::PathSegment;
    ///
    /// let criteria = PathSegment::selector("div.item").criteria(0).unwrap();
    /// assert_eq!(criteria, MatchCriteria::tag("div").with_class("item"));
    /// ```
    pub fn criteria(&self, index: usize) -> Result<MatchCriteria, PathError> {
        match self {
            PathSegment::Selector(selector) => {
                let parts: Vec<Value> = selector
                    .split('.')
                    .map(|part| Value::String(part.to_string()))
                    .collect();
                if parts.len() > 2 {
                    return Err(PathError::invalid_argument(
                        index,
                        format!(
                            "selector '{}' has more than two parts (expected 'tag' or 'tag.class')",
                            selector
                        ),
                    ));
                }
                positional_criteria(&parts, index)
            }
            PathSegment::Keyed(criteria) => keyed_criteria(criteria, index),
            PathSegment::Positional(args) => positional_criteria(args, index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(selector: &str) -> Self {
        PathSegment::Selector(selector.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(selector: String) -> Self {
        PathSegment::Selector(selector)
    }
}

/// A complete tag path: segments consumed left to right.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagPath {
    /// Segments that make up the path.
    pub segments: Vec<PathSegment>,
}

impl TagPath {
    /// Creates a new tag path with the given segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<PathSegment> for TagPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn positional_criteria(args: &[Value], index: usize) -> Result<MatchCriteria, PathError> {
    if args.len() > POSITIONAL_ARGS.len() {
        return Err(PathError::invalid_argument(
            index,
            format!(
                "expected at most {} positional arguments ({}), got {}",
                POSITIONAL_ARGS.len(),
                POSITIONAL_ARGS.join(", "),
                args.len()
            ),
        ));
    }

    let mut criteria = MatchCriteria::any();
    for (arg, value) in POSITIONAL_ARGS.iter().zip(args) {
        apply_argument(&mut criteria, arg, value, index)?;
    }
    Ok(criteria)
}

fn keyed_criteria(
    keyed: &IndexMap<String, Value>,
    index: usize,
) -> Result<MatchCriteria, PathError> {
    let mut criteria = MatchCriteria::any();
    for (key, value) in keyed {
        match key.as_str() {
            "name" | "attrs" | "recursive" | "limit" => {
                apply_argument(&mut criteria, key, value, index)?
            }
            "string" | "text" => apply_argument(&mut criteria, "text", value, index)?,
            "class" | "class_" => {
                criteria
                    .attrs
                    .insert("class".to_string(), attr_match(value, "class", index)?);
            }
            attribute => {
                criteria
                    .attrs
                    .insert(attribute.to_string(), attr_match(value, attribute, index)?);
            }
        }
    }
    Ok(criteria)
}

fn apply_argument(
    criteria: &mut MatchCriteria,
    arg: &str,
    value: &Value,
    index: usize,
) -> Result<(), PathError> {
    match arg {
        "name" => criteria.names = names(value, index)?,
        "attrs" => match value {
            Value::Null => {}
            Value::String(class) if class.is_empty() => {}
            // A bare string in attribute position filters on class.
            Value::String(class) => {
                criteria
                    .attrs
                    .insert("class".to_string(), AttrMatch::Exact(class.clone()));
            }
            Value::Object(attrs) => {
                for (attribute, constraint) in attrs {
                    criteria
                        .attrs
                        .insert(attribute.clone(), attr_match(constraint, attribute, index)?);
                }
            }
            other => {
                return Err(PathError::invalid_argument(
                    index,
                    format!("attrs must be a string or a mapping, got {}", kind(other)),
                ))
            }
        },
        "recursive" => match value {
            Value::Null => criteria.recursive = true,
            Value::Bool(recursive) => criteria.recursive = *recursive,
            other => {
                return Err(PathError::invalid_argument(
                    index,
                    format!("recursive must be a boolean, got {}", kind(other)),
                ))
            }
        },
        "text" => match value {
            Value::Null => criteria.text = None,
            Value::String(text) => criteria.text = Some(text.clone()),
            other => {
                return Err(PathError::invalid_argument(
                    index,
                    format!("text must be a string, got {}", kind(other)),
                ))
            }
        },
        "limit" => match value {
            Value::Null => criteria.limit = None,
            Value::Number(n) => match n.as_u64() {
                Some(0) => criteria.limit = None,
                Some(limit) => criteria.limit = Some(limit as usize),
                None => {
                    return Err(PathError::invalid_argument(
                        index,
                        format!("limit must be a non-negative integer, got {}", n),
                    ))
                }
            },
            other => {
                return Err(PathError::invalid_argument(
                    index,
                    format!("limit must be an integer, got {}", kind(other)),
                ))
            }
        },
        unknown => {
            return Err(PathError::invalid_argument(
                index,
                format!("unknown argument '{}'", unknown),
            ))
        }
    }
    Ok(())
}

fn names(value: &Value, index: usize) -> Result<Vec<String>, PathError> {
    match value {
        Value::Null | Value::Bool(true) => Ok(Vec::new()),
        Value::String(name) if name.is_empty() => Ok(Vec::new()),
        Value::String(name) => Ok(vec![name.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(name.clone()),
                other => Err(PathError::invalid_argument(
                    index,
                    format!("tag names must be strings, got {}", kind(other)),
                )),
            })
            .collect(),
        other => Err(PathError::invalid_argument(
            index,
            format!("name must be a string or a list of strings, got {}", kind(other)),
        )),
    }
}

fn attr_match(value: &Value, attribute: &str, index: usize) -> Result<AttrMatch, PathError> {
    match value {
        Value::Bool(present) => Ok(AttrMatch::Present(*present)),
        Value::Null => Ok(AttrMatch::Present(false)),
        Value::String(s) => Ok(AttrMatch::Exact(s.clone())),
        Value::Number(n) => Ok(AttrMatch::Exact(n.to_string())),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(PathError::invalid_argument(
                    index,
                    format!("values for '{}' must be strings, got {}", attribute, kind(other)),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(AttrMatch::AnyOf),
        Value::Object(_) => Err(PathError::invalid_argument(
            index,
            format!("constraint for '{}' cannot be a mapping", attribute),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
