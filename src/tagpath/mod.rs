//! Declarative tag paths over parsed HTML trees.
//!
//! A path is an ordered list of segments. Each segment is one find (or find-all)
//! query, and every segment is applied to the results of the one before it.
//!
//! # Segment Forms
//!
//! - `"div"`, `"div.item"`, `".item"` - period-delimited positional arguments
//!   (tag name, then class)
//! - `{"name": "a", "href": true}` - keyed criteria; unknown keys are attributes
//! - `["td", {"colspan": "2"}, false]` - positional `[name, attrs, recursive, text, limit]`
//!
//! # Traversal
//!
//! - `get_element` - find-first at every segment, one node in and one node out
//! - `get_elements` - find-all at every segment, fanning out across matches
//!
//! # Examples
//!
//! ```
//! // ["div.listing", "li"]                      - every li under every div.listing
//! // [{"name": "a", "rel": "next"}]             - links with rel="next"
//! // [["table", null, true, null, 1], "tr"]     - rows of the first table only
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{PathSegment, TagPath};
pub use error::PathError;
pub use evaluator::{compile, get_element, get_elements, AbsentPolicy};
pub use parser::parse_path;
