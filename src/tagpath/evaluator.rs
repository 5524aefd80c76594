use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ast::PathSegment;
use super::error::PathError;
use crate::document::criteria::MatchCriteria;
use crate::document::node::Queryable;

/// What single-match traversal does when a segment finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentPolicy {
    /// Stop at the first miss and return `Ok(None)`.
    #[default]
    Propagate,
    /// Stop at the first miss and return `PathError::NoMatch`.
    FailFast,
}

/// Normalizes every segment of a path, failing on the first malformed one.
pub fn compile(path: &[PathSegment]) -> Result<Vec<MatchCriteria>, PathError> {
    path.iter()
        .enumerate()
        .map(|(index, segment)| segment.criteria(index))
        .collect()
}

/// Follows `path` from `node` with find-first semantics.
///
/// Each segment narrows one node to the next one node. An empty path returns
/// `node` itself. What happens on a miss is decided by `policy`.
///
/// # Example
///
/// ```
/// use soupwalk::document::node::Queryable;
/// use soupwalk::document::tree::HtmlDocument;
/// use soupwalk::tagpath::{get_element, AbsentPolicy, PathSegment};
///
/// let doc = HtmlDocument::parse(r#"<div class="card"><h2>Title</h2></div>"#);
/// let path = vec![PathSegment::from("div.card"), PathSegment::from("h2")];
///
/// let title = get_element(doc.root(), &path, AbsentPolicy::Propagate).unwrap();
/// assert_eq!(title.unwrap().text_content(), "Title");
/// ```
pub fn get_element<N: Queryable>(
    node: N,
    path: &[PathSegment],
    policy: AbsentPolicy,
) -> Result<Option<N>, PathError> {
    let steps = compile(path)?;

    let mut current = node;
    for (index, criteria) in steps.iter().enumerate() {
        debug!(segment = index, %criteria, "find first");
        match current.find_first(criteria) {
            Some(next) => current = next,
            None => {
                debug!(segment = index, ?policy, "segment matched nothing");
                return match policy {
                    AbsentPolicy::Propagate => Ok(None),
                    AbsentPolicy::FailFast => Err(PathError::NoMatch {
                        segment: index,
                        criteria: criteria.to_string(),
                    }),
                };
            }
        }
    }
    Ok(Some(current))
}

/// Follows `path` from every node in `nodes` with find-all semantics.
///
/// Each match of a segment continues independently with the rest of the path.
/// The result holds the matches of the final segment across all branches,
/// ordered by starting node first and match order second. Branches that match
/// nothing are dropped. An empty path or empty `nodes` yields an empty result;
/// with empty `nodes` the path is not normalized at all.
///
/// A single node can be passed as `[node]` or `Some(node)`.
///
/// # Example
///
/// ```
/// use soupwalk::document::node::Queryable;
/// use soupwalk::document::tree::HtmlDocument;
/// use soupwalk::tagpath::{get_elements, PathSegment};
///
/// let doc = HtmlDocument::parse("<ul><li>a</li><li>b</li></ul><ul><li>c</li></ul>");
/// let path = vec![PathSegment::from("ul"), PathSegment::from("li")];
///
/// let items = get_elements([doc.root()], &path).unwrap();
/// let texts: Vec<String> = items.iter().map(|li| li.text_content()).collect();
/// assert_eq!(texts, vec!["a", "b", "c"]);
/// ```
pub fn get_elements<N, I>(nodes: I, path: &[PathSegment]) -> Result<Vec<N>, PathError>
where
    N: Queryable,
    I: IntoIterator<Item = N>,
{
    let mut nodes = nodes.into_iter().peekable();
    if nodes.peek().is_none() {
        return Ok(Vec::new());
    }

    let steps = compile(path)?;
    let mut cumul = Vec::new();
    collect(nodes, &steps, &mut cumul);
    Ok(cumul)
}

fn collect<N, I>(nodes: I, steps: &[MatchCriteria], cumul: &mut Vec<N>)
where
    N: Queryable,
    I: IntoIterator<Item = N>,
{
    let Some((head, rest)) = steps.split_first() else {
        return;
    };

    for node in nodes {
        let matches = node.find_all(head);
        debug!(
            remaining = rest.len(),
            criteria = %head,
            found = matches.len(),
            "find all"
        );
        if rest.is_empty() {
            cumul.extend(matches);
        } else {
            collect(matches, rest, cumul);
        }
    }
}
