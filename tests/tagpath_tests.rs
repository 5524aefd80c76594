//! Integration tests for tag path traversal.

use serde_json::json;
use soupwalk::document::criteria::MatchCriteria;
use soupwalk::document::node::Queryable;
use soupwalk::document::tree::HtmlDocument;
use soupwalk::tagpath::{
    get_element, get_elements, parse_path, AbsentPolicy, PathError, PathSegment,
};

const CATALOG: &str = r#"
<html><body>
  <div class="item" id="first"><span>alpha</span></div>
  <div class="item featured" id="second"><span>beta</span></div>
  <div class="ad"><span>buy now</span></div>
</body></html>
"#;

fn ids<N: Queryable>(nodes: &[N]) -> Vec<String> {
    nodes
        .iter()
        .map(|n| n.attribute("id").unwrap_or_default().to_string())
        .collect()
}

fn texts<N: Queryable>(nodes: &[N]) -> Vec<String> {
    nodes.iter().map(|n| n.text_content()).collect()
}

/// A positional [name, attrs] segment followed by a tag returns the spans of
/// both matching divs in document order.
#[test]
fn test_positional_segment_then_tag() {
    let doc = HtmlDocument::parse(CATALOG);
    let path = vec![
        PathSegment::positional(vec![json!("div"), json!({"class": "item"})]),
        PathSegment::from("span"),
    ];

    let spans = get_elements([doc.root()], &path).unwrap();
    assert_eq!(texts(&spans), vec!["alpha", "beta"]);
}

/// Three separate segments: every div, then item-classed descendants, then spans.
#[test]
fn test_three_segment_path_with_wrapper() {
    let doc = HtmlDocument::parse(
        r#"<div id="wrap">
             <div class="item"><span>one</span></div>
             <div class="item"><span>two</span></div>
           </div>"#,
    );
    let path = parse_path(r#"["div", {"class": "item"}, "span"]"#).unwrap();

    let spans = get_elements([doc.root()], path.segments()).unwrap();
    // Only #wrap has item-classed descendants; the inner divs have none.
    assert_eq!(texts(&spans), vec!["one", "two"]);
}

/// Fan-out over two roots keeps all of A's matches before B's.
#[test]
fn test_fan_out_root_major_order() {
    let doc = HtmlDocument::parse(
        r#"<section id="A"><p><b>a1</b></p><p><b>a2</b></p></section>
           <section id="B"><p><b>b1</b></p></section>"#,
    );
    let sections = doc.root().find_all(&MatchCriteria::tag("section"));
    assert_eq!(ids(&sections), vec!["A", "B"]);

    let path = vec![PathSegment::from("p"), PathSegment::from("b")];
    let found = get_elements(sections, &path).unwrap();
    assert_eq!(texts(&found), vec!["a1", "a2", "b1"]);
}

/// When every segment matches exactly one node, both traversals agree.
#[test]
fn test_single_match_paths_agree() {
    let doc = HtmlDocument::parse(
        r#"<main><article id="post"><h1 id="title">Hello</h1></article></main>"#,
    );
    let path = parse_path("main article h1").unwrap();

    let one = get_element(doc.root(), path.segments(), AbsentPolicy::FailFast)
        .unwrap()
        .unwrap();
    let all = get_elements([doc.root()], path.segments()).unwrap();

    assert_eq!(ids(&all), ids(&[one]));
}

/// A path whose first segment matches nothing: absent under Propagate,
/// NoMatch at segment 0 under FailFast.
#[test]
fn test_first_segment_miss_policies() {
    let doc = HtmlDocument::parse(CATALOG);
    let path = parse_path("table tr td").unwrap();

    let absent = get_element(doc.root(), path.segments(), AbsentPolicy::Propagate).unwrap();
    assert!(absent.is_none());

    let err = get_element(doc.root(), path.segments(), AbsentPolicy::FailFast).unwrap_err();
    assert!(matches!(err, PathError::NoMatch { segment: 0, .. }));
}

/// An empty path collects nothing.
#[test]
fn test_empty_path_collects_nothing() {
    let doc = HtmlDocument::parse(CATALOG);
    assert!(get_elements([doc.root()], &[]).unwrap().is_empty());
}

/// Branches with no matches are dropped while sibling branches continue.
#[test]
fn test_pruned_branch_does_not_stop_siblings() {
    let doc = HtmlDocument::parse(
        r#"<ul id="x"></ul><ul id="y"><li>kept</li></ul><ul id="z"></ul>"#,
    );
    let found = get_elements([doc.root()], &parse_path("ul li").unwrap().segments).unwrap();
    assert_eq!(texts(&found), vec!["kept"]);
}

/// Keyed criteria mix tag names, class tokens and extra attribute constraints.
#[test]
fn test_keyed_segment_with_attribute_kwargs() {
    let doc = HtmlDocument::parse(
        r#"<a href="/1" class="nav">one</a>
           <a class="nav">no href</a>
           <a href="/3" class="nav external" rel="next">three</a>"#,
    );
    let path = vec![PathSegment::keyed([
        ("name", json!("a")),
        ("class", json!("nav")),
        ("href", json!(true)),
    ])];
    let found = get_elements([doc.root()], &path).unwrap();
    assert_eq!(texts(&found), vec!["one", "three"]);

    let path = vec![PathSegment::keyed([("rel", json!("next"))])];
    let next = get_element(doc.root(), &path, AbsentPolicy::Propagate)
        .unwrap()
        .unwrap();
    assert_eq!(next.attribute("href"), Some("/3"));
}

/// Non-recursive and limited segments restrict each fan-out step.
#[test]
fn test_recursive_and_limit_arguments() {
    let doc = HtmlDocument::parse(
        r#"<ol id="outer"><li>1<ol><li>1.1</li></ol></li><li>2</li><li>3</li></ol>"#,
    );
    let path = parse_path(r#"[["ol", {"id": "outer"}], ["li", null, false, null, 2]]"#).unwrap();
    let found = get_elements([doc.root()], path.segments()).unwrap();
    let firsts: Vec<String> = found
        .iter()
        .map(|li| li.text_content().chars().take(1).collect())
        .collect();
    assert_eq!(firsts, vec!["1", "2"]);
}

/// Malformed segments surface as invalid-argument errors.
#[test]
fn test_malformed_segment_errors() {
    let doc = HtmlDocument::parse(CATALOG);
    let path = parse_path(r#"["div", ["span", {"id": "x"}, "yes"]]"#).unwrap();
    let err = get_elements([doc.root()], path.segments()).unwrap_err();
    assert!(matches!(err, PathError::InvalidArgument { segment: 1, .. }));
}

/// A YAML path file works the same as the JSON notation.
#[test]
fn test_yaml_path() {
    let doc = HtmlDocument::parse(CATALOG);
    let path = parse_path("- name: div\n  class: featured\n- span\n").unwrap();
    let found = get_elements([doc.root()], path.segments()).unwrap();
    assert_eq!(texts(&found), vec!["beta"]);
}
