//! Indented serialization of elements.
//!
//! Every tag, text run and comment goes on its own line, indented by nesting
//! depth. Whitespace-only text is dropped and other text is trimmed, so the
//! output is for reading, not for round-tripping.

use scraper::{ElementRef, Node};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose text content is emitted unescaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Serializes an element and its subtree with `indent_size` spaces per level.
///
/// # Example
///
/// ```
/// use scraper::{ElementRef, Html};
/// use soupwalk::document::pretty::prettify;
///
/// let html = Html::parse_fragment(r#"<p class="x">Hi <b>there</b></p>"#);
/// let p = html.root_element().children().find_map(ElementRef::wrap).unwrap();
/// assert_eq!(prettify(p, 1), "<p class=\"x\">\n Hi\n <b>\n  there\n </b>\n</p>\n");
/// ```
pub fn prettify(element: ElementRef<'_>, indent_size: usize) -> String {
    let mut out = String::new();
    write_element(element, 0, indent_size, &mut out);
    out
}

fn write_element(element: ElementRef<'_>, depth: usize, indent_size: usize, out: &mut String) {
    let value = element.value();
    let name = value.name();

    push_indent(depth, indent_size, out);
    out.push('<');
    out.push_str(name);
    for (attr, attr_value) in value.attrs() {
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        out.push_str(&escape(attr_value, true));
        out.push('"');
    }
    out.push_str(">\n");

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    write_element(child, depth + 1, indent_size, out);
                }
            }
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    push_indent(depth + 1, indent_size, out);
                    if RAW_TEXT_ELEMENTS.contains(&name) {
                        out.push_str(trimmed);
                    } else {
                        out.push_str(&escape(trimmed, false));
                    }
                    out.push('\n');
                }
            }
            Node::Comment(comment) => {
                push_indent(depth + 1, indent_size, out);
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->\n");
            }
            _ => {}
        }
    }

    push_indent(depth, indent_size, out);
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

fn push_indent(depth: usize, indent_size: usize, out: &mut String) {
    out.extend(std::iter::repeat(' ').take(depth * indent_size));
}

fn escape(text: &str, in_attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' if !in_attribute => escaped.push_str("&lt;"),
            '>' if !in_attribute => escaped.push_str("&gt;"),
            '"' if in_attribute => escaped.push_str("&quot;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            c => escaped.push(c),
        }
    }
    escaped
}
