//! HTML text to DOM conversion using the `tl` parser.

use crate::dom::{Attrs, Document, Element, Node, Text};
use crate::error::DecorateError;
use crate::utils::html::unescape;

/// Parse an HTML string into an owned [`Document`].
///
/// Comments are dropped and entities are decoded. Text nodes are kept as
/// written, whitespace included, so `text_content()` matches the page.
pub fn parse_document(html: &str) -> Result<Document, DecorateError> {
    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|e| DecorateError::Parse(e.to_string()))?;
    let parser = dom.parser();

    let mut top = Vec::new();
    for handle in dom.children() {
        if let Some(node) = convert(*handle, parser) {
            top.push(node);
        }
    }
    Ok(Document::new(into_root(top)))
}

/// A sole top-level `<html>` element becomes the root; fragments are wrapped
/// in a synthetic `<html>` so every document has a single root.
///
/// Inter-tag whitespace at the top level is markup noise and is dropped
/// before picking the root.
fn into_root(mut top: Vec<Node>) -> Element {
    top.retain(|node| match node {
        Node::Text(text) => !text.content().trim().is_empty(),
        Node::Element(_) => true,
    });
    if top.len() == 1
        && matches!(&top[0], Node::Element(elem) if elem.tag == "html")
        && let Some(Node::Element(elem)) = top.pop()
    {
        return *elem;
    }
    let mut root = Element::new("html");
    root.children = top;
    root
}

/// Convert a `tl` node handle to an owned DOM node.
fn convert(handle: tl::NodeHandle, parser: &tl::Parser) -> Option<Node> {
    let node = handle.get(parser)?;

    match node {
        tl::Node::Tag(tag) => {
            let tag_name = tag.name().as_utf8_str().to_lowercase();

            let mut attrs = Attrs::new();
            for (key, value) in tag.attributes().iter() {
                let key_str: &str = key.as_ref();
                let value_str = value
                    .map(|v| unescape(&v).into_owned())
                    .unwrap_or_default();
                attrs.set(key_str, &value_str);
            }

            let mut elem = Element::with_attrs(&tag_name, attrs);
            for child_handle in tag.children().top().iter() {
                if let Some(child) = convert(*child_handle, parser) {
                    elem.push(child);
                }
            }
            Some(Node::Element(Box::new(elem)))
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            Some(Node::Text(Text::new(unescape(&text).into_owned())))
        }
        tl::Node::Comment(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document_with_html_root() {
        let doc = parse_document("<html><head></head><body><p>hi</p></body></html>").unwrap();
        assert_eq!(doc.root.tag, "html");
        assert_eq!(doc.root.child_elements().count(), 2);
    }

    #[test]
    fn wraps_fragments_in_synthetic_root() {
        let doc = parse_document("<div>a</div><div>b</div>").unwrap();
        assert_eq!(doc.root.tag, "html");
        assert_eq!(doc.root.child_elements().count(), 2);
    }

    #[test]
    fn skips_comments_but_keeps_text() {
        let doc = parse_document("<div>\n  <!-- note -->\n  <span>x</span>\n</div>").unwrap();
        let div = doc.root.child_elements().next().unwrap();
        assert_eq!(div.child_elements().count(), 1);
        assert!(!div.text_content().contains("note"));
        assert_eq!(div.text_content().trim(), "x");
    }

    #[test]
    fn keeps_interior_whitespace_between_inline_elements() {
        let doc = parse_document("<div><b>Sunset</b> <i>over the bay</i></div>").unwrap();
        let div = doc.root.child_elements().next().unwrap();
        assert_eq!(div.text_content(), "Sunset over the bay");
    }

    #[test]
    fn drops_top_level_whitespace_around_root() {
        let doc = parse_document("\n<html><head></head><body></body></html>\n").unwrap();
        assert_eq!(doc.root.tag, "html");
        assert_eq!(doc.root.child_elements().count(), 2);
    }

    #[test]
    fn decodes_entities_in_text_and_attributes() {
        let doc = parse_document(r#"<div title="a &amp; b">Jane &amp; Doe</div>"#).unwrap();
        let div = doc.root.child_elements().next().unwrap();
        assert_eq!(div.get_attr("title"), Some("a & b"));
        assert_eq!(div.text_content(), "Jane & Doe");
    }

    #[test]
    fn lowercases_tag_names() {
        let doc = parse_document("<DIV><IMG src='/x.png'></DIV>").unwrap();
        let div = doc.root.child_elements().next().unwrap();
        assert_eq!(div.tag, "div");
        assert_eq!(div.child_elements().next().unwrap().tag, "img");
    }
}
