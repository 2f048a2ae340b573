//! DOM to HTML rendering.

use std::fmt::Write;

use crate::dom::{Document, Element, Node};
use crate::utils::html::{escape, escape_attr, is_raw_text_element, is_void_element};

/// Render a document back to HTML text.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    render_element(&doc.root, &mut out);
    out
}

fn render_element(elem: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&elem.tag);
    for (key, value) in elem.attrs.iter() {
        if value.is_empty() {
            let _ = write!(out, " {key}");
        } else {
            let _ = write!(out, " {key}=\"{}\"", escape_attr(value));
        }
    }

    if is_void_element(&elem.tag) {
        out.push_str("/>");
        return;
    }
    out.push('>');

    // Per HTML spec, script/style content is raw text
    let raw_text = is_raw_text_element(&elem.tag);
    for child in &elem.children {
        match child {
            Node::Element(child) => render_element(child, out),
            Node::Text(text) if raw_text || text.is_raw() => out.push_str(text.content()),
            Node::Text(text) => out.push_str(&escape(text.content())),
        }
    }

    let _ = write!(out, "</{}>", elem.tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Attrs, Text};

    #[test]
    fn renders_nested_elements_with_attrs() {
        let mut div = Element::with_attrs("div", Attrs::new());
        div.set_attr("class", "box");
        let mut span = Element::new("span");
        span.push_text("hi");
        div.push_elem(span);

        let doc = Document::new(div);
        assert_eq!(doc.render(), r#"<div class="box"><span>hi</span></div>"#);
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let mut div = Element::new("div");
        div.set_attr("title", "a \"b\" & c");
        div.push_text("<script>");
        let doc = Document::new(div);
        assert_eq!(
            doc.render(),
            r#"<div title="a &quot;b&quot; &amp; c">&lt;script&gt;</div>"#
        );
    }

    #[test]
    fn void_elements_self_close() {
        let mut div = Element::new("div");
        let mut img = Element::new("img");
        img.set_attr("src", "/p.png");
        div.push_elem(img);
        let doc = Document::new(div);
        assert_eq!(doc.render(), r#"<div><img src="/p.png"/></div>"#);
    }

    #[test]
    fn script_content_is_not_escaped() {
        let mut script = Element::new("script");
        script.set_attr("type", "application/ld+json");
        script.push(Node::Text(Text::raw("{\n  \"a\": \"<b>\"\n}")));
        let doc = Document::new(script);
        assert!(doc.render().contains("\"<b>\""));
    }

    #[test]
    fn boolean_attributes_render_bare() {
        let mut script = Element::new("script");
        script.set_attr("defer", "");
        let doc = Document::new(script);
        assert_eq!(doc.render(), "<script defer></script>");
    }
}
