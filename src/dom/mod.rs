//! Owned document tree for block decoration.
//!
//! A small VDOM (`Document` / `Element` / `Node` / `Text` / `Attrs`) with
//! path-addressed lookup and removal. Parsing from HTML text lives in
//! `parse`, rendering back to HTML in `render`.

mod parse;
mod render;

use crate::error::DecorateError;

// =============================================================================
// Attributes
// =============================================================================

/// Order-preserving attribute list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.0.push((key.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// Text node content.
///
/// Raw text bypasses entity escaping on render (script payloads, trusted
/// markup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
    raw: bool,
}

impl Text {
    /// Plain text, escaped on render.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            raw: false,
        }
    }

    /// Raw text, rendered unescaped.
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            raw: true,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(elem) => Some(elem),
            Node::Text(_) => None,
        }
    }
}

// =============================================================================
// Element
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self::with_attrs(tag, Attrs::new())
    }

    pub fn with_attrs(tag: &str, attrs: Attrs) -> Self {
        Self {
            tag: tag.to_string(),
            attrs,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn push_elem(&mut self, elem: Element) {
        self.children.push(Node::Element(Box::new(elem)));
    }

    pub fn push_text(&mut self, text: &str) {
        self.children.push(Node::Text(Text::new(text)));
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attrs.set(key, value);
    }

    /// Whitespace-separated class list membership.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    /// Direct child elements, text nodes skipped.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(elem) => elem.collect_text(out),
                Node::Text(text) => out.push_str(text.content()),
            }
        }
    }

    /// Depth-first search over descendants (self excluded).
    pub fn find_descendant(&self, pred: &impl Fn(&Element) -> bool) -> Option<&Element> {
        for child in self.child_elements() {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(pred) {
                return Some(found);
            }
        }
        None
    }
}

// =============================================================================
// Node paths
// =============================================================================

/// Address of a node as child indices from the document root.
///
/// The empty path is the root element itself. Paths are invalidated by any
/// structural mutation of the tree; re-discover after removals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path `levels` ancestors up, `None` when the path is too shallow.
    pub fn ancestor(&self, levels: usize) -> Option<NodePath> {
        self.0
            .len()
            .checked_sub(levels)
            .map(|keep| NodePath(self.0[..keep].to_vec()))
    }
}

// =============================================================================
// Document
// =============================================================================

/// A page tree rooted at a single element (normally `<html>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse an HTML string into a document.
    pub fn parse(html: &str) -> Result<Self, DecorateError> {
        parse::parse_document(html)
    }

    /// Render the document back to HTML text.
    pub fn render(&self) -> String {
        render::render_document(self)
    }

    /// All elements matching the predicate, in document order.
    pub fn find_all(&self, pred: &impl Fn(&Element) -> bool) -> Vec<NodePath> {
        let mut found = Vec::new();
        let mut path = Vec::new();
        collect_matches(&self.root, pred, &mut path, &mut found);
        found
    }

    /// The element at a path, `None` if the path no longer resolves.
    pub fn element_at(&self, path: &NodePath) -> Option<&Element> {
        let mut current = &self.root;
        for &index in &path.0 {
            current = current.children.get(index)?.as_element()?;
        }
        Some(current)
    }

    /// Detach and return the subtree at a path. The root is not removable.
    pub fn remove_at(&mut self, path: &NodePath) -> Option<Node> {
        let (&last, ancestors) = path.0.split_last()?;
        let mut parent = &mut self.root;
        for &index in ancestors {
            parent = match parent.children.get_mut(index)? {
                Node::Element(elem) => elem,
                Node::Text(_) => return None,
            };
        }
        if last < parent.children.len() {
            Some(parent.children.remove(last))
        } else {
            None
        }
    }

    /// First `<head>` element, if the document has one.
    pub fn head(&self) -> Option<&Element> {
        find_tag(&self.root, "head")
    }

    pub fn head_mut(&mut self) -> Option<&mut Element> {
        find_tag_mut(&mut self.root, "head")
    }
}

fn collect_matches(
    elem: &Element,
    pred: &impl Fn(&Element) -> bool,
    path: &mut Vec<usize>,
    found: &mut Vec<NodePath>,
) {
    if pred(elem) {
        found.push(NodePath(path.clone()));
    }
    for (index, child) in elem.children.iter().enumerate() {
        if let Node::Element(child) = child {
            path.push(index);
            collect_matches(child, pred, path, found);
            path.pop();
        }
    }
}

fn find_tag<'a>(elem: &'a Element, tag: &str) -> Option<&'a Element> {
    if elem.tag == tag {
        return Some(elem);
    }
    for child in &elem.children {
        if let Node::Element(child) = child
            && let Some(found) = find_tag(child, tag)
        {
            return Some(found);
        }
    }
    None
}

fn find_tag_mut<'a>(elem: &'a mut Element, tag: &str) -> Option<&'a mut Element> {
    if elem.tag == tag {
        return Some(elem);
    }
    for child in &mut elem.children {
        if let Node::Element(child) = child
            && let Some(found) = find_tag_mut(child, tag)
        {
            return Some(found);
        }
    }
    None
}
