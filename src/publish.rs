//! JSON-LD publication into the document head.

use serde_json::{Map, Value};

use crate::dom::{Document, Element, Node, Text};
use crate::error::DecorateError;

/// Media type marking JSON-LD script nodes.
pub const JSON_LD_TYPE: &str = "application/ld+json";

/// Where published JSON-LD payloads go.
///
/// `Document` appends real `<script>` nodes to its `<head>`; tests can
/// substitute a recording sink and assert on payloads without a page tree.
pub trait HeadSink {
    fn append_json_ld(&mut self, payload: &str) -> Result<(), DecorateError>;
}

impl HeadSink for Document {
    fn append_json_ld(&mut self, payload: &str) -> Result<(), DecorateError> {
        let head = self.head_mut().ok_or(DecorateError::MissingHead)?;
        let mut script = Element::new("script");
        script.set_attr("type", JSON_LD_TYPE);
        script.push(Node::Text(Text::raw(payload)));
        head.push_elem(script);
        Ok(())
    }
}

/// Serialize the envelope (pretty-printed, 2-space indent) and append it to
/// the sink.
///
/// Append-only: existing JSON-LD nodes are never replaced or deduplicated,
/// so repeated invocations yield one node each.
pub fn publish(
    sink: &mut dyn HeadSink,
    envelope: &Map<String, Value>,
) -> Result<(), DecorateError> {
    let payload = serde_json::to_string_pretty(envelope)?;
    sink.append_json_ld(&payload)
}
