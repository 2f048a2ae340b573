//! schema.org JSON-LD envelope.

use serde_json::{Map, Value};

/// JSON-LD context for every published document.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Published schema.org type.
pub const SCHEMA_TYPE: &str = "ImageObject";

/// Wrap the metadata mapping in the fixed envelope.
///
/// Fixed keys go in first, then the metadata spreads over them, so a field
/// entry named `@context` or `@type` overwrites the fixed value (user data
/// wins) while keeping the fixed key's position.
pub fn build_envelope(metadata: Map<String, Value>) -> Map<String, Value> {
    let mut envelope = Map::new();
    envelope.insert("@context".to_string(), Value::String(SCHEMA_CONTEXT.to_string()));
    envelope.insert("@type".to_string(), Value::String(SCHEMA_TYPE.to_string()));
    for (name, value) in metadata {
        envelope.insert(name, value);
    }
    envelope
}
