//! Metadata extraction from block field entries.
//!
//! Interprets each value cell according to its field name and builds an
//! order-preserving mapping. Falsy results (empty strings) are omitted
//! rather than reported, so incomplete fields drop out silently.

use serde_json::{Map, Value};
use url::Url;

use crate::block::FieldEntry;
use crate::config::MalformedPolicy;
use crate::dom::Element;
use crate::error::DecorateError;

/// Field names whose values are nested schema.org agent objects.
const AGENT_FIELDS: &[&str] = &["creator", "copyrightHolder"];

/// Build the metadata mapping from validated field entries.
///
/// Duplicate names: the later entry overwrites the former.
pub fn extract_metadata(
    entries: &[FieldEntry<'_>],
    policy: MalformedPolicy,
) -> Result<Map<String, Value>, DecorateError> {
    let mut metadata = Map::new();
    for entry in entries {
        if let Some(value) = attribute_value(entry, policy)? {
            metadata.insert(entry.name.clone(), value);
        }
    }
    Ok(metadata)
}

/// Interpret a value cell according to the field name.
fn attribute_value(
    entry: &FieldEntry<'_>,
    policy: MalformedPolicy,
) -> Result<Option<Value>, DecorateError> {
    if entry.name == "contentUrl" {
        return Ok(content_url(entry.value).map(Value::String));
    }
    if AGENT_FIELDS.contains(&entry.name.as_str()) {
        return agent(entry, policy);
    }

    let text = entry.value.text_content().trim().to_string();
    Ok((!text.is_empty()).then_some(Value::String(text)))
}

/// Canonical image URL: origin + path of the first descendant `<img>` src,
/// query string and fragment stripped.
///
/// `None` when the cell has no image or the src does not parse as an
/// absolute URL with a host (relative and `data:` sources count as
/// unresolvable).
fn content_url(value: &Element) -> Option<String> {
    let img = value.find_descendant(&|elem: &Element| elem.tag == "img")?;
    let src = img.get_attr("src").filter(|src| !src.is_empty())?;
    let url = Url::parse(src).ok().filter(Url::has_host)?;
    Some(format!("{}{}", url.origin().ascii_serialization(), url.path()))
}

/// `{"@type": ..., "name": ...}` from the value cell's first two child
/// elements.
fn agent(
    entry: &FieldEntry<'_>,
    policy: MalformedPolicy,
) -> Result<Option<Value>, DecorateError> {
    let mut cells = entry.value.child_elements();
    let (Some(type_cell), Some(name_cell)) = (cells.next(), cells.next()) else {
        let found = entry.value.child_elements().count();
        return match policy {
            MalformedPolicy::Skip => {
                crate::log!("extract"; "skipping `{}`: {found} child element(s), expected 2", entry.name);
                Ok(None)
            }
            MalformedPolicy::Fail => Err(DecorateError::AgentArity {
                name: entry.name.clone(),
                found,
            }),
        };
    };

    let mut object = Map::new();
    object.insert(
        "@type".to_string(),
        Value::String(type_cell.text_content().trim().to_string()),
    );
    object.insert(
        "name".to_string(),
        Value::String(name_cell.text_content().trim().to_string()),
    );
    Ok(Some(Value::Object(object)))
}
