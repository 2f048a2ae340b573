//! Block discovery and typed field entries.
//!
//! A metadata block is an element carrying the block class marker. Each
//! direct child element is one field-entry row: a label cell followed by a
//! value cell. Rows are validated here, at construction, instead of trusting
//! positional child access downstream.

use crate::config::MalformedPolicy;
use crate::dom::{Document, Element, NodePath};
use crate::error::DecorateError;

/// One validated label/value row of a metadata block.
#[derive(Debug)]
pub struct FieldEntry<'a> {
    /// Trimmed label text, used verbatim as the output field name.
    pub name: String,
    /// The value cell; interpretation depends on `name`.
    pub value: &'a Element,
}

impl<'a> FieldEntry<'a> {
    /// Build an entry from one block row.
    ///
    /// A row needs a label cell and a value cell; extra cells are ignored.
    /// Under `Skip`, a short row is logged and dropped (`Ok(None)`).
    pub fn from_row(
        row: &'a Element,
        policy: MalformedPolicy,
    ) -> Result<Option<Self>, DecorateError> {
        let mut cells = row.child_elements();
        let (Some(label), Some(value)) = (cells.next(), cells.next()) else {
            let found = row.child_elements().count();
            return match policy {
                MalformedPolicy::Skip => {
                    crate::log!("block"; "skipping field entry with {found} cell(s), expected 2");
                    Ok(None)
                }
                MalformedPolicy::Fail => Err(DecorateError::EntryArity { found }),
            };
        };

        Ok(Some(Self {
            name: label.text_content().trim().to_string(),
            value,
        }))
    }
}

/// Find every metadata block in document order.
pub fn find_blocks(doc: &Document, block_class: &str) -> Vec<NodePath> {
    doc.find_all(&|elem: &Element| elem.has_class(block_class))
}

/// Collect the validated field entries of a block.
pub fn field_entries(
    block: &Element,
    policy: MalformedPolicy,
) -> Result<Vec<FieldEntry<'_>>, DecorateError> {
    let mut entries = Vec::new();
    for row in block.child_elements() {
        if let Some(entry) = FieldEntry::from_row(row, policy)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, value: &str) -> Element {
        let mut row = Element::new("div");
        let mut label_cell = Element::new("div");
        label_cell.push_text(label);
        let mut value_cell = Element::new("div");
        value_cell.push_text(value);
        row.push_elem(label_cell);
        row.push_elem(value_cell);
        row
    }

    #[test]
    fn entry_trims_label_text() {
        let row = row("  name  ", "Sunset");
        let entry = FieldEntry::from_row(&row, MalformedPolicy::Skip)
            .unwrap()
            .unwrap();
        assert_eq!(entry.name, "name");
        assert_eq!(entry.value.text_content(), "Sunset");
    }

    #[test]
    fn short_row_is_skipped_under_skip_policy() {
        let mut short = Element::new("div");
        short.push_elem(Element::new("div"));
        let entry = FieldEntry::from_row(&short, MalformedPolicy::Skip).unwrap();
        assert!(entry.is_none());
    }

    #[test]
    fn short_row_fails_under_fail_policy() {
        let mut short = Element::new("div");
        short.push_elem(Element::new("div"));
        let err = FieldEntry::from_row(&short, MalformedPolicy::Fail).unwrap_err();
        assert!(matches!(err, DecorateError::EntryArity { found: 1 }));
    }

    #[test]
    fn extra_cells_are_ignored() {
        let mut wide = row("name", "Sunset");
        wide.push_elem(Element::new("div"));
        let entry = FieldEntry::from_row(&wide, MalformedPolicy::Fail)
            .unwrap()
            .unwrap();
        assert_eq!(entry.name, "name");
    }

    #[test]
    fn field_entries_collects_rows_in_order() {
        let mut block = Element::new("div");
        block.set_attr("class", "image-metadata");
        block.push_elem(row("name", "Sunset"));
        block.push_elem(row("description", "Evening sky"));

        let entries = field_entries(&block, MalformedPolicy::Skip).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "name");
        assert_eq!(entries[1].name, "description");
    }

    #[test]
    fn find_blocks_matches_class_marker() {
        let doc = Document::parse(
            r#"<html><body><main><div><div class="image-metadata"></div></div></main></body></html>"#,
        )
        .unwrap();
        assert_eq!(find_blocks(&doc, "image-metadata").len(), 1);
        assert!(find_blocks(&doc, "other-block").is_empty());
    }
}
