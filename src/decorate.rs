//! Block decoration driver.
//!
//! Composes the pipeline over one document: extract metadata from a block,
//! wrap it in the schema.org envelope, publish it into `<head>`, then remove
//! the block's presentational container.

use crate::block::{field_entries, find_blocks};
use crate::config::DecorateOptions;
use crate::dom::{Document, NodePath};
use crate::error::DecorateError;
use crate::extract::extract_metadata;
use crate::jsonld::build_envelope;
use crate::publish::publish;

/// Decorate every metadata block in the document.
///
/// Blocks are re-discovered after each removal, since deleting one block's
/// container invalidates sibling paths. Returns the number of decorated
/// blocks; one JSON-LD node is appended per block, never merged.
pub fn decorate(doc: &mut Document, options: &DecorateOptions) -> Result<usize, DecorateError> {
    let mut count = 0;
    while let Some(path) = find_blocks(doc, &options.block_class).into_iter().next() {
        decorate_block(doc, &path, options)?;
        count += 1;
    }
    Ok(count)
}

/// Decorate a single block.
///
/// Publication happens before cleanup, so a failed publication (missing
/// `<head>`) leaves the tree untouched.
pub fn decorate_block(
    doc: &mut Document,
    block: &NodePath,
    options: &DecorateOptions,
) -> Result<(), DecorateError> {
    let metadata = {
        let elem = doc.element_at(block).ok_or(DecorateError::BlockNotFound)?;
        let entries = field_entries(elem, options.on_malformed)?;
        extract_metadata(&entries, options.on_malformed)?
    };
    crate::debug!("decorate"; "publishing {} metadata field(s)", metadata.len());

    let envelope = build_envelope(metadata);
    publish(doc, &envelope)?;
    remove_block(doc, block)
}

/// Remove the block's grandparent container from the tree.
///
/// The calling template guarantees blocks sit exactly two levels below a
/// removable container; a shallower block is a structural error.
fn remove_block(doc: &mut Document, block: &NodePath) -> Result<(), DecorateError> {
    let container = block
        .ancestor(2)
        .filter(|path| !path.is_root())
        .ok_or(DecorateError::ShallowBlock)?;
    doc.remove_at(&container).ok_or(DecorateError::BlockNotFound)?;
    Ok(())
}
