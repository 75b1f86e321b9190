//! Post-processing and cleanup passes
//!
//! Paragraph wrappers inside table cells and list items render as spurious
//! extra blocks, so they are demoted to inline spans.

use super::models::Tag;
use super::tree::{DocumentTree, TreeError};

/// Demote every paragraph with a `container` ancestor to a span
pub(crate) fn demote_paragraphs_within(
    tree: &mut DocumentTree,
    container: &Tag,
) -> Result<usize, TreeError> {
    let paragraphs = tree.tagged_within(&Tag::Paragraph, container)?;
    for &id in &paragraphs {
        tree.set_tag(id, Tag::Span)?;
    }
    Ok(paragraphs.len())
}

pub fn remove_paragraphs_from_tables(tree: &mut DocumentTree) -> Result<usize, TreeError> {
    let demoted = demote_paragraphs_within(tree, &Tag::TableCell)?;
    tracing::debug!(demoted, "removed paragraphs from table cells");
    Ok(demoted)
}

pub fn remove_paragraphs_from_list_items(tree: &mut DocumentTree) -> Result<usize, TreeError> {
    let demoted = demote_paragraphs_within(tree, &Tag::ListItem)?;
    tracing::debug!(demoted, "removed paragraphs from list items");
    Ok(demoted)
}
