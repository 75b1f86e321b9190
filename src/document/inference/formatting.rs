//! Inline formatting promotion
//!
//! Bold and italic spans become semantic emphasis elements.

use super::super::models::{ElementId, Tag};
use super::super::tree::{DocumentTree, TreeError};

/// Emphasis kind implied by a span's style flags. Bold wins over italic.
pub(crate) fn emphasis_for(tree: &DocumentTree, id: ElementId) -> Result<Option<Tag>, TreeError> {
    if tree.is_bold(id)? {
        Ok(Some(Tag::Strong))
    } else if tree.is_italic(id)? {
        Ok(Some(Tag::Emphasis))
    } else {
        Ok(None)
    }
}

/// Retag bold spans as strong and italic spans as emphasis.
///
/// Returns the number of spans retagged. Already promoted elements are no
/// longer spans, so a second run is a no-op.
pub fn semanticize_font_styles(tree: &mut DocumentTree) -> Result<usize, TreeError> {
    let mut promoted = 0;
    for id in tree.elements_tagged(&Tag::Span)? {
        if let Some(tag) = emphasis_for(tree, id)? {
            tree.set_tag(id, tag)?;
            promoted += 1;
        }
    }
    tracing::debug!(promoted, "semanticized inline font styles");
    Ok(promoted)
}
