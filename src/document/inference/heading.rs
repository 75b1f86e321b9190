//! Heading detection from font sizes
//!
//! Oversized block elements are promoted to headings using the percentile
//! model built before any promotion happens, so promoted headings never
//! feed back into the thresholds that selected them.

use super::super::models::{ElementId, Tag};
use super::super::tree::{DocumentTree, TreeError};
use super::font_sizes::FontSizeModel;

/// Styled block elements whose font size reaches `min_size`.
///
/// Inline runs (spans and emphasis) are never candidates.
pub fn implicit_headings(tree: &DocumentTree, min_size: f32) -> Result<Vec<ElementId>, TreeError> {
    let mut candidates = Vec::new();
    for id in tree.styled_elements()? {
        if tree.tag(id)?.is_inline() {
            continue;
        }
        if tree.font_size(id)?.is_some_and(|size| size >= min_size) {
            candidates.push(id);
        }
    }
    Ok(candidates)
}

/// Heading level for a single element, if its size qualifies
pub fn guess_heading(
    tree: &DocumentTree,
    model: &FontSizeModel,
    id: ElementId,
) -> Result<Option<u8>, TreeError> {
    Ok(tree
        .font_size(id)?
        .and_then(|size| model.guess_heading(size)))
}

/// Retag each candidate that resolves to a level as that heading.
///
/// Returns the promoted elements with their levels, in document order.
pub fn semanticize_headings(
    tree: &mut DocumentTree,
    model: &FontSizeModel,
    candidates: &[ElementId],
) -> Result<Vec<(ElementId, u8)>, TreeError> {
    if model.samples().is_empty() {
        tracing::warn!("no font sizes observed; skipping heading inference");
        return Ok(Vec::new());
    }

    let mut promoted = Vec::new();
    for &id in candidates {
        if let Some(level) = guess_heading(tree, model, id)? {
            tracing::trace!(element = %id, level, "promoting element to heading");
            tree.set_tag(id, Tag::Heading(level))?;
            promoted.push((id, level));
        }
    }
    tracing::debug!(promoted = promoted.len(), "inferred implicit headings");
    Ok(promoted)
}
