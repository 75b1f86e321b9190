//! List item text cleanup
//!
//! Word exports often bake the bullet glyph into the run text in addition to
//! the list markup. These helpers strip the duplicated glyph.

use super::super::models::ElementId;
use super::super::tree::{DocumentTree, TreeError};

/// Drop the first and last character when the text opens with a bullet glyph.
///
/// The trailing character goes unconditionally once the leading glyph
/// matches, whatever it is. Text that doesn't open with a glyph is returned
/// unchanged.
pub fn strip_bullet(text: &str, glyphs: &[char]) -> Option<String> {
    let mut chars = text.chars();
    let leading = chars.next()?;
    if !glyphs.contains(&leading) {
        return None;
    }
    chars.next_back();
    Some(chars.as_str().to_string())
}

/// Strip duplicated bullets from the given spans. Returns how many changed.
pub fn remove_unicode_bullets(
    tree: &mut DocumentTree,
    spans: &[ElementId],
    glyphs: &[char],
) -> Result<usize, TreeError> {
    let mut changed = 0;
    for &id in spans {
        let stripped = match tree.text(id)? {
            Some(text) => strip_bullet(text, glyphs),
            None => None,
        };
        if let Some(stripped) = stripped {
            tree.set_text(id, stripped)?;
            changed += 1;
        }
    }
    tracing::debug!(changed, "removed bullet glyphs from list items");
    Ok(changed)
}
