//! Literal numbering prefixes baked into list item text

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::models::ElementId;
use super::super::tree::{DocumentTree, TreeError};

// "1.", "a.", "IV." at the start of any line
static NUMBERING_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[a-zA-Z0-9]+\.").unwrap());

/// Remove a leading `alnum+.` run from every line, leaving the rest untouched
pub fn strip_numbering(text: &str) -> std::borrow::Cow<'_, str> {
    NUMBERING_PREFIX.replace_all(text, "")
}

/// Strip numbering prefixes from the given spans. Returns how many changed.
pub fn remove_numbering(tree: &mut DocumentTree, spans: &[ElementId]) -> Result<usize, TreeError> {
    let mut changed = 0;
    for &id in spans {
        let Some(text) = tree.text(id)? else {
            continue;
        };
        let stripped = strip_numbering(text);
        if stripped != text {
            let stripped = stripped.into_owned();
            tree.set_text(id, stripped)?;
            changed += 1;
        }
    }
    tracing::debug!(changed, "removed numbering from list items");
    Ok(changed)
}
