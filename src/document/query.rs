//! Read-only queries over a converted tree

use super::models::*;
use super::tree::{DocumentTree, TreeError};

/// Headings in document order, with their flattened text as title
pub fn generate_outline(tree: &DocumentTree) -> Result<Vec<OutlineItem>, TreeError> {
    let mut outline = Vec::new();

    for id in tree.descendants()? {
        if let Tag::Heading(level) = *tree.tag(id)? {
            outline.push(OutlineItem {
                title: tree.text_content(id)?.trim().to_string(),
                level,
                element: id,
            });
        }
    }

    Ok(outline)
}
