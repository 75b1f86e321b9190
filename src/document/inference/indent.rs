//! List nesting levels from authored indentation
//!
//! Distinct indent distances are ranked so a renderer gets dense levels
//! (0, 1, 2, ...) whatever em gaps the authoring tool used.

use super::super::models::ElementId;
use super::super::tree::{DocumentTree, TreeError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndentLevels {
    distances: Vec<f32>,
}

impl IndentLevels {
    /// Collect indent distances from every list item in the tree
    pub fn from_tree(tree: &DocumentTree) -> Result<Self, TreeError> {
        let mut distances = Vec::new();
        for id in tree.list_items()? {
            if let Some(indent) = tree.indent_distance(id)? {
                distances.push(indent);
            }
        }
        Ok(Self::from_distances(distances))
    }

    pub fn from_distances(distances: impl IntoIterator<Item = f32>) -> Self {
        let mut distances: Vec<f32> = distances.into_iter().filter(|d| d.is_finite()).collect();
        distances.sort_by(f32::total_cmp);
        distances.dedup();
        Self { distances }
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Number of distinct nesting levels
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Zero-based position of `distance` among the observed distances
    pub fn rank(&self, distance: f32) -> Option<usize> {
        self.distances
            .binary_search_by(|probe| probe.total_cmp(&distance))
            .ok()
    }

    /// Nesting level of a list item, if it carries a known indent
    pub fn level_of(&self, tree: &DocumentTree, id: ElementId) -> Result<Option<usize>, TreeError> {
        Ok(tree
            .indent_distance(id)?
            .and_then(|distance| self.rank(distance)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::{Element, Tag};

    #[test]
    fn test_rank_is_dense() {
        let levels = IndentLevels::from_distances([5.0, 0.5, 2.5, 0.5]);
        assert_eq!(levels.distances(), &[0.5, 2.5, 5.0]);
        assert_eq!(levels.rank(0.5), Some(0));
        assert_eq!(levels.rank(2.5), Some(1));
        assert_eq!(levels.rank(5.0), Some(2));
        assert_eq!(levels.rank(1.0), None);
    }

    #[test]
    fn test_zero_indent_is_a_level() {
        let levels = IndentLevels::from_distances([0.0, 1.0]);
        assert_eq!(levels.rank(0.0), Some(0));
    }

    #[test]
    fn test_from_tree_skips_items_without_indent() {
        let mut tree = DocumentTree::new();
        let list = tree.append(tree.root(), Element::new(Tag::List)).unwrap();
        let outer = tree
            .append(list, Element::new(Tag::ListItem).with_indent(0.5))
            .unwrap();
        let bare = tree.append(list, Element::new(Tag::ListItem)).unwrap();
        let inner = tree
            .append(list, Element::new(Tag::ListItem).with_indent(3.0))
            .unwrap();
        // Indents outside list items are ignored
        tree.append(tree.root(), Element::new(Tag::Paragraph).with_indent(9.0))
            .unwrap();

        let levels = IndentLevels::from_tree(&tree).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels.level_of(&tree, outer).unwrap(), Some(0));
        assert_eq!(levels.level_of(&tree, inner).unwrap(), Some(1));
        assert_eq!(levels.level_of(&tree, bare).unwrap(), None);
        assert_eq!(levels.rank(9.0), None);
    }
}
