//! Conversion pipeline
//!
//! Runs the inference passes over a tree in a fixed order. Order matters:
//! emphasis is settled before headings, headings before paragraph cleanup
//! (cleanup only demotes elements still tagged as paragraphs), and list
//! text is normalized once cleanup has turned item paragraphs into spans.

use thiserror::Error;

use super::cleanup::{remove_paragraphs_from_list_items, remove_paragraphs_from_tables};
use super::inference::font_sizes::{FontSizeModel, FontSizeSamples};
use super::inference::formatting::semanticize_font_styles;
use super::inference::heading::{implicit_headings, semanticize_headings};
use super::inference::indent::IndentLevels;
use super::inference::list::remove_unicode_bullets;
use super::inference::numbering::remove_numbering;
use super::models::ElementId;
use super::tree::{DocumentTree, TreeError};
use crate::config::ConverterConfig;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("malformed document tree: {0}")]
    Tree(#[from] TreeError),
    #[error("invalid converter configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Distinct rounded font sizes currently in the tree
    pub fn font_sizes(&self, tree: &DocumentTree) -> Result<FontSizeSamples, ConvertError> {
        Ok(FontSizeSamples::from_tree(tree)?)
    }

    /// Percentile model over the tree's current font sizes
    pub fn font_size_model(&self, tree: &DocumentTree) -> Result<FontSizeModel, ConvertError> {
        Ok(FontSizeModel::new(
            self.font_sizes(tree)?,
            self.config.heading_depth,
        ))
    }

    /// Elements large enough to be considered for heading promotion
    pub fn implicit_headings(&self, tree: &DocumentTree) -> Result<Vec<ElementId>, ConvertError> {
        Ok(implicit_headings(tree, self.config.min_heading_size)?)
    }

    /// Infer semantic structure in place.
    ///
    /// Returns the indent ranking of the converted tree's list items for the
    /// renderer. On error the tree may be partially converted and should be
    /// discarded.
    pub fn convert(&self, tree: &mut DocumentTree) -> Result<IndentLevels, ConvertError> {
        tracing::debug!(elements = tree.element_count(), "converting document tree");
        tree.validate()?;

        semanticize_font_styles(tree)?;

        // Snapshot before any promotion so new headings don't move thresholds
        let model = self.font_size_model(tree)?;
        let candidates = self.implicit_headings(tree)?;
        semanticize_headings(tree, &model, &candidates)?;

        remove_paragraphs_from_tables(tree)?;
        remove_paragraphs_from_list_items(tree)?;

        let spans = tree.spans_in_list_items()?;
        remove_unicode_bullets(tree, &spans, &self.config.bullet_glyphs)?;
        remove_numbering(tree, &spans)?;

        Ok(IndentLevels::from_tree(tree)?)
    }
}

/// Convert with the default configuration
pub fn convert(tree: &mut DocumentTree) -> Result<IndentLevels, ConvertError> {
    Converter::default().convert(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::{Element, InlineStyle, Tag};

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ConverterConfig {
            heading_depth: 9,
            ..ConverterConfig::default()
        };
        assert!(matches!(
            Converter::new(config),
            Err(ConvertError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_promoted_headings_do_not_shift_thresholds() {
        let mut tree = DocumentTree::new();
        for size in [10.0, 20.0, 30.0, 40.0, 50.0] {
            tree.append(
                tree.root(),
                Element::new(Tag::Paragraph).with_style(InlineStyle::sized(size)),
            )
            .unwrap();
        }
        let converter = Converter::default();
        let before = converter.font_sizes(&tree).unwrap();
        converter.convert(&mut tree).unwrap();
        assert_eq!(converter.font_sizes(&tree).unwrap(), before);
    }

    #[test]
    fn test_shallower_depth_limits_levels() {
        let mut tree = DocumentTree::new();
        let mut ids = Vec::new();
        for size in [20.0, 30.0, 40.0, 50.0] {
            ids.push(
                tree.append(
                    tree.root(),
                    Element::new(Tag::Paragraph).with_style(InlineStyle::sized(size)),
                )
                .unwrap(),
            );
        }
        let converter = Converter::new(ConverterConfig {
            heading_depth: 2,
            ..ConverterConfig::default()
        })
        .unwrap();
        converter.convert(&mut tree).unwrap();
        // Depth 2 only has level 1, at the 0th percentile
        for id in ids {
            assert_eq!(tree.tag(id).unwrap(), &Tag::Heading(1));
        }
    }

    #[test]
    fn test_mismatched_parent_link_fails() {
        // Listed under the cell, but the parent link points at the root
        let json = r#"{"elements":[
            {"tag":"document","children":[1]},
            {"tag":"table_cell","parent":0,"children":[2]},
            {"tag":"paragraph","parent":0,"text":"cell"}
        ]}"#;
        let mut tree = DocumentTree::from_json(json).unwrap();
        assert!(matches!(
            convert(&mut tree),
            Err(ConvertError::Tree(TreeError::InconsistentParent(ElementId(2))))
        ));
        assert_eq!(tree.tag(ElementId(2)).unwrap(), &Tag::Paragraph);
    }

    #[test]
    fn test_malformed_tree_fails() {
        let json = r#"{"elements":[
            {"tag":"document","children":[1]},
            {"tag":"list_item","parent":0,"children":[2]},
            {"tag":"paragraph","parent":1,"children":[1]}
        ]}"#;
        let mut tree = DocumentTree::from_json(json).unwrap();
        assert!(matches!(convert(&mut tree), Err(ConvertError::Tree(_))));
    }
}
