//! Property-based tests for the inference heuristics.

use doxmark::document::inference::list::strip_bullet;
use doxmark::document::inference::numbering::strip_numbering;
use doxmark::{DocumentTree, Element, InlineStyle, IndentLevels, Tag};
use doxmark::{FontSizeModel, FontSizeSamples};
use proptest::prelude::*;

const GLYPHS: &[char] = &['○', '●', '\u{F0B7}', 'o'];

fn sample_sets() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec((0u16..=200).prop_map(|tens| f32::from(tens) * 10.0), 0..40)
}

#[cfg(test)]
mod heuristics_properties {
    use super::*;

    proptest! {
        #[test]
        fn thresholds_never_increase_with_depth(sizes in sample_sets(), depth in 2u8..=7) {
            let model = FontSizeModel::new(FontSizeSamples::from_sizes(sizes), depth);
            for shallow in 1..model.max_level() {
                for deep in (shallow + 1)..=model.max_level() {
                    prop_assert!(model.threshold(shallow) >= model.threshold(deep));
                }
            }
        }

        #[test]
        fn sizes_below_floor_are_never_headings(
            sizes in prop::collection::vec(1.0f32..100.0, 1..20),
            small in 0.0f32..20.0,
        ) {
            let mut tree = DocumentTree::new();
            for size in &sizes {
                tree.append(tree.root(), Element::new(Tag::Paragraph).with_style(InlineStyle::sized(*size)))
                    .unwrap();
            }
            let probe = tree
                .append(tree.root(), Element::new(Tag::Paragraph).with_style(InlineStyle::sized(small)))
                .unwrap();
            doxmark::convert(&mut tree).unwrap();
            prop_assert_eq!(tree.tag(probe).unwrap(), &Tag::Paragraph);
        }

        #[test]
        fn rank_is_a_dense_bijection(distances in prop::collection::vec(0u8..50, 0..30)) {
            let levels = IndentLevels::from_distances(distances.iter().map(|d| f32::from(*d) * 0.5));
            let sorted = levels.distances().to_vec();
            for (index, distance) in sorted.iter().enumerate() {
                prop_assert_eq!(levels.rank(*distance), Some(index));
            }
            prop_assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert_eq!(levels.rank(-1.0), None);
            prop_assert_eq!(levels.rank(0.25), None);
        }

        #[test]
        fn text_without_leading_glyph_is_unchanged(text in "[A-Za-np-z0-9 .:-]{0,30}") {
            prop_assert_eq!(strip_bullet(&text, GLYPHS), None);
        }

        #[test]
        fn lines_without_leading_numbering_are_unchanged(text in "[ :(-][A-Za-z0-9 .]{0,30}") {
            prop_assert_eq!(strip_numbering(&text), text.as_str());
        }
    }
}
