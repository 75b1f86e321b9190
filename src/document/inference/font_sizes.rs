//! Font-size percentile model
//!
//! Turns the distinct font sizes observed in a document into per-level
//! minimum sizes. Level 1 is the most exclusive band; deeper levels need
//! less font size.

use super::super::tree::{DocumentTree, TreeError};

/// Distinct font sizes rounded to the nearest ten points, sorted ascending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontSizeSamples {
    sizes: Vec<f32>,
}

impl FontSizeSamples {
    /// Snapshot the sizes of every styled element in the tree
    pub fn from_tree(tree: &DocumentTree) -> Result<Self, TreeError> {
        let mut sizes = Vec::new();
        for id in tree.styled_elements()? {
            if let Some(size) = tree.font_size(id)? {
                sizes.push(round_to_tens(size));
            }
        }
        Ok(Self::from_sizes(sizes))
    }

    /// Build from already-rounded values; they are only sorted and deduplicated
    pub fn from_sizes(sizes: impl IntoIterator<Item = f32>) -> Self {
        let mut sizes: Vec<f32> = sizes.into_iter().filter(|s| s.is_finite()).collect();
        sizes.sort_by(f32::total_cmp);
        sizes.dedup();
        Self { sizes }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Nearest-rank percentile: index `ceil(p/100 * N) - 1`, clamped to the set
    pub fn percentile(&self, percent: u32) -> Option<f32> {
        let n = self.sizes.len();
        if n == 0 {
            return None;
        }
        // Integer ceil keeps the boundary ranks exact
        let rank = (percent as usize * n).div_ceil(100);
        let index = rank.saturating_sub(1).min(n - 1);
        Some(self.sizes[index])
    }
}

/// Round half away from zero to a multiple of ten
pub(crate) fn round_to_tens(size: f32) -> f32 {
    (size / 10.0).round() * 10.0
}

/// Per-level minimum font sizes derived from a sample set
#[derive(Debug, Clone, PartialEq)]
pub struct FontSizeModel {
    samples: FontSizeSamples,
    depth: u8,
    step: u32,
}

impl FontSizeModel {
    pub fn new(samples: FontSizeSamples, depth: u8) -> Self {
        let depth = depth.max(1);
        Self {
            samples,
            depth,
            step: 100 / u32::from(depth),
        }
    }

    pub fn samples(&self) -> &FontSizeSamples {
        &self.samples
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Deepest level this model can assign
    pub fn max_level(&self) -> u8 {
        self.depth - 1
    }

    /// Percentile rank a size must reach to qualify for `level`
    pub fn required_percentile(&self, level: u8) -> Option<u32> {
        if level == 0 || level > self.max_level() {
            return None;
        }
        Some(u32::from(self.max_level() - level) * self.step)
    }

    /// Minimum font size for `level`; `None` if the level is out of range
    /// or no sizes were observed
    pub fn threshold(&self, level: u8) -> Option<f32> {
        self.samples.percentile(self.required_percentile(level)?)
    }

    /// First level (most prominent first) whose threshold `size` reaches
    pub fn guess_heading(&self, size: f32) -> Option<u8> {
        (1..=self.max_level()).find(|&level| self.threshold(level).is_some_and(|min| min <= size))
    }
}
