//! Document tree and semantic inference module
//!
//! This module holds the arena tree handed over by the parser and the
//! passes that turn presentational markup into semantic structure.

pub(crate) mod cleanup;
pub mod converter;
pub mod inference;
pub mod models;
pub mod query;
pub mod tree;

// Re-export the public surface
pub use converter::{convert, ConvertError, Converter};
pub use inference::font_sizes::{FontSizeModel, FontSizeSamples};
pub use inference::indent::IndentLevels;
pub use models::*;
pub use query::*;
pub use tree::{DocumentTree, TreeError};
