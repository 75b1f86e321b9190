//! doxmark: semantic structure inference for word-processor exports
//!
//! This library takes an already-parsed, purely presentational document tree
//! (font sizes, indentation, bold/italic flags, literal bullets) and infers
//! headings, emphasis and list nesting so a renderer can emit clean Markdown.

pub mod config;
pub mod document;

// Re-export commonly used types
pub use config::ConverterConfig;
pub use document::{
    convert, ConvertError, Converter, DocumentTree, Element, ElementId, FontSizeModel,
    FontSizeSamples, IndentLevels, InlineStyle, Tag, TreeError,
};
