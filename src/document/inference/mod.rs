//! Heuristic inference passes
//!
//! Each module turns one kind of presentational signal into semantics:
//! inline styles, font sizes, bullet glyphs, numbering and indentation.

pub mod font_sizes;
pub mod formatting;
pub mod heading;
pub mod indent;
pub mod list;
pub mod numbering;
