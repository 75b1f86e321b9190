//! Core data structures for document representation
//!
//! This module defines the public types used to represent an already-parsed
//! presentational document: element kinds, inline styles and the elements
//! stored in the [`DocumentTree`](super::tree::DocumentTree) arena.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Index of an element inside a [`DocumentTree`](super::tree::DocumentTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Symbolic node kind. Reassigning it reclassifies the element in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Document,
    Paragraph,
    Span,
    Table,
    TableRow,
    TableCell,
    List,
    ListItem,
    /// Heading level 1..=6
    Heading(#[serde(deserialize_with = "heading_level")] u8),
    Strong,
    Emphasis,
    Other(String),
}

impl Tag {
    /// Equivalent HTML element name, used by renderers and debug output
    pub fn html_name(&self) -> &str {
        match self {
            Tag::Document => "body",
            Tag::Paragraph => "p",
            Tag::Span => "span",
            Tag::Table => "table",
            Tag::TableRow => "tr",
            Tag::TableCell => "td",
            Tag::List => "ul",
            Tag::ListItem => "li",
            Tag::Heading(1) => "h1",
            Tag::Heading(2) => "h2",
            Tag::Heading(3) => "h3",
            Tag::Heading(4) => "h4",
            Tag::Heading(5) => "h5",
            Tag::Heading(6) => "h6",
            // Out-of-range levels are rejected by DocumentTree::validate
            Tag::Heading(_) => "h?",
            Tag::Strong => "strong",
            Tag::Emphasis => "em",
            Tag::Other(name) => name.as_str(),
        }
    }

    /// Parse an HTML element name; unknown names become [`Tag::Other`]
    pub fn from_html_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "body" => Tag::Document,
            "p" => Tag::Paragraph,
            "span" => Tag::Span,
            "table" => Tag::Table,
            "tr" => Tag::TableRow,
            "td" | "th" => Tag::TableCell,
            "ul" | "ol" => Tag::List,
            "li" => Tag::ListItem,
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Emphasis,
            other => match other.strip_prefix('h').and_then(|n| n.parse::<u8>().ok()) {
                Some(level @ 1..=6) => Tag::Heading(level),
                _ => Tag::Other(other.to_string()),
            },
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Tag::Heading(_))
    }

    /// Inline run kinds never become headings
    pub fn is_inline(&self) -> bool {
        matches!(self, Tag::Span | Tag::Strong | Tag::Emphasis)
    }
}

fn heading_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let level = u8::deserialize(deserializer)?;
    if (1..=6).contains(&level) {
        Ok(level)
    } else {
        Err(D::Error::custom(format!(
            "heading level must be between 1 and 6, got {level}"
        )))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.html_name())
    }
}

/// Inline presentational properties carried by a `style` attribute
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InlineStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    /// Font size in points
    #[serde(default)]
    pub font_size: Option<f32>,
}

impl InlineStyle {
    pub fn sized(font_size: f32) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Element {
    pub tag: Tag,
    #[serde(default)]
    pub style: Option<InlineStyle>,
    /// Authored indentation in em, only meaningful on list items
    #[serde(default)]
    pub indent: Option<f32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub parent: Option<ElementId>,
    #[serde(default)]
    pub children: Vec<ElementId>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            style: None,
            indent: None,
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_indent(mut self, indent: f32) -> Self {
        self.indent = Some(indent);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutlineItem {
    pub title: String,
    pub level: u8,
    pub element: ElementId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_html_names() {
        assert_eq!(Tag::from_html_name("P"), Tag::Paragraph);
        assert_eq!(Tag::from_html_name("h3"), Tag::Heading(3));
        assert_eq!(Tag::from_html_name("h9"), Tag::Other("h9".to_string()));
        assert_eq!(Tag::from_html_name("td"), Tag::TableCell);
        assert_eq!(Tag::Heading(2).to_string(), "h2");
        assert_eq!(Tag::Emphasis.html_name(), "em");
    }

    #[test]
    fn test_inline_kinds() {
        assert!(Tag::Span.is_inline());
        assert!(Tag::Strong.is_inline());
        assert!(!Tag::Paragraph.is_inline());
        assert!(Tag::Heading(1).is_heading());
    }

    #[test]
    fn test_heading_level_range_on_deserialize() {
        let tag: Tag = serde_json::from_str(r#"{"heading":3}"#).unwrap();
        assert_eq!(tag, Tag::Heading(3));
        assert!(serde_json::from_str::<Tag>(r#"{"heading":0}"#).is_err());
        assert!(serde_json::from_str::<Tag>(r#"{"heading":9}"#).is_err());
    }

    #[test]
    fn test_element_deserializes_with_defaults() {
        let element: Element =
            serde_json::from_str(r#"{"tag":"paragraph","style":{"font_size":24.0}}"#).unwrap();
        assert_eq!(element.tag, Tag::Paragraph);
        assert_eq!(element.style, Some(InlineStyle::sized(24.0)));
        assert!(element.children.is_empty());
        assert!(element.indent.is_none());
    }
}
