//! Arena-backed document tree handed over by the parser
//!
//! The tree is exclusively owned by the caller for the duration of a
//! conversion. Passes only reassign tags and rewrite text; elements are
//! never removed or reparented once appended.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::*;

/// Structural inconsistencies in a tree. These indicate a collaborator bug,
/// not a document content problem, and abort the conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("element {0} does not exist in this tree")]
    DanglingElement(ElementId),
    #[error("ancestor chain of element {0} contains a cycle")]
    CyclicAncestry(ElementId),
    #[error("element {0} is reachable more than once from the root")]
    SharedChild(ElementId),
    #[error("parent link of element {0} disagrees with its position in the tree")]
    InconsistentParent(ElementId),
    #[error("element {0} has heading level {1}, expected 1 to 6")]
    InvalidHeadingLevel(ElementId, u8),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentTree {
    elements: Vec<Element>,
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTree {
    pub const ROOT: ElementId = ElementId(0);

    pub fn new() -> Self {
        Self {
            elements: vec![Element::new(Tag::Document)],
        }
    }

    /// Deserialize a tree produced by an external parser
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let tree: DocumentTree = serde_json::from_str(json)?;
        if tree.elements.is_empty() {
            anyhow::bail!("document tree has no root element");
        }
        Ok(tree)
    }

    pub fn root(&self) -> ElementId {
        Self::ROOT
    }

    /// Number of elements, the root included
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// True once anything besides the root has been appended
    pub fn has_content(&self) -> bool {
        self.elements.len() > 1
    }

    /// Check that parent links mirror child lists, every element reachable
    /// from the root appears once, and heading levels are in range.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.get(Self::ROOT)?.parent.is_some() {
            return Err(TreeError::InconsistentParent(Self::ROOT));
        }
        for (index, element) in self.elements.iter().enumerate() {
            let id = ElementId(index);
            if let Tag::Heading(level) = element.tag {
                if !(1..=6).contains(&level) {
                    return Err(TreeError::InvalidHeadingLevel(id, level));
                }
            }
            for &child in &element.children {
                if self.get(child)?.parent != Some(id) {
                    return Err(TreeError::InconsistentParent(child));
                }
            }
        }
        self.descendants().map(|_| ())
    }

    /// Append `element` as the last child of `parent`
    pub fn append(&mut self, parent: ElementId, mut element: Element) -> Result<ElementId, TreeError> {
        if parent.0 >= self.elements.len() {
            return Err(TreeError::DanglingElement(parent));
        }
        let id = ElementId(self.elements.len());
        element.parent = Some(parent);
        element.children.clear();
        self.elements.push(element);
        self.elements[parent.0].children.push(id);
        Ok(id)
    }

    pub fn get(&self, id: ElementId) -> Result<&Element, TreeError> {
        self.elements.get(id.0).ok_or(TreeError::DanglingElement(id))
    }

    fn get_mut(&mut self, id: ElementId) -> Result<&mut Element, TreeError> {
        self.elements
            .get_mut(id.0)
            .ok_or(TreeError::DanglingElement(id))
    }

    pub fn tag(&self, id: ElementId) -> Result<&Tag, TreeError> {
        Ok(&self.get(id)?.tag)
    }

    pub fn set_tag(&mut self, id: ElementId, tag: Tag) -> Result<(), TreeError> {
        self.get_mut(id)?.tag = tag;
        Ok(())
    }

    pub fn text(&self, id: ElementId) -> Result<Option<&str>, TreeError> {
        Ok(self.get(id)?.text.as_deref())
    }

    pub fn set_text(&mut self, id: ElementId, text: String) -> Result<(), TreeError> {
        self.get_mut(id)?.text = Some(text);
        Ok(())
    }

    pub fn children(&self, id: ElementId) -> Result<&[ElementId], TreeError> {
        Ok(&self.get(id)?.children)
    }

    pub fn parent(&self, id: ElementId) -> Result<Option<ElementId>, TreeError> {
        Ok(self.get(id)?.parent)
    }

    // Attribute accessors. NaN/infinite values count as absent.

    pub fn font_size(&self, id: ElementId) -> Result<Option<f32>, TreeError> {
        Ok(self
            .get(id)?
            .style
            .as_ref()
            .and_then(|style| style.font_size)
            .filter(|size| size.is_finite()))
    }

    pub fn is_bold(&self, id: ElementId) -> Result<bool, TreeError> {
        Ok(self.get(id)?.style.as_ref().is_some_and(|s| s.bold))
    }

    pub fn is_italic(&self, id: ElementId) -> Result<bool, TreeError> {
        Ok(self.get(id)?.style.as_ref().is_some_and(|s| s.italic))
    }

    pub fn indent_distance(&self, id: ElementId) -> Result<Option<f32>, TreeError> {
        Ok(self.get(id)?.indent.filter(|indent| indent.is_finite()))
    }

    /// True if any strict ancestor of `id` satisfies `predicate`
    pub fn has_ancestor<F>(&self, id: ElementId, predicate: F) -> Result<bool, TreeError>
    where
        F: Fn(&Tag) -> bool,
    {
        let mut current = self.get(id)?.parent;
        let mut steps = 0;
        while let Some(ancestor) = current {
            steps += 1;
            if steps > self.elements.len() {
                return Err(TreeError::CyclicAncestry(id));
            }
            let element = self.get(ancestor)?;
            if predicate(&element.tag) {
                return Ok(true);
            }
            current = element.parent;
        }
        Ok(false)
    }

    /// All elements reachable from the root, in document order
    pub fn descendants(&self) -> Result<Vec<ElementId>, TreeError> {
        let mut visited = vec![false; self.elements.len()];
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack = vec![Self::ROOT];

        while let Some(id) = stack.pop() {
            let element = self.get(id)?;
            if std::mem::replace(&mut visited[id.0], true) {
                return Err(TreeError::SharedChild(id));
            }
            order.push(id);
            stack.extend(element.children.iter().rev().copied());
        }

        Ok(order)
    }

    fn select<F>(&self, mut predicate: F) -> Result<Vec<ElementId>, TreeError>
    where
        F: FnMut(ElementId, &Element) -> Result<bool, TreeError>,
    {
        let mut selected = Vec::new();
        for id in self.descendants()? {
            if predicate(id, self.get(id)?)? {
                selected.push(id);
            }
        }
        Ok(selected)
    }

    /// Elements carrying a style attribute
    pub fn styled_elements(&self) -> Result<Vec<ElementId>, TreeError> {
        self.select(|_, element| Ok(element.style.is_some()))
    }

    pub fn elements_tagged(&self, tag: &Tag) -> Result<Vec<ElementId>, TreeError> {
        self.select(|_, element| Ok(element.tag == *tag))
    }

    pub fn list_items(&self) -> Result<Vec<ElementId>, TreeError> {
        self.elements_tagged(&Tag::ListItem)
    }

    /// Elements tagged `tag` with some ancestor tagged `container`
    pub fn tagged_within(&self, tag: &Tag, container: &Tag) -> Result<Vec<ElementId>, TreeError> {
        self.select(|id, element| {
            if element.tag != *tag {
                return Ok(false);
            }
            self.has_ancestor(id, |ancestor| ancestor == container)
        })
    }

    pub fn spans_in_list_items(&self) -> Result<Vec<ElementId>, TreeError> {
        self.tagged_within(&Tag::Span, &Tag::ListItem)
    }

    /// Concatenated text of an element and its descendants
    pub fn text_content(&self, id: ElementId) -> Result<String, TreeError> {
        let mut content = String::new();
        let mut stack = vec![id];
        let mut steps = 0;
        while let Some(current) = stack.pop() {
            steps += 1;
            if steps > self.elements.len() {
                return Err(TreeError::CyclicAncestry(id));
            }
            let element = self.get(current)?;
            if let Some(text) = &element.text {
                content.push_str(text);
            }
            stack.extend(element.children.iter().rev().copied());
        }
        Ok(content)
    }
}
