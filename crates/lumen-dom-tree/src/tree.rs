//! Document tree management.
//!
//! This module provides the [`Document`] type which owns all elements in a
//! slotmap arena and manages the structural relationships between them.

use slotmap::{DefaultKey, SlotMap};
use thiserror::Error;

use crate::node::{Element, ElementBuilder};
use crate::selector::Selector;

/// A key identifying an element in the document.
pub type ElementKey = DefaultKey;

/// Result type for document tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur during tree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The specified element was not found in the document.
    #[error("element not found: {0:?}")]
    ElementNotFound(ElementKey),

    /// The mutation would create a cycle in the tree.
    #[error("circular reference detected")]
    CircularReference,

    /// The document root cannot be removed.
    #[error("cannot remove the document root")]
    RemoveRoot,
}

/// A document: an arena of elements plus the tree structure between them.
///
/// Every document starts with a `body` root element. Elements are created
/// detached and become reachable by queries once appended somewhere under
/// the root.
pub struct Document {
    /// Storage for all elements, attached or not.
    nodes: SlotMap<ElementKey, Element>,
    /// The root element. Always present.
    root: ElementKey,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a new document with an empty `body` root.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = SlotMap::new();
        let root = nodes.insert(Element::new("body"));
        Self { nodes, root }
    }

    /// Returns the root element key.
    #[must_use]
    pub fn root(&self) -> ElementKey {
        self.root
    }

    /// Returns the number of elements in the document, attached or not.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Creates a new detached element with the given tag name.
    pub fn create_element(&mut self, tag: impl AsRef<str>) -> ElementKey {
        self.nodes.insert(Element::new(tag))
    }

    /// Creates a new detached element from a builder.
    pub fn create_element_with(&mut self, builder: ElementBuilder) -> ElementKey {
        self.nodes.insert(builder.build())
    }

    /// Gets a reference to an element.
    #[must_use]
    pub fn get(&self, key: ElementKey) -> Option<&Element> {
        self.nodes.get(key)
    }

    /// Gets a mutable reference to an element.
    #[must_use]
    pub fn get_mut(&mut self, key: ElementKey) -> Option<&mut Element> {
        self.nodes.get_mut(key)
    }

    /// Appends a child to a parent element.
    ///
    /// If the child is currently attached elsewhere it is detached first.
    pub fn append_child(&mut self, parent: ElementKey, child: ElementKey) -> TreeResult<()> {
        if !self.nodes.contains_key(parent) {
            return Err(TreeError::ElementNotFound(parent));
        }
        if !self.nodes.contains_key(child) {
            return Err(TreeError::ElementNotFound(child));
        }
        if self.contains(child, parent) {
            return Err(TreeError::CircularReference);
        }

        self.detach(child);

        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(child);
        }
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent);
        }
        Ok(())
    }

    /// Inserts a child at a specific index in the parent's child list.
    pub fn insert_child(
        &mut self,
        parent: ElementKey,
        child: ElementKey,
        index: usize,
    ) -> TreeResult<()> {
        if !self.nodes.contains_key(parent) {
            return Err(TreeError::ElementNotFound(parent));
        }
        if !self.nodes.contains_key(child) {
            return Err(TreeError::ElementNotFound(child));
        }
        if self.contains(child, parent) {
            return Err(TreeError::CircularReference);
        }

        self.detach(child);

        if let Some(parent_node) = self.nodes.get_mut(parent) {
            let insert_index = index.min(parent_node.children.len());
            parent_node.children.insert(insert_index, child);
        }
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent);
        }
        Ok(())
    }

    /// Removes an element and all its descendants from the document.
    ///
    /// The root element cannot be removed; use [`Document::clear`] to empty
    /// the document instead.
    pub fn remove(&mut self, key: ElementKey) -> TreeResult<()> {
        if key == self.root {
            return Err(TreeError::RemoveRoot);
        }
        if !self.nodes.contains_key(key) {
            return Err(TreeError::ElementNotFound(key));
        }

        self.detach(key);

        let mut to_remove = vec![key];
        let mut i = 0;
        while i < to_remove.len() {
            if let Some(node) = self.nodes.get(to_remove[i]) {
                to_remove.extend(node.children.iter().copied());
            }
            i += 1;
        }
        for key_to_remove in to_remove.into_iter().rev() {
            self.nodes.remove(key_to_remove);
        }
        Ok(())
    }

    /// Removes every element under the root and clears the root's text.
    pub fn clear(&mut self) {
        let children: Vec<ElementKey> = self
            .nodes
            .get(self.root)
            .map(|n| n.children.to_vec())
            .unwrap_or_default();
        for child in children {
            // Children of the root are never the root, so this cannot fail.
            let _ = self.remove(child);
        }
        if let Some(root) = self.nodes.get_mut(self.root) {
            root.clear_text();
        }
    }

    /// Returns the parent of an element.
    #[must_use]
    pub fn parent(&self, key: ElementKey) -> Option<ElementKey> {
        self.nodes.get(key).and_then(|n| n.parent)
    }

    /// Returns the children of an element in document order.
    #[must_use]
    pub fn children(&self, key: ElementKey) -> Option<&[ElementKey]> {
        self.nodes.get(key).map(|n| n.children.as_slice())
    }

    /// Returns true if `child` is a direct child of `parent`.
    #[must_use]
    pub fn is_direct_child(&self, parent: ElementKey, child: ElementKey) -> bool {
        self.parent(child) == Some(parent)
    }

    /// Returns true if `descendant` is `ancestor` itself or sits anywhere
    /// below it.
    #[must_use]
    pub fn contains(&self, ancestor: ElementKey, descendant: ElementKey) -> bool {
        let mut current = Some(descendant);
        while let Some(key) = current {
            if key == ancestor {
                return true;
            }
            current = self.nodes.get(key).and_then(|n| n.parent);
        }
        false
    }

    /// Returns the ancestors of an element, nearest first.
    #[must_use]
    pub fn ancestors(&self, key: ElementKey) -> Vec<ElementKey> {
        let mut out = Vec::new();
        let mut current = self.parent(key);
        while let Some(ancestor) = current {
            out.push(ancestor);
            current = self.parent(ancestor);
        }
        out
    }

    /// Returns all descendants of an element in document order.
    #[must_use]
    pub fn descendants(&self, key: ElementKey) -> Vec<ElementKey> {
        let mut out = Vec::new();
        self.collect_descendants(key, &mut out);
        out
    }

    fn collect_descendants(&self, key: ElementKey, out: &mut Vec<ElementKey>) {
        if let Some(node) = self.nodes.get(key) {
            for &child in &node.children {
                out.push(child);
                self.collect_descendants(child, out);
            }
        }
    }

    /// Finds the first element (in document order) with the given `id`
    /// attribute.
    ///
    /// Detached elements are not reachable from the root and are never
    /// returned.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementKey> {
        self.find_first(self.root, &|el| el.id() == Some(id))
    }

    /// Finds the first element (in document order) matching the selector.
    #[must_use]
    pub fn query_selector(&self, selector: &Selector) -> Option<ElementKey> {
        self.find_first(self.root, &|el| el.matches(selector))
    }

    /// Finds all elements (in document order) matching the selector.
    #[must_use]
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<ElementKey> {
        let mut out = Vec::new();
        self.collect_matching(self.root, selector, &mut out);
        out
    }

    /// Parses and runs a selector query, folding parse failures into "no
    /// match".
    ///
    /// Callers that need to distinguish a bad selector from an absent
    /// element should use [`Selector::parse`] and [`Document::query_selector`]
    /// directly.
    #[must_use]
    pub fn select(&self, selector: &str) -> Option<ElementKey> {
        let selector = Selector::parse(selector).ok()?;
        self.query_selector(&selector)
    }

    fn find_first(
        &self,
        key: ElementKey,
        predicate: &dyn Fn(&Element) -> bool,
    ) -> Option<ElementKey> {
        let node = self.nodes.get(key)?;
        if predicate(node) {
            return Some(key);
        }
        for &child in &node.children {
            if let Some(found) = self.find_first(child, predicate) {
                return Some(found);
            }
        }
        None
    }

    fn collect_matching(&self, key: ElementKey, selector: &Selector, out: &mut Vec<ElementKey>) {
        let Some(node) = self.nodes.get(key) else {
            return;
        };
        if node.matches(selector) {
            out.push(key);
        }
        for &child in &node.children {
            self.collect_matching(child, selector, out);
        }
    }

    /// Returns the concatenated text of an element and all its descendants,
    /// in document order. Leading and trailing whitespace is preserved.
    #[must_use]
    pub fn text_content(&self, key: ElementKey) -> String {
        let mut out = String::new();
        self.append_text(key, &mut out);
        out
    }

    fn append_text(&self, key: ElementKey, out: &mut String) {
        if let Some(node) = self.nodes.get(key) {
            if let Some(text) = node.text() {
                out.push_str(text);
            }
            for &child in &node.children {
                self.append_text(child, out);
            }
        }
    }

    /// Sets the direct text content of an element. Missing elements are
    /// ignored.
    pub fn set_text(&mut self, key: ElementKey, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.set_text(text);
        }
    }

    /// Iterates over all elements in the document, attached or not.
    pub fn iter(&self) -> impl Iterator<Item = (ElementKey, &Element)> {
        self.nodes.iter()
    }

    /// Detaches an element from its current parent, if any.
    fn detach(&mut self, key: ElementKey) {
        if let Some(old_parent) = self.nodes.get(key).and_then(|n| n.parent) {
            if let Some(old_parent_node) = self.nodes.get_mut(old_parent) {
                old_parent_node.children.retain(|k| *k != key);
            }
            if let Some(node) = self.nodes.get_mut(key) {
                node.parent = None;
            }
        }
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("node_count", &self.nodes.len())
            .field("root", &self.root)
            .finish()
    }
}
