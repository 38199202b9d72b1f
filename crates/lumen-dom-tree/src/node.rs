//! Element node types.
//!
//! This module provides the [`Element`] type which represents a node in the
//! document tree, along with [`ElementBuilder`] for fluent construction.

use smallvec::SmallVec;

use crate::selector::Selector;

/// A node in the document tree.
///
/// An element carries a lowercased tag name, an optional `id` attribute, a
/// class list, and optional direct text content. Parent/child structure is
/// owned by the [`Document`](crate::Document), not by the element itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercased tag name, e.g. `"ul"` or `"li"`.
    tag: String,
    /// The `id` attribute, if set.
    id: Option<String>,
    /// Class list in insertion order.
    classes: SmallVec<[String; 2]>,
    /// Direct text content of this element.
    text: Option<String>,
    /// Parent element key (if attached).
    pub(crate) parent: Option<slotmap::DefaultKey>,
    /// Child element keys in document order.
    pub(crate) children: SmallVec<[slotmap::DefaultKey; 4]>,
}

impl Element {
    /// Creates a new detached element with the given tag name.
    ///
    /// Tag names are stored lowercased, so `"LI"` and `"li"` are the same
    /// element kind.
    #[must_use]
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: tag.as_ref().to_ascii_lowercase(),
            id: None,
            classes: SmallVec::new(),
            text: None,
            parent: None,
            children: SmallVec::new(),
        }
    }

    /// Returns the lowercased tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the `id` attribute, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the `id` attribute.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Returns the class list in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns true if the element carries the given class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class to the element. Duplicates are ignored.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Returns the direct text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sets the direct text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Clears the direct text content.
    pub fn clear_text(&mut self) {
        self.text = None;
    }

    /// Returns true if this element matches the given selector.
    #[must_use]
    pub fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => self.has_class(class),
            Selector::Tag(tag) => self.tag == *tag,
        }
    }
}

/// Builder for constructing elements fluently.
///
/// # Example
///
/// ```
/// use lumen_dom_tree::ElementBuilder;
///
/// let el = ElementBuilder::new("button")
///     .id("submit")
///     .class("primary")
///     .text("Send")
///     .build();
///
/// assert_eq!(el.tag(), "button");
/// assert_eq!(el.id(), Some("submit"));
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Starts a builder for an element with the given tag name.
    #[must_use]
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            element: Element::new(tag),
        }
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.element.set_id(id);
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.element.add_class(class);
        self
    }

    /// Sets the direct text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.set_text(text);
        self
    }

    /// Builds the element.
    #[must_use]
    pub fn build(self) -> Element {
        self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_lowercased() {
        let el = Element::new("LI");
        assert_eq!(el.tag(), "li");
    }

    #[test]
    fn test_classes_deduplicated() {
        let mut el = Element::new("div");
        el.add_class("a");
        el.add_class("b");
        el.add_class("a");
        assert_eq!(el.classes(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_matches_selector() {
        let el = ElementBuilder::new("ul").id("list").class("menu").build();

        assert!(el.matches(&Selector::Id("list".into())));
        assert!(el.matches(&Selector::Class("menu".into())));
        assert!(el.matches(&Selector::Tag("ul".into())));

        assert!(!el.matches(&Selector::Id("other".into())));
        assert!(!el.matches(&Selector::Class("nav".into())));
        assert!(!el.matches(&Selector::Tag("ol".into())));
    }

    #[test]
    fn test_builder_text() {
        let el = ElementBuilder::new("li").text("   padded   ").build();
        assert_eq!(el.text(), Some("   padded   "));
    }
}
