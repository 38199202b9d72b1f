//! Element tree for `Lumen DOM`.
//!
//! This crate provides the document model the event layer runs against: a
//! tree of elements held in a slotmap arena, with tag/id/class attributes,
//! direct text content, and document-order queries.
//!
//! # Overview
//!
//! - [`Document`]: the arena that owns all elements and the structural
//!   operations between them
//! - [`Element`]: a single node with tag, attributes, and text
//! - [`ElementBuilder`]: fluent construction of elements
//! - [`Selector`]: the simple selector forms (`#id`, `.class`, tag) used to
//!   locate elements
//!
//! # Example
//!
//! ```rust
//! use lumen_dom_tree::{Document, ElementBuilder};
//!
//! let mut doc = Document::new();
//! let list = doc.create_element_with(ElementBuilder::new("ul").id("items"));
//! doc.append_child(doc.root(), list).unwrap();
//!
//! let item = doc.create_element_with(ElementBuilder::new("li").text("First"));
//! doc.append_child(list, item).unwrap();
//!
//! assert_eq!(doc.get_element_by_id("items"), Some(list));
//! assert_eq!(doc.text_content(item), "First");
//! ```
//!
//! # Document order
//!
//! Queries ([`Document::get_element_by_id`], [`Document::query_selector`])
//! traverse depth-first from the root and return the first match, so sibling
//! order is observable. Detached elements (created but never appended) are
//! not reachable from the root and therefore never match.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

mod node;
mod selector;
mod tree;

// Re-export all public types
pub use node::{Element, ElementBuilder};
pub use selector::{Selector, SelectorError};
pub use tree::{Document, ElementKey, TreeError, TreeResult};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use lumen_dom_tree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::node::{Element, ElementBuilder};
    pub use crate::selector::{Selector, SelectorError};
    pub use crate::tree::{Document, ElementKey, TreeError, TreeResult};
}
