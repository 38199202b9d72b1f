//! Lumen DOM: element-tree event-handling utilities
//!
//! This crate bundles a minimal in-process document model with a synchronous
//! event layer and three ready-made utilities on top of it:
//!
//! - [`handlers::register_click_logger`]: log a fixed message on every click
//!   of an element located by id
//! - [`handlers::register_mouse_tracker`]: log pointer coordinates on every
//!   document-level move
//! - [`handlers::register_list_delegator`]: one listener on a list container
//!   that logs the text of whichever direct `li` child a click originated on
//!
//! All three treat an absent target as a silent no-op, never an error.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lumen_dom::handlers::{register_click_logger, register_list_delegator};
//! use lumen_dom::page::Page;
//! use lumen_dom::sink::MemorySink;
//! use lumen_dom_tree::ElementBuilder;
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut page = Page::with_sink(sink.clone());
//!
//! // Build: <body><ul id="menu"><li>Open</li></ul></body>
//! let root = page.document().root();
//! let menu = page
//!     .document_mut()
//!     .create_element_with(ElementBuilder::new("ul").id("menu"));
//! page.document_mut().append_child(root, menu).unwrap();
//! let open = page
//!     .document_mut()
//!     .create_element_with(ElementBuilder::new("li").text("Open"));
//! page.document_mut().append_child(menu, open).unwrap();
//!
//! register_list_delegator(&mut page, "#menu");
//! register_click_logger(&mut page, Some("missing"), "never fires");
//!
//! page.click(open);
//! assert_eq!(sink.messages(), ["Item clicked: Open"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

pub use lumen_dom_core as core;
pub use lumen_dom_events as events;
pub use lumen_dom_tree as tree;

pub mod handlers;
pub mod page;
pub mod sink;

pub mod prelude {
    //! Prelude module for convenient imports.

    pub use lumen_dom_core::{ListenerId, Point};
    pub use lumen_dom_events::{
        Event, EventResult, EventRouter, EventType, Modifiers, MouseButton, MouseData,
        RouterConfig,
    };
    pub use lumen_dom_tree::{Document, Element, ElementBuilder, ElementKey, Selector};

    pub use crate::handlers::{
        register_click_logger, register_list_delegator, register_mouse_tracker,
    };
    pub use crate::page::Page;
    pub use crate::sink::{ConsoleSink, LogSink, MemorySink, NoopSink};
}
