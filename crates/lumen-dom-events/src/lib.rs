//! Event types and dispatch for `Lumen DOM`.
//!
//! This crate provides the event layer that runs against the
//! [`lumen_dom_tree`] document model:
//!
//! - **Event types**: mouse buttons, modifier flags, and the [`Event`]
//!   envelope carrying a click or pointer-move payload and its origin target.
//!
//! - **Listener registry**: the [`EventRouter`] holds per-element and
//!   document-level listener lists. Registration appends — registering twice
//!   on the same element yields two independent listeners that fire in
//!   registration order.
//!
//! - **Dispatch**: synchronous and run-to-completion. An event fires on its
//!   target, bubbles through the target's ancestors, then reaches
//!   document-level listeners. A handler returning
//!   [`EventResult::Handled`] stops propagation to the next tree level.
//!
//! # Quick start
//!
//! ```
//! use lumen_dom_events::{EventResult, EventRouter, EventType};
//! use lumen_dom_tree::Document;
//!
//! let mut doc = Document::new();
//! let button = doc.create_element("button");
//! doc.append_child(doc.root(), button).unwrap();
//!
//! let mut router = EventRouter::new();
//! router.on(button, EventType::Click, |_doc, _event| {
//!     // react to the click
//!     EventResult::Ignored
//! });
//!
//! router.dispatch_click(&doc, button);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod event;
pub mod router;

// Re-export commonly used types at the crate root for convenience
pub use event::{Event, EventKind, EventResult, EventType, Modifiers, MouseButton, MouseData};
pub use router::{EventRouter, Handler, RouterConfig};
