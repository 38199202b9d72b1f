//! The `Page` wrapper.
//!
//! A [`Page`] bundles the three collaborators the utilities need — a
//! [`Document`], an [`EventRouter`], and a shared [`LogSink`] — and exposes
//! synthetic event entry points that stand in for the host environment's
//! event loop.

use std::sync::Arc;

use lumen_dom_core::Point;
use lumen_dom_events::{EventResult, EventRouter};
use lumen_dom_tree::{Document, ElementKey};

use crate::sink::{ConsoleSink, LogSink};

/// A document plus its event router and log sink.
pub struct Page {
    document: Document,
    router: EventRouter,
    sink: Arc<dyn LogSink>,
}

impl Page {
    /// Creates an empty page that logs through [`ConsoleSink`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(ConsoleSink))
    }

    /// Creates an empty page with the given sink.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            document: Document::new(),
            router: EventRouter::new(),
            sink,
        }
    }

    /// Returns the document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the document mutably, for building and mutating the tree.
    #[must_use]
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Returns the event router.
    #[must_use]
    pub fn router(&self) -> &EventRouter {
        &self.router
    }

    /// Returns the event router mutably, for registering listeners.
    #[must_use]
    pub fn router_mut(&mut self) -> &mut EventRouter {
        &mut self.router
    }

    /// Returns the shared log sink.
    #[must_use]
    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Synthesizes a click on an element at the origin.
    pub fn click(&mut self, target: ElementKey) -> EventResult {
        self.router.dispatch_click(&self.document, target)
    }

    /// Synthesizes a click on an element at the given client position.
    pub fn click_at(&mut self, target: ElementKey, position: Point) -> EventResult {
        self.router.dispatch_click_at(&self.document, target, position)
    }

    /// Synthesizes a document-level pointer move.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> EventResult {
        self.router.dispatch_pointer_move(&self.document, x, y)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("document", &self.document)
            .field("router", &self.router)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lumen_dom_events::EventType;

    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_page_routes_events_through_its_document() {
        let sink = Arc::new(MemorySink::new());
        let mut page = Page::with_sink(sink.clone());

        let button = page.document_mut().create_element("button");
        let root = page.document().root();
        page.document_mut().append_child(root, button).unwrap();

        let emitter = Arc::clone(page.sink());
        page.router_mut().on(button, EventType::Click, move |_doc, _event| {
            emitter.emit("seen");
            EventResult::Ignored
        });

        page.click(button);
        assert_eq!(sink.messages(), ["seen"]);
    }

    #[test]
    fn test_pointer_move_reaches_document_listeners() {
        let sink = Arc::new(MemorySink::new());
        let mut page = Page::with_sink(sink.clone());

        let emitter = Arc::clone(page.sink());
        page.router_mut()
            .on_document(EventType::PointerMove, move |_doc, event| {
                let p = event.position();
                emitter.emit(&format!("{},{}", p.x, p.y));
                EventResult::Ignored
            });

        page.pointer_move(4, -2);
        assert_eq!(sink.messages(), ["4,-2"]);
    }
}
