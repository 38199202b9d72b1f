//! Listener registry and synchronous event dispatch.
//!
//! This module provides the [`EventRouter`], which owns all registered
//! listeners and delivers events to them: target first, then the target's
//! ancestors (bubbling), then document-level listeners.

use slotmap::SecondaryMap;
use smallvec::SmallVec;
use tracing::trace;

use lumen_dom_core::{ListenerId, Point};
use lumen_dom_tree::{Document, ElementKey};

use crate::event::{Event, EventResult, EventType, MouseData};

/// A boxed event handler.
///
/// Handlers receive the document (for tree inspection) and the event being
/// dispatched. Returning [`EventResult::Handled`] stops propagation to the
/// next tree level; listeners already queued on the same element still run.
pub type Handler = Box<dyn FnMut(&Document, &Event) -> EventResult>;

/// A registered listener: identity, type filter, and the handler itself.
struct Registered {
    id: ListenerId,
    event_type: EventType,
    handler: Handler,
}

type ListenerList = SmallVec<[Registered; 2]>;

/// Configuration for the event router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Whether element-targeted events bubble through ancestors and on to
    /// document-level listeners. Defaults to true.
    pub bubble: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { bubble: true }
    }
}

impl RouterConfig {
    /// Enables or disables bubbling.
    #[must_use]
    pub fn with_bubble(mut self, enable: bool) -> Self {
        self.bubble = enable;
        self
    }
}

/// Owns listeners and dispatches events to them synchronously.
///
/// Registration appends: registering twice on the same element yields two
/// independent listeners that fire in registration order. Listener removal
/// is not provided; listeners live as long as the router.
pub struct EventRouter {
    /// Per-element listener lists, in registration order.
    element_listeners: SecondaryMap<ElementKey, ListenerList>,
    /// Document-level listeners, in registration order.
    document_listeners: ListenerList,
    /// Dispatch configuration.
    config: RouterConfig,
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRouter {
    /// Creates a new router with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Creates a new router with the specified configuration.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            element_listeners: SecondaryMap::new(),
            document_listeners: ListenerList::new(),
            config,
        }
    }

    /// Registers a listener for an event type on an element.
    ///
    /// The router does not verify that the element is attached to any
    /// document; a listener registered against a key that never receives
    /// events simply never fires.
    pub fn on(
        &mut self,
        element: ElementKey,
        event_type: EventType,
        handler: impl FnMut(&Document, &Event) -> EventResult + 'static,
    ) -> ListenerId {
        let id = ListenerId::new();
        let registered = Registered {
            id,
            event_type,
            handler: Box::new(handler),
        };
        if let Some(list) = self.element_listeners.get_mut(element) {
            list.push(registered);
        } else {
            let mut list = ListenerList::new();
            list.push(registered);
            self.element_listeners.insert(element, list);
        }
        id
    }

    /// Registers a document-level listener for an event type.
    pub fn on_document(
        &mut self,
        event_type: EventType,
        handler: impl FnMut(&Document, &Event) -> EventResult + 'static,
    ) -> ListenerId {
        let id = ListenerId::new();
        self.document_listeners.push(Registered {
            id,
            event_type,
            handler: Box::new(handler),
        });
        id
    }

    /// Returns the number of listeners registered on an element.
    #[must_use]
    pub fn listener_count(&self, element: ElementKey) -> usize {
        self.element_listeners.get(element).map_or(0, SmallVec::len)
    }

    /// Returns the number of document-level listeners.
    #[must_use]
    pub fn document_listener_count(&self) -> usize {
        self.document_listeners.len()
    }

    /// Returns the registered listener ids for an element, in registration
    /// order.
    #[must_use]
    pub fn listener_ids(&self, element: ElementKey) -> Vec<ListenerId> {
        self.element_listeners
            .get(element)
            .map(|list| list.iter().map(|r| r.id).collect())
            .unwrap_or_default()
    }

    /// Dispatches an event.
    ///
    /// Element-targeted events fire on the target's listeners, bubble
    /// through ancestors, then reach document-level listeners. Untargeted
    /// events go straight to document-level listeners. Each listener list
    /// runs in registration order; a [`EventResult::Handled`] return stops
    /// propagation to the next tree level after the current list finishes.
    pub fn dispatch(&mut self, doc: &Document, event: &Event) -> EventResult {
        trace!("dispatching {event}");
        let mut result = EventResult::Ignored;

        if let Some(target) = event.target() {
            let mut path = vec![target];
            if self.config.bubble {
                path.extend(doc.ancestors(target));
            }
            for key in path {
                if let Some(list) = self.element_listeners.get_mut(key) {
                    result = result | fire_list(list, doc, event);
                }
                if result.is_handled() {
                    return result;
                }
            }
            if !self.config.bubble {
                return result;
            }
        }

        result | fire_list(&mut self.document_listeners, doc, event)
    }

    /// Dispatches a click on an element at the origin.
    ///
    /// Synthetic clicks carry position (0, 0), matching a click produced
    /// without real pointer coordinates.
    pub fn dispatch_click(&mut self, doc: &Document, target: ElementKey) -> EventResult {
        self.dispatch_click_at(doc, target, Point::ZERO)
    }

    /// Dispatches a click on an element at the given client position.
    pub fn dispatch_click_at(
        &mut self,
        doc: &Document,
        target: ElementKey,
        position: Point,
    ) -> EventResult {
        let data = MouseData {
            position,
            ..MouseData::default()
        };
        self.dispatch(doc, &Event::click(target, data))
    }

    /// Dispatches a document-level pointer move at the given client
    /// coordinates.
    pub fn dispatch_pointer_move(&mut self, doc: &Document, x: i32, y: i32) -> EventResult {
        self.dispatch(doc, &Event::pointer_move(MouseData::at(x, y)))
    }
}

/// Fires every listener in a list that matches the event's type, in
/// registration order. The whole list runs even if a handler returns
/// `Handled`; the result is the OR of all outcomes.
fn fire_list(list: &mut ListenerList, doc: &Document, event: &Event) -> EventResult {
    let event_type = event.event_type();
    let mut result = EventResult::Ignored;
    for listener in list.iter_mut() {
        if listener.event_type == event_type {
            result = result | (listener.handler)(doc, event);
        }
    }
    result
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("element_lists", &self.element_listeners.len())
            .field("document_listeners", &self.document_listeners.len())
            .field("config", &self.config)
            .finish()
    }
}
