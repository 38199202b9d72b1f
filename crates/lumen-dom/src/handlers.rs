//! The event-handling utilities: click logging, pointer tracking, and list
//! delegation.
//!
//! All three follow the same failure policy: an absent target (missing id,
//! `None` id, unresolvable or invalid selector) is a silent no-op, never an
//! error. Registration returns the [`ListenerId`] when a listener was
//! actually installed.

use std::sync::Arc;

use lumen_dom_core::ListenerId;
use lumen_dom_events::{EventResult, EventType};

use crate::page::Page;

/// Registers a click listener on the element with the given id that emits
/// `message` to the page's sink on every click.
///
/// A `None` id, or an id that resolves to no element, does nothing and
/// returns `None`. Every click produces exactly one emission, in call order;
/// there is no debouncing. Registering twice on the same element installs
/// two independent listeners.
///
/// # Example
///
/// ```
/// use lumen_dom::handlers::register_click_logger;
/// use lumen_dom::page::Page;
/// use lumen_dom_tree::ElementBuilder;
///
/// let mut page = Page::new();
/// let button = page
///     .document_mut()
///     .create_element_with(ElementBuilder::new("button").id("save"));
/// let root = page.document().root();
/// page.document_mut().append_child(root, button).unwrap();
///
/// let id = register_click_logger(&mut page, Some("save"), "Saved!");
/// assert!(id.is_some());
/// page.click(button);
/// ```
pub fn register_click_logger(
    page: &mut Page,
    id: Option<&str>,
    message: impl Into<String>,
) -> Option<ListenerId> {
    let element = page.document().get_element_by_id(id?)?;
    let sink = Arc::clone(page.sink());
    let message = message.into();
    Some(page.router_mut().on(element, EventType::Click, move |_doc, _event| {
        sink.emit(&message);
        EventResult::Ignored
    }))
}

/// Registers a document-level listener that emits the pointer position on
/// every move.
///
/// Each move event produces exactly one emission of the form
/// `"Mouse X: {x}, Mouse Y: {y}"`, with the event's client coordinates
/// passed through verbatim — zero and negative values included. There is no
/// throttling.
pub fn register_mouse_tracker(page: &mut Page) -> ListenerId {
    let sink = Arc::clone(page.sink());
    page.router_mut()
        .on_document(EventType::PointerMove, move |_doc, event| {
            let position = event.position();
            sink.emit(&format!("Mouse X: {}, Mouse Y: {}", position.x, position.y));
            EventResult::Ignored
        })
}

/// Registers one click listener on the container matched by `selector` that
/// emits the text of whichever direct `li` child the click originated on.
///
/// An unresolvable (or unparsable) selector does nothing and returns `None`.
/// On each click the listener inspects the event's origin target: a direct
/// `li` child of the container emits `"Item clicked: {text}"` with the
/// item's text content trimmed of surrounding whitespace; clicks on the
/// container itself or on any other descendant emit nothing.
///
/// One listener serves all current and future direct children — items added
/// after registration are handled without further wiring.
pub fn register_list_delegator(page: &mut Page, selector: &str) -> Option<ListenerId> {
    let container = page.document().select(selector)?;
    let sink = Arc::clone(page.sink());
    Some(page.router_mut().on(container, EventType::Click, move |doc, event| {
        let Some(target) = event.target() else {
            return EventResult::Ignored;
        };
        let is_item = doc.get(target).is_some_and(|el| el.tag() == "li");
        if is_item && doc.is_direct_child(container, target) {
            let text = doc.text_content(target);
            sink.emit(&format!("Item clicked: {}", text.trim()));
        }
        EventResult::Ignored
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lumen_dom_tree::{ElementBuilder, ElementKey};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sink::MemorySink;

    fn test_page() -> (Page, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let page = Page::with_sink(sink.clone());
        (page, sink)
    }

    fn add_button(page: &mut Page, id: &str) -> ElementKey {
        let root = page.document().root();
        let doc = page.document_mut();
        let button = doc.create_element_with(ElementBuilder::new("button").id(id));
        doc.append_child(root, button).unwrap();
        button
    }

    /// Builds a list container with the given items, returning the container
    /// and item keys.
    fn add_list(
        page: &mut Page,
        builder: ElementBuilder,
        items: &[&str],
    ) -> (ElementKey, Vec<ElementKey>) {
        let root = page.document().root();
        let doc = page.document_mut();
        let container = doc.create_element_with(builder);
        doc.append_child(root, container).unwrap();
        let keys = items
            .iter()
            .map(|item| {
                let li = doc.create_element_with(ElementBuilder::new("li").text(*item));
                doc.append_child(container, li).unwrap();
                li
            })
            .collect();
        (container, keys)
    }

    #[test]
    fn test_click_logger_emits_message_on_click() {
        let (mut page, sink) = test_page();
        let button = add_button(&mut page, "testButton");

        let id = register_click_logger(&mut page, Some("testButton"), "Button clicked!");
        assert!(id.is_some());

        page.click(button);
        assert_eq!(sink.messages(), ["Button clicked!"]);
    }

    #[test]
    fn test_click_logger_emits_once_per_click() {
        let (mut page, sink) = test_page();
        let button = add_button(&mut page, "btn");

        register_click_logger(&mut page, Some("btn"), "Test message");
        page.click(button);
        page.click(button);

        assert_eq!(sink.messages(), ["Test message", "Test message"]);
    }

    #[test]
    fn test_click_logger_with_multiple_buttons() {
        let (mut page, sink) = test_page();
        let btn1 = add_button(&mut page, "btn1");
        let btn2 = add_button(&mut page, "btn2");

        register_click_logger(&mut page, Some("btn1"), "Message 1");
        register_click_logger(&mut page, Some("btn2"), "Message 2");
        page.click(btn1);
        page.click(btn2);

        assert_eq!(sink.messages(), ["Message 1", "Message 2"]);
    }

    #[test]
    fn test_click_logger_missing_element_is_noop() {
        let (mut page, sink) = test_page();

        let id = register_click_logger(&mut page, Some("nonExistentButton"), "Message");
        assert_eq!(id, None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_click_logger_none_id_is_noop() {
        let (mut page, sink) = test_page();

        let id = register_click_logger(&mut page, None, "Message");
        assert_eq!(id, None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_click_logger_empty_message() {
        let (mut page, sink) = test_page();
        let button = add_button(&mut page, "btn");

        register_click_logger(&mut page, Some("btn"), "");
        page.click(button);

        assert_eq!(sink.messages(), [""]);
    }

    #[test]
    fn test_click_logger_double_registration_is_two_listeners() {
        let (mut page, sink) = test_page();
        let button = add_button(&mut page, "btn");

        let first = register_click_logger(&mut page, Some("btn"), "hello");
        let second = register_click_logger(&mut page, Some("btn"), "hello");
        assert_ne!(first, second);

        page.click(button);
        assert_eq!(sink.messages(), ["hello", "hello"]);
    }

    #[test]
    fn test_mouse_tracker_formats_position() {
        let (mut page, sink) = test_page();

        register_mouse_tracker(&mut page);
        page.pointer_move(100, 200);

        assert_eq!(sink.messages(), ["Mouse X: 100, Mouse Y: 200"]);
    }

    #[test]
    fn test_mouse_tracker_tracks_multiple_movements() {
        let (mut page, sink) = test_page();

        register_mouse_tracker(&mut page);
        page.pointer_move(10, 20);
        page.pointer_move(50, 60);

        assert_eq!(
            sink.messages(),
            ["Mouse X: 10, Mouse Y: 20", "Mouse X: 50, Mouse Y: 60"]
        );
    }

    #[test]
    fn test_mouse_tracker_zero_coordinates() {
        let (mut page, sink) = test_page();

        register_mouse_tracker(&mut page);
        page.pointer_move(0, 0);

        assert_eq!(sink.messages(), ["Mouse X: 0, Mouse Y: 0"]);
    }

    #[test]
    fn test_mouse_tracker_negative_coordinates() {
        let (mut page, sink) = test_page();

        register_mouse_tracker(&mut page);
        page.pointer_move(-10, -20);

        assert_eq!(sink.messages(), ["Mouse X: -10, Mouse Y: -20"]);
    }

    #[test]
    fn test_delegator_emits_item_text() {
        let (mut page, sink) = test_page();
        let (_, items) = add_list(
            &mut page,
            ElementBuilder::new("ul").id("testList"),
            &["Item 1", "Item 2"],
        );

        let id = register_list_delegator(&mut page, "#testList");
        assert!(id.is_some());

        page.click(items[0]);
        assert_eq!(sink.messages(), ["Item clicked: Item 1"]);
    }

    #[test]
    fn test_delegator_handles_multiple_items() {
        let (mut page, sink) = test_page();
        let (_, items) = add_list(
            &mut page,
            ElementBuilder::new("ul").class("myList"),
            &["First", "Second"],
        );

        register_list_delegator(&mut page, ".myList");
        page.click(items[0]);
        page.click(items[1]);

        assert_eq!(
            sink.messages(),
            ["Item clicked: First", "Item clicked: Second"]
        );
    }

    #[test]
    fn test_delegator_works_with_ordered_lists() {
        let (mut page, sink) = test_page();
        let (_, items) = add_list(
            &mut page,
            ElementBuilder::new("ol").id("orderedList"),
            &["Step 1"],
        );

        register_list_delegator(&mut page, "#orderedList");
        page.click(items[0]);

        assert_eq!(sink.messages(), ["Item clicked: Step 1"]);
    }

    #[test]
    fn test_delegator_trims_whitespace() {
        let (mut page, sink) = test_page();
        let (_, items) = add_list(
            &mut page,
            ElementBuilder::new("ul").id("list"),
            &["   Trimmed   "],
        );

        register_list_delegator(&mut page, "#list");
        page.click(items[0]);

        assert_eq!(sink.messages(), ["Item clicked: Trimmed"]);
    }

    #[test]
    fn test_delegator_ignores_container_clicks() {
        let (mut page, sink) = test_page();
        let (container, _) = add_list(
            &mut page,
            ElementBuilder::new("ul").id("testList"),
            &["Item 1"],
        );

        register_list_delegator(&mut page, "#testList");
        page.click(container);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_delegator_empty_item_text() {
        let (mut page, sink) = test_page();
        let (_, items) = add_list(
            &mut page,
            ElementBuilder::new("ul").id("list"),
            &[""],
        );

        register_list_delegator(&mut page, "#list");
        page.click(items[0]);

        assert_eq!(sink.messages(), ["Item clicked: "]);
    }

    #[test]
    fn test_delegator_missing_container_is_noop() {
        let (mut page, sink) = test_page();

        assert_eq!(register_list_delegator(&mut page, "#missing"), None);
        assert_eq!(register_list_delegator(&mut page, "ul > li"), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_delegator_ignores_non_item_descendants() {
        let (mut page, sink) = test_page();
        let (container, _) = add_list(
            &mut page,
            ElementBuilder::new("ul").id("list"),
            &["Item 1"],
        );

        // A non-li child of the container, and an li nested one level deeper.
        let doc = page.document_mut();
        let divider = doc.create_element_with(ElementBuilder::new("div").text("divider"));
        doc.append_child(container, divider).unwrap();
        let nested = doc.create_element_with(ElementBuilder::new("li").text("nested"));
        doc.append_child(divider, nested).unwrap();

        register_list_delegator(&mut page, "#list");
        page.click(divider);
        page.click(nested);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_delegator_handles_items_added_after_registration() {
        let (mut page, sink) = test_page();
        let (container, _) = add_list(
            &mut page,
            ElementBuilder::new("ul").id("list"),
            &["existing"],
        );

        register_list_delegator(&mut page, "#list");

        let doc = page.document_mut();
        let late = doc.create_element_with(ElementBuilder::new("li").text("late arrival"));
        doc.append_child(container, late).unwrap();

        page.click(late);
        assert_eq!(sink.messages(), ["Item clicked: late arrival"]);
    }
}
