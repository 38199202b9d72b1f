//! Event types for input handling.
//!
//! This module defines the events delivered to listeners and the result type
//! handlers use to control propagation.

use std::fmt;

use bitflags::bitflags;
use lumen_dom_core::Point;
use lumen_dom_tree::ElementKey;

bitflags! {
    /// Keyboard modifier flags active during a pointer event.
    ///
    /// Multiple modifiers can be combined using bitwise OR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// No modifiers pressed.
        const NONE = 0b0000_0000;
        /// Shift modifier.
        const SHIFT = 0b0000_0001;
        /// Control modifier.
        const CONTROL = 0b0000_0010;
        /// Alt/Option modifier.
        const ALT = 0b0000_0100;
        /// Super/Windows/Command modifier.
        const META = 0b0000_1000;
    }
}

/// Represents a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Left mouse button (primary).
    #[default]
    Left,
    /// Right mouse button (secondary).
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

impl MouseButton {
    /// Converts a button number to a `MouseButton`.
    #[must_use]
    pub fn from_number(n: u8) -> Self {
        match n {
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            _ => MouseButton::Left,
        }
    }

    /// Converts this button to its numeric representation.
    #[must_use]
    pub fn to_number(self) -> u8 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "left"),
            MouseButton::Right => write!(f, "right"),
            MouseButton::Middle => write!(f, "middle"),
        }
    }
}

/// Payload shared by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MouseData {
    /// Client coordinates of the pointer. Zero and negative values pass
    /// through verbatim.
    pub position: Point,
    /// The button involved, if any.
    pub button: MouseButton,
    /// Active keyboard modifiers during the event.
    pub modifiers: Modifiers,
}

impl MouseData {
    /// Creates a payload at the given position with the left button and no
    /// modifiers.
    #[must_use]
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }
    }

    /// Sets the button.
    #[must_use]
    pub const fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Sets the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl fmt::Display for MouseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@({},{})", self.button, self.position.x, self.position.y)
    }
}

/// Names the kind of an event, used to filter listeners at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A click on an element.
    Click,
    /// Pointer movement.
    PointerMove,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Click => write!(f, "click"),
            EventType::PointerMove => write!(f, "pointermove"),
        }
    }
}

/// The kind of an event together with its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A click event.
    Click(MouseData),
    /// A pointer-move event.
    PointerMove(MouseData),
}

/// An event flowing through the dispatcher.
///
/// `target` is the element the event originated on. Document-level synthetic
/// events (pointer moves not tied to an element) carry no target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// The kind of event and its payload.
    pub kind: EventKind,
    /// The originating element, if any.
    pub target: Option<ElementKey>,
}

impl Event {
    /// Creates a click event targeting an element.
    #[must_use]
    pub const fn click(target: ElementKey, data: MouseData) -> Self {
        Self {
            kind: EventKind::Click(data),
            target: Some(target),
        }
    }

    /// Creates a document-level pointer-move event.
    #[must_use]
    pub const fn pointer_move(data: MouseData) -> Self {
        Self {
            kind: EventKind::PointerMove(data),
            target: None,
        }
    }

    /// Returns the event type of this event.
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self.kind {
            EventKind::Click(_) => EventType::Click,
            EventKind::PointerMove(_) => EventType::PointerMove,
        }
    }

    /// Returns the originating element, if any.
    #[must_use]
    pub const fn target(&self) -> Option<ElementKey> {
        self.target
    }

    /// Returns the pointer payload of this event.
    #[must_use]
    pub const fn mouse_data(&self) -> MouseData {
        match self.kind {
            EventKind::Click(data) | EventKind::PointerMove(data) => data,
        }
    }

    /// Returns the client position of this event.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.mouse_data().position
    }

    /// Returns true if this is a click event.
    #[must_use]
    pub const fn is_click(&self) -> bool {
        matches!(self.kind, EventKind::Click(_))
    }

    /// Returns true if this is a pointer-move event.
    #[must_use]
    pub const fn is_pointer_move(&self) -> bool {
        matches!(self.kind, EventKind::PointerMove(_))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.event_type(), self.mouse_data())
    }
}

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, should not propagate further.
    Handled,
    /// Event was not handled, should propagate to the next tree level.
    Ignored,
}

impl EventResult {
    /// Returns true if the event was handled.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }

    /// Returns true if the event was ignored.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Handled
        } else {
            Self::Ignored
        }
    }
}

/// Combines multiple event results (handled if any handled).
impl std::ops::BitOr for EventResult {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        if self.is_handled() || rhs.is_handled() {
            Self::Handled
        } else {
            Self::Ignored
        }
    }
}
