//! Identifier types for Lumen DOM.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a registered event listener.
///
/// `ListenerId` provides a lightweight, copy-able identifier that can be used
/// to tell listeners apart. Registering twice on the same element yields two
/// distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Creates a new unique listener ID.
    ///
    /// Each call generates a new ID that is guaranteed to be unique
    /// within the lifetime of the program.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the underlying u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Creates a `ListenerId` from a raw u64 value.
    ///
    /// This should only be used for testing purposes; arbitrary values may
    /// collide with ids handed out by [`ListenerId::new`].
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        let id1 = ListenerId::new();
        let id2 = ListenerId::new();
        let id3 = ListenerId::new();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_from_raw() {
        let id = ListenerId::from_raw(42);
        assert_eq!(id.as_u64(), 42);
    }
}
