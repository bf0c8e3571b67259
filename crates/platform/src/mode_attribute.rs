//! Document presentation-attribute contract.
//!
//! Styling consumers read a single `dark` attribute on the document element;
//! the theme store is its only writer.

use std::cell::Cell;

/// Host surface carrying the document-level dark-mode attribute.
pub trait ModeAttribute {
    /// Sets or removes the dark attribute.
    fn set_dark(&self, dark: bool);

    /// Returns whether the dark attribute is currently present.
    fn is_dark(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
/// Attribute target that ignores writes, for unsupported targets.
pub struct NoopModeAttribute;

impl ModeAttribute for NoopModeAttribute {
    fn set_dark(&self, _dark: bool) {}

    fn is_dark(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
/// In-memory attribute target for native tests.
pub struct MemoryModeAttribute {
    dark: Cell<bool>,
}

impl ModeAttribute for MemoryModeAttribute {
    fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
    }

    fn is_dark(&self) -> bool {
        self.dark.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_attribute_tracks_last_write() {
        let attribute = MemoryModeAttribute::default();
        assert!(!attribute.is_dark());
        attribute.set_dark(true);
        assert!(attribute.is_dark());
        attribute.set_dark(false);
        assert!(!attribute.is_dark());
    }
}
