#![forbid(unsafe_code)]

//! The style application seam.
//!
//! [`StyleSurface`] is the narrow interface the applier writes through: one
//! scoped style property per token, a light/dark marker, and a pair of hooks
//! that suspend cross-fade transitions for the duration of a switch so color
//! changes land instantly. The applier is fully testable against
//! [`MemorySurface`].

use std::collections::HashMap;

/// Root presentation scope the applier writes style properties to.
pub trait StyleSurface {
    /// Set one scoped style property, e.g. `--color-primary: #0ea5e9`.
    fn set_property(&mut self, name: &str, value: &str);

    /// Remove a scoped style property.
    fn remove_property(&mut self, name: &str);

    /// Toggle the marker that consumer styles key dark-mode rules off.
    fn set_dark_marker(&mut self, dark: bool);

    /// Disable transition styling before a batch of property writes.
    fn suspend_transitions(&mut self);

    /// Re-enable transition styling. Called on the deferred finish step,
    /// never mid-switch.
    fn resume_transitions(&mut self);
}

/// In-memory surface recording every write. Used in tests and headless
/// hosts.
#[derive(Debug, Default)]
pub struct MemorySurface {
    properties: HashMap<String, String>,
    dark_marker: bool,
    transitions_suspended: bool,
    property_writes: usize,
    resume_count: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// All properties currently set.
    #[must_use]
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Whether the dark marker is set.
    #[must_use]
    pub fn dark_marker(&self) -> bool {
        self.dark_marker
    }

    /// Whether transitions are currently suspended.
    #[must_use]
    pub fn transitions_suspended(&self) -> bool {
        self.transitions_suspended
    }

    /// Total `set_property` calls since construction.
    #[must_use]
    pub fn property_writes(&self) -> usize {
        self.property_writes
    }

    /// Total `resume_transitions` calls since construction.
    #[must_use]
    pub fn resume_count(&self) -> usize {
        self.resume_count
    }
}

impl StyleSurface for MemorySurface {
    fn set_property(&mut self, name: &str, value: &str) {
        self.property_writes += 1;
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }

    fn set_dark_marker(&mut self, dark: bool) {
        self.dark_marker = dark;
    }

    fn suspend_transitions(&mut self) {
        self.transitions_suspended = true;
    }

    fn resume_transitions(&mut self) {
        self.transitions_suspended = false;
        self.resume_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_properties_and_counts_writes() {
        let mut surface = MemorySurface::new();
        surface.set_property("--color-primary", "#0ea5e9");
        surface.set_property("--color-primary", "#0284c7");
        assert_eq!(surface.get("--color-primary"), Some("#0284c7"));
        assert_eq!(surface.property_writes(), 2);

        surface.remove_property("--color-primary");
        assert_eq!(surface.get("--color-primary"), None);
    }

    #[test]
    fn transition_hooks_toggle_and_count() {
        let mut surface = MemorySurface::new();
        surface.suspend_transitions();
        assert!(surface.transitions_suspended());
        surface.resume_transitions();
        assert!(!surface.transitions_suspended());
        assert_eq!(surface.resume_count(), 1);
    }
}
