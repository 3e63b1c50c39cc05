#![forbid(unsafe_code)]

//! Theme modes and the system color-scheme seam.

use serde::{Deserialize, Serialize};

/// The user-selected theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl ThemeMode {
    /// The persisted string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Whether this mode renders dark given the current system scheme.
    #[must_use]
    pub const fn is_dark(self, system: SystemScheme) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(system, SystemScheme::Dark),
        }
    }
}

/// The operating system's reported color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemScheme {
    #[default]
    Light,
    Dark,
}

/// Reports the current system color scheme.
///
/// Implementations wrap whatever preference channel the host exposes. The
/// applier reads the scheme once at init; later changes are delivered as
/// events via [`crate::ThemeApplier::system_scheme_changed`].
pub trait SchemeSource {
    /// The scheme at the time of the call.
    fn current(&self) -> SystemScheme;
}

/// A source that always reports one fixed scheme. For tests and hosts with
/// no preference channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScheme(pub SystemScheme);

impl SchemeSource for FixedScheme {
    fn current(&self) -> SystemScheme {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_strings_are_stable() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
        assert_eq!(ThemeMode::System.as_str(), "system");
    }

    #[test]
    fn system_mode_follows_scheme() {
        assert!(!ThemeMode::System.is_dark(SystemScheme::Light));
        assert!(ThemeMode::System.is_dark(SystemScheme::Dark));
        assert!(ThemeMode::Dark.is_dark(SystemScheme::Light));
        assert!(!ThemeMode::Light.is_dark(SystemScheme::Dark));
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::System).unwrap(), "\"system\"");
        let back: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, ThemeMode::Dark);
    }
}
