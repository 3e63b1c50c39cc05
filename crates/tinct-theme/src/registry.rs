#![forbid(unsafe_code)]

//! Named theme store.
//!
//! Built-in themes are seeded once and can never be overwritten; generated
//! themes may be added or replaced by id. Listing is stable in insertion
//! order. Registration is atomic: a rejected register leaves the registry
//! exactly as it was.

use std::{error, fmt};

use ahash::AHashMap;

use crate::theme::Theme;

struct Entry {
    theme: Theme,
    built_in: bool,
}

/// Theme registration was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The id belongs to a built-in theme, which is immutable.
    DuplicateBuiltin { id: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateBuiltin { id } => {
                write!(f, "theme id `{id}` belongs to an immutable built-in theme")
            }
        }
    }
}

impl error::Error for RegistryError {}

/// Id-addressed theme store with immutable built-ins.
#[derive(Default)]
pub struct ThemeRegistry {
    entries: AHashMap<String, Entry>,
    // Insertion order for stable listing.
    order: Vec<String>,
}

impl ThemeRegistry {
    /// An empty registry with no built-ins. Mostly useful in tests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the built-in theme set.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for theme in crate::builtin::all() {
            registry.insert(theme, true);
        }
        registry
    }

    /// Register or replace a generated theme.
    ///
    /// Replacing keeps the original position in [`ThemeRegistry::list`].
    /// Colliding with a built-in id fails and changes nothing.
    pub fn register(&mut self, theme: Theme) -> Result<(), RegistryError> {
        if let Some(existing) = self.entries.get(&theme.id)
            && existing.built_in
        {
            return Err(RegistryError::DuplicateBuiltin {
                id: theme.id.clone(),
            });
        }
        tracing::debug!(id = %theme.id, "registering theme");
        self.insert(theme, false);
        Ok(())
    }

    fn insert(&mut self, theme: Theme, built_in: bool) {
        let id = theme.id.clone();
        if self.entries.insert(id.clone(), Entry { theme, built_in }).is_none() {
            self.order.push(id);
        }
    }

    /// Look up a theme by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.entries.get(id).map(|entry| &entry.theme)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Whether `id` names an immutable built-in.
    #[must_use]
    pub fn is_builtin(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|entry| entry.built_in)
    }

    /// All themes in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<&Theme> {
        self.order
            .iter()
            .filter_map(|id| self.get(id.as_str()))
            .collect()
    }

    /// Number of registered themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{BrandInput, assemble_theme};
    use crate::builtin;

    fn generated(id: &str) -> Theme {
        assemble_theme(id, &BrandInput::from_primary("#0EA5E9"), None)
            .unwrap()
            .theme
    }

    #[test]
    fn builtins_are_seeded_and_marked() {
        let registry = ThemeRegistry::with_builtins();
        assert!(!registry.is_empty());
        assert!(registry.contains(builtin::DEFAULT_THEME_ID));
        assert!(registry.is_builtin(builtin::DEFAULT_THEME_ID));
    }

    #[test]
    fn register_and_get() {
        let mut registry = ThemeRegistry::with_builtins();
        registry.register(generated("brand")).unwrap();
        assert_eq!(registry.get("brand").unwrap().id, "brand");
        assert!(!registry.is_builtin("brand"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn builtin_collision_is_rejected_and_atomic() {
        let mut registry = ThemeRegistry::with_builtins();
        let before: Vec<String> = registry.list().iter().map(|t| t.id.clone()).collect();
        let original_name = registry.get(builtin::DEFAULT_THEME_ID).unwrap().name.clone();

        let err = registry
            .register(generated(builtin::DEFAULT_THEME_ID))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateBuiltin {
                id: builtin::DEFAULT_THEME_ID.to_string()
            }
        );

        let after: Vec<String> = registry.list().iter().map(|t| t.id.clone()).collect();
        assert_eq!(after, before);
        assert_eq!(
            registry.get(builtin::DEFAULT_THEME_ID).unwrap().name,
            original_name
        );
    }

    #[test]
    fn generated_themes_may_be_replaced_in_place() {
        let mut registry = ThemeRegistry::new();
        registry.register(generated("a")).unwrap();
        registry.register(generated("b")).unwrap();

        let mut replacement = generated("a");
        replacement.name = "Replaced".to_string();
        registry.register(replacement).unwrap();

        assert_eq!(registry.len(), 2);
        let ids: Vec<&str> = registry.list().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(registry.get("a").unwrap().name, "Replaced");
    }

    #[test]
    fn list_is_insertion_ordered() {
        let mut registry = ThemeRegistry::new();
        for id in ["zeta", "alpha", "mid"] {
            registry.register(generated(id)).unwrap();
        }
        let ids: Vec<&str> = registry.list().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }
}
