#![forbid(unsafe_code)]

//! The runtime theme applier.
//!
//! One applier owns the active theme state for the whole process: the
//! current theme id, the selected mode, and the last observed system
//! scheme. It moves through `Uninitialized -> Idle <-> Transitioning` and
//! is the only writer of the style surface.
//!
//! A switch happens in two steps. [`ThemeApplier::set_theme`] and
//! [`ThemeApplier::set_mode`] suspend transitions, write every token, and
//! return a [`Generation`] token; the host calls
//! [`ThemeApplier::finish_transition`] with that token on the next paint
//! cycle to re-enable transition styling. Rapid repeated switches each bump
//! the generation, so only the newest token finishes; superseded ones are
//! no-ops, never rollbacks.

use std::sync::Arc;
use std::{error, fmt};

use arc_swap::ArcSwapOption;
use tinct_theme::{ResolvedTheme, ThemeRegistry, builtin};

use crate::mode::{SchemeSource, SystemScheme, ThemeMode};
use crate::persist::{PreferenceStore, StoredPreference};
use crate::surface::StyleSurface;

/// Opaque token identifying one theme switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// An applier method was called in the wrong state or with a bad id.
///
/// None of these leave the surface half-applied: they fire before any
/// property write, so the prior theme stays fully active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// `init` has not been called yet.
    NotInitialized,
    /// `init` was called twice.
    AlreadyInitialized,
    /// The applier was shut down.
    ShutDown,
    /// The requested theme id is not in the registry.
    UnknownTheme { id: String },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::NotInitialized => write!(f, "theme applier is not initialized"),
            ApplyError::AlreadyInitialized => write!(f, "theme applier is already initialized"),
            ApplyError::ShutDown => write!(f, "theme applier was shut down"),
            ApplyError::UnknownTheme { id } => write!(f, "unknown theme id `{id}`"),
        }
    }
}

impl error::Error for ApplyError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Idle,
    Transitioning,
    ShutDown,
}

/// Owns and applies the active theme state.
pub struct ThemeApplier<S, P> {
    registry: ThemeRegistry,
    surface: S,
    store: P,
    phase: Phase,
    generation: u64,
    theme_id: String,
    mode: ThemeMode,
    system_scheme: SystemScheme,
    applied: ArcSwapOption<ResolvedTheme>,
}

impl<S: StyleSurface, P: PreferenceStore> ThemeApplier<S, P> {
    /// An uninitialized applier. Call [`ThemeApplier::init`] before anything
    /// else.
    #[must_use]
    pub fn new(registry: ThemeRegistry, surface: S, store: P) -> Self {
        Self {
            registry,
            surface,
            store,
            phase: Phase::Uninitialized,
            generation: 0,
            theme_id: builtin::DEFAULT_THEME_ID.to_string(),
            mode: ThemeMode::System,
            system_scheme: SystemScheme::Light,
            applied: ArcSwapOption::empty(),
        }
    }

    /// Load the persisted preference (or defaults), read the current system
    /// scheme, and apply the initial theme.
    ///
    /// A missing, unreadable, or stale preference record falls back to the
    /// default built-in with mode `system`; store failures are logged, not
    /// propagated.
    pub fn init(&mut self, source: &dyn SchemeSource) -> Result<Generation, ApplyError> {
        match self.phase {
            Phase::Uninitialized => {}
            Phase::ShutDown => return Err(ApplyError::ShutDown),
            Phase::Idle | Phase::Transitioning => return Err(ApplyError::AlreadyInitialized),
        }

        match self.store.load() {
            Ok(Some(stored)) if self.registry.contains(&stored.theme_id) => {
                self.theme_id = stored.theme_id;
                self.mode = stored.mode;
            }
            Ok(Some(stored)) => {
                tracing::warn!(
                    theme_id = %stored.theme_id,
                    "persisted theme no longer registered, using default"
                );
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "failed to load theme preference, using defaults");
            }
        }

        self.system_scheme = source.current();
        self.phase = Phase::Idle;
        // Initial application persists nothing: the stored record (or its
        // absence) already describes this state.
        self.apply_current()
    }

    /// Switch to the theme named `id` and return the switch's generation
    /// token.
    pub fn set_theme(&mut self, id: &str) -> Result<Generation, ApplyError> {
        self.check_ready()?;
        if !self.registry.contains(id) {
            return Err(ApplyError::UnknownTheme { id: id.to_string() });
        }
        let unchanged = self.theme_id == id;
        self.theme_id = id.to_string();
        let generation = self.apply_current()?;
        if !unchanged {
            self.persist();
        }
        Ok(generation)
    }

    /// Switch mode and return the switch's generation token.
    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<Generation, ApplyError> {
        self.check_ready()?;
        let unchanged = self.mode == mode;
        self.mode = mode;
        let generation = self.apply_current()?;
        if !unchanged {
            self.persist();
        }
        Ok(generation)
    }

    /// Deliver a system color-scheme change.
    ///
    /// Re-applies only when the mode is `system` and the scheme actually
    /// changed; the preference record is untouched either way.
    pub fn system_scheme_changed(
        &mut self,
        scheme: SystemScheme,
    ) -> Result<Option<Generation>, ApplyError> {
        self.check_ready()?;
        let changed = self.system_scheme != scheme;
        self.system_scheme = scheme;
        if changed && self.mode == ThemeMode::System {
            return Ok(Some(self.apply_current()?));
        }
        Ok(None)
    }

    /// Perform the deferred finish step for the switch identified by
    /// `generation`.
    ///
    /// Returns `true` when transitions were re-enabled. A token from a
    /// superseded switch is a no-op returning `false`.
    pub fn finish_transition(&mut self, generation: Generation) -> bool {
        if self.phase != Phase::Transitioning || generation.0 != self.generation {
            tracing::debug!(token = generation.0, current = self.generation, "stale finish");
            return false;
        }
        self.surface.resume_transitions();
        self.phase = Phase::Idle;
        true
    }

    /// Detach from the host. Only [`ThemeApplier::applied`] remains usable.
    pub fn shutdown(&mut self) {
        self.phase = Phase::ShutDown;
        tracing::debug!("theme applier shut down");
    }

    /// The last fully applied theme, shared lock-free with consumers.
    #[must_use]
    pub fn applied(&self) -> Option<Arc<ResolvedTheme>> {
        self.applied.load_full()
    }

    /// The active theme id.
    #[must_use]
    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    /// The selected mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The registry backing this applier.
    #[must_use]
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// The style surface, for inspection.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The preference store, for inspection.
    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }

    fn check_ready(&self) -> Result<(), ApplyError> {
        match self.phase {
            Phase::Uninitialized => Err(ApplyError::NotInitialized),
            Phase::ShutDown => Err(ApplyError::ShutDown),
            Phase::Idle | Phase::Transitioning => Ok(()),
        }
    }

    /// Resolve the effective theme and write it to the surface in full.
    ///
    /// Lookup happens before the first property write, so a failure here
    /// leaves the prior theme fully applied.
    fn apply_current(&mut self) -> Result<Generation, ApplyError> {
        let theme = self
            .registry
            .get(&self.theme_id)
            .ok_or_else(|| ApplyError::UnknownTheme {
                id: self.theme_id.clone(),
            })?;
        let is_dark = self.mode.is_dark(self.system_scheme);
        let resolved = theme.resolve(is_dark);

        self.surface.suspend_transitions();
        for (name, value) in resolved.css_variables() {
            self.surface.set_property(&name, &value);
        }
        self.surface.set_dark_marker(is_dark);

        self.generation += 1;
        self.phase = Phase::Transitioning;
        tracing::debug!(
            theme_id = %self.theme_id,
            mode = self.mode.as_str(),
            is_dark,
            generation = self.generation,
            "theme applied"
        );
        self.applied.store(Some(Arc::new(resolved)));
        Ok(Generation(self.generation))
    }

    fn persist(&self) {
        let record = StoredPreference {
            theme_id: self.theme_id.clone(),
            mode: self.mode,
        };
        if let Err(err) = self.store.save(&record) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
    }
}
