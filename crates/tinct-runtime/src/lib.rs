#![forbid(unsafe_code)]

//! Runtime theme application for tinct.
//!
//! # Role in tinct
//!
//! Takes assembled themes from `tinct-theme` and applies them to a live
//! presentation scope: style-property writes, light/dark mode with system
//! preference sync, transition sequencing, and preference persistence. The
//! host supplies the seams: a [`StyleSurface`] to write to, a
//! [`SchemeSource`] for the OS scheme, and a [`PreferenceStore`] for the
//! persisted record.
//!
//! # Quick start
//!
//! ```
//! use tinct_runtime::{
//!     FixedScheme, MemoryStore, MemorySurface, SystemScheme, ThemeApplier, ThemeMode,
//! };
//! use tinct_theme::ThemeRegistry;
//!
//! let mut applier = ThemeApplier::new(
//!     ThemeRegistry::with_builtins(),
//!     MemorySurface::new(),
//!     MemoryStore::new(),
//! );
//!
//! let generation = applier.init(&FixedScheme(SystemScheme::Light))?;
//! applier.finish_transition(generation);
//!
//! let generation = applier.set_mode(ThemeMode::Dark)?;
//! assert!(applier.surface().dark_marker());
//! applier.finish_transition(generation);
//! # Ok::<(), tinct_runtime::ApplyError>(())
//! ```

pub mod applier;
pub mod mode;
pub mod persist;
pub mod surface;

pub use applier::{ApplyError, Generation, ThemeApplier};
pub use mode::{FixedScheme, SchemeSource, SystemScheme, ThemeMode};
pub use persist::{JsonFileStore, MemoryStore, PersistError, PreferenceStore, StoredPreference};
pub use surface::{MemorySurface, StyleSurface};
