#![forbid(unsafe_code)]

//! tinct public facade crate.
//!
//! Re-exports the stable surface of the workspace crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! ```
//! use tinct::prelude::*;
//!
//! let assembled = assemble_theme(
//!     "brand",
//!     &BrandInput::from_primary("#0EA5E9"),
//!     None,
//! )?;
//!
//! let mut registry = ThemeRegistry::with_builtins();
//! registry.register(assembled.theme)?;
//!
//! let mut applier = ThemeApplier::new(registry, MemorySurface::new(), MemoryStore::new());
//! let generation = applier.init(&FixedScheme(SystemScheme::Light))?;
//! applier.finish_transition(generation);
//!
//! applier.set_theme("brand")?;
//! assert_eq!(applier.theme_id(), "brand");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// --- Color re-exports ------------------------------------------------------

pub use tinct_color::{
    Color, ColorError, ForegroundChoice, Hsl, LowContrastWarning, Rgb, WCAG_AA_NORMAL_TEXT,
    contrast_ratio, meets_wcag_aa, relative_luminance, resolve_foreground,
};

// --- Theme re-exports ------------------------------------------------------

pub use tinct_theme::{
    AdaptiveColor, AssembleError, AssembledTheme, BrandInput, RegistryError, ResolvedTheme,
    ShadeKey, ShadeScale, Theme, ThemeOverrides, ThemeRegistry, assemble_theme, builtin,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use tinct_runtime::{
    ApplyError, FixedScheme, Generation, JsonFileStore, MemoryStore, MemorySurface, PreferenceStore,
    SchemeSource, StoredPreference, StyleSurface, SystemScheme, ThemeApplier, ThemeMode,
};

/// Commonly used types for day-to-day usage.
pub mod prelude {
    pub use crate::{
        AdaptiveColor, AssembledTheme, BrandInput, Color, Hsl, ResolvedTheme, Rgb, ShadeKey,
        ShadeScale, Theme, ThemeRegistry, assemble_theme,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{
        FixedScheme, JsonFileStore, MemoryStore, MemorySurface, SystemScheme, ThemeApplier,
        ThemeMode,
    };

    pub use crate::{color, theme};

    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use tinct_color as color;
pub use tinct_theme as theme;

#[cfg(feature = "runtime")]
pub use tinct_runtime as runtime;
