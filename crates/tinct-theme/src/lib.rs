#![forbid(unsafe_code)]

//! Theme derivation for tinct.
//!
//! # Role in tinct
//!
//! Sits between the color primitives in `tinct-color` and the live applier
//! in `tinct-runtime`. Given minimal brand input it derives complete,
//! contrast-checked themes, and stores them in an id-addressed registry
//! alongside the built-in presets.
//!
//! # Quick start
//!
//! ```
//! use tinct_theme::{BrandInput, ThemeRegistry, assemble_theme};
//!
//! let assembled = assemble_theme(
//!     "brand",
//!     &BrandInput::from_primary("#0EA5E9"),
//!     None,
//! )?;
//! assert!(assembled.warnings.is_empty());
//!
//! let mut registry = ThemeRegistry::with_builtins();
//! registry.register(assembled.theme)?;
//!
//! let resolved = registry.get("brand").unwrap().resolve(false);
//! assert!(resolved.css_variables().iter().any(|(k, _)| k == "--color-primary"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod builtin;
pub mod registry;
pub mod scale;
pub mod theme;

pub use assemble::{
    AssembleError, AssembledTheme, BrandInput, BrandSlot, ThemeOverrides, assemble_theme,
};
pub use registry::{RegistryError, ThemeRegistry};
pub use scale::{ShadeKey, ShadeScale};
pub use theme::{
    AdaptiveColor, FontSet, RadiusScale, ResolvedColors, ResolvedTheme, SpacingScale, Theme,
    ThemeColors,
};
