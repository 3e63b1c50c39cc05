#![forbid(unsafe_code)]

//! Theme records with mode-adaptive color slots.
//!
//! A [`Theme`] names a complete design-token set: semantic color slots that
//! may differ between light and dark mode, plus fonts, corner radii, and a
//! spacing scale. Consumers never read a `Theme` directly; they read the
//! [`ResolvedTheme`] produced by [`Theme::resolve`] for a concrete mode,
//! which is flat, JSON-serializable, and the unit of export.

use serde::{Deserialize, Serialize};
use tinct_color::Color;

/// A color slot that can vary between light and dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdaptiveColor {
    /// A fixed color that does not change with mode.
    Fixed(Color),
    /// A color with distinct light and dark variants.
    Adaptive {
        /// Color used in light mode.
        light: Color,
        /// Color used in dark mode.
        dark: Color,
    },
}

impl AdaptiveColor {
    /// Create a fixed color.
    #[inline]
    #[must_use]
    pub const fn fixed(color: Color) -> Self {
        Self::Fixed(color)
    }

    /// Create an adaptive color with light/dark variants.
    #[inline]
    #[must_use]
    pub const fn adaptive(light: Color, dark: Color) -> Self {
        Self::Adaptive { light, dark }
    }

    /// Resolve the slot for a concrete mode.
    #[inline]
    #[must_use]
    pub const fn resolve(&self, is_dark: bool) -> Color {
        match self {
            Self::Fixed(c) => *c,
            Self::Adaptive { light, dark } => {
                if is_dark {
                    *dark
                } else {
                    *light
                }
            }
        }
    }

    /// Whether the slot differs between modes.
    #[inline]
    #[must_use]
    pub const fn is_adaptive(&self) -> bool {
        matches!(self, Self::Adaptive { .. })
    }
}

impl From<Color> for AdaptiveColor {
    fn from(color: Color) -> Self {
        Self::Fixed(color)
    }
}

/// The semantic color slots of a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Primary brand color (buttons, active states).
    pub primary: AdaptiveColor,
    /// Secondary brand color.
    pub secondary: AdaptiveColor,
    /// Accent color for highlights.
    pub accent: AdaptiveColor,
    /// Main background.
    pub background: AdaptiveColor,
    /// Raised surfaces (cards, panels).
    pub surface: AdaptiveColor,
    /// Primary text.
    pub text: AdaptiveColor,
    /// Muted fills and secondary text.
    pub muted: AdaptiveColor,
    /// Default border.
    pub border: AdaptiveColor,
    /// Positive feedback.
    pub success: AdaptiveColor,
    /// Cautionary feedback.
    pub warning: AdaptiveColor,
    /// Destructive actions and errors.
    pub destructive: AdaptiveColor,
    /// Informational feedback.
    pub info: AdaptiveColor,
}

/// Font family names per text role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    /// Headings.
    pub heading: String,
    /// Body copy.
    pub body: String,
    /// Code and tabular figures.
    pub mono: String,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            heading: "Inter, system-ui, sans-serif".to_string(),
            body: "Inter, system-ui, sans-serif".to_string(),
            mono: "JetBrains Mono, monospace".to_string(),
        }
    }
}

/// Corner radius tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusScale {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            sm: "0.25rem".to_string(),
            md: "0.5rem".to_string(),
            lg: "0.75rem".to_string(),
            full: "9999px".to_string(),
        }
    }
}

/// Named spacing tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingScale {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            xs: "0.25rem".to_string(),
            sm: "0.5rem".to_string(),
            md: "1rem".to_string(),
            lg: "1.5rem".to_string(),
            xl: "2.5rem".to_string(),
        }
    }
}

/// A complete named design-token set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Unique id used for registry lookup and persistence.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Semantic color slots.
    pub colors: ThemeColors,
    /// Font families.
    pub fonts: FontSet,
    /// Corner radii.
    pub radii: RadiusScale,
    /// Spacing scale.
    pub spacing: SpacingScale,
}

impl Theme {
    /// Flatten every adaptive slot for a concrete mode.
    #[must_use]
    pub fn resolve(&self, is_dark: bool) -> ResolvedTheme {
        let c = &self.colors;
        ResolvedTheme {
            id: self.id.clone(),
            name: self.name.clone(),
            colors: ResolvedColors {
                primary: c.primary.resolve(is_dark),
                secondary: c.secondary.resolve(is_dark),
                accent: c.accent.resolve(is_dark),
                background: c.background.resolve(is_dark),
                surface: c.surface.resolve(is_dark),
                text: c.text.resolve(is_dark),
                muted: c.muted.resolve(is_dark),
                border: c.border.resolve(is_dark),
                success: c.success.resolve(is_dark),
                warning: c.warning.resolve(is_dark),
                destructive: c.destructive.resolve(is_dark),
                info: c.info.resolve(is_dark),
            },
            fonts: self.fonts.clone(),
            radii: self.radii.clone(),
            spacing: self.spacing.clone(),
        }
    }
}

/// Color slots with every adaptive value flattened for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub destructive: Color,
    pub info: Color,
}

/// A theme flattened for one concrete mode.
///
/// This is the record presentation components consume and the JSON export
/// unit. [`ResolvedTheme::css_variables`] yields the stable style-property
/// contract: one `--<category>-<key>` entry per token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTheme {
    pub id: String,
    pub name: String,
    pub colors: ResolvedColors,
    pub fonts: FontSet,
    pub radii: RadiusScale,
    pub spacing: SpacingScale,
}

impl ResolvedTheme {
    /// Every token as a `(property, value)` pair in stable order.
    ///
    /// Property names follow `--<category>-<key>`, e.g. `--color-primary`,
    /// `--font-body`, `--radius-md`, `--spacing-lg`. Renaming any of these
    /// breaks the consumer contract.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let c = &self.colors;
        let color_slots: [(&str, Color); 12] = [
            ("primary", c.primary),
            ("secondary", c.secondary),
            ("accent", c.accent),
            ("background", c.background),
            ("surface", c.surface),
            ("text", c.text),
            ("muted", c.muted),
            ("border", c.border),
            ("success", c.success),
            ("warning", c.warning),
            ("destructive", c.destructive),
            ("info", c.info),
        ];

        let mut vars = Vec::with_capacity(color_slots.len() + 12);
        for (key, color) in color_slots {
            vars.push((format!("--color-{key}"), color.to_hex()));
        }
        for (key, value) in [
            ("heading", &self.fonts.heading),
            ("body", &self.fonts.body),
            ("mono", &self.fonts.mono),
        ] {
            vars.push((format!("--font-{key}"), value.clone()));
        }
        for (key, value) in [
            ("sm", &self.radii.sm),
            ("md", &self.radii.md),
            ("lg", &self.radii.lg),
            ("full", &self.radii.full),
        ] {
            vars.push((format!("--radius-{key}"), value.clone()));
        }
        for (key, value) in [
            ("xs", &self.spacing.xs),
            ("sm", &self.spacing.sm),
            ("md", &self.spacing.md),
            ("lg", &self.spacing.lg),
            ("xl", &self.spacing.xl),
        ] {
            vars.push((format!("--spacing-{key}"), value.clone()));
        }
        vars
    }
}
