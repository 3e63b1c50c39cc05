#![forbid(unsafe_code)]

//! Theme assembly from minimal brand input.
//!
//! [`assemble_theme`] turns one brand color (plus optional secondary and
//! accent) into a complete [`Theme`]: shade scales anchor the brand slots,
//! a desaturated neutral ramp supplies backgrounds, borders, and muted
//! fills, and text colors are picked by the contrast resolver. Contrast
//! shortfalls never abort assembly; they are logged and returned alongside
//! the theme.

use std::{error, fmt};

use serde::{Deserialize, Serialize};
use tinct_color::{Color, ColorError, Hsl, LowContrastWarning, resolve_foreground};

use crate::scale::{ShadeKey, ShadeScale};
use crate::theme::{AdaptiveColor, FontSet, RadiusScale, SpacingScale, Theme, ThemeColors};

/// Hue rotation applied to derive a secondary color from the primary.
const SECONDARY_ROTATION: f32 = 140.0;
/// Hue rotation applied to derive an accent color from the primary.
const ACCENT_ROTATION: f32 = 200.0;
/// Saturation of the neutral ramp, as a fraction of the brand saturation.
const NEUTRAL_SATURATION: f32 = 0.08;

/// Brand colors as supplied by the caller, hex-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInput {
    /// The primary brand color. Required and validated first.
    pub primary: String,
    /// Optional secondary; derived from `primary` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Optional accent; derived from `primary` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl BrandInput {
    /// Brand input from a single primary hex color.
    #[must_use]
    pub fn from_primary(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
            accent: None,
        }
    }
}

/// Caller-supplied values merged over the derived theme. Explicit values
/// always win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<AdaptiveColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radii: Option<RadiusScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingScale>,
}

/// The brand slot that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandSlot {
    Primary,
    Secondary,
    Accent,
}

impl BrandSlot {
    const fn as_str(self) -> &'static str {
        match self {
            BrandSlot::Primary => "primary",
            BrandSlot::Secondary => "secondary",
            BrandSlot::Accent => "accent",
        }
    }
}

/// Theme assembly failed. No partial theme is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// A brand color did not parse; the converter error is attached.
    InvalidBrandColor {
        slot: BrandSlot,
        source: ColorError,
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::InvalidBrandColor { slot, .. } => {
                write!(f, "invalid brand color for slot `{}`", slot.as_str())
            }
        }
    }
}

impl error::Error for AssembleError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AssembleError::InvalidBrandColor { source, .. } => Some(source),
        }
    }
}

/// A successfully assembled theme plus any contrast shortfalls met on the
/// way. Warnings are reportable, never fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledTheme {
    pub theme: Theme,
    pub warnings: Vec<LowContrastWarning>,
}

/// Build a complete theme from brand input.
///
/// Secondary and accent fall back to fixed hue rotations of the primary
/// (+140 and +200 degrees) so a single input color still yields a usable
/// palette. `overrides` merge last. An unparseable brand color aborts with
/// [`AssembleError::InvalidBrandColor`].
pub fn assemble_theme(
    id: impl Into<String>,
    brand: &BrandInput,
    overrides: Option<&ThemeOverrides>,
) -> Result<AssembledTheme, AssembleError> {
    let primary = parse_slot(BrandSlot::Primary, &brand.primary)?;
    let secondary = match &brand.secondary {
        Some(hex) => parse_slot(BrandSlot::Secondary, hex)?,
        None => primary.rotate_hue(SECONDARY_ROTATION),
    };
    let accent = match &brand.accent {
        Some(hex) => parse_slot(BrandSlot::Accent, hex)?,
        None => primary.rotate_hue(ACCENT_ROTATION),
    };

    let primary_scale = ShadeScale::generate(Color::Hsl(primary));
    let secondary_scale = ShadeScale::generate(Color::Hsl(secondary));
    let accent_scale = ShadeScale::generate(Color::Hsl(accent));

    // Neutral ramp: brand hue, almost no chroma. Supplies backgrounds,
    // surfaces, borders, and muted fills in both modes.
    let neutral = ShadeScale::generate(Color::hsl(
        primary.h,
        primary.s * NEUTRAL_SATURATION,
        50.0,
    ));

    let background_light = neutral.get(ShadeKey::S50);
    let background_dark = neutral.get(ShadeKey::S950);

    let mut warnings = Vec::new();
    let text_light = pick_text(background_light, false, &primary_scale, &mut warnings);
    let text_dark = pick_text(background_dark, true, &primary_scale, &mut warnings);

    let id = id.into();
    let mut theme = Theme {
        name: id.clone(),
        id,
        colors: ThemeColors {
            primary: brand_slot(&primary_scale),
            secondary: brand_slot(&secondary_scale),
            accent: brand_slot(&accent_scale),
            background: AdaptiveColor::adaptive(background_light, background_dark),
            surface: AdaptiveColor::adaptive(
                neutral.get(ShadeKey::S100),
                neutral.get(ShadeKey::S900),
            ),
            text: AdaptiveColor::adaptive(text_light, text_dark),
            muted: AdaptiveColor::adaptive(
                neutral.get(ShadeKey::S200),
                neutral.get(ShadeKey::S800),
            ),
            border: AdaptiveColor::adaptive(
                neutral.get(ShadeKey::S300),
                neutral.get(ShadeKey::S700),
            ),
            success: semantic_slot(145.0, 62.0),
            warning: semantic_slot(38.0, 85.0),
            destructive: semantic_slot(2.0, 72.0),
            info: semantic_slot(205.0, 80.0),
        },
        fonts: FontSet::default(),
        radii: RadiusScale::default(),
        spacing: SpacingScale::default(),
    };

    if let Some(overrides) = overrides {
        merge_overrides(&mut theme, overrides);
    }

    Ok(AssembledTheme { theme, warnings })
}

fn parse_slot(slot: BrandSlot, hex: &str) -> Result<Hsl, AssembleError> {
    match Color::from_hex(hex) {
        Ok(color) => Ok(color.to_hsl()),
        Err(source) => {
            tracing::debug!(slot = slot.as_str(), input = hex, "brand color rejected");
            Err(AssembleError::InvalidBrandColor { slot, source })
        }
    }
}

/// Brand slots use the anchor shade in light mode and a lighter shade in
/// dark mode, where the darker background needs a brighter brand color.
fn brand_slot(scale: &ShadeScale) -> AdaptiveColor {
    AdaptiveColor::adaptive(scale.get(ShadeKey::S500), scale.get(ShadeKey::S400))
}

fn semantic_slot(hue: f32, saturation: f32) -> AdaptiveColor {
    let scale = ShadeScale::generate(Color::hsl(hue, saturation, 45.0));
    AdaptiveColor::adaptive(scale.get(ShadeKey::S500), scale.get(ShadeKey::S400))
}

/// Candidate order per mode: the obvious extreme first, then the brand
/// scale's own near-extreme shade as a tinted fallback.
fn pick_text(
    background: Color,
    is_dark: bool,
    primary_scale: &ShadeScale,
    warnings: &mut Vec<LowContrastWarning>,
) -> Color {
    let candidates = if is_dark {
        [
            Color::rgb(255, 255, 255),
            primary_scale.get(ShadeKey::S50),
            Color::rgb(15, 23, 42),
        ]
    } else {
        [
            Color::rgb(255, 255, 255),
            Color::rgb(15, 23, 42),
            primary_scale.get(ShadeKey::S950),
        ]
    };

    let choice = resolve_foreground(background, &candidates);
    if let Some(warning) = choice.warning {
        tracing::warn!(%warning, "text contrast below AA, using best available");
        warnings.push(warning);
    }
    choice.color
}

fn merge_overrides(theme: &mut Theme, overrides: &ThemeOverrides) {
    let c = &mut theme.colors;
    if let Some(name) = &overrides.name {
        theme.name = name.clone();
    }
    if let Some(v) = overrides.primary {
        c.primary = v;
    }
    if let Some(v) = overrides.secondary {
        c.secondary = v;
    }
    if let Some(v) = overrides.accent {
        c.accent = v;
    }
    if let Some(v) = overrides.background {
        c.background = v;
    }
    if let Some(v) = overrides.surface {
        c.surface = v;
    }
    if let Some(v) = overrides.text {
        c.text = v;
    }
    if let Some(v) = overrides.muted {
        c.muted = v;
    }
    if let Some(v) = overrides.border {
        c.border = v;
    }
    if let Some(v) = overrides.success {
        c.success = v;
    }
    if let Some(v) = overrides.warning {
        c.warning = v;
    }
    if let Some(v) = overrides.destructive {
        c.destructive = v;
    }
    if let Some(v) = overrides.info {
        c.info = v;
    }
    if let Some(fonts) = &overrides.fonts {
        theme.fonts = fonts.clone();
    }
    if let Some(radii) = &overrides.radii {
        theme.radii = radii.clone();
    }
    if let Some(spacing) = &overrides.spacing {
        theme.spacing = spacing.clone();
    }
}
