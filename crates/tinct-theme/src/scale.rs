#![forbid(unsafe_code)]

//! Eleven-step shade scales derived from a single base color.
//!
//! A [`ShadeScale`] maps the conventional keys `50` (lightest) through `950`
//! (darkest) to variants of one base color. The base anchors the `500` key;
//! lighter keys ramp toward a near-white bound with slightly reduced
//! saturation, darker keys ramp toward a near-black bound with slightly
//! increased saturation so the hue stays present in deep shades.

use serde::{Deserialize, Serialize};
use tinct_color::{Color, Hsl};

/// Lightness of the `50` key, just short of pure white.
const LIGHT_BOUND: f32 = 98.0;
/// Lightness of the `950` key, just short of pure black.
const DARK_BOUND: f32 = 6.0;
/// Smallest lightness gap between adjacent keys. Keeps the ramp strictly
/// monotonic even when the base lightness sits near one of the bounds.
const MIN_STEP: f32 = 0.5;
/// Saturation reduction at the lightest key, as a fraction of the base.
const TINT_DESATURATION: f32 = 0.12;
/// Saturation boost at the darkest key, as a fraction of the base.
const SHADE_SATURATION: f32 = 0.10;

/// One of the eleven fixed shade keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl ShadeKey {
    /// All keys, ordered lightest to darkest.
    pub const ALL: [ShadeKey; 11] = [
        ShadeKey::S50,
        ShadeKey::S100,
        ShadeKey::S200,
        ShadeKey::S300,
        ShadeKey::S400,
        ShadeKey::S500,
        ShadeKey::S600,
        ShadeKey::S700,
        ShadeKey::S800,
        ShadeKey::S900,
        ShadeKey::S950,
    ];

    /// Position in the ramp, `0` for `50` through `10` for `950`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ShadeKey::S50 => 0,
            ShadeKey::S100 => 1,
            ShadeKey::S200 => 2,
            ShadeKey::S300 => 3,
            ShadeKey::S400 => 4,
            ShadeKey::S500 => 5,
            ShadeKey::S600 => 6,
            ShadeKey::S700 => 7,
            ShadeKey::S800 => 8,
            ShadeKey::S900 => 9,
            ShadeKey::S950 => 10,
        }
    }

    /// The conventional numeric name, e.g. `"500"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ShadeKey::S50 => "50",
            ShadeKey::S100 => "100",
            ShadeKey::S200 => "200",
            ShadeKey::S300 => "300",
            ShadeKey::S400 => "400",
            ShadeKey::S500 => "500",
            ShadeKey::S600 => "600",
            ShadeKey::S700 => "700",
            ShadeKey::S800 => "800",
            ShadeKey::S900 => "900",
            ShadeKey::S950 => "950",
        }
    }

    /// Parse the conventional numeric name back into a key.
    #[must_use]
    pub fn from_name(name: &str) -> Option<ShadeKey> {
        ShadeKey::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// An immutable eleven-step lightness ramp generated from one base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadeScale {
    shades: [Hsl; 11],
}

impl ShadeScale {
    /// Generate the ramp for `base`.
    ///
    /// The `500` key stays within 3 lightness points of the base except for
    /// near-white or near-black inputs, which are pulled inward just far
    /// enough to keep every step strictly decreasing in lightness.
    #[must_use]
    pub fn generate(base: Color) -> ShadeScale {
        let base = base.to_hsl();
        let anchor = base
            .l
            .clamp(DARK_BOUND + MIN_STEP * 5.0, LIGHT_BOUND - MIN_STEP * 5.0);

        let mut shades = [base; 11];
        for key in ShadeKey::ALL {
            let idx = key.index();
            let (l, s) = if idx <= 5 {
                // Tint side: interpolate from the light bound down to the
                // anchor, washing out saturation toward the light end.
                let t = idx as f32 / 5.0;
                let l = LIGHT_BOUND + (anchor - LIGHT_BOUND) * t;
                let s = base.s * (1.0 - TINT_DESATURATION * (1.0 - t));
                (l, s)
            } else {
                // Shade side: interpolate from the anchor down to the dark
                // bound, pushing saturation up so the hue survives near black.
                let t = (idx - 5) as f32 / 5.0;
                let l = anchor + (DARK_BOUND - anchor) * t;
                let s = base.s * (1.0 + SHADE_SATURATION * t);
                (l, s)
            };
            shades[idx] = Hsl::new(base.h, s, l);
        }

        ShadeScale { shades }
    }

    /// The color at `key`.
    #[must_use]
    pub fn get(&self, key: ShadeKey) -> Color {
        Color::Hsl(self.shades[key.index()])
    }

    /// The HSL lightness at `key`, in percent.
    #[must_use]
    pub fn lightness(&self, key: ShadeKey) -> f32 {
        self.shades[key.index()].l
    }

    /// Iterate keys and colors, lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, Color)> + '_ {
        ShadeKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }
}
