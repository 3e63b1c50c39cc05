#![forbid(unsafe_code)]

//! Color types, hex parsing, and representation conversions.
//!
//! Three interchangeable representations exist: hex strings (`#RRGGBB` or
//! `#RGB`, marker optional), [`Rgb`] channel triples, and [`Hsl`] triples in
//! degrees/percent. [`Color`] is the discriminated carrier used everywhere
//! downstream; hex is the canonical string form used for serialization and
//! brand input.
//!
//! Numeric policy: hue wraps modulo 360; saturation and lightness clamp to
//! `[0, 100]`. Conversions round-trip within ±1 per 8-bit channel.

use std::fmt;

/// RGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL (degrees, percent, percent).
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }
}

/// HSL color: hue in degrees, saturation and lightness in percent.
///
/// Construction normalizes: hue wraps modulo 360, saturation and lightness
/// clamp to `[0, 100]`. Non-finite inputs collapse to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f32,
    /// Saturation in percent, `[0, 100]`.
    pub s: f32,
    /// Lightness in percent, `[0, 100]`.
    pub l: f32,
}

impl Hsl {
    /// Create a normalized HSL color.
    #[must_use]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        let h = if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 };
        let s = if s.is_finite() { s.clamp(0.0, 100.0) } else { 0.0 };
        let l = if l.is_finite() { l.clamp(0.0, 100.0) } else { 0.0 };
        Self { h, s, l }
    }

    /// Return a copy with the given lightness (clamped).
    #[must_use]
    pub fn with_lightness(self, l: f32) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Return a copy with the given saturation (clamped).
    #[must_use]
    pub fn with_saturation(self, s: f32) -> Self {
        Self::new(self.h, s, self.l)
    }

    /// Return a copy with the hue rotated by `degrees` (wrapping).
    #[must_use]
    pub fn rotate_hue(self, degrees: f32) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 1.0 / 6.0 {
            (c, x, 0.0)
        } else if h < 2.0 / 6.0 {
            (x, c, 0.0)
        } else if h < 3.0 / 6.0 {
            (0.0, c, x)
        } else if h < 4.0 / 6.0 {
            (0.0, x, c)
        } else if h < 5.0 / 6.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::new(
            channel_u8(r + m),
            channel_u8(g + m),
            channel_u8(b + m),
        )
    }

    /// Format as a lowercase hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

fn channel_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A color value in one of the interchangeable representations.
///
/// Every constructor and parser normalizes its input, so holding a `Color`
/// is proof the value was valid sRGB input. Downstream code converts freely
/// with [`Color::to_rgb`] / [`Color::to_hsl`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Channel triple, 8 bits per channel.
    Rgb(Rgb),
    /// Hue/saturation/lightness triple.
    Hsl(Hsl),
}

impl Color {
    /// Create an RGB color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Create a normalized HSL color.
    #[must_use]
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::Hsl(Hsl::new(h, s, l))
    }

    /// Parse a 3- or 6-digit hex string, with or without a leading `#`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        parse_hex(input).map(Self::Rgb)
    }

    /// Convert to an RGB triple regardless of representation.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Hsl(hsl) => hsl.to_rgb(),
        }
    }

    /// Convert to an HSL triple regardless of representation.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        match self {
            Self::Rgb(rgb) => rgb.to_hsl(),
            Self::Hsl(hsl) => hsl,
        }
    }

    /// Format as a lowercase `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Free-function conversion contract
// ---------------------------------------------------------------------------

/// Parse a hex string into HSL.
pub fn hex_to_hsl(input: &str) -> Result<Hsl, ColorError> {
    Ok(parse_hex(input)?.to_hsl())
}

/// Parse a hex string into RGB.
pub fn hex_to_rgb(input: &str) -> Result<Rgb, ColorError> {
    parse_hex(input)
}

/// Format an HSL triple as a hex string.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_hex()
}

/// Format an RGB triple as a hex string.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Convert an RGB triple to HSL.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert an HSL triple to RGB.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

fn parse_hex(input: &str) -> Result<Rgb, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let invalid = || ColorError::InvalidFormat {
        input: input.to_string(),
    };

    match digits.len() {
        3 => {
            let mut chars = digits.chars();
            let r = hex_nibble(chars.next().ok_or_else(invalid)?).ok_or_else(invalid)?;
            let g = hex_nibble(chars.next().ok_or_else(invalid)?).ok_or_else(invalid)?;
            let b = hex_nibble(chars.next().ok_or_else(invalid)?).ok_or_else(invalid)?;
            // #abc expands to #aabbcc
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            if !digits.is_ascii() {
                return Err(invalid());
            }
            let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
            let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
            let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(invalid()),
    }
}

fn hex_nibble(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced at the color-validation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input was not a 3- or 6-digit hex color.
    InvalidFormat {
        /// The rejected input, as given.
        input: String,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { input } => {
                write!(f, "invalid color format: {input:?} (expected #RGB or #RRGGBB)")
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(hex_to_rgb("#0ea5e9").unwrap(), Rgb::new(14, 165, 233));
        assert_eq!(hex_to_rgb("0EA5E9").unwrap(), Rgb::new(14, 165, 233));
    }

    #[test]
    fn parse_three_digit_hex_expands() {
        assert_eq!(hex_to_rgb("#abc").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(hex_to_rgb("fff").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn parse_rejects_bad_lengths() {
        for input in ["", "#", "#ab", "#abcd", "#abcde", "#abcdef0", "1234567"] {
            assert!(hex_to_rgb(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        assert!(hex_to_rgb("#zzzzzz").is_err());
        assert!(hex_to_rgb("#12345g").is_err());
        assert!(hex_to_rgb("#xyz").is_err());
    }

    #[test]
    fn parse_rejects_multibyte_input() {
        // Byte-length 6 but not ASCII; must error, not panic on a slice.
        assert!(hex_to_rgb("ééé").is_err());
        assert!(hex_to_rgb("émété").is_err());
    }

    #[test]
    fn error_display_names_the_input() {
        let err = hex_to_rgb("#nope").unwrap_err();
        assert!(err.to_string().contains("#nope"));
    }

    #[test]
    fn hex_formatting_is_lowercase_with_marker() {
        assert_eq!(Rgb::new(14, 165, 233).to_hex(), "#0ea5e9");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
    }

    #[test]
    fn rgb_to_hsl_primaries() {
        let red = Rgb::new(255, 0, 0).to_hsl();
        assert!(red.h.abs() < 0.5);
        assert!((red.s - 100.0).abs() < 0.5);
        assert!((red.l - 50.0).abs() < 0.5);

        let green = Rgb::new(0, 255, 0).to_hsl();
        assert!((green.h - 120.0).abs() < 0.5);

        let blue = Rgb::new(0, 0, 255).to_hsl();
        assert!((blue.h - 240.0).abs() < 0.5);
    }

    #[test]
    fn rgb_to_hsl_achromatic_has_zero_saturation() {
        let gray = Rgb::new(128, 128, 128).to_hsl();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 50.2).abs() < 0.5);
    }

    #[test]
    fn hsl_to_rgb_extremes() {
        assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb(), Rgb::new(255, 255, 255));
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hue_wraps_modulo_360() {
        assert_eq!(Hsl::new(360.0, 50.0, 50.0).h, 0.0);
        assert_eq!(Hsl::new(480.0, 50.0, 50.0).h, 120.0);
        assert_eq!(Hsl::new(-120.0, 50.0, 50.0).h, 240.0);
    }

    #[test]
    fn saturation_and_lightness_clamp() {
        let hsl = Hsl::new(10.0, 150.0, -20.0);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 0.0);
    }

    #[test]
    fn non_finite_components_collapse_to_zero() {
        let hsl = Hsl::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.l, 0.0);
    }

    #[test]
    fn rotate_hue_wraps() {
        let hsl = Hsl::new(300.0, 50.0, 50.0).rotate_hue(140.0);
        assert!((hsl.h - 80.0).abs() < 0.001);
    }

    #[test]
    fn known_brand_color_round_trips() {
        // #0EA5E9: h ≈ 199°, s ≈ 89%, l ≈ 48%
        let hsl = hex_to_hsl("#0EA5E9").unwrap();
        assert!((hsl.h - 199.0).abs() < 1.0, "h = {}", hsl.h);
        assert!((hsl.s - 89.0).abs() < 1.5, "s = {}", hsl.s);
        assert!((hsl.l - 48.0).abs() < 1.5, "l = {}", hsl.l);

        let back = hex_to_rgb(&hsl_to_hex(hsl)).unwrap();
        let orig = Rgb::new(14, 165, 233);
        assert!(back.r.abs_diff(orig.r) <= 1);
        assert!(back.g.abs_diff(orig.g) <= 1);
        assert!(back.b.abs_diff(orig.b) <= 1);
    }

    #[test]
    fn free_conversion_functions_match_the_methods() {
        let rgb = Rgb::new(14, 165, 233);
        assert_eq!(rgb_to_hsl(rgb), rgb.to_hsl());
        let hsl = Hsl::new(199.0, 89.0, 48.0);
        assert_eq!(hsl_to_rgb(hsl), hsl.to_rgb());
    }

    #[test]
    fn color_variants_convert_consistently() {
        let from_rgb = Color::rgb(14, 165, 233);
        let from_hsl = Color::Hsl(from_rgb.to_hsl());
        let rt = from_hsl.to_rgb();
        assert!(rt.r.abs_diff(14) <= 1);
        assert!(rt.g.abs_diff(165) <= 1);
        assert!(rt.b.abs_diff(233) <= 1);
    }

    #[test]
    fn color_display_is_hex() {
        assert_eq!(Color::rgb(255, 0, 0).to_string(), "#ff0000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(14, 165, 233)).unwrap();
        assert_eq!(json, "\"#0ea5e9\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(14, 165, 233));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn color_deserialize_rejects_malformed() {
        let result: Result<Color, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }
}
