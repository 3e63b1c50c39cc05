#![forbid(unsafe_code)]

//! WCAG luminance and contrast utilities.
//!
//! Relative luminance follows the WCAG 2.1 sRGB-to-linear transform and
//! channel weighting; contrast ratios are `(L1 + 0.05) / (L2 + 0.05)` with
//! `L1 >= L2`. Foreground resolution never fails hard: when no candidate
//! clears the AA threshold the best available is returned together with a
//! [`LowContrastWarning`] for the caller to report.

use std::fmt;

use crate::color::Color;

/// WCAG AA minimum contrast for normal text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// WCAG AA minimum contrast for large text.
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;
/// WCAG AAA minimum contrast for normal text.
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;
/// WCAG AAA minimum contrast for large text.
pub const WCAG_AAA_LARGE_TEXT: f64 = 4.5;

/// Convert one sRGB channel (normalized to `[0, 1]`) to linear light.
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a color, in `[0, 1]`.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let rgb = color.to_rgb();
    let r = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f64::from(rgb.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// Check whether a foreground/background pair meets AA for normal text.
#[must_use]
pub fn meets_wcag_aa(fg: Color, bg: Color) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL_TEXT
}

/// A foreground fell short of the AA threshold against its background.
///
/// This is a reportable condition, not an error: the theme still assembles
/// with the best-available candidate, and the caller decides whether and how
/// to surface the shortfall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowContrastWarning {
    /// The background the candidates were tested against.
    pub background: Color,
    /// The candidate that was chosen anyway.
    pub chosen: Color,
    /// The best ratio achieved (below [`WCAG_AA_NORMAL_TEXT`]).
    pub ratio: f64,
}

impl fmt::Display for LowContrastWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "foreground {} on {} reaches only {:.2}:1 (AA requires {WCAG_AA_NORMAL_TEXT}:1)",
            self.chosen, self.background, self.ratio
        )
    }
}

/// The outcome of [`resolve_foreground`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForegroundChoice {
    /// The selected foreground color.
    pub color: Color,
    /// Its contrast ratio against the background.
    pub ratio: f64,
    /// Present when no candidate met the AA threshold.
    pub warning: Option<LowContrastWarning>,
}

/// Pick a foreground for `background` from an ordered candidate list.
///
/// The first candidate whose ratio is at least [`WCAG_AA_NORMAL_TEXT`] wins.
/// When none qualifies, the candidate with the highest ratio is returned and
/// the shortfall is recorded in [`ForegroundChoice::warning`]. An empty
/// candidate list falls back to black or white, whichever contrasts more.
#[must_use]
pub fn resolve_foreground(background: Color, candidates: &[Color]) -> ForegroundChoice {
    let mut best: Option<(Color, f64)> = None;

    for &candidate in candidates {
        let ratio = contrast_ratio(candidate, background);
        if ratio >= WCAG_AA_NORMAL_TEXT {
            return ForegroundChoice {
                color: candidate,
                ratio,
                warning: None,
            };
        }
        if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
            best = Some((candidate, ratio));
        }
    }

    let (color, ratio) = best.unwrap_or_else(|| {
        let white = Color::rgb(255, 255, 255);
        let black = Color::rgb(0, 0, 0);
        let white_ratio = contrast_ratio(white, background);
        let black_ratio = contrast_ratio(black, background);
        if white_ratio >= black_ratio {
            (white, white_ratio)
        } else {
            (black, black_ratio)
        }
    });

    let warning = (ratio < WCAG_AA_NORMAL_TEXT).then_some(LowContrastWarning {
        background,
        chosen: color,
        ratio,
    });

    ForegroundChoice { color, ratio, warning }
}
