#![forbid(unsafe_code)]

//! Built-in theme presets.
//!
//! These are hand-tuned rather than assembled, so their palettes stay stable
//! across changes to the derivation algorithm. Every preset carries light and
//! dark variants for the mode-dependent slots.

use tinct_color::Color;

use crate::theme::{AdaptiveColor, FontSet, RadiusScale, SpacingScale, Theme, ThemeColors};

/// Id of the preset used when nothing is persisted.
pub const DEFAULT_THEME_ID: &str = "tinct";

/// All built-in presets, default first.
#[must_use]
pub fn all() -> Vec<Theme> {
    vec![tinct(), ember(), meadow()]
}

/// The default preset.
#[must_use]
pub fn default_theme() -> Theme {
    tinct()
}

/// Sky-blue default.
#[must_use]
pub fn tinct() -> Theme {
    Theme {
        id: DEFAULT_THEME_ID.to_string(),
        name: "Tinct".to_string(),
        colors: ThemeColors {
            primary: AdaptiveColor::adaptive(
                Color::rgb(2, 132, 199),  // Sky 600
                Color::rgb(56, 189, 248), // Sky 400
            ),
            secondary: AdaptiveColor::adaptive(
                Color::rgb(124, 58, 237),  // Violet 600
                Color::rgb(167, 139, 250), // Violet 400
            ),
            accent: AdaptiveColor::adaptive(
                Color::rgb(219, 39, 119), // Pink 600
                Color::rgb(244, 114, 182), // Pink 400
            ),
            background: AdaptiveColor::adaptive(
                Color::rgb(250, 252, 254), // Near-white
                Color::rgb(11, 16, 23),    // Near-black
            ),
            surface: AdaptiveColor::adaptive(
                Color::rgb(241, 245, 249),
                Color::rgb(22, 29, 39),
            ),
            text: AdaptiveColor::adaptive(
                Color::rgb(15, 23, 42),    // Slate 900
                Color::rgb(236, 242, 248), // Slate 100
            ),
            muted: AdaptiveColor::adaptive(
                Color::rgb(226, 232, 240),
                Color::rgb(38, 48, 62),
            ),
            border: AdaptiveColor::adaptive(
                Color::rgb(203, 213, 225),
                Color::rgb(55, 68, 85),
            ),
            success: AdaptiveColor::adaptive(
                Color::rgb(22, 128, 61),
                Color::rgb(74, 203, 125),
            ),
            warning: AdaptiveColor::adaptive(
                Color::rgb(161, 98, 7),
                Color::rgb(240, 180, 41),
            ),
            destructive: AdaptiveColor::adaptive(
                Color::rgb(185, 28, 28),
                Color::rgb(248, 113, 113),
            ),
            info: AdaptiveColor::adaptive(
                Color::rgb(2, 132, 199),
                Color::rgb(56, 189, 248),
            ),
        },
        fonts: FontSet::default(),
        radii: RadiusScale::default(),
        spacing: SpacingScale::default(),
    }
}

/// Warm amber preset.
#[must_use]
pub fn ember() -> Theme {
    Theme {
        id: "ember".to_string(),
        name: "Ember".to_string(),
        colors: ThemeColors {
            primary: AdaptiveColor::adaptive(
                Color::rgb(194, 65, 12),  // Orange 700
                Color::rgb(251, 146, 60), // Orange 400
            ),
            secondary: AdaptiveColor::adaptive(
                Color::rgb(180, 83, 9),
                Color::rgb(245, 158, 11),
            ),
            accent: AdaptiveColor::adaptive(
                Color::rgb(190, 18, 60),  // Rose 700
                Color::rgb(251, 113, 133), // Rose 400
            ),
            background: AdaptiveColor::adaptive(
                Color::rgb(254, 252, 248), // Warm near-white
                Color::rgb(20, 14, 10),    // Warm near-black
            ),
            surface: AdaptiveColor::adaptive(
                Color::rgb(250, 245, 238),
                Color::rgb(33, 24, 18),
            ),
            text: AdaptiveColor::adaptive(
                Color::rgb(41, 26, 15),
                Color::rgb(247, 240, 232),
            ),
            muted: AdaptiveColor::adaptive(
                Color::rgb(237, 228, 216),
                Color::rgb(59, 45, 34),
            ),
            border: AdaptiveColor::adaptive(
                Color::rgb(219, 205, 188),
                Color::rgb(82, 63, 48),
            ),
            success: AdaptiveColor::adaptive(
                Color::rgb(22, 128, 61),
                Color::rgb(74, 203, 125),
            ),
            warning: AdaptiveColor::adaptive(
                Color::rgb(161, 98, 7),
                Color::rgb(240, 180, 41),
            ),
            destructive: AdaptiveColor::adaptive(
                Color::rgb(185, 28, 28),
                Color::rgb(248, 113, 113),
            ),
            info: AdaptiveColor::adaptive(
                Color::rgb(3, 105, 161),
                Color::rgb(56, 189, 248),
            ),
        },
        fonts: FontSet::default(),
        radii: RadiusScale::default(),
        spacing: SpacingScale::default(),
    }
}

/// Green preset.
#[must_use]
pub fn meadow() -> Theme {
    Theme {
        id: "meadow".to_string(),
        name: "Meadow".to_string(),
        colors: ThemeColors {
            primary: AdaptiveColor::adaptive(
                Color::rgb(21, 128, 61),  // Green 700
                Color::rgb(74, 222, 128), // Green 400
            ),
            secondary: AdaptiveColor::adaptive(
                Color::rgb(15, 118, 110), // Teal 700
                Color::rgb(45, 212, 191), // Teal 400
            ),
            accent: AdaptiveColor::adaptive(
                Color::rgb(161, 98, 7),   // Amber 700
                Color::rgb(250, 204, 21), // Yellow 400
            ),
            background: AdaptiveColor::adaptive(
                Color::rgb(249, 253, 250),
                Color::rgb(10, 18, 13),
            ),
            surface: AdaptiveColor::adaptive(
                Color::rgb(240, 248, 242),
                Color::rgb(20, 31, 24),
            ),
            text: AdaptiveColor::adaptive(
                Color::rgb(12, 32, 21),
                Color::rgb(235, 245, 238),
            ),
            muted: AdaptiveColor::adaptive(
                Color::rgb(222, 236, 226),
                Color::rgb(36, 54, 42),
            ),
            border: AdaptiveColor::adaptive(
                Color::rgb(197, 219, 203),
                Color::rgb(54, 78, 61),
            ),
            success: AdaptiveColor::adaptive(
                Color::rgb(21, 128, 61),
                Color::rgb(74, 222, 128),
            ),
            warning: AdaptiveColor::adaptive(
                Color::rgb(161, 98, 7),
                Color::rgb(240, 180, 41),
            ),
            destructive: AdaptiveColor::adaptive(
                Color::rgb(185, 28, 28),
                Color::rgb(248, 113, 113),
            ),
            info: AdaptiveColor::adaptive(
                Color::rgb(3, 105, 161),
                Color::rgb(56, 189, 248),
            ),
        },
        fonts: FontSet::default(),
        radii: RadiusScale::default(),
        spacing: SpacingScale::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_color::{WCAG_AA_NORMAL_TEXT, contrast_ratio};

    #[test]
    fn ids_are_unique_and_default_first() {
        let themes = all();
        let ids: Vec<&str> = themes.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids[0], DEFAULT_THEME_ID);
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(deduped, ids);
    }

    #[test]
    fn every_preset_meets_aa_in_both_modes() {
        for theme in all() {
            for is_dark in [false, true] {
                let resolved = theme.resolve(is_dark);
                let ratio = contrast_ratio(resolved.colors.text, resolved.colors.background);
                assert!(
                    ratio >= WCAG_AA_NORMAL_TEXT,
                    "{} ({}) text/background = {ratio:.2}",
                    theme.id,
                    if is_dark { "dark" } else { "light" }
                );
            }
        }
    }

    #[test]
    fn default_theme_matches_default_id() {
        assert_eq!(default_theme().id, DEFAULT_THEME_ID);
    }
}
