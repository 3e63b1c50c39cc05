//! Property tests for conversion stability and contrast bounds.

use proptest::prelude::*;

use tinct_color::{Color, Hsl, Rgb, contrast_ratio, relative_luminance};

proptest! {
    /// Hex encoding of any RGB triple parses back to the same triple.
    #[test]
    fn hex_round_trips_rgb_exactly(r: u8, g: u8, b: u8) {
        let rgb = Rgb::new(r, g, b);
        let parsed = Color::from_hex(&rgb.to_hex()).unwrap();
        prop_assert_eq!(parsed.to_rgb(), rgb);
    }

    /// RGB -> HSL -> RGB is stable to within one step per channel. HSL
    /// stores fractional degrees/percentages, so exact equality is not
    /// guaranteed, but the rounding error never exceeds a single unit.
    #[test]
    fn rgb_hsl_round_trip_within_one_step(r: u8, g: u8, b: u8) {
        let rgb = Rgb::new(r, g, b);
        let back = rgb.to_hsl().to_rgb();
        prop_assert!(back.r.abs_diff(rgb.r) <= 1, "r: {} vs {}", back.r, rgb.r);
        prop_assert!(back.g.abs_diff(rgb.g) <= 1, "g: {} vs {}", back.g, rgb.g);
        prop_assert!(back.b.abs_diff(rgb.b) <= 1, "b: {} vs {}", back.b, rgb.b);
    }

    /// Hsl::new accepts any finite input and normalizes into range.
    #[test]
    fn hsl_constructor_normalizes(
        h in -3600.0f32..3600.0,
        s in -50.0f32..150.0,
        l in -50.0f32..150.0,
    ) {
        let hsl = Hsl::new(h, s, l);
        prop_assert!((0.0..360.0).contains(&hsl.h));
        prop_assert!((0.0..=100.0).contains(&hsl.s));
        prop_assert!((0.0..=100.0).contains(&hsl.l));
    }

    /// Relative luminance is always within the WCAG unit interval.
    #[test]
    fn luminance_in_unit_interval(r: u8, g: u8, b: u8) {
        let lum = relative_luminance(Color::rgb(r, g, b));
        prop_assert!((0.0..=1.0).contains(&lum), "luminance = {lum}");
    }

    /// Contrast ratios are bounded by [1, 21] and symmetric in arguments.
    #[test]
    fn contrast_bounded_and_symmetric(
        (r1, g1, b1) in any::<(u8, u8, u8)>(),
        (r2, g2, b2) in any::<(u8, u8, u8)>(),
    ) {
        let a = Color::rgb(r1, g1, b1);
        let b = Color::rgb(r2, g2, b2);
        let forward = contrast_ratio(a, b);
        let backward = contrast_ratio(b, a);
        prop_assert!((1.0..=21.0).contains(&forward), "ratio = {forward}");
        prop_assert!((forward - backward).abs() < 1e-12);
    }

    /// Rotating a hue by any angle keeps saturation and lightness intact.
    #[test]
    fn hue_rotation_preserves_s_and_l(
        h in 0.0f32..360.0,
        s in 0.0f32..=100.0,
        l in 0.0f32..=100.0,
        degrees in -720.0f32..720.0,
    ) {
        let rotated = Hsl::new(h, s, l).rotate_hue(degrees);
        prop_assert!((0.0..360.0).contains(&rotated.h));
        prop_assert_eq!(rotated.s, s);
        prop_assert_eq!(rotated.l, l);
    }
}
