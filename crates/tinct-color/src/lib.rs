#![forbid(unsafe_code)]

//! Color primitives and contrast math for tinct.
//!
//! # Role in tinct
//! `tinct-color` is the shared vocabulary for colors. The theme assembler,
//! shade-scale generator, and runtime applier all speak in these types, so
//! malformed color values are rejected once, at this boundary, and never
//! travel further into the system.
//!
//! # This crate provides
//! - [`Rgb`] and [`Hsl`] component triples and the discriminated [`Color`].
//! - Hex parsing and formatting (`#RGB` / `#RRGGBB`, marker optional).
//! - Lossless-enough conversions between the representations (±1 per 8-bit
//!   channel on a full round trip).
//! - WCAG relative luminance, contrast ratios, and foreground resolution
//!   with a non-fatal [`LowContrastWarning`].
//!
//! All functions here are pure; nothing in this crate performs I/O or holds
//! state.

pub mod color;
pub mod contrast;

pub use color::{
    Color, ColorError, Hsl, Rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex,
    rgb_to_hsl,
};
pub use contrast::{
    // WCAG thresholds
    WCAG_AA_LARGE_TEXT,
    WCAG_AA_NORMAL_TEXT,
    WCAG_AAA_LARGE_TEXT,
    WCAG_AAA_NORMAL_TEXT,
    // Contrast utilities
    ForegroundChoice,
    LowContrastWarning,
    contrast_ratio,
    meets_wcag_aa,
    relative_luminance,
    resolve_foreground,
    srgb_to_linear,
};
