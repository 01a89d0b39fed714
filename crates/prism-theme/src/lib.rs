//! # prism-theme: contrast-enforced Base16 palette engine
//!
//! Turns one hero hue and a handful of switches into a sixteen-slot Base16
//! palette whose text and accents are readable against its background.
//!
//! # Architecture
//!
//! ```text
//! PaletteOptions (any subset of fields)
//!     │  apply_defaults
//!     ▼
//! config.rs:   PaletteConfig (mode, hero hue, intensity, monitor, theme)
//!     │
//!     ▼
//! golden.rs:   8 golden-angle hues from the hero hue
//! scale.rs:    per-slot lightness and chroma tables
//!     │
//!     ▼
//! palette.rs:  pass 1, OKLCH per slot → sRGB → 8-bit
//!              pass 2, contrast.rs solver lifts text to 4.5:1, accents to 3:1
//!     │
//!     ▼
//! report.rs:   ContrastReport (text / comment / accent, wcagVerified)
//! roles.rs:    syntax and UI role views, Preset bundle
//! ansi.rs:     16-color terminal mapping and OSC sequences
//! builtin.rs:  named presets
//! ```
//!
//! # Color Space
//!
//! Generation happens in OKLCH (perceptually uniform); contrast is measured
//! in sRGB relative luminance, the WCAG definition. Out-of-gamut OKLCH
//! values are clipped on the way to sRGB. Every palette color is snapped to
//! the 8-bit grid so the hex form and the stored color never disagree.
//!
//! Everything is pure and synchronous: the only state is read-only tables.

// Mathematical code uses small integer-to-float casts (indices, counts).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod ansi;
pub mod builtin;
pub mod config;
pub mod contrast;
pub mod golden;
pub mod palette;
pub mod report;
pub mod roles;
pub mod scale;

pub use builtin::{builtin_config, builtin_names, builtin_preset};
pub use config::{
    ConfigError, GenerationMode, MonitorType, PaletteConfig, PaletteOptions, ThemeMode,
};
pub use contrast::{
    WcagLevel, adjust_lightness_for_contrast, contrast_ratio, relative_luminance, wcag_aa,
    wcag_aa_large, wcag_aaa,
};
pub use golden::{GoldenHues, generate_golden_hues, nth_golden_hue};
pub use palette::{Base16Palette, PaletteError, generate_palette};
pub use report::{ContrastReport, verify_contrast};
pub use roles::{Preset, SyntaxColors, UiColors};
pub use scale::Slot;

// The conversion surface is re-exported so renderers need one dependency.
pub use prism_color::{
    ColorError, Oklab, Oklch, Srgb, hex_to_srgb, oklch_to_srgb, srgb_to_hex, srgb_to_oklch,
};
