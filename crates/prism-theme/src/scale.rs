//! Base16 slots and the semantic lightness/chroma scales.
//!
//! The sixteen slots are fixed identifiers, not a sequence: `base00`–`base07`
//! form the background → foreground ramp, `base08`–`base0F` are the eight
//! accents. Each table below maps every slot to one number and is read-only
//! for the lifetime of the process.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// One of the sixteen Base16 palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    /// Background (deepest).
    #[serde(rename = "base00")]
    Base00,
    /// Lighter background (status bars, panels).
    #[serde(rename = "base01")]
    Base01,
    /// Selection background.
    #[serde(rename = "base02")]
    Base02,
    /// Comments, invisibles.
    #[serde(rename = "base03")]
    Base03,
    /// Dark foreground.
    #[serde(rename = "base04")]
    Base04,
    /// Default foreground.
    #[serde(rename = "base05")]
    Base05,
    /// Light foreground.
    #[serde(rename = "base06")]
    Base06,
    /// Brightest foreground.
    #[serde(rename = "base07")]
    Base07,
    /// Accent 1: errors, tags.
    #[serde(rename = "base08")]
    Base08,
    /// Accent 2: warnings, numbers.
    #[serde(rename = "base09")]
    Base09,
    /// Accent 3: the hero color.
    #[serde(rename = "base0A")]
    Base0A,
    /// Accent 4: strings, success.
    #[serde(rename = "base0B")]
    Base0B,
    /// Accent 5: support, info.
    #[serde(rename = "base0C")]
    Base0C,
    /// Accent 6: functions, links.
    #[serde(rename = "base0D")]
    Base0D,
    /// Accent 7: keywords.
    #[serde(rename = "base0E")]
    Base0E,
    /// Accent 8: deprecated.
    #[serde(rename = "base0F")]
    Base0F,
}

impl Slot {
    /// All slots in documentation order.
    pub const ALL: [Self; 16] = [
        Self::Base00, Self::Base01, Self::Base02, Self::Base03,
        Self::Base04, Self::Base05, Self::Base06, Self::Base07,
        Self::Base08, Self::Base09, Self::Base0A, Self::Base0B,
        Self::Base0C, Self::Base0D, Self::Base0E, Self::Base0F,
    ];

    /// Foreground slots held to WCAG AA (4.5:1) against `base00`.
    pub const TEXT: [Self; 3] = [Self::Base05, Self::Base06, Self::Base07];

    /// Accent slots held to WCAG AA-large (3:1) against `base00`.
    /// `base0F` (deprecated) is not enforced.
    pub const ENFORCED_ACCENTS: [Self; 7] = [
        Self::Base08, Self::Base09, Self::Base0A, Self::Base0B,
        Self::Base0C, Self::Base0D, Self::Base0E,
    ];

    /// Position in [`Slot::ALL`] (the slot's trailing hex digit).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Accent position 0–7 for `base08`–`base0F`; `None` for the ramp.
    #[inline]
    #[must_use]
    pub const fn accent_index(self) -> Option<usize> {
        let i = self.index();
        if i >= 8 { Some(i - 8) } else { None }
    }

    #[inline]
    #[must_use]
    pub const fn is_accent(self) -> bool {
        self.accent_index().is_some()
    }

    /// The canonical key, e.g. `"base0A"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Base00 => "base00",
            Self::Base01 => "base01",
            Self::Base02 => "base02",
            Self::Base03 => "base03",
            Self::Base04 => "base04",
            Self::Base05 => "base05",
            Self::Base06 => "base06",
            Self::Base07 => "base07",
            Self::Base08 => "base08",
            Self::Base09 => "base09",
            Self::Base0A => "base0A",
            Self::Base0B => "base0B",
            Self::Base0C => "base0C",
            Self::Base0D => "base0D",
            Self::Base0E => "base0E",
            Self::Base0F => "base0F",
        }
    }

    /// Parse a slot key. The trailing hex digit is case-insensitive
    /// (`base0a` and `base0A` are the same slot).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let digit = key.strip_prefix("base0")?;
        if digit.len() != 1 {
            return None;
        }
        let idx = usize::from_str_radix(digit, 16).ok()?;
        Self::ALL.get(idx).copied()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Semantic scales
// ---------------------------------------------------------------------------

/// Target OKLCH lightness per slot for dark themes.
pub static DARK_LIGHTNESS: [f64; 16] = [
    0.00, // base00  maximum depth
    0.12, // base01  subtle elevation
    0.18, // base02  selection
    0.45, // base03  comments
    0.55, // base04  muted foreground
    0.80, // base05  primary text
    0.90, // base06  emphasized
    0.97, // base07  maximum brightness
    0.55, // base08
    0.62, // base09
    0.70, // base0A  hero
    0.75, // base0B
    0.78, // base0C
    0.82, // base0D
    0.85, // base0E
    0.50, // base0F  subtle
];

/// Target OKLCH lightness per slot for light themes.
pub static LIGHT_LIGHTNESS: [f64; 16] = [
    0.98, // base00  bright background
    0.94, // base01
    0.88, // base02  selection
    0.55, // base03  comments
    0.45, // base04
    0.25, // base05  primary text
    0.18, // base06
    0.10, // base07  maximum darkness
    0.50, // base08
    0.45, // base09
    0.40, // base0A  hero
    0.38, // base0B
    0.35, // base0C
    0.32, // base0D
    0.30, // base0E
    0.55, // base0F
];

/// Fraction of the palette's maximum chroma each slot receives.
/// Ramp slots stay near-gray; accents are saturated.
pub static CHROMA_MULTIPLIERS: [f64; 16] = [
    0.08, 0.10, 0.12, 0.15, // base00–base03
    0.08, 0.06, 0.04, 0.02, // base04–base07
    1.00, 0.95, 1.00, 0.90, // base08–base0B
    0.85, 0.88, 0.92, 0.40, // base0C–base0F
];

/// How much darker `base01`/`base02` get on OLED dark themes; `base00`
/// is forced to true black.
pub const OLED_DELTAS: [(Slot, f64); 2] = [(Slot::Base01, 0.04), (Slot::Base02, 0.03)];

/// Chroma at intensity 1.0: the practical OKLCH ceiling for sRGB accents.
pub const MAX_CHROMA: f64 = 0.18;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
