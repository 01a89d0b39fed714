//! Base16 palette synthesis.
//!
//! Two passes over the sixteen slots:
//!
//! 1. **Base generation.** Each slot gets its lightness from the theme's
//!    table (deepened for OLED dark themes), its chroma from the role
//!    multiplier, and its hue from the generation mode. The OKLCH triple is
//!    gamut-clipped to sRGB and snapped to the 8-bit grid.
//! 2. **Contrast enforcement.** Foreground slots below 4.5:1 and accent
//!    slots below 3:1 against `base00` are handed to the lightness solver.
//!    The search direction follows the theme (lighter on dark, darker on
//!    light), not the measured background.
//!
//! The result is a plain value; nothing is cached between calls.

use std::collections::BTreeMap;
use std::ops::Index;

use log::{debug, trace};
use prism_color::angle::{clamp, normalize_degrees};
use prism_color::{ColorError, Oklch, Srgb};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::config::{GenerationMode, MonitorType, PaletteConfig, ThemeMode};
use crate::contrast::{AA_LARGE, AA_NORMAL, adjust_lightness_for_contrast, contrast_ratio};
use crate::golden::generate_golden_hues;
use crate::scale::{
    CHROMA_MULTIPLIERS, DARK_LIGHTNESS, LIGHT_LIGHTNESS, MAX_CHROMA, OLED_DELTAS, Slot,
};

/// Errors raised when assembling a palette from external key/hex pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette is missing slot {0}")]
    MissingSlot(Slot),

    #[error("unknown palette slot {0:?}")]
    UnknownSlot(String),

    #[error("slot {0} is given more than once")]
    DuplicateSlot(Slot),

    #[error("bad color for {slot}: {source}")]
    InvalidColor {
        slot: Slot,
        #[source]
        source: ColorError,
    },
}

// ---------------------------------------------------------------------------
// Base16Palette
// ---------------------------------------------------------------------------

/// Sixteen colors keyed by [`Slot`].
///
/// Every color sits on the 8-bit grid, so [`Base16Palette::hex`] and
/// [`Base16Palette::get`] always agree. Serializes as a map from slot key
/// to `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct Base16Palette {
    colors: [Srgb; 16],
}

impl Base16Palette {
    /// Build a palette from colors in [`Slot::ALL`] order, quantizing each.
    #[must_use]
    pub fn from_colors(colors: [Srgb; 16]) -> Self {
        Self { colors: colors.map(Srgb::quantize) }
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, slot: Slot) -> Srgb {
        self.colors[slot.index()]
    }

    /// The slot's color as `#rrggbb`.
    #[must_use]
    pub fn hex(&self, slot: Slot) -> String {
        self.get(slot).to_hex()
    }

    /// Replace one slot's color (quantized).
    pub fn set(&mut self, slot: Slot, color: Srgb) {
        self.colors[slot.index()] = color.quantize();
    }

    /// `(slot, hex)` pairs in documentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, String)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.hex(slot)))
    }

    #[must_use]
    pub const fn colors(&self) -> &[Srgb; 16] {
        &self.colors
    }

    /// Contrast of `slot` against `base00`.
    #[must_use]
    pub fn contrast_against_background(&self, slot: Slot) -> f64 {
        contrast_ratio(self.get(slot), self.get(Slot::Base00))
    }
}

impl Index<Slot> for Base16Palette {
    type Output = Srgb;

    fn index(&self, slot: Slot) -> &Srgb {
        &self.colors[slot.index()]
    }
}

impl Serialize for Base16Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Slot::ALL.len()))?;
        for (slot, hex) in self.iter() {
            map.serialize_entry(slot.key(), &hex)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, String>> for Base16Palette {
    type Error = PaletteError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut colors: [Option<Srgb>; 16] = [None; 16];
        for (key, value) in &map {
            let slot = Slot::from_key(key).ok_or_else(|| PaletteError::UnknownSlot(key.clone()))?;
            let color = Srgb::from_hex(value)
                .map_err(|source| PaletteError::InvalidColor { slot, source })?;
            if colors[slot.index()].replace(color).is_some() {
                return Err(PaletteError::DuplicateSlot(slot));
            }
        }

        let mut out = [Srgb::BLACK; 16];
        for slot in Slot::ALL {
            out[slot.index()] = colors[slot.index()].ok_or(PaletteError::MissingSlot(slot))?;
        }
        Ok(Self { colors: out })
    }
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Generate a complete Base16 palette.
///
/// Deterministic: equal configs give equal palettes. `config.name` is not
/// read.
#[must_use]
pub fn generate_palette(config: &PaletteConfig) -> Base16Palette {
    let hero = normalize_degrees(config.hero_hue);
    let lightness = lightness_table(config.theme, config.monitor);
    let max_chroma = MAX_CHROMA * config.chroma_intensity;
    let golden = generate_golden_hues(hero, 8);

    debug!("generating palette: {config}");

    // Pass 1: base generation.
    let mut colors = [Srgb::BLACK; 16];
    for slot in Slot::ALL {
        let i = slot.index();
        let lch = Oklch::new(
            clamp(lightness[i], 0.0, 1.0),
            max_chroma * CHROMA_MULTIPLIERS[i],
            slot_hue(config.mode, slot, hero, &golden),
        );
        if !lch.in_srgb_gamut() {
            debug!("{slot}: oklch({:.3} {:.3} {:.1}) clipped to sRGB", lch.l, lch.c, lch.h);
        }
        colors[i] = lch.to_srgb().quantize();
        trace!("{slot} = {}", colors[i]);
    }

    // Pass 2: contrast enforcement against base00.
    let bg = colors[Slot::Base00.index()];
    let make_lighter = config.theme.is_dark();
    for slot in Slot::TEXT {
        enforce_contrast(&mut colors, slot, bg, AA_NORMAL, make_lighter);
    }
    for slot in Slot::ENFORCED_ACCENTS {
        enforce_contrast(&mut colors, slot, bg, AA_LARGE, make_lighter);
    }

    Base16Palette { colors }
}

/// Per-slot target lightness for a theme/monitor combination.
fn lightness_table(theme: ThemeMode, monitor: MonitorType) -> [f64; 16] {
    let mut table = match theme {
        ThemeMode::Dark => DARK_LIGHTNESS,
        ThemeMode::Light => LIGHT_LIGHTNESS,
    };
    if theme == ThemeMode::Dark && monitor == MonitorType::Oled {
        table[Slot::Base00.index()] = 0.0;
        for (slot, delta) in OLED_DELTAS {
            let l = &mut table[slot.index()];
            *l = (*l - delta).max(0.0);
        }
    }
    table
}

/// Hue for `slot` under `mode`. `golden` holds 8 hues starting at `hero`.
fn slot_hue(mode: GenerationMode, slot: Slot, hero: f64, golden: &[f64]) -> f64 {
    match (mode, slot.accent_index()) {
        (GenerationMode::Monochromatic, _) => hero,
        (GenerationMode::Golden | GenerationMode::Hybrid, Some(i)) => golden[i],
        (GenerationMode::Golden, None) => golden[0],
        (GenerationMode::Hybrid, None) => hero,
    }
}

/// Re-solve `slot`'s lightness if it falls short of `target` against `bg`.
fn enforce_contrast(
    colors: &mut [Srgb; 16],
    slot: Slot,
    bg: Srgb,
    target: f64,
    make_lighter: bool,
) {
    let i = slot.index();
    let before = contrast_ratio(colors[i], bg);
    if before >= target {
        return;
    }

    let adjusted = adjust_lightness_for_contrast(colors[i].to_oklch(), bg, target, make_lighter);
    colors[i] = adjusted.to_srgb().quantize();
    debug!(
        "{slot}: contrast {before:.2}:1 below {target}:1, corrected to {:.2}:1 ({})",
        contrast_ratio(colors[i], bg),
        colors[i],
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
