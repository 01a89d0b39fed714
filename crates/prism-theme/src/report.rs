//! Contrast verification for finished palettes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::contrast::{WcagLevel, contrast_ratio, wcag_aa, wcag_aa_large};
use crate::palette::Base16Palette;
use crate::scale::Slot;

/// The three characteristic ratios of a palette against `base00`, rounded
/// to two decimals, and whether they clear WCAG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    /// `base05` (default text).
    pub text: f64,
    /// `base03` (comments).
    pub comment: f64,
    /// `base0A` (hero accent).
    pub accent: f64,
    /// Text at AA (4.5:1), comment and accent at AA-large (3:1). Judged on
    /// the unrounded ratios.
    pub wcag_verified: bool,
}

/// Measure any palette, generated here or not.
#[must_use]
pub fn verify_contrast(palette: &Base16Palette) -> ContrastReport {
    let bg = palette[Slot::Base00];
    let text = contrast_ratio(palette[Slot::Base05], bg);
    let comment = contrast_ratio(palette[Slot::Base03], bg);
    let accent = contrast_ratio(palette[Slot::Base0A], bg);

    ContrastReport {
        text: round2(text),
        comment: round2(comment),
        accent: round2(accent),
        wcag_verified: wcag_aa(text) && wcag_aa_large(comment) && wcag_aa_large(accent),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// One line per ratio with the WCAG level of the displayed, rounded value,
/// then the overall verdict. The verdict comes from the unrounded ratios,
/// so a ratio shown as `4.50:1  AA` can still sit under `not verified`.
impl fmt::Display for ContrastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "text     {:>6.2}:1  {}", self.text, WcagLevel::of(self.text).label())?;
        writeln!(f, "comment  {:>6.2}:1  {}", self.comment, WcagLevel::of(self.comment).label())?;
        writeln!(f, "accent   {:>6.2}:1  {}", self.accent, WcagLevel::of(self.accent).label())?;
        write!(f, "wcag     {}", if self.wcag_verified { "verified" } else { "not verified" })
    }
}
