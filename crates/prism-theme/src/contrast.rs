//! WCAG 2.1 luminance, contrast ratio, and the lightness solver.
//!
//! Readability is *measured* in sRGB relative luminance (the WCAG
//! definition) but *adjusted* in OKLCH lightness, where a step up or down
//! leaves hue and chroma untouched.
//!
//! Thresholds:
//!
//! - AA, normal text: >= 4.5:1
//! - AA, large text:  >= 3.0:1
//! - AAA, normal text: >= 7.0:1

use log::debug;
use prism_color::{Oklch, Srgb, srgb_to_linear};

/// WCAG AA threshold for normal text.
pub const AA_NORMAL: f64 = 4.5;

/// WCAG AA threshold for large text (and UI accents).
pub const AA_LARGE: f64 = 3.0;

/// WCAG AAA threshold for normal text.
pub const AAA_NORMAL: f64 = 7.0;

/// Number of halvings the lightness solver performs.
pub const SOLVER_ITERATIONS: usize = 50;

/// Absolute distance from the target ratio accepted as a hit.
pub const SOLVER_TOLERANCE: f64 = 0.01;

/// Relative luminance of an sRGB color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// In `[0, 1]` for in-range input: 0 is black, 1 is white.
#[must_use]
pub fn relative_luminance(rgb: Srgb) -> f64 {
    let r = srgb_to_linear(rgb.r);
    let g = srgb_to_linear(rgb.g);
    let b = srgb_to_linear(rgb.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG 2.1 contrast ratio between two colors.
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments, always in `[1, 21]` for in-range input.
#[must_use]
pub fn contrast_ratio(fg: Srgb, bg: Srgb) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// AA for normal text (4.5:1).
#[inline]
#[must_use]
pub fn wcag_aa(ratio: f64) -> bool {
    ratio >= AA_NORMAL
}

/// AA for large text (3:1).
#[inline]
#[must_use]
pub fn wcag_aa_large(ratio: f64) -> bool {
    ratio >= AA_LARGE
}

/// AAA for normal text (7:1).
#[inline]
#[must_use]
pub fn wcag_aaa(ratio: f64) -> bool {
    ratio >= AAA_NORMAL
}

/// The highest WCAG level a contrast ratio reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagLevel {
    /// Below 3:1.
    Fail,
    /// 3:1, large text only.
    AaLarge,
    /// 4.5:1.
    Aa,
    /// 7:1.
    Aaa,
}

impl WcagLevel {
    #[must_use]
    pub fn of(ratio: f64) -> Self {
        if wcag_aaa(ratio) {
            Self::Aaa
        } else if wcag_aa(ratio) {
            Self::Aa
        } else if wcag_aa_large(ratio) {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::AaLarge => "AA-large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

/// Binary-search the OKLCH lightness of `color` until its contrast against
/// `bg` is within [`SOLVER_TOLERANCE`] of `target`.
///
/// Hue and chroma are held fixed. The bracket is `[color.l, 1]` when
/// `make_lighter`, else `[0, color.l]`, and is halved exactly
/// [`SOLVER_ITERATIONS`] times. Contrast is assumed monotonic in lightness
/// over the bracket. If no midpoint lands within tolerance the final
/// bracket midpoint is returned as a best effort; this never fails.
#[must_use]
pub fn adjust_lightness_for_contrast(
    color: Oklch,
    bg: Srgb,
    target: f64,
    make_lighter: bool,
) -> Oklch {
    let (mut lo, mut hi) = if make_lighter { (color.l, 1.0) } else { (0.0, color.l) };

    for _ in 0..SOLVER_ITERATIONS {
        let mid = (lo + hi) * 0.5;
        let candidate = color.with_lightness(mid);
        let ratio = contrast_ratio(candidate.to_srgb(), bg);

        if (ratio - target).abs() < SOLVER_TOLERANCE {
            return candidate;
        }

        // Below target: move away from the background. Above: move back.
        if ratio < target {
            if make_lighter { lo = mid } else { hi = mid }
        } else if make_lighter {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    let best = color.with_lightness((lo + hi) * 0.5);
    debug!(
        "lightness solver did not reach {target:.2}:1 within {SOLVER_ITERATIONS} steps; \
         settling at L={:.4} ({:.3}:1)",
        best.l,
        contrast_ratio(best.to_srgb(), bg),
    );
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
