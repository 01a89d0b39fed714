//! Golden-angle hue generation.
//!
//! Successive rotations by the golden angle (2π/φ² ≈ 137.508°) scatter
//! points around the circle so that any prefix of the sequence splits it
//! into arcs of at most three distinct lengths. Accent hues drawn from the
//! sequence therefore never bunch up, however many are requested.
//!
//! The rotation is done in radians and converted to degrees once per term,
//! so the n-th hue carries a single rounding step rather than n of them.

use prism_color::angle::{normalize_degrees, normalize_radians, to_degrees, to_radians};
use prism_color::GOLDEN_ANGLE_RAD;

/// The `n`-th hue (degrees, `[0, 360)`) of the golden sequence starting at
/// `base_hue`. `n = 0` is the normalized base hue.
#[must_use]
pub fn nth_golden_hue(base_hue: f64, n: usize) -> f64 {
    let rad = normalize_radians((n as f64).mul_add(GOLDEN_ANGLE_RAD, to_radians(base_hue)));
    // A value a hair under 2π can round up to exactly 360° on conversion.
    normalize_degrees(to_degrees(rad))
}

/// The first `count` hues of the golden sequence starting at `base_hue`.
#[must_use]
pub fn generate_golden_hues(base_hue: f64, count: usize) -> Vec<f64> {
    GoldenHues::new(base_hue, count).collect()
}

/// Finite iterator over the golden hue sequence.
///
/// Cloning yields an independent iterator at the same position, so the
/// sequence can be replayed from any point.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenHues {
    base_hue: f64,
    next: usize,
    count: usize,
}

impl GoldenHues {
    #[must_use]
    pub const fn new(base_hue: f64, count: usize) -> Self {
        Self { base_hue, next: 0, count }
    }
}

impl Iterator for GoldenHues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let hue = nth_golden_hue(self.base_hue, self.next);
        self.next += 1;
        Some(hue)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for GoldenHues {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
