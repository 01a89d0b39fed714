// SPDX-License-Identifier: MIT
//
// Angle and range helpers shared by the color pipeline and the hue
// generators. All hue arithmetic that accumulates (repeated rotations)
// happens in radians; degrees are the designer-facing unit.

/// The ratio of a circle's circumference to its diameter.
pub const PI: f64 = std::f64::consts::PI;

/// Full circle in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// The golden ratio, `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// The golden angle in radians, `2π / φ²` (≈ 2.399963).
pub const GOLDEN_ANGLE_RAD: f64 = TAU / (PHI * PHI);

/// The golden angle in degrees (≈ 137.5077640500378).
pub const GOLDEN_ANGLE_DEG: f64 = GOLDEN_ANGLE_RAD * (180.0 / PI);

/// Default hero hue: the "perfect blue", in degrees.
pub const PERFECT_BLUE_DEG: f64 = 211.0;

/// Default hero hue in radians.
pub const PERFECT_BLUE_RAD: f64 = PERFECT_BLUE_DEG * (PI / 180.0);

/// Convert degrees to radians.
#[inline]
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Convert radians to degrees.
#[inline]
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Normalize an angle to `[0, 2π)`.
#[inline]
#[must_use]
pub fn normalize_radians(rad: f64) -> f64 {
    let r = rad % TAU;
    // A tiny negative remainder folds to exactly TAU; keep the range open.
    if r < 0.0 { (r + TAU) % TAU } else { r }
}

/// Normalize an angle to `[0, 360)`.
#[inline]
#[must_use]
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg % 360.0;
    if d < 0.0 { (d + 360.0) % 360.0 } else { d }
}

/// Two-sided clamp. Callers guarantee `lo <= hi`.
#[inline]
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Shortest arc between two hues on the color wheel, in degrees.
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
