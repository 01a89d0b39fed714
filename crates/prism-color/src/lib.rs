// SPDX-License-Identifier: MIT
//
// prism-color: the color math underneath the PRISM palette engine.
//
// Pure, stateless functions and `Copy` value types:
//
//   angle → degree/radian conversion, normalization, clamping, constants
//   space → sRGB ↔ linear ↔ Oklab ↔ OKLCH
//   hex   → strict `#rrggbb` codec
//
// Nothing here allocates except hex encoding, and nothing touches I/O.
// Every function is safe to call from any number of threads.

pub mod angle;
pub mod hex;
pub mod space;

pub use angle::{
    GOLDEN_ANGLE_DEG, GOLDEN_ANGLE_RAD, PERFECT_BLUE_DEG, PERFECT_BLUE_RAD, PHI, PI, TAU,
};
pub use hex::{ColorError, hex_to_srgb, srgb_to_hex};
pub use space::{
    LinearRgb, Oklab, Oklch, Srgb, linear_to_srgb, oklab_to_oklch, oklab_to_srgb, oklch_to_oklab,
    oklch_to_srgb, srgb_to_linear, srgb_to_oklab, srgb_to_oklch,
};
