// SPDX-License-Identifier: MIT
//
// Hex codec: `#rrggbb` ↔ `Srgb`.
//
// Encoding rounds each clamped channel to a byte and emits two lowercase
// hex digits. Decoding accepts exactly six hex digits, with or without a
// leading `#`, and rejects anything else with `ColorError`.

use std::str::FromStr;

use thiserror::Error;

use crate::space::Srgb;

/// Errors raised by the color codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a `#rrggbb` / `rrggbb` hex color.
    #[error("invalid color format: {input:?} (expected #rrggbb)")]
    InvalidColorFormat { input: String },
}

/// Encode an sRGB color as `#rrggbb`.
#[must_use]
pub fn srgb_to_hex(rgb: Srgb) -> String {
    let (r, g, b) = rgb.to_rgb8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Decode a `#rrggbb` (or `rrggbb`) string.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if the string is not exactly
/// six hex digits after the optional `#`.
pub fn hex_to_srgb(hex: &str) -> Result<Srgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let bytes = digits.as_bytes();
    let invalid = || ColorError::InvalidColorFormat { input: hex.to_owned() };

    if bytes.len() != 6 {
        return Err(invalid());
    }

    let r = parse_hex_byte(bytes[0], bytes[1]).ok_or_else(invalid)?;
    let g = parse_hex_byte(bytes[2], bytes[3]).ok_or_else(invalid)?;
    let b = parse_hex_byte(bytes[4], bytes[5]).ok_or_else(invalid)?;
    Ok(Srgb::from_rgb8(r, g, b))
}

/// Whether `s` is in the canonical palette form: `#` and six lowercase
/// hex digits.
#[must_use]
pub fn is_canonical_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s.bytes().skip(1).all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f'))
}

impl Srgb {
    /// Decode a hex color. See [`hex_to_srgb`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] on malformed input.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        hex_to_srgb(s)
    }

    /// Encode as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        srgb_to_hex(self)
    }
}

impl FromStr for Srgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_srgb(s)
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(parse_hex_digit(hi)? << 4 | parse_hex_digit(lo)?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
