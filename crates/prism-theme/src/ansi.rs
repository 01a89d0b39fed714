//! Base16 → 16-color terminal mapping and the escape sequences that load
//! it into a running terminal.
//!
//! Sequence writers are pure: they encode to any `impl Write` and make no
//! decision about when to emit.

use std::io::{self, Write};

use prism_color::Srgb;
use serde::{Deserialize, Serialize};

use crate::palette::Base16Palette;
use crate::scale::Slot;

/// Slot behind each ANSI color index 0–15.
///
/// Bright variants reuse the accent of their normal counterpart; bright
/// black is the comment gray and bright white the brightest ramp slot.
pub const ANSI16_SLOTS: [Slot; 16] = [
    Slot::Base00, // 0  black
    Slot::Base08, // 1  red
    Slot::Base0B, // 2  green
    Slot::Base0A, // 3  yellow
    Slot::Base0D, // 4  blue
    Slot::Base0E, // 5  magenta
    Slot::Base0C, // 6  cyan
    Slot::Base05, // 7  white
    Slot::Base03, // 8  bright black
    Slot::Base08, // 9  bright red
    Slot::Base0B, // 10 bright green
    Slot::Base0A, // 11 bright yellow
    Slot::Base0D, // 12 bright blue
    Slot::Base0E, // 13 bright magenta
    Slot::Base0C, // 14 bright cyan
    Slot::Base07, // 15 bright white
];

/// A terminal color scheme derived from a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalColors {
    pub background: String,
    pub foreground: String,
    pub cursor: String,
    pub selection: String,
    pub ansi: [String; 16],
}

impl TerminalColors {
    #[must_use]
    pub fn from_palette(p: &Base16Palette) -> Self {
        Self {
            background: p.hex(Slot::Base00),
            foreground: p.hex(Slot::Base05),
            cursor: p.hex(Slot::Base05),
            selection: p.hex(Slot::Base02),
            ansi: ANSI16_SLOTS.map(|slot| p.hex(slot)),
        }
    }
}

// ─── Escape sequences ───────────────────────────────────────────────────────

/// X11 `rgb:rr/gg/bb` form used by the OSC color commands.
fn x11_rgb(color: Srgb) -> String {
    let (r, g, b) = color.to_rgb8();
    format!("rgb:{r:02x}/{g:02x}/{b:02x}")
}

/// Set ANSI palette entry `index` (OSC 4).
#[inline]
pub fn set_palette_entry(w: &mut impl Write, index: u8, color: Srgb) -> io::Result<()> {
    write!(w, "\x1b]4;{index};{}\x1b\\", x11_rgb(color))
}

/// Set the default foreground (OSC 10).
#[inline]
pub fn set_foreground(w: &mut impl Write, color: Srgb) -> io::Result<()> {
    write!(w, "\x1b]10;{}\x1b\\", x11_rgb(color))
}

/// Set the default background (OSC 11).
#[inline]
pub fn set_background(w: &mut impl Write, color: Srgb) -> io::Result<()> {
    write!(w, "\x1b]11;{}\x1b\\", x11_rgb(color))
}

/// Set the cursor color (OSC 12).
#[inline]
pub fn set_cursor_color(w: &mut impl Write, color: Srgb) -> io::Result<()> {
    write!(w, "\x1b]12;{}\x1b\\", x11_rgb(color))
}

/// Load the whole palette: 16 ANSI entries, then foreground, background
/// and cursor.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_palette(w: &mut impl Write, p: &Base16Palette) -> io::Result<()> {
    for (index, slot) in (0u8..).zip(ANSI16_SLOTS) {
        set_palette_entry(w, index, p[slot])?;
    }
    set_foreground(w, p[Slot::Base05])?;
    set_background(w, p[Slot::Base00])?;
    set_cursor_color(w, p[Slot::Base05])
}

/// Restore the terminal's own palette (OSC 104, 110, 111, 112).
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn reset_palette(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b]104\x1b\\\x1b]110\x1b\\\x1b]111\x1b\\\x1b]112\x1b\\")
}

// ─── Tests ──────────────────────────────────────────────────────────────────
