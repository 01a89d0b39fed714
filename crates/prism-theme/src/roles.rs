//! Semantic role mappings: which Base16 slot paints which token or
//! interface element.
//!
//! Renderers that emit editor or terminal theme files read colors through
//! these structs instead of hard-coding slot numbers.

use serde::{Deserialize, Serialize};

use crate::config::{PaletteConfig, ThemeMode};
use crate::palette::{Base16Palette, generate_palette};
use crate::report::{ContrastReport, verify_contrast};
use crate::scale::Slot;

// ---------------------------------------------------------------------------
// Syntax
// ---------------------------------------------------------------------------

/// Hex colors for code tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxColors {
    pub comment: String,
    pub string: String,
    pub number: String,
    pub keyword: String,
    pub function: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub variable: String,
    pub property: String,
    pub operator: String,
    pub punctuation: String,
    pub tag: String,
    pub attribute: String,
}

impl SyntaxColors {
    /// Slot behind each token role, in field order.
    pub const SLOTS: [(&'static str, Slot); 12] = [
        ("comment", Slot::Base03),
        ("string", Slot::Base0B),
        ("number", Slot::Base09),
        ("keyword", Slot::Base0E),
        ("function", Slot::Base0D),
        ("type", Slot::Base0A),
        ("variable", Slot::Base05),
        ("property", Slot::Base05),
        ("operator", Slot::Base04),
        ("punctuation", Slot::Base04),
        ("tag", Slot::Base08),
        ("attribute", Slot::Base09),
    ];

    #[must_use]
    pub fn from_palette(p: &Base16Palette) -> Self {
        Self {
            comment: p.hex(Slot::Base03),
            string: p.hex(Slot::Base0B),
            number: p.hex(Slot::Base09),
            keyword: p.hex(Slot::Base0E),
            function: p.hex(Slot::Base0D),
            type_: p.hex(Slot::Base0A),
            variable: p.hex(Slot::Base05),
            property: p.hex(Slot::Base05),
            operator: p.hex(Slot::Base04),
            punctuation: p.hex(Slot::Base04),
            tag: p.hex(Slot::Base08),
            attribute: p.hex(Slot::Base09),
        }
    }
}

// ---------------------------------------------------------------------------
// UI
// ---------------------------------------------------------------------------

/// Hex colors for interface chrome and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiColors {
    pub bg: String,
    pub fg: String,
    pub accent: String,
    pub error: String,
    pub warning: String,
    pub success: String,
    pub info: String,
}

impl UiColors {
    pub const SLOTS: [(&'static str, Slot); 7] = [
        ("bg", Slot::Base00),
        ("fg", Slot::Base05),
        ("accent", Slot::Base0A),
        ("error", Slot::Base08),
        ("warning", Slot::Base09),
        ("success", Slot::Base0B),
        ("info", Slot::Base0D),
    ];

    #[must_use]
    pub fn from_palette(p: &Base16Palette) -> Self {
        Self {
            bg: p.hex(Slot::Base00),
            fg: p.hex(Slot::Base05),
            accent: p.hex(Slot::Base0A),
            error: p.hex(Slot::Base08),
            warning: p.hex(Slot::Base09),
            success: p.hex(Slot::Base0B),
            info: p.hex(Slot::Base0D),
        }
    }
}

// ---------------------------------------------------------------------------
// Preset
// ---------------------------------------------------------------------------

/// A generated palette bundled with its role views and contrast report,
/// ready to hand to a theme-file writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    pub name: String,
    pub theme: ThemeMode,
    pub palette: Base16Palette,
    pub syntax: SyntaxColors,
    pub ui: UiColors,
    pub contrast: ContrastReport,
}

impl Preset {
    /// Generate the palette for `config` and derive everything else from it.
    #[must_use]
    pub fn generate(config: &PaletteConfig) -> Self {
        let palette = generate_palette(config);
        Self {
            name: config.name.clone(),
            theme: config.theme,
            syntax: SyntaxColors::from_palette(&palette),
            ui: UiColors::from_palette(&palette),
            contrast: verify_contrast(&palette),
            palette,
        }
    }
}
