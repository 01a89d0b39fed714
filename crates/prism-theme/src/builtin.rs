//! Named preset palettes: ready-to-use configurations.
//!
//! Each preset is a specific combination of mode, hero hue, intensity,
//! monitor and theme that produces a distinctive, coherent palette.

use crate::config::{GenerationMode, MonitorType, PaletteConfig, ThemeMode};
use crate::roles::Preset;

/// Look up a builtin configuration by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_config(name: &str) -> Option<PaletteConfig> {
    use GenerationMode::{Golden, Hybrid, Monochromatic};
    use MonitorType::{Lcd, Oled};
    use ThemeMode::{Dark, Light};

    let (mode, hero_hue, chroma_intensity, monitor, theme) = match name {
        "prism" | "default" => (Hybrid, 211.0, 1.0, Oled, Dark),
        "prism-light" => (Hybrid, 211.0, 1.0, Oled, Light),
        "prism-lcd" => (Hybrid, 211.0, 1.0, Lcd, Dark),
        "monochrome" => (Monochromatic, 211.0, 0.6, Oled, Dark),
        "golden" => (Golden, 45.0, 1.0, Oled, Dark),
        "golden-light" => (Golden, 45.0, 1.0, Lcd, Light),
        "ember" => (Hybrid, 25.0, 0.9, Oled, Dark),
        "forest" => (Hybrid, 145.0, 0.8, Lcd, Dark),
        "muted" => (Hybrid, 260.0, 0.45, Lcd, Dark),
        _ => return None,
    };

    Some(PaletteConfig {
        mode,
        hero_hue,
        chroma_intensity,
        monitor,
        theme,
        name: name.to_owned(),
    })
}

/// Generate a builtin preset by name.
#[must_use]
pub fn builtin_preset(name: &str) -> Option<Preset> {
    builtin_config(name).map(|cfg| Preset::generate(&cfg))
}

/// List all available builtin preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &[
        "prism",
        "default",
        "prism-light",
        "prism-lcd",
        "monochrome",
        "golden",
        "golden-light",
        "ember",
        "forest",
        "muted",
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
