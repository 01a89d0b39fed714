//! End-to-end checks through the public API only.

use pretty_assertions::assert_eq;
use prism_theme::{
    Base16Palette, GenerationMode, MonitorType, PaletteConfig, PaletteOptions, Slot, ThemeMode,
    contrast_ratio, generate_palette, hex_to_srgb, nth_golden_hue, oklch_to_srgb, srgb_to_oklch,
    verify_contrast, wcag_aa, wcag_aaa,
};

fn config(json: &str) -> PaletteConfig {
    PaletteOptions::from_json(json).unwrap().apply_defaults()
}

fn ratio(palette: &Base16Palette, fg: Slot) -> f64 {
    let fg = hex_to_srgb(&palette.hex(fg)).unwrap();
    let bg = hex_to_srgb(&palette.hex(Slot::Base00)).unwrap();
    contrast_ratio(fg, bg)
}

// ── Palette generation ──────────────────────────────────────────────

#[test]
fn oled_dark_background_is_pure_black() {
    let cfg = config(
        r#"{ "heroHue": 211, "chromaIntensity": 1, "monitor": "oled", "theme": "dark" }"#,
    );
    assert_eq!(generate_palette(&cfg).hex(Slot::Base00), "#000000");
}

#[test]
fn oled_black_holds_for_every_hue() {
    for hue in [0.0, 45.0, 137.5, 211.0, 300.0, -90.0] {
        let cfg = PaletteConfig { hero_hue: hue, ..PaletteConfig::default() };
        assert_eq!(generate_palette(&cfg).hex(Slot::Base00), "#000000", "hue {hue}");
    }
}

#[test]
fn lcd_lifts_background_ramp_only() {
    let cfg = PaletteConfig { monitor: MonitorType::Lcd, ..PaletteConfig::default() };
    let p = generate_palette(&cfg);
    // base00 is still L = 0 on LCD; only base01/base02 move.
    assert_eq!(p.hex(Slot::Base00), "#000000");
    let oled = generate_palette(&PaletteConfig::default());
    assert!(ratio(&p, Slot::Base01) > ratio(&oled, Slot::Base01));
}

#[test]
fn dark_hybrid_meets_text_and_accent_targets() {
    let p = generate_palette(&config(r#"{ "theme": "dark", "mode": "hybrid" }"#));
    assert!(ratio(&p, Slot::Base05) >= 4.5);
    assert!(ratio(&p, Slot::Base0A) >= 3.0);
}

#[test]
fn every_mode_and_theme_meets_targets() {
    for mode in [GenerationMode::Monochromatic, GenerationMode::Golden, GenerationMode::Hybrid] {
        for theme in [ThemeMode::Dark, ThemeMode::Light] {
            for monitor in [MonitorType::Oled, MonitorType::Lcd] {
                let cfg = PaletteConfig { mode, theme, monitor, ..PaletteConfig::default() };
                let p = generate_palette(&cfg);
                for slot in [Slot::Base05, Slot::Base06, Slot::Base07] {
                    assert!(ratio(&p, slot) >= 4.5, "{mode} {theme} {monitor} {slot}");
                }
                assert!(ratio(&p, Slot::Base0A) >= 3.0, "{mode} {theme} {monitor}");
            }
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let cfg = config(r#"{ "mode": "golden", "heroHue": 77.7, "chromaIntensity": 0.4 }"#);
    let a = generate_palette(&cfg);
    let b = generate_palette(&cfg);
    assert_eq!(a, b);
    assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
}

#[test]
fn output_keys_and_format() {
    let p = generate_palette(&PaletteConfig::default());
    let json = serde_json::to_value(p).unwrap();
    let map = json.as_object().unwrap();
    assert_eq!(map.len(), 16);
    for slot in Slot::ALL {
        let hex = map[slot.key()].as_str().unwrap();
        assert_eq!(hex.len(), 7, "{slot}");
        assert!(hex.starts_with('#'));
        assert!(hex[1..].bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')), "{hex}");
    }
}

// ── Golden hues ─────────────────────────────────────────────────────

#[test]
fn golden_sequence_anchors() {
    assert!(nth_golden_hue(0.0, 0).abs() < 1e-12);
    assert!((nth_golden_hue(0.0, 1) - 137.5078).abs() < 1e-3);
}

// ── WCAG ────────────────────────────────────────────────────────────

#[test]
fn wcag_predicate_boundaries() {
    assert!(wcag_aa(4.5));
    assert!(!wcag_aa(4.49));
    assert!(wcag_aaa(7.0));
}

#[test]
fn conversions_roundtrip_in_gamut() {
    let original = hex_to_srgb("#3a7bd5").unwrap();
    let back = oklch_to_srgb(srgb_to_oklch(original));
    assert!((back.r - original.r).abs() < 1e-6);
    assert!((back.g - original.g).abs() < 1e-6);
    assert!((back.b - original.b).abs() < 1e-6);
}

// ── Contrast report ─────────────────────────────────────────────────

#[test]
fn report_on_generated_palettes() {
    let dark = verify_contrast(&generate_palette(&PaletteConfig::default()));
    assert!(dark.text >= 4.5);
    assert!(dark.accent >= 3.0);
    // The comment slot is not contrast-corrected and sits just under 3:1
    // on a true-black background.
    assert!(dark.comment < 3.0, "comment {}", dark.comment);
    assert!(!dark.wcag_verified);

    let light = verify_contrast(&generate_palette(&PaletteConfig {
        theme: ThemeMode::Light,
        ..PaletteConfig::default()
    }));
    assert!(light.wcag_verified, "{light:?}");
}

#[test]
fn report_on_external_palette() {
    let json = r##"{
        "base00": "#1d1f21", "base01": "#282a2e", "base02": "#373b41", "base03": "#969896",
        "base04": "#b4b7b4", "base05": "#c5c8c6", "base06": "#e0e0e0", "base07": "#ffffff",
        "base08": "#cc6666", "base09": "#de935f", "base0A": "#f0c674", "base0B": "#b5bd68",
        "base0C": "#8abeb7", "base0D": "#81a2be", "base0E": "#b294bb", "base0F": "#a3685a"
    }"##;
    let palette: Base16Palette = serde_json::from_str(json).unwrap();
    let report = verify_contrast(&palette);
    assert!(report.wcag_verified, "{report:?}");
    assert!(report.text > 9.0 && report.text < 11.0, "text {}", report.text);
}

#[test]
fn external_palette_rejects_malformed_hex() {
    let json = r##"{ "base00": "#zzzzzz" }"##;
    let err = serde_json::from_str::<Base16Palette>(json).unwrap_err();
    assert!(err.to_string().contains("base00"), "{err}");
}

#[test]
fn external_palette_rejects_missing_slots() {
    let err = serde_json::from_str::<Base16Palette>(r##"{ "base00": "#000000" }"##).unwrap_err();
    assert!(err.to_string().contains("missing slot base01"), "{err}");
}

#[test]
fn external_palette_rejects_slot_spelled_twice() {
    let mut map: serde_json::Map<String, serde_json::Value> = Slot::ALL
        .iter()
        .map(|s| (s.key().to_owned(), "#202020".into()))
        .collect();
    map.insert("base0d".into(), "#ffffff".into());
    let err = serde_json::from_value::<Base16Palette>(map.into()).unwrap_err();
    assert!(err.to_string().contains("base0D is given more than once"), "{err}");
}

// ── Serde ───────────────────────────────────────────────────────────

#[test]
fn palette_roundtrips_through_json() {
    let p = generate_palette(&PaletteConfig {
        theme: ThemeMode::Light,
        ..PaletteConfig::default()
    });
    let text = serde_json::to_string(&p).unwrap();
    let back: Base16Palette = serde_json::from_str(&text).unwrap();
    assert_eq!(back, p);
}

#[test]
fn config_roundtrips_through_json() {
    let cfg = PaletteConfig {
        mode: GenerationMode::Monochromatic,
        hero_hue: 12.0,
        chroma_intensity: 0.25,
        monitor: MonitorType::Lcd,
        theme: ThemeMode::Light,
        name: "Dusk".into(),
    };
    let text = serde_json::to_string(&cfg).unwrap();
    let back: PaletteConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cfg);
    assert_eq!(config(&text), cfg);
}
