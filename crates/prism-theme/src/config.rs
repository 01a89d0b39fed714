//! Palette configuration: the complete record and its partial form.
//!
//! [`PaletteConfig`] is what the engine consumes. [`PaletteOptions`] is what
//! callers supply: any subset of fields, merged over the defaults by
//! [`PaletteOptions::apply_defaults`], which names every field and its
//! fallback explicitly.

use std::fmt;
use std::str::FromStr;

use prism_color::angle::clamp;
use prism_color::PERFECT_BLUE_DEG;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a configuration from text.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown generation mode: {0:?} (expected monochromatic, golden or hybrid)")]
    UnknownMode(String),

    #[error("unknown theme: {0:?} (expected dark or light)")]
    UnknownTheme(String),

    #[error("unknown monitor type: {0:?} (expected oled or lcd)")]
    UnknownMonitor(String),

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("malformed palette config: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// How hues are distributed across the sixteen slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Every slot shares the hero hue.
    Monochromatic,
    /// Accents walk the golden sequence; the ramp takes its first hue.
    Golden,
    /// Accents walk the golden sequence; the ramp keeps the hero hue.
    #[default]
    Hybrid,
}

/// Display technology the palette targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorType {
    /// Self-emissive panel; dark backgrounds go to true black.
    #[default]
    Oled,
    Lcd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl GenerationMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Golden => "golden",
            Self::Hybrid => "hybrid",
        }
    }
}

impl MonitorType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oled => "oled",
            Self::Lcd => "lcd",
        }
    }
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MonitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monochromatic" | "mono" => Ok(Self::Monochromatic),
            "golden" => Ok(Self::Golden),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(ConfigError::UnknownMode(s.to_owned())),
        }
    }
}

impl FromStr for MonitorType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "oled" => Ok(Self::Oled),
            "lcd" => Ok(Self::Lcd),
            _ => Err(ConfigError::UnknownMonitor(s.to_owned())),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ConfigError::UnknownTheme(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// PaletteConfig
// ---------------------------------------------------------------------------

/// Default palette label.
pub const DEFAULT_NAME: &str = "PRISM";

/// A complete palette request.
///
/// `hero_hue` may be any real number of degrees; the engine normalizes it.
/// `chroma_intensity` is expected in `[0, 1]`. `name` is a label and never
/// affects the generated colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteConfig {
    pub mode: GenerationMode,
    pub hero_hue: f64,
    pub chroma_intensity: f64,
    pub monitor: MonitorType,
    pub theme: ThemeMode,
    pub name: String,
}

impl Default for PaletteConfig {
    /// Hybrid, hue 211 (the PRISM blue), full intensity, OLED, dark.
    fn default() -> Self {
        Self {
            mode: GenerationMode::Hybrid,
            hero_hue: PERFECT_BLUE_DEG,
            chroma_intensity: 1.0,
            monitor: MonitorType::Oled,
            theme: ThemeMode::Dark,
            name: DEFAULT_NAME.to_owned(),
        }
    }
}

impl fmt::Display for PaletteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, hue {:.1}, intensity {:.2}, {}, {})",
            self.name, self.mode, self.hero_hue, self.chroma_intensity, self.monitor, self.theme,
        )
    }
}

// ---------------------------------------------------------------------------
// PaletteOptions
// ---------------------------------------------------------------------------

/// A partial palette request. Missing fields take the defaults of
/// [`PaletteConfig::default`].
///
/// Deserializes from the camelCase record used by config files:
///
/// ```json
/// { "mode": "golden", "heroHue": 30, "theme": "light" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaletteOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<GenerationMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_hue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chroma_intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PaletteOptions {
    /// Parse a JSON config record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed JSON, unknown keys, or
    /// out-of-vocabulary enum values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Fill every missing field from the defaults.
    ///
    /// `chroma_intensity` is clamped into `[0, 1]`.
    #[must_use]
    pub fn apply_defaults(self) -> PaletteConfig {
        let defaults = PaletteConfig::default();
        PaletteConfig {
            mode: self.mode.unwrap_or(defaults.mode),
            hero_hue: self.hero_hue.unwrap_or(defaults.hero_hue),
            chroma_intensity: clamp(
                self.chroma_intensity.unwrap_or(defaults.chroma_intensity),
                0.0,
                1.0,
            ),
            monitor: self.monitor.unwrap_or(defaults.monitor),
            theme: self.theme.unwrap_or(defaults.theme),
            name: self.name.unwrap_or(defaults.name),
        }
    }

    /// Field-by-field overlay: fields set in `self` win, the rest come
    /// from `base`.
    #[must_use]
    pub fn over(self, base: Self) -> Self {
        Self {
            mode: self.mode.or(base.mode),
            hero_hue: self.hero_hue.or(base.hero_hue),
            chroma_intensity: self.chroma_intensity.or(base.chroma_intensity),
            monitor: self.monitor.or(base.monitor),
            theme: self.theme.or(base.theme),
            name: self.name.or(base.name),
        }
    }

    /// Parse and set a numeric field by its config key (`heroHue` or
    /// `chromaIntensity`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] if `value` is not a finite
    /// number.
    pub fn set_number(&mut self, field: &'static str, value: &str) -> Result<(), ConfigError> {
        let parsed = value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ConfigError::InvalidNumber { field, value: value.to_owned() })?;
        match field {
            "heroHue" => self.hero_hue = Some(parsed),
            "chromaIntensity" => self.chroma_intensity = Some(parsed),
            _ => return Err(ConfigError::InvalidNumber { field, value: value.to_owned() }),
        }
        Ok(())
    }
}

impl From<PaletteConfig> for PaletteOptions {
    fn from(config: PaletteConfig) -> Self {
        Self {
            mode: Some(config.mode),
            hero_hue: Some(config.hero_hue),
            chroma_intensity: Some(config.chroma_intensity),
            monitor: Some(config.monitor),
            theme: Some(config.theme),
            name: Some(config.name),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
