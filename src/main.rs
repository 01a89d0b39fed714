// SPDX-License-Identifier: MIT
//
// prism: generate a WCAG-checked Base16 palette from one hero hue.
//
// This is the command-line front end over the library crates:
//
//   prism-color → color spaces, hex codec
//   prism-theme → golden hues, contrast solver, palette synthesis
//
// A request is assembled in layers, later layers winning field by field:
//
//   builtin preset (--preset)  →  JSON config file (--config)  →  flags
//
// The merged options are completed with the engine defaults, the palette is
// generated once, and the result is written to stdout as text, JSON, or
// terminal OSC sequences.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use log::debug;
use prism_theme::{
    Base16Palette, ConfigError, ContrastReport, PaletteConfig, PaletteOptions, Preset, ansi,
    builtin_config, builtin_names,
};
use serde::Serialize;
use thiserror::Error;

const USAGE: &str = "\
usage: prism [options]

  --preset NAME        start from a builtin preset (see --list)
  --config FILE        read options from a JSON file
  --mode MODE          monochromatic | golden | hybrid
  --hue DEGREES        hero hue
  --intensity X        chroma intensity, 0 to 1
  --monitor TYPE       oled | lcd
  --theme THEME        dark | light
  --name TEXT          palette label
  --json               print name, palette and contrast report as JSON
  --ansi               print OSC sequences that load the palette into the terminal
  --list               list builtin presets
  -h, --help           show this help

Flags override the config file, which overrides the preset.
Set RUST_LOG=debug to trace generation.";

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown option: {0} (try --help)")]
    UnknownFlag(String),

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("unknown preset: {0:?} (try --list)")]
    UnknownPreset(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}: {source}", .path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Format {
    #[default]
    Text,
    Json,
    Ansi,
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    preset: Option<String>,
    config: Option<PathBuf>,
    flags: PaletteOptions,
    format: Format,
    list: bool,
    help: bool,
}

/// Parse everything after the program name. Values may follow their flag
/// as the next argument or after `=`.
fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut argv = argv.into_iter();

    while let Some(arg) = argv.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f.to_owned(), Some(v.to_owned())),
            _ => (arg.clone(), None),
        };
        let mut value = || {
            inline
                .clone()
                .or_else(|| argv.next())
                .ok_or_else(|| CliError::MissingValue(flag.clone()))
        };

        match flag.as_str() {
            "--preset" => args.preset = Some(value()?),
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--mode" => args.flags.mode = Some(value()?.parse()?),
            "--hue" => args.flags.set_number("heroHue", &value()?)?,
            "--intensity" => args.flags.set_number("chromaIntensity", &value()?)?,
            "--monitor" => args.flags.monitor = Some(value()?.parse()?),
            "--theme" => args.flags.theme = Some(value()?.parse()?),
            "--name" => args.flags.name = Some(value()?),
            "--json" => args.format = Format::Json,
            "--ansi" => args.format = Format::Ansi,
            "--list" => args.list = true,
            "-h" | "--help" => args.help = true,
            _ => return Err(CliError::UnknownFlag(flag)),
        }
    }

    Ok(args)
}

/// Merge preset, config file and flags into a complete configuration.
fn resolve(args: &Args) -> Result<PaletteConfig, CliError> {
    let preset = match &args.preset {
        Some(name) => builtin_config(name)
            .map(PaletteOptions::from)
            .ok_or_else(|| CliError::UnknownPreset(name.clone()))?,
        None => PaletteOptions::default(),
    };

    let file = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|source| CliError::ReadConfig { path: path.clone(), source })?;
            PaletteOptions::from_json(&text)?
        }
        None => PaletteOptions::default(),
    };

    Ok(args.flags.clone().over(file.over(preset)).apply_defaults())
}

// ─── Output ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonOutput<'a> {
    name: &'a str,
    palette: &'a Base16Palette,
    contrast: ContrastReport,
}

fn write_text(out: &mut impl Write, config: &PaletteConfig, preset: &Preset) -> io::Result<()> {
    writeln!(out, "{config}")?;
    writeln!(out)?;
    for (slot, hex) in preset.palette.iter() {
        writeln!(out, "{slot}  {hex}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", preset.contrast)
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    if args.help {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }
    if args.list {
        for name in builtin_names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let config = resolve(args)?;
    debug!("resolved config: {config}");
    let preset = Preset::generate(&config);

    match args.format {
        Format::Text => write_text(out, &config, &preset)?,
        Format::Json => {
            let doc = JsonOutput {
                name: &preset.name,
                palette: &preset.palette,
                contrast: preset.contrast,
            };
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
        Format::Ansi => ansi::write_palette(out, &preset.palette)?,
    }
    out.flush()?;
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let result = parse_args(env::args().skip(1)).and_then(|args| run(&args, &mut stdout.lock()));

    if let Err(e) = result {
        eprintln!("prism: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
