//! `init`: write a config file with defaults.

use std::io::Write;

use anyhow::Result;
use m3_palette::validate::{validate_colors_map, validate_theme};
use m3_palette::{ColorFormat, OutputMode, SeedColors, ThemeConfig};

use crate::cli::{GenerateArgs, InitArgs};
use crate::config::{save_config, ColorsConfig, Target};

use super::generate;

/// Primary seed written when `--primary` is not given.
pub const DEFAULT_PRIMARY: &str = "#6750A4";

/// The config `init` writes for `args`.
pub fn build_config(args: &InitArgs) -> ColorsConfig {
    let defaults = ThemeConfig::default();
    let primary = args.colors.primary.as_deref().unwrap_or(DEFAULT_PRIMARY);

    let mut colors = SeedColors::new(primary);
    for (name, hex) in args.colors.entries() {
        colors.insert(name, hex);
    }

    let mut config = ColorsConfig::new(colors);
    config.scheme = Some(args.theme.scheme.clone().unwrap_or(defaults.scheme));
    config.contrast = Some(args.theme.contrast.unwrap_or(defaults.contrast));
    config.format = Some(args.theme.format.unwrap_or(ColorFormat::Oklch));
    config.mode = Some(args.theme.mode.unwrap_or(OutputMode::Combined));
    config.output = Some(
        args.theme
            .output
            .clone()
            .unwrap_or_else(|| Target::Web.default_output()),
    );
    config
}

/// Runs `init`, then `generate` when `--generate` is set.
pub fn handle(args: &InitArgs, out: &mut impl Write) -> Result<()> {
    let config = build_config(args);
    validate_colors_map(&config.colors)?;
    validate_theme(&ThemeConfig::new(
        config.scheme.clone().unwrap_or_default(),
        config.contrast.unwrap_or_default(),
    ))?;

    let path = &args.theme.config;
    if path.exists() {
        tracing::warn!(path = %path.display(), "overwriting existing config file");
    }
    save_config(&config, path)?;

    let output = config.output.clone().unwrap_or_default();
    writeln!(out, "Success: Created configuration file at {}", path.display())?;
    writeln!(out, "  Primary color: {}", config.colors.primary())?;
    writeln!(out, "  Output: {}", output.display())?;
    writeln!(out, "  Format: {}", config.format.unwrap_or_default())?;

    if args.generate {
        generate::handle(&GenerateArgs::from_config(path.to_path_buf()), out)?;
    }
    Ok(())
}
