//! `generate`: render the theme files.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use m3_palette::validate::{validate_colors_map, validate_theme};
use m3_palette::{
    generate_nativewind_colors, generate_nativewind_css, generate_tailwind_css, ColorFormat,
    OutputMode, SeedColors, TailwindOptions, ThemeConfig,
};

use super::write_file;
use crate::cli::GenerateArgs;
use crate::config::{load_config, ColorsConfig, Target};

/// Where the NativeWind TypeScript module goes by default.
pub const DEFAULT_COLORS_OUTPUT: &str = "theme/m3-colors.ts";

/// Builds the effective config from the config file and flags.
///
/// A config file, when present, is the base and set flags override it.
/// Without one, `--primary` is required and the rest default.
pub fn resolve_config(args: &GenerateArgs) -> Result<ColorsConfig> {
    if let Some(config) = load_config(&args.theme.config)? {
        return Ok(config.merge_with_flags(args.overrides()));
    }

    let Some(primary) = &args.colors.primary else {
        bail!(
            "primary color is required\n  \
             Use --primary \"#HEXCODE\", or create a config file with: m3-tailwind-colors init"
        );
    };

    tracing::debug!("no config file, using flags only");
    let theme = ThemeConfig::default();
    let mut config = ColorsConfig::new(SeedColors::new(primary.as_str()));
    config.scheme = Some(theme.scheme);
    config.contrast = Some(theme.contrast);
    config.format = Some(ColorFormat::Hex);
    config.mode = Some(OutputMode::Combined);
    config.target = Some(Target::Web);
    config.colors_output = Some(PathBuf::from(DEFAULT_COLORS_OUTPUT));
    Ok(config.merge_with_flags(args.overrides()))
}

/// Runs `generate`, writing a success report to `out`.
pub fn handle(args: &GenerateArgs, out: &mut impl Write) -> Result<()> {
    let config = resolve_config(args)?;

    validate_colors_map(&config.colors)?;
    let defaults = ThemeConfig::default();
    let theme = ThemeConfig::new(
        config.scheme.clone().unwrap_or(defaults.scheme),
        config.contrast.unwrap_or(defaults.contrast),
    );
    validate_theme(&theme)?;

    let target = config.target.unwrap_or_default();
    let output = config
        .output
        .clone()
        .unwrap_or_else(|| target.default_output());
    tracing::info!(
        %target,
        scheme = %theme.scheme,
        contrast = theme.contrast,
        output = %output.display(),
        "generating theme"
    );

    match target {
        Target::Web => {
            let options = TailwindOptions {
                format: config.format.unwrap_or_default(),
                mode: config.mode.unwrap_or_default(),
                include_import: args.include_tailwind_import,
                dark_mode: config.dark_mode.unwrap_or_default(),
            };
            let css = generate_tailwind_css(&config.colors, &theme, &options);
            write_file(&output, &css)?;

            let names: Vec<&str> = config.colors.names().collect();
            writeln!(out, "Success: Generated M3 theme at {}", output.display())?;
            writeln!(out, "  Colors: {}", names.join(", "))?;
            writeln!(out, "  Format: {} ({} mode)", options.format, options.mode)?;
        }
        Target::Nativewind => {
            let css = generate_nativewind_css(&config.colors, &theme);
            write_file(&output, &css)?;
            writeln!(out, "Success: Generated NativeWind CSS at {}", output.display())?;

            let colors_path = config
                .colors_output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_COLORS_OUTPUT));
            let module = generate_nativewind_colors(&config.colors, &theme);
            write_file(&colors_path, &module)?;
            writeln!(out, "  Generated colors file at {}", colors_path.display())?;
        }
    }

    Ok(())
}
