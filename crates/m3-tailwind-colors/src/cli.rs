//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use m3_palette::seed::PRIMARY_KEY;
use m3_palette::{ColorFormat, DarkModeStrategy, OutputMode};

use crate::config::{ConfigOverrides, Target, DEFAULT_CONFIG_PATH};

/// Generate Material 3 colors for Tailwind CSS v4.
#[derive(Debug, Parser)]
#[command(name = "m3-tailwind-colors", version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a configuration file with default values
    Init(InitArgs),
    /// Generate CSS theme file from configuration
    Generate(GenerateArgs),
}

/// Seed color flags shared by both commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ColorArgs {
    /// Primary color (hex format)
    #[arg(long, value_name = "COLOR")]
    pub primary: Option<String>,

    /// Secondary color (hex format)
    #[arg(long, value_name = "COLOR")]
    pub secondary: Option<String>,

    /// Tertiary color (hex format)
    #[arg(long, value_name = "COLOR")]
    pub tertiary: Option<String>,
}

impl ColorArgs {
    /// Set color flags as `(name, hex)` pairs, primary first.
    pub fn entries(&self) -> Vec<(String, String)> {
        [
            (PRIMARY_KEY, &self.primary),
            ("secondary", &self.secondary),
            ("tertiary", &self.tertiary),
        ]
        .into_iter()
        .filter_map(|(name, hex)| hex.as_ref().map(|hex| (name.to_string(), hex.clone())))
        .collect()
    }
}

/// Theme flags shared by both commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ThemeArgs {
    /// Color scheme (content, expressive, fidelity, monochrome, neutral, tonalSpot, vibrant)
    #[arg(long, value_name = "NAME")]
    pub scheme: Option<String>,

    /// Contrast level (-1 to 1)
    #[arg(long, value_name = "NUMBER", allow_negative_numbers = true)]
    pub contrast: Option<f64>,

    /// Color format (hex or oklch)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ColorFormat>,

    /// Output mode (combined, light, or dark)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<OutputMode>,

    /// Output CSS file path
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub colors: ColorArgs,

    #[command(flatten)]
    pub theme: ThemeArgs,

    /// Also generate the CSS file after creating the config
    #[arg(long)]
    pub generate: bool,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub colors: ColorArgs,

    #[command(flatten)]
    pub theme: ThemeArgs,

    /// Include @import "tailwindcss" in the output
    #[arg(long)]
    pub include_tailwind_import: bool,

    /// Dark mode strategy (media, class, or none)
    #[arg(long, value_name = "STRATEGY")]
    pub dark_mode: Option<DarkModeStrategy>,

    /// Output target (web or nativewind)
    #[arg(long, value_name = "TARGET")]
    pub target: Option<Target>,

    /// TypeScript colors file path (nativewind target)
    #[arg(long, value_name = "PATH")]
    pub colors_output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Generate flags that only point at a config file.
    pub fn from_config(config: PathBuf) -> Self {
        Self {
            colors: ColorArgs::default(),
            theme: ThemeArgs {
                config,
                ..ThemeArgs::default()
            },
            include_tailwind_import: false,
            dark_mode: None,
            target: None,
            colors_output: None,
        }
    }

    /// The flags that override config file values.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            colors: self.colors.entries(),
            scheme: self.theme.scheme.clone(),
            contrast: self.theme.contrast,
            format: self.theme.format,
            mode: self.theme.mode,
            output: self.theme.output.clone(),
            target: self.target,
            colors_output: self.colors_output.clone(),
            dark_mode: self.dark_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "m3-tailwind-colors",
            "generate",
            "--primary",
            "#6750A4",
            "--tertiary",
            "#00A86B",
            "--contrast",
            "-0.5",
            "--format",
            "oklch",
            "--dark-mode",
            "class",
            "--target",
            "nativewind",
        ])
        .unwrap();

        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.theme.contrast, Some(-0.5));
        assert_eq!(args.theme.format, Some(ColorFormat::Oklch));
        assert_eq!(args.dark_mode, Some(DarkModeStrategy::Class));
        assert_eq!(args.target, Some(Target::Nativewind));
        assert_eq!(args.theme.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(
            args.colors.entries(),
            vec![
                ("primary".to_string(), "#6750A4".to_string()),
                ("tertiary".to_string(), "#00A86B".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_unknown_enum_values() {
        let result = Cli::try_parse_from(["m3-tailwind-colors", "generate", "--format", "rgb"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["m3-tailwind-colors", "generate", "--target", "ios"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["m3-tailwind-colors", "init", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Init(_)));
    }
}
