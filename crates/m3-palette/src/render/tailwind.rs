//! Tailwind CSS v4 theme output.
//!
//! ```rust
//! use m3_palette::render::tailwind::{generate_tailwind_css, TailwindOptions};
//! use m3_palette::{ColorFormat, SeedColors, ThemeConfig};
//!
//! let css = generate_tailwind_css(
//!     &SeedColors::new("#0062A8"),
//!     &ThemeConfig::default(),
//!     &TailwindOptions { format: ColorFormat::Hex, ..TailwindOptions::default() },
//! );
//! assert!(css.starts_with("@import \"tailwindcss\";"));
//! assert!(css.contains("--color-primary: #"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::push_declarations;
use crate::error::PaletteError;
use crate::format::{format_color_value, ColorFormat};
use crate::palette::{RoleColorMap, ThemeColors};
use crate::role::KeyCase;
use crate::seed::{SeedColors, ThemeConfig};

/// Which modes the stylesheet contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Light roles in `@theme`, dark roles per [`DarkModeStrategy`].
    #[default]
    Combined,
    /// Only light roles.
    Light,
    /// Only dark roles, written into `@theme`.
    Dark,
}

impl OutputMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputMode::Combined => "combined",
            OutputMode::Light => "light",
            OutputMode::Dark => "dark",
        }
    }
}

impl FromStr for OutputMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "combined" => Ok(OutputMode::Combined),
            "light" => Ok(OutputMode::Light),
            "dark" => Ok(OutputMode::Dark),
            _ => Err(PaletteError::InvalidOption {
                kind: "mode",
                value: s.to_string(),
                expected: "combined, light, dark",
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How dark roles are switched on in combined output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// Follow `prefers-color-scheme`.
    #[default]
    Media,
    /// Follow a `.dark` class on an ancestor.
    Class,
    /// Omit dark roles.
    None,
}

impl DarkModeStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "media",
            DarkModeStrategy::Class => "class",
            DarkModeStrategy::None => "none",
        }
    }
}

impl FromStr for DarkModeStrategy {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media" => Ok(DarkModeStrategy::Media),
            "class" => Ok(DarkModeStrategy::Class),
            "none" => Ok(DarkModeStrategy::None),
            _ => Err(PaletteError::InvalidOption {
                kind: "dark mode strategy",
                value: s.to_string(),
                expected: "media, class, none",
            }),
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`render_tailwind_css`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailwindOptions {
    /// Color value format.
    pub format: ColorFormat,
    /// Which modes to emit.
    pub mode: OutputMode,
    /// Start the sheet with `@import "tailwindcss";`.
    pub include_import: bool,
    /// Dark-mode wrapping for [`OutputMode::Combined`].
    pub dark_mode: DarkModeStrategy,
}

impl Default for TailwindOptions {
    fn default() -> Self {
        Self {
            format: ColorFormat::Oklch,
            mode: OutputMode::Combined,
            include_import: true,
            dark_mode: DarkModeStrategy::Media,
        }
    }
}

const IMPORT: &str = "@import \"tailwindcss\";";
const CUSTOM_DARK_VARIANT: &str = "@custom-variant dark (&:where(.dark, .dark *));";

/// Renders a Tailwind v4 stylesheet from kebab-case role maps.
pub fn render_tailwind_css(colors: &ThemeColors, options: &TailwindOptions) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if options.include_import {
        blocks.push(IMPORT.to_string());
    }

    match options.mode {
        OutputMode::Light => blocks.push(theme_block(&colors.light, options.format)),
        OutputMode::Dark => blocks.push(theme_block(&colors.dark, options.format)),
        OutputMode::Combined => {
            blocks.push(theme_block(&colors.light, options.format));
            match options.dark_mode {
                DarkModeStrategy::Media => blocks.push(media_block(&colors.dark, options.format)),
                DarkModeStrategy::Class => {
                    blocks.push(CUSTOM_DARK_VARIANT.to_string());
                    blocks.push(variant_block(&colors.dark, options.format));
                }
                DarkModeStrategy::None => {}
            }
        }
    }

    let mut css = blocks.join("\n\n");
    css.push('\n');
    css
}

/// Generates kebab-case palettes for `seeds` and renders them.
pub fn generate_tailwind_css(
    seeds: &SeedColors,
    theme: &ThemeConfig,
    options: &TailwindOptions,
) -> String {
    let colors = ThemeColors::generate(seeds, theme, KeyCase::Kebab);
    render_tailwind_css(&colors, options)
}

fn color_declarations(
    colors: &RoleColorMap,
    format: ColorFormat,
) -> impl Iterator<Item = (&str, String)> {
    colors
        .iter()
        .map(move |(key, hex)| (key, format_color_value(hex, format)))
}

fn theme_block(colors: &RoleColorMap, format: ColorFormat) -> String {
    let mut out = String::from("@theme {\n");
    push_declarations(&mut out, "  ", "--color-", color_declarations(colors, format));
    out.push('}');
    out
}

fn variant_block(colors: &RoleColorMap, format: ColorFormat) -> String {
    let mut out = String::from("@variant dark {\n");
    push_declarations(&mut out, "  ", "--color-", color_declarations(colors, format));
    out.push('}');
    out
}

fn media_block(colors: &RoleColorMap, format: ColorFormat) -> String {
    let mut out = String::from("@media (prefers-color-scheme: dark) {\n  :root {\n");
    push_declarations(&mut out, "    ", "--color-", color_declarations(colors, format));
    out.push_str("  }\n}");
    out
}
