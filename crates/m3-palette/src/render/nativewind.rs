//! NativeWind output.
//!
//! NativeWind reads CSS variables as space-separated RGB triples, so
//! every role is written as `R G B` instead of hex. Each role is emitted
//! twice, as `--{role}` and `--android-{role}`. The stylesheet uses the
//! Tailwind v3 `@tailwind` directives that NativeWind expects.
//!
//! [`render_nativewind_colors`] writes the companion TypeScript module
//! with the same palette as hex strings, for use outside of class names.

use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;

use super::push_declarations;
use crate::palette::{RoleColorMap, ThemeColors};
use crate::role::KeyCase;
use crate::seed::{SeedColors, ThemeConfig};

static HEX_TRIPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$")
        .expect("hex triple pattern is valid")
});

const TAILWIND_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// Converts `#rrggbb` (the `#` is optional) to `"r g b"` in decimal.
///
/// Anything else becomes `"0 0 0"`.
pub fn hex_to_space_rgb(hex: &str) -> String {
    let Some(caps) = HEX_TRIPLE.captures(hex) else {
        return "0 0 0".to_string();
    };
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).unwrap_or(0);
    format!("{} {} {}", channel(1), channel(2), channel(3))
}

fn rgb_declarations(colors: &RoleColorMap) -> impl Iterator<Item = (&str, String)> {
    colors.iter().map(|(key, hex)| (key, hex_to_space_rgb(hex)))
}

/// Renders the NativeWind stylesheet from kebab-case role maps.
pub fn render_nativewind_css(colors: &ThemeColors) -> String {
    let mut css = String::from(TAILWIND_DIRECTIVES);
    css.push_str("\n@layer base {\n  :root {\n");
    push_declarations(&mut css, "    ", "--", rgb_declarations(&colors.light));
    push_declarations(&mut css, "    ", "--android-", rgb_declarations(&colors.light));
    css.push_str("  }\n\n  @media (prefers-color-scheme: dark) {\n    :root {\n");
    push_declarations(&mut css, "      ", "--", rgb_declarations(&colors.dark));
    push_declarations(&mut css, "      ", "--android-", rgb_declarations(&colors.dark));
    css.push_str("    }\n  }\n}\n");
    css
}

/// Generates kebab-case palettes for `seeds` and renders the stylesheet.
pub fn generate_nativewind_css(seeds: &SeedColors, theme: &ThemeConfig) -> String {
    render_nativewind_css(&ThemeColors::generate(seeds, theme, KeyCase::Kebab))
}

/// Renders the TypeScript color module from camelCase role maps.
pub fn render_nativewind_colors(colors: &ThemeColors) -> String {
    let mut ts = String::from("// Generated by m3-tailwind-colors. Do not edit.\n\n");
    ts.push_str("export const m3Colors = {\n");
    push_ts_table(&mut ts, "light", &colors.light);
    push_ts_table(&mut ts, "dark", &colors.dark);
    ts.push_str("} as const;\n\n");
    ts.push_str("export type M3ColorName = keyof typeof m3Colors.light;\n");
    ts
}

/// Generates camelCase palettes for `seeds` and renders the TypeScript module.
pub fn generate_nativewind_colors(seeds: &SeedColors, theme: &ThemeConfig) -> String {
    render_nativewind_colors(&ThemeColors::generate(seeds, theme, KeyCase::Camel))
}

fn push_ts_table(out: &mut String, name: &str, colors: &RoleColorMap) {
    let _ = writeln!(out, "  {}: {{", name);
    for (key, hex) in colors.iter() {
        let _ = writeln!(out, "    {}: {},", ts_property(key), ts_string(hex));
    }
    out.push_str("  },\n");
}

/// Bare identifier when possible, quoted string otherwise.
fn ts_property(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_string()
    } else {
        ts_string(key)
    }
}

fn ts_string(value: &str) -> String {
    // JSON string syntax is valid TypeScript.
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}
