//! # m3-palette - Material 3 Palettes for Tailwind
//!
//! `m3-palette` turns a primary seed color (plus optional named extras)
//! into the full set of Material Design 3 color roles and writes them out
//! as Tailwind CSS v4 theme variables, NativeWind variables, or plain
//! light/dark tables.
//!
//! The color science (HCT, tonal palettes, the seven scheme variants) comes
//! from `material-color-utilities`. This crate names, orders and serializes
//! what it produces.
//!
//! ## Core Concepts
//!
//! - [`SeedColors`]: the primary seed and named extras
//! - [`ThemeConfig`]: scheme name and contrast level
//! - [`generate_colors`]: seeds → ordered [`RoleColorMap`] for one [`ColorMode`]
//! - [`render`]: Tailwind v4, NativeWind and table serializers
//! - [`validate`]: input checks, run before generation
//!
//! ## Quick Start
//!
//! ```rust
//! use m3_palette::render::tailwind::{generate_tailwind_css, TailwindOptions};
//! use m3_palette::{validate, ColorFormat, SeedColors, ThemeConfig};
//!
//! let seeds = SeedColors::new("#6750A4").add("brand", "#FF5722");
//! let theme = ThemeConfig::new("tonalSpot", 0.0);
//!
//! validate::validate_colors_map(&seeds).unwrap();
//! validate::validate_theme(&theme).unwrap();
//!
//! let css = generate_tailwind_css(
//!     &seeds,
//!     &theme,
//!     &TailwindOptions { format: ColorFormat::Hex, ..TailwindOptions::default() },
//! );
//! assert!(css.contains("--color-brand-container: #"));
//! ```
//!
//! ## Role Order
//!
//! Generated maps list the standard roles in [`STANDARD_ROLES`] order,
//! then four roles per extra seed (`brand`, `onBrand`, `brandContainer`,
//! `onBrandContainer`) in the order the seeds were added. Serializers keep
//! this order, so output is byte-for-byte reproducible.

pub mod color;
pub mod custom;
mod error;
pub mod format;
mod mode;
pub mod palette;
pub mod render;
pub mod role;
pub mod scheme;
pub mod seed;
pub mod validate;

pub use error::{PaletteError, Result};
pub use format::{format_color_value, hex_to_oklch, ColorFormat};
pub use mode::ColorMode;
pub use palette::{generate_colors, RoleColorMap, ThemeColors};
pub use render::nativewind::{
    generate_nativewind_colors, generate_nativewind_css, hex_to_space_rgb,
};
pub use render::table::{tailwind_config_colors, tailwind_rn_colors, ConfigColor};
pub use render::tailwind::{
    generate_tailwind_css, DarkModeStrategy, OutputMode, TailwindOptions,
};
pub use role::{KeyCase, Role, STANDARD_ROLES};
pub use scheme::{resolve_scheme, RoleScheme, SchemeVariant};
pub use seed::{SeedColor, SeedColors, ThemeConfig};
