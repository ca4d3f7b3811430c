//! Palette generation: seeds in, named role colors out.
//!
//! [`generate_colors`] is the heart of the crate. It resolves the scheme
//! for the primary seed, reads every standard role from it in table
//! order, then appends four roles for each extra seed.
//!
//! ```rust
//! use m3_palette::{generate_colors, ColorMode, KeyCase, SeedColors, ThemeConfig};
//!
//! let seeds = SeedColors::new("#6750A4").add("brand", "#FF5722");
//! let colors = generate_colors(&seeds, &ThemeConfig::default(), ColorMode::Light, KeyCase::Kebab);
//!
//! assert!(colors.get("on-primary-container").is_some());
//! assert!(colors.get("brand-container").is_some());
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::{argb_from_hex, hex_from_argb};
use crate::custom::custom_roles;
use crate::role::{KeyCase, STANDARD_ROLES};
use crate::scheme::resolve_scheme;
use crate::seed::{SeedColors, ThemeConfig};
use crate::ColorMode;

/// Ordered map from role key to `#rrggbb`.
///
/// Standard roles come first in table order, followed by custom roles in
/// seed order. Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleColorMap(IndexMap<String, String>);

impl RoleColorMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// The hex color for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sets `key`, keeping its position if it already exists.
    pub fn insert(&mut self, key: impl Into<String>, hex: impl Into<String>) {
        self.0.insert(key.into(), hex.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Role keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(key, hex)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RoleColorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = RoleColorMap::new();
        for (key, hex) in iter {
            map.insert(key, hex);
        }
        map
    }
}

impl IntoIterator for RoleColorMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Generates every role color for one mode.
///
/// Input is assumed valid (see [`crate::validate`]); malformed hex values
/// are read as black rather than rejected. The same arguments always
/// produce the same map.
pub fn generate_colors(
    seeds: &SeedColors,
    theme: &ThemeConfig,
    mode: ColorMode,
    case: KeyCase,
) -> RoleColorMap {
    let source = argb_from_hex(seeds.primary());
    let scheme = resolve_scheme(&theme.scheme, source, mode, theme.contrast);

    let mut colors = RoleColorMap::new();
    for role in STANDARD_ROLES {
        colors.insert(role.key(case), hex_from_argb(scheme.argb(role)));
    }

    for (name, seed) in seeds.extras() {
        tracing::trace!(name, hex = %seed.hex, harmonize = seed.harmonize, "deriving custom color");
        let roles = custom_roles(argb_from_hex(&seed.hex), source, seed.harmonize, mode);
        for (key, argb) in case.custom_keys(name).into_iter().zip(roles.to_array()) {
            colors.insert(key, hex_from_argb(argb));
        }
    }

    tracing::debug!(
        scheme = %scheme.variant(),
        mode = ?mode,
        contrast = theme.contrast,
        roles = colors.len(),
        "generated palette"
    );
    colors
}

/// Light and dark role maps for the same seeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub light: RoleColorMap,
    pub dark: RoleColorMap,
}

impl ThemeColors {
    /// Generates both modes with the same key case.
    pub fn generate(seeds: &SeedColors, theme: &ThemeConfig, case: KeyCase) -> Self {
        Self {
            light: generate_colors(seeds, theme, ColorMode::Light, case),
            dark: generate_colors(seeds, theme, ColorMode::Dark, case),
        }
    }

    /// The map for `mode`.
    pub fn mode(&self, mode: ColorMode) -> &RoleColorMap {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}
