//! Seed colors and theme configuration.
//!
//! A [`SeedColors`] set is the user-facing input to generation: one
//! required primary color plus any number of named extras. In JSON it is
//! a single object keyed by name:
//!
//! ```rust
//! use m3_palette::SeedColors;
//!
//! let seeds: SeedColors = serde_json::from_str(r##"{
//!     "primary": "#6750A4",
//!     "brand": "#FF5722",
//!     "accent": { "hex": "#00A86B", "harmonize": false }
//! }"##).unwrap();
//!
//! assert_eq!(seeds.primary(), "#6750A4");
//! assert_eq!(seeds.extras().count(), 2);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// Key of the required seed entry.
pub const PRIMARY_KEY: &str = "primary";

/// One extra seed color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SeedColorDef", into = "SeedColorDef")]
pub struct SeedColor {
    /// `#RRGGBB` seed value.
    pub hex: String,
    /// Pull this color's hue toward the primary color's hue.
    pub harmonize: bool,
}

impl SeedColor {
    /// A harmonized seed.
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            harmonize: true,
        }
    }

    /// A seed whose hue is used as-is.
    pub fn unharmonized(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            harmonize: false,
        }
    }
}

impl From<&str> for SeedColor {
    fn from(hex: &str) -> Self {
        SeedColor::new(hex)
    }
}

impl From<String> for SeedColor {
    fn from(hex: String) -> Self {
        SeedColor::new(hex)
    }
}

/// Wire form: either a bare hex string or `{ "hex": ..., "harmonize": ... }`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SeedColorDef {
    Hex(String),
    Config {
        #[serde(default)]
        hex: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        harmonize: Option<bool>,
    },
}

impl From<SeedColorDef> for SeedColor {
    fn from(def: SeedColorDef) -> Self {
        match def {
            SeedColorDef::Hex(hex) => SeedColor::new(hex),
            SeedColorDef::Config { hex, harmonize } => SeedColor {
                hex,
                harmonize: harmonize.unwrap_or(true),
            },
        }
    }
}

impl From<SeedColor> for SeedColorDef {
    fn from(seed: SeedColor) -> Self {
        if seed.harmonize {
            SeedColorDef::Hex(seed.hex)
        } else {
            SeedColorDef::Config {
                hex: seed.hex,
                harmonize: Some(false),
            }
        }
    }
}

/// The primary seed plus named extras, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, SeedColor>",
    into = "IndexMap<String, SeedColor>"
)]
pub struct SeedColors {
    primary: String,
    extras: IndexMap<String, SeedColor>,
}

impl SeedColors {
    /// Creates a set with only a primary seed.
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            extras: IndexMap::new(),
        }
    }

    /// Adds (or replaces) a named extra seed.
    ///
    /// Adding `"primary"` replaces the primary seed instead.
    pub fn add(mut self, name: impl Into<String>, color: impl Into<SeedColor>) -> Self {
        self.insert(name, color);
        self
    }

    /// In-place form of [`add`](SeedColors::add).
    pub fn insert(&mut self, name: impl Into<String>, color: impl Into<SeedColor>) {
        let name = name.into();
        let color = color.into();
        if name == PRIMARY_KEY {
            self.primary = color.hex;
        } else {
            self.extras.insert(name, color);
        }
    }

    /// The primary seed hex.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Extra seeds in insertion order.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &SeedColor)> {
        self.extras.iter().map(|(name, color)| (name.as_str(), color))
    }

    /// Looks up an extra seed by name.
    pub fn extra(&self, name: &str) -> Option<&SeedColor> {
        self.extras.get(name)
    }

    /// Every seed name, primary first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(PRIMARY_KEY).chain(self.extras.keys().map(String::as_str))
    }

    /// Every `(name, hex)` pair, primary first.
    pub fn hex_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once((PRIMARY_KEY, self.primary.as_str())).chain(
            self.extras
                .iter()
                .map(|(name, color)| (name.as_str(), color.hex.as_str())),
        )
    }
}

impl TryFrom<IndexMap<String, SeedColor>> for SeedColors {
    type Error = PaletteError;

    fn try_from(mut map: IndexMap<String, SeedColor>) -> Result<Self, Self::Error> {
        let primary = map
            .shift_remove(PRIMARY_KEY)
            .ok_or(PaletteError::MissingPrimary)?;
        Ok(Self {
            primary: primary.hex,
            extras: map,
        })
    }
}

impl From<SeedColors> for IndexMap<String, SeedColor> {
    fn from(seeds: SeedColors) -> Self {
        let mut map = IndexMap::with_capacity(seeds.extras.len() + 1);
        map.insert(PRIMARY_KEY.to_string(), SeedColor::new(seeds.primary));
        map.extend(seeds.extras);
        map
    }
}

/// Scheme name and contrast level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// One of the seven scheme names. Unknown names generate the content
    /// scheme; [`crate::validate::validate_scheme`] rejects them.
    pub scheme: String,
    /// Contrast level in `[-1, 1]`.
    pub contrast: f64,
}

impl ThemeConfig {
    pub fn new(scheme: impl Into<String>, contrast: f64) -> Self {
        Self {
            scheme: scheme.into(),
            contrast,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            scheme: "content".to_string(),
            contrast: 0.0,
        }
    }
}
