//! Plain color tables for JavaScript-side configuration.
//!
//! - [`tailwind_config_colors`]: one `{ DEFAULT, dark }` entry per role, the
//!   shape Tailwind's `theme.colors` config accepts. Kebab-case is the
//!   usual key style here.
//! - [`tailwind_rn_colors`]: separate `light` and `dark` maps for runtime
//!   theme switching in React Native. camelCase is the usual key style.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::palette::ThemeColors;
use crate::role::KeyCase;
use crate::seed::{SeedColors, ThemeConfig};

/// One role's light and dark colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigColor {
    /// The light-mode color.
    #[serde(rename = "DEFAULT")]
    pub default: String,
    /// The dark-mode color.
    pub dark: String,
}

/// Builds a `{ DEFAULT, dark }` table keyed by role.
///
/// Tailwind derives utility names from these keys, so pass
/// [`KeyCase::Kebab`] for `theme.colors` (`bg-on-primary-container`).
/// [`KeyCase::Camel`] keys yield utilities like `bg-onPrimaryContainer`.
pub fn tailwind_config_colors(
    seeds: &SeedColors,
    theme: &ThemeConfig,
    case: KeyCase,
) -> IndexMap<String, ConfigColor> {
    let ThemeColors { light, dark } = ThemeColors::generate(seeds, theme, case);
    light
        .into_iter()
        .map(|(key, default)| {
            let dark = dark.get(&key).unwrap_or(default.as_str()).to_string();
            (key, ConfigColor { default, dark })
        })
        .collect()
}

/// Builds separate light and dark tables.
pub fn tailwind_rn_colors(seeds: &SeedColors, theme: &ThemeConfig, case: KeyCase) -> ThemeColors {
    ThemeColors::generate(seeds, theme, case)
}
