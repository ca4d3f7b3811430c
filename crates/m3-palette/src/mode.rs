//! Light and dark color modes.

use serde::{Deserialize, Serialize};

/// Which half of a theme is being generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light mode (light background, dark text).
    #[default]
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

impl ColorMode {
    /// Selects dark mode when `true`.
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}
