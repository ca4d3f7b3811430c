//! Color value formatting for CSS output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{argb_from_hex, HctColor};
use crate::error::PaletteError;

/// How color values are written into CSS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`.
    Hex,
    /// `oklch(L C H)`.
    #[default]
    Oklch,
}

impl ColorFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Oklch => "oklch",
        }
    }
}

impl FromStr for ColorFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(ColorFormat::Hex),
            "oklch" => Ok(ColorFormat::Oklch),
            _ => Err(PaletteError::InvalidOption {
                kind: "format",
                value: s.to_string(),
                expected: "hex, oklch",
            }),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes `hex` in the requested format.
///
/// The input is not validated.
pub fn format_color_value(hex: &str, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => hex.to_lowercase(),
        ColorFormat::Oklch => hex_to_oklch(hex),
    }
}

/// Converts `hex` to an `oklch(L C H)` string.
///
/// The three slots are filled straight from HCT: `L = tone / 100`,
/// `C = chroma / 100`, `H = hue`, each to two decimals. This is a linear
/// rescale rather than an OKLab conversion; existing themes depend on the
/// exact values it produces.
pub fn hex_to_oklch(hex: &str) -> String {
    let hct = HctColor::from_argb(argb_from_hex(hex));
    // Adding 0.0 turns -0.0 into 0.0 so achromatic colors never print "-0.00".
    let lightness = hct.tone / 100.0 + 0.0;
    let chroma = hct.chroma / 100.0 + 0.0;
    let hue = hct.hue + 0.0;
    format!("oklch({:.2} {:.2} {:.2})", lightness, chroma, hue)
}
