//! Custom (extra seed) color roles.
//!
//! Each extra seed contributes four roles built from a single tonal
//! palette. When harmonization is on, the seed's hue is first pulled
//! toward the primary color's hue so the custom color sits comfortably in
//! the generated scheme.

use material_color_utilities::blend;
use material_color_utilities::palettes::TonalPalette;

use crate::color::HctColor;
use crate::ColorMode;

/// Custom palettes never drop below this chroma, so muted seeds still
/// read as a distinct accent.
const MIN_CUSTOM_CHROMA: f64 = 48.0;

/// The four roles derived from one custom seed, as ARGB integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomRoles {
    pub color: u32,
    pub on_color: u32,
    pub color_container: u32,
    pub on_color_container: u32,
}

impl CustomRoles {
    /// The roles in output order: color, on color, container, on container.
    pub fn to_array(self) -> [u32; 4] {
        [
            self.color,
            self.on_color,
            self.color_container,
            self.on_color_container,
        ]
    }
}

/// Derives the four roles for a custom seed against the primary `source`.
pub fn custom_roles(seed: u32, source: u32, harmonize: bool, mode: ColorMode) -> CustomRoles {
    let value = if harmonize {
        harmonize_with(seed, source)
    } else {
        seed
    };

    let hct = HctColor::from_argb(value);
    let palette = TonalPalette::from_hue_and_chroma(hct.hue, hct.chroma.max(MIN_CUSTOM_CHROMA));

    match mode {
        ColorMode::Light => CustomRoles {
            color: palette.tone(40),
            on_color: palette.tone(100),
            color_container: palette.tone(90),
            on_color_container: palette.tone(10),
        },
        ColorMode::Dark => CustomRoles {
            color: palette.tone(80),
            on_color: palette.tone(20),
            color_container: palette.tone(30),
            on_color_container: palette.tone(90),
        },
    }
}

/// Rotates `design`'s hue toward `source`'s hue by half their angular
/// distance, capped at 15 degrees. Chroma and tone are kept.
pub fn harmonize_with(design: u32, source: u32) -> u32 {
    blend::harmonize(design, source)
}
