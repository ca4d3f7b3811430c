//! ARGB and HCT primitives.
//!
//! Colors travel through the pipeline as opaque `0xAARRGGBB` integers, the
//! representation used by `material-color-utilities`. This module owns the
//! conversions between that form, `#rrggbb` strings, and the HCT
//! (hue, chroma, tone) perceptual space.

use material_color_utilities::hct::Hct;

/// Fully opaque black, used when a hex string cannot be read.
pub const OPAQUE_BLACK: u32 = 0xFF00_0000;

/// A color in the HCT perceptual space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HctColor {
    /// Hue angle in degrees, `0..360`.
    pub hue: f64,
    /// Chroma, `>= 0`. The maximum depends on hue and tone.
    pub chroma: f64,
    /// Tone (perceived lightness), `0..=100`.
    pub tone: f64,
}

impl HctColor {
    /// Measures an ARGB color.
    pub fn from_argb(argb: u32) -> Self {
        let hct = Hct::from_int(argb);
        Self {
            hue: hct.get_hue(),
            chroma: hct.get_chroma(),
            tone: hct.get_tone(),
        }
    }
}

/// Parses `#rrggbb` (or `rrggbb`) into an opaque ARGB integer.
///
/// Input is expected to be validated already; malformed strings map to
/// [`OPAQUE_BLACK`] instead of failing.
pub fn argb_from_hex(hex: &str) -> u32 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return OPAQUE_BLACK;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => OPAQUE_BLACK | rgb,
        Err(_) => OPAQUE_BLACK,
    }
}

/// Formats the RGB channels of an ARGB integer as lowercase `#rrggbb`.
pub fn hex_from_argb(argb: u32) -> String {
    format!("#{:06x}", argb & 0x00FF_FFFF)
}

/// Splits an ARGB integer into its red, green and blue channels.
pub fn rgb_channels(argb: u32) -> (u8, u8, u8) {
    (
        ((argb >> 16) & 0xFF) as u8,
        ((argb >> 8) & 0xFF) as u8,
        (argb & 0xFF) as u8,
    )
}
