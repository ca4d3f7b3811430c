//! Scheme variant dispatch.
//!
//! Maps a scheme name onto one of the seven Material 3 variants and asks
//! `material-color-utilities` for the color of every standard role. The
//! color science itself (tonal palettes, contrast curves) lives entirely
//! in that crate.

use std::fmt;
use std::str::FromStr;

use material_color_utilities::dynamiccolor::{
    DynamicSchemeBuilder, MaterialDynamicColors, SpecVersion, Variant,
};
use material_color_utilities::hct::Hct;
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;
use crate::role::{Role, STANDARD_ROLES};
use crate::ColorMode;

/// Scheme names accepted by [`crate::validate::validate_scheme`], in
/// documentation order.
pub const SCHEME_NAMES: [&str; 7] = [
    "content",
    "expressive",
    "fidelity",
    "monochrome",
    "neutral",
    "tonalSpot",
    "vibrant",
];

/// One of the seven Material 3 palette construction strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemeVariant {
    /// Palettes follow the source color closely.
    #[default]
    Content,
    Expressive,
    /// Like `Content`, with the primary container pinned to the source tone.
    Fidelity,
    /// Grayscale.
    Monochrome,
    Neutral,
    /// The Android default: a calm, low-chroma primary.
    TonalSpot,
    Vibrant,
}

impl SchemeVariant {
    /// Resolves a scheme name, falling back to [`SchemeVariant::Content`]
    /// for anything unrecognized.
    ///
    /// Generation never rejects a scheme; callers that want strict parsing
    /// use [`str::parse`] or validate first.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// The scheme's canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            SchemeVariant::Content => "content",
            SchemeVariant::Expressive => "expressive",
            SchemeVariant::Fidelity => "fidelity",
            SchemeVariant::Monochrome => "monochrome",
            SchemeVariant::Neutral => "neutral",
            SchemeVariant::TonalSpot => "tonalSpot",
            SchemeVariant::Vibrant => "vibrant",
        }
    }

    fn to_variant(self) -> Variant {
        match self {
            SchemeVariant::Content => Variant::Content,
            SchemeVariant::Expressive => Variant::Expressive,
            SchemeVariant::Fidelity => Variant::Fidelity,
            SchemeVariant::Monochrome => Variant::Monochrome,
            SchemeVariant::Neutral => Variant::Neutral,
            SchemeVariant::TonalSpot => Variant::TonalSpot,
            SchemeVariant::Vibrant => Variant::Vibrant,
        }
    }
}

impl FromStr for SchemeVariant {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(SchemeVariant::Content),
            "expressive" => Ok(SchemeVariant::Expressive),
            "fidelity" => Ok(SchemeVariant::Fidelity),
            "monochrome" => Ok(SchemeVariant::Monochrome),
            "neutral" => Ok(SchemeVariant::Neutral),
            "tonalSpot" => Ok(SchemeVariant::TonalSpot),
            "vibrant" => Ok(SchemeVariant::Vibrant),
            _ => Err(PaletteError::InvalidScheme(s.to_string())),
        }
    }
}

impl fmt::Display for SchemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved colors of every standard role for one scheme, mode and
/// contrast level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleScheme {
    variant: SchemeVariant,
    mode: ColorMode,
    argb: [u32; Role::COUNT],
}

impl RoleScheme {
    /// Builds the scheme for `source` under `variant`.
    ///
    /// `contrast` runs from `-1` (reduced) through `0` (standard) to `1`
    /// (high).
    pub fn new(variant: SchemeVariant, source: u32, mode: ColorMode, contrast: f64) -> Self {
        let scheme = DynamicSchemeBuilder::default()
            .source_color_hct(Hct::from_int(source))
            .variant(variant.to_variant())
            .spec_version(SpecVersion::Spec2021)
            .is_dark(mode.is_dark())
            .contrast_level(contrast)
            .build();
        let colors = MaterialDynamicColors::new();

        let argb = STANDARD_ROLES.map(|role| {
            let color = match role {
                Role::Background => colors.background(),
                Role::OnBackground => colors.on_background(),
                Role::Surface => colors.surface(),
                Role::SurfaceDim => colors.surface_dim(),
                Role::SurfaceBright => colors.surface_bright(),
                Role::SurfaceContainerLowest => colors.surface_container_lowest(),
                Role::SurfaceContainerLow => colors.surface_container_low(),
                Role::SurfaceContainer => colors.surface_container(),
                Role::SurfaceContainerHigh => colors.surface_container_high(),
                Role::SurfaceContainerHighest => colors.surface_container_highest(),
                Role::OnSurface => colors.on_surface(),
                Role::SurfaceVariant => colors.surface_variant(),
                Role::OnSurfaceVariant => colors.on_surface_variant(),
                Role::InverseSurface => colors.inverse_surface(),
                Role::OnInverseSurface => colors.inverse_on_surface(),
                Role::Outline => colors.outline(),
                Role::OutlineVariant => colors.outline_variant(),
                Role::Primary => colors.primary(),
                Role::OnPrimary => colors.on_primary(),
                Role::PrimaryContainer => colors.primary_container(),
                Role::OnPrimaryContainer => colors.on_primary_container(),
                Role::InversePrimary => colors.inverse_primary(),
                Role::Secondary => colors.secondary(),
                Role::OnSecondary => colors.on_secondary(),
                Role::SecondaryContainer => colors.secondary_container(),
                Role::OnSecondaryContainer => colors.on_secondary_container(),
                Role::Tertiary => colors.tertiary(),
                Role::OnTertiary => colors.on_tertiary(),
                Role::TertiaryContainer => colors.tertiary_container(),
                Role::OnTertiaryContainer => colors.on_tertiary_container(),
                Role::Error => colors.error(),
                Role::OnError => colors.on_error(),
                Role::ErrorContainer => colors.error_container(),
                Role::OnErrorContainer => colors.on_error_container(),
                Role::Scrim => colors.scrim(),
                Role::Shadow => colors.shadow(),
                Role::SurfaceTint => colors.surface_tint(),
            };
            color.get_argb(&scheme)
        });

        Self {
            variant,
            mode,
            argb,
        }
    }

    /// The ARGB color assigned to `role`.
    pub fn argb(&self, role: Role) -> u32 {
        self.argb[role.index()]
    }

    pub fn variant(&self) -> SchemeVariant {
        self.variant
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }
}

/// Resolves `scheme` by name and builds its [`RoleScheme`].
///
/// Unknown names resolve to the content scheme.
pub fn resolve_scheme(scheme: &str, source: u32, mode: ColorMode, contrast: f64) -> RoleScheme {
    RoleScheme::new(SchemeVariant::from_name(scheme), source, mode, contrast)
}
