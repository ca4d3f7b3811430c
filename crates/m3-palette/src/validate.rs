//! Input validation.
//!
//! Generation assumes well-formed input. These checks run first and fail
//! fast on the first problem found, in seed order.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PaletteError, Result};
use crate::role::{KeyCase, STANDARD_ROLES};
use crate::scheme::SchemeVariant;
use crate::seed::{SeedColors, ThemeConfig};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

/// Returns `true` for `#RRGGBB` strings (any case).
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Checks a single `#RRGGBB` color.
pub fn validate_color(hex: &str) -> Result<()> {
    if is_hex_color(hex) {
        Ok(())
    } else {
        Err(PaletteError::InvalidColor {
            name: None,
            value: hex.to_string(),
        })
    }
}

/// Checks that `name` is one of the seven scheme names.
pub fn validate_scheme(name: &str) -> Result<()> {
    name.parse::<SchemeVariant>().map(|_| ())
}

/// Checks that `value` lies in `[-1, 1]`.
pub fn validate_contrast(value: f64) -> Result<()> {
    if (-1.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PaletteError::InvalidContrast(value))
    }
}

/// Checks every seed color, then that no extra seed's derived roles
/// clash with another role.
///
/// An extra seed whose four role keys are all standard roles (for example
/// `secondary`) is a palette override and is allowed; its roles replace
/// the standard ones. Any partial overlap is rejected.
pub fn validate_colors_map(seeds: &SeedColors) -> Result<()> {
    for (name, hex) in seeds.hex_entries() {
        if !is_hex_color(hex) {
            return Err(PaletteError::InvalidColor {
                name: Some(name.to_string()),
                value: hex.to_string(),
            });
        }
    }
    validate_role_names(seeds)
}

fn validate_role_names(seeds: &SeedColors) -> Result<()> {
    // Serializers write kebab keys and the tables default to camel keys,
    // so a name must be clean in both.
    for case in [KeyCase::Camel, KeyCase::Kebab] {
        let standard: HashSet<&str> = STANDARD_ROLES.iter().map(|role| role.key(case)).collect();
        let mut custom: HashSet<String> = HashSet::new();

        for (name, _) in seeds.extras() {
            let keys = case.custom_keys(name);
            let is_override = keys.iter().all(|key| standard.contains(key.as_str()));

            for key in keys {
                let clashes =
                    custom.contains(&key) || (!is_override && standard.contains(key.as_str()));
                if clashes {
                    return Err(PaletteError::RoleCollision {
                        name: name.to_string(),
                        role: key,
                    });
                }
                custom.insert(key);
            }
        }
    }
    Ok(())
}

/// Checks the scheme name and contrast level.
pub fn validate_theme(theme: &ThemeConfig) -> Result<()> {
    validate_scheme(&theme.scheme)?;
    validate_contrast(theme.contrast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedColor;

    #[test]
    fn test_validate_color() {
        assert!(validate_color("#0062A8").is_ok());
        assert!(validate_color("#0062a8").is_ok());
        assert!(validate_color("#GGGGGG").is_err());
        assert!(validate_color("0062A8").is_err());
        assert!(validate_color("#fff").is_err());
        assert!(validate_color("#0062A8 ").is_err());
        assert!(validate_color("").is_err());
    }

    #[test]
    fn test_validate_color_error_has_no_name() {
        let err = validate_color("blue").unwrap_err();
        assert_eq!(
            err,
            PaletteError::InvalidColor {
                name: None,
                value: "blue".to_string()
            }
        );
    }

    #[test]
    fn test_validate_scheme() {
        assert!(validate_scheme("vibrant").is_ok());
        assert!(validate_scheme("tonalSpot").is_ok());
        assert_eq!(
            validate_scheme("bogus"),
            Err(PaletteError::InvalidScheme("bogus".to_string()))
        );
    }

    #[test]
    fn test_validate_contrast() {
        assert!(validate_contrast(-1.0).is_ok());
        assert!(validate_contrast(0.0).is_ok());
        assert!(validate_contrast(1.0).is_ok());
        assert!(validate_contrast(1.5).is_err());
        assert!(validate_contrast(-1.01).is_err());
        assert!(validate_contrast(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_colors_map_reports_entry_name() {
        let seeds = SeedColors::new("#6750A4")
            .add("brand", "#FF5722")
            .add("accent", "nope");
        let err = validate_colors_map(&seeds).unwrap_err();
        assert_eq!(
            err,
            PaletteError::InvalidColor {
                name: Some("accent".to_string()),
                value: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_validate_colors_map_is_fail_fast() {
        let seeds = SeedColors::new("bad-primary").add("brand", "bad-brand");
        match validate_colors_map(&seeds) {
            Err(PaletteError::InvalidColor { name, .. }) => {
                assert_eq!(name.as_deref(), Some("primary"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_palette_overrides_are_allowed() {
        let seeds = SeedColors::new("#6750A4")
            .add("secondary", "#00639B")
            .add("tertiary", SeedColor::unharmonized("#7D5260"))
            .add("error", "#B3261E");
        assert!(validate_colors_map(&seeds).is_ok());
    }

    #[test]
    fn test_partial_role_overlap_is_rejected() {
        let seeds = SeedColors::new("#6750A4").add("surface", "#FFFFFF");
        assert_eq!(
            validate_colors_map(&seeds),
            Err(PaletteError::RoleCollision {
                name: "surface".to_string(),
                role: "surface".to_string()
            })
        );
    }

    #[test]
    fn test_custom_seeds_must_not_clash_with_each_other() {
        let seeds = SeedColors::new("#6750A4")
            .add("brand", "#FF5722")
            .add("onBrand", "#FFFFFF");
        assert_eq!(
            validate_colors_map(&seeds),
            Err(PaletteError::RoleCollision {
                name: "onBrand".to_string(),
                role: "onBrand".to_string()
            })
        );
    }

    #[test]
    fn test_kebab_collision_with_standard_role_is_rejected() {
        let seeds = SeedColors::new("#6750A4").add("Scrim", "#FF5722");
        assert_eq!(
            validate_colors_map(&seeds),
            Err(PaletteError::RoleCollision {
                name: "Scrim".to_string(),
                role: "scrim".to_string()
            })
        );

        let seeds = SeedColors::new("#6750A4").add("SurfaceDim", "#FF5722");
        assert_eq!(
            validate_colors_map(&seeds),
            Err(PaletteError::RoleCollision {
                name: "SurfaceDim".to_string(),
                role: "surface-dim".to_string()
            })
        );
    }

    #[test]
    fn test_kebab_collision_between_seeds_is_rejected() {
        let seeds = SeedColors::new("#6750A4")
            .add("brand", "#FF5722")
            .add("OnBrand", "#00A86B");
        assert_eq!(
            validate_colors_map(&seeds),
            Err(PaletteError::RoleCollision {
                name: "OnBrand".to_string(),
                role: "on-brand".to_string()
            })
        );
    }

    #[test]
    fn test_mixed_case_names_without_clash_pass() {
        let seeds = SeedColors::new("#6750A4")
            .add("BrandAccent", "#FF5722")
            .add("customColor", "#00A86B");
        assert!(validate_colors_map(&seeds).is_ok());
    }

    #[test]
    fn test_validate_theme() {
        assert!(validate_theme(&ThemeConfig::default()).is_ok());
        assert!(validate_theme(&ThemeConfig::new("neutral", -0.5)).is_ok());
        assert!(validate_theme(&ThemeConfig::new("neutral", 2.0)).is_err());
        assert!(validate_theme(&ThemeConfig::new("rainbow", 0.0)).is_err());
    }
}
