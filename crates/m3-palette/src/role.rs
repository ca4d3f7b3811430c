//! The standard Material 3 color roles and role-key casing.
//!
//! [`STANDARD_ROLES`] lists every role in the order it appears in
//! generated output. Renderers iterate maps built from this order, so the
//! order is part of the output format.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! roles {
    ($($variant:ident => $camel:literal, $kebab:literal;)+) => {
        /// A standard Material 3 color role.
        ///
        /// The discriminant is the role's position in [`STANDARD_ROLES`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Role {
            $($variant,)+
        }

        /// Every standard role, in output order.
        pub const STANDARD_ROLES: [Role; Role::COUNT] = [$(Role::$variant,)+];

        impl Role {
            /// Number of standard roles.
            pub const COUNT: usize = [$($camel,)+].len();

            /// The role's camelCase key, e.g. `onPrimaryContainer`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Role::$variant => $camel,)+
                }
            }

            /// The role's kebab-case key, e.g. `on-primary-container`.
            pub const fn kebab_name(self) -> &'static str {
                match self {
                    $(Role::$variant => $kebab,)+
                }
            }
        }
    };
}

roles! {
    Background => "background", "background";
    OnBackground => "onBackground", "on-background";
    Surface => "surface", "surface";
    SurfaceDim => "surfaceDim", "surface-dim";
    SurfaceBright => "surfaceBright", "surface-bright";
    SurfaceContainerLowest => "surfaceContainerLowest", "surface-container-lowest";
    SurfaceContainerLow => "surfaceContainerLow", "surface-container-low";
    SurfaceContainer => "surfaceContainer", "surface-container";
    SurfaceContainerHigh => "surfaceContainerHigh", "surface-container-high";
    SurfaceContainerHighest => "surfaceContainerHighest", "surface-container-highest";
    OnSurface => "onSurface", "on-surface";
    SurfaceVariant => "surfaceVariant", "surface-variant";
    OnSurfaceVariant => "onSurfaceVariant", "on-surface-variant";
    InverseSurface => "inverseSurface", "inverse-surface";
    OnInverseSurface => "onInverseSurface", "on-inverse-surface";
    Outline => "outline", "outline";
    OutlineVariant => "outlineVariant", "outline-variant";
    Primary => "primary", "primary";
    OnPrimary => "onPrimary", "on-primary";
    PrimaryContainer => "primaryContainer", "primary-container";
    OnPrimaryContainer => "onPrimaryContainer", "on-primary-container";
    InversePrimary => "inversePrimary", "inverse-primary";
    Secondary => "secondary", "secondary";
    OnSecondary => "onSecondary", "on-secondary";
    SecondaryContainer => "secondaryContainer", "secondary-container";
    OnSecondaryContainer => "onSecondaryContainer", "on-secondary-container";
    Tertiary => "tertiary", "tertiary";
    OnTertiary => "onTertiary", "on-tertiary";
    TertiaryContainer => "tertiaryContainer", "tertiary-container";
    OnTertiaryContainer => "onTertiaryContainer", "on-tertiary-container";
    Error => "error", "error";
    OnError => "onError", "on-error";
    ErrorContainer => "errorContainer", "error-container";
    OnErrorContainer => "onErrorContainer", "on-error-container";
    Scrim => "scrim", "scrim";
    Shadow => "shadow", "shadow";
    SurfaceTint => "surfaceTint", "surface-tint";
}

impl Role {
    /// Position of this role in [`STANDARD_ROLES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The role's key in the requested case.
    pub const fn key(self, case: KeyCase) -> &'static str {
        match case {
            KeyCase::Kebab => self.kebab_name(),
            KeyCase::Camel => self.name(),
        }
    }

    /// Looks up a standard role by its camelCase key.
    pub fn from_name(name: &str) -> Option<Role> {
        STANDARD_ROLES.into_iter().find(|role| role.name() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Naming style for role keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCase {
    /// `on-primary-container`, used for CSS variables.
    Kebab,
    /// `onPrimaryContainer`, used for JavaScript tables.
    #[default]
    Camel,
}

impl KeyCase {
    /// Selects kebab-case when `true`.
    pub fn from_kebab_flag(use_kebab_case: bool) -> Self {
        if use_kebab_case {
            KeyCase::Kebab
        } else {
            KeyCase::Camel
        }
    }

    /// Renders a user-chosen seed name in this case.
    pub fn seed_key(self, name: &str) -> String {
        match self {
            KeyCase::Kebab => to_kebab_case(name),
            KeyCase::Camel => name.to_string(),
        }
    }

    /// Keys of the four roles derived from a custom seed, in output order:
    /// base, `on` base, container, `on` container.
    ///
    /// Kebab keys hyphenate the kebab-cased name (`on-brand-container`);
    /// camel keys capitalize the name only after the `on` prefix
    /// (`onBrand`, `brandContainer`, `onBrandContainer`).
    pub fn custom_keys(self, name: &str) -> [String; 4] {
        match self {
            KeyCase::Kebab => {
                let base = to_kebab_case(name);
                let on = format!("on-{}", base);
                let container = format!("{}-container", base);
                let on_container = format!("on-{}-container", base);
                [base, on, container, on_container]
            }
            KeyCase::Camel => {
                let capitalized = capitalize(name);
                [
                    name.to_string(),
                    format!("on{}", capitalized),
                    format!("{}Container", name),
                    format!("on{}Container", capitalized),
                ]
            }
        }
    }
}

/// Converts a camelCase identifier to kebab-case.
///
/// Every character without a lowercase form of its own (uppercase
/// letters, but also digits and punctuation) starts a new segment, except
/// at the start of the string. `surfaceContainerLow` becomes
/// `surface-container-low` and `brand2` becomes `brand-2`.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_lowercase() {
            out.push(ch);
        } else {
            if index != 0 {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Uppercases the first character of `name`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
