//! Error types for palette validation.
//!
//! Generation and rendering never fail on well-formed input, so every
//! variant here is raised by [`crate::validate`] before any color work
//! starts.

use thiserror::Error;

/// Errors that can occur when validating palette input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// A seed color is not a `#RRGGBB` hex string.
    #[error("invalid {}color: {value}, expected hex format (#RRGGBB)", entry_label(.name))]
    InvalidColor {
        /// Name of the seed entry, when the color came from a colors map.
        name: Option<String>,
        /// The rejected value.
        value: String,
    },

    /// The scheme name is not one of the seven M3 variants.
    #[error(
        "invalid scheme: {0}, must be one of: content, expressive, fidelity, monochrome, neutral, tonalSpot, vibrant"
    )]
    InvalidScheme(String),

    /// The contrast level lies outside `[-1, 1]`.
    #[error("contrast must be between -1 and 1, got: {0}")]
    InvalidContrast(f64),

    /// The colors map has no `primary` entry.
    #[error("colors map must include a primary color")]
    MissingPrimary,

    /// An extra seed derives role names that clash with existing roles.
    #[error("color '{name}' produces role '{role}', which is already defined")]
    RoleCollision {
        /// The extra seed's name.
        name: String,
        /// The first clashing role key.
        role: String,
    },

    /// A value could not be parsed as one of the option enums.
    #[error("invalid {kind}: {value}, expected one of: {expected}")]
    InvalidOption {
        /// What was being parsed (e.g. "format").
        kind: &'static str,
        /// The rejected value.
        value: String,
        /// Accepted spellings.
        expected: &'static str,
    },
}

fn entry_label(name: &Option<String>) -> String {
    name.as_ref().map(|n| format!("{} ", n)).unwrap_or_default()
}

/// Result type for palette validation.
pub type Result<T> = std::result::Result<T, PaletteError>;
