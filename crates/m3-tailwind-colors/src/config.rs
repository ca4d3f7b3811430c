//! The `m3-colors.config.json` file.
//!
//! The file is JSON with camelCase keys. Everything except `colors` is
//! optional; missing values fall back to command defaults at generation
//! time.
//!
//! ```json
//! {
//!   "colors": { "primary": "#6750A4", "brand": "#FF5722" },
//!   "scheme": "content",
//!   "contrast": 0.0,
//!   "format": "oklch",
//!   "mode": "combined",
//!   "output": "src/m3-theme.css"
//! }
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use m3_palette::{ColorFormat, DarkModeStrategy, OutputMode, SeedColor, SeedColors};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "m3-colors.config.json";

/// Errors reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write config file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[source] serde_json::Error),
}

/// Which kind of project the output is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Tailwind CSS v4 stylesheet.
    #[default]
    Web,
    /// NativeWind CSS variables plus a TypeScript colors module.
    Nativewind,
}

impl Target {
    pub const fn as_str(self) -> &'static str {
        match self {
            Target::Web => "web",
            Target::Nativewind => "nativewind",
        }
    }

    /// Where the stylesheet goes when no output path is configured.
    pub fn default_output(self) -> PathBuf {
        match self {
            Target::Web => PathBuf::from("src/m3-theme.css"),
            Target::Nativewind => PathBuf::from("global.css"),
        }
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Target::Web),
            "nativewind" => Ok(Target::Nativewind),
            _ => Err(format!("unknown target '{}', expected one of: web, nativewind", s)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorsConfig {
    /// Seed colors; `primary` is required.
    pub colors: SeedColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ColorFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<OutputMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors_output: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkModeStrategy>,
}

impl ColorsConfig {
    /// A config with only seed colors set.
    pub fn new(colors: SeedColors) -> Self {
        Self {
            colors,
            scheme: None,
            contrast: None,
            format: None,
            mode: None,
            output: None,
            target: None,
            colors_output: None,
            dark_mode: None,
        }
    }

    /// Applies command-line overrides. Set flags win; flag colors are
    /// merged into the existing color map by name.
    pub fn merge_with_flags(mut self, flags: ConfigOverrides) -> Self {
        for (name, hex) in flags.colors {
            self.colors.insert(name, SeedColor::new(hex));
        }
        self.scheme = flags.scheme.or(self.scheme);
        self.contrast = flags.contrast.or(self.contrast);
        self.format = flags.format.or(self.format);
        self.mode = flags.mode.or(self.mode);
        self.output = flags.output.or(self.output);
        self.target = flags.target.or(self.target);
        self.colors_output = flags.colors_output.or(self.colors_output);
        self.dark_mode = flags.dark_mode.or(self.dark_mode);
        self
    }
}

/// Values given on the command line, each optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// `(name, hex)` pairs in flag order.
    pub colors: Vec<(String, String)>,
    pub scheme: Option<String>,
    pub contrast: Option<f64>,
    pub format: Option<ColorFormat>,
    pub mode: Option<OutputMode>,
    pub output: Option<PathBuf>,
    pub target: Option<Target>,
    pub colors_output: Option<PathBuf>,
    pub dark_mode: Option<DarkModeStrategy>,
}

/// Loads the config at `path`.
///
/// A missing file is `Ok(None)`. A file without `colors.primary` is a
/// parse error.
pub fn load_config(path: &Path) -> Result<Option<ColorsConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(Some(config))
}

/// Writes `config` to `path` as two-space indented JSON.
pub fn save_config(config: &ColorsConfig, path: &Path) -> Result<(), ConfigError> {
    let mut content = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    content.push('\n');
    fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_keys() {
        let json = r##"{
            "colors": { "primary": "#6750A4", "brand": "#FF5722" },
            "scheme": "vibrant",
            "contrast": 0.5,
            "format": "hex",
            "mode": "light",
            "output": "out/theme.css",
            "target": "nativewind",
            "colorsOutput": "out/colors.ts",
            "darkMode": "class"
        }"##;
        let config: ColorsConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.colors.primary(), "#6750A4");
        assert!(config.colors.extra("brand").is_some());
        assert_eq!(config.scheme.as_deref(), Some("vibrant"));
        assert_eq!(config.contrast, Some(0.5));
        assert_eq!(config.format, Some(ColorFormat::Hex));
        assert_eq!(config.mode, Some(OutputMode::Light));
        assert_eq!(config.output, Some(PathBuf::from("out/theme.css")));
        assert_eq!(config.target, Some(Target::Nativewind));
        assert_eq!(config.colors_output, Some(PathBuf::from("out/colors.ts")));
        assert_eq!(config.dark_mode, Some(DarkModeStrategy::Class));
    }

    #[test]
    fn only_colors_is_required() {
        let config: ColorsConfig =
            serde_json::from_str(r##"{"colors": {"primary": "#6750A4"}}"##).unwrap();
        assert_eq!(config, ColorsConfig::new(SeedColors::new("#6750A4")));
    }

    #[test]
    fn missing_primary_is_rejected() {
        let err = serde_json::from_str::<ColorsConfig>(r##"{"colors": {"brand": "#FF5722"}}"##)
            .unwrap_err();
        assert!(err.to_string().contains("primary"));
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let config = ColorsConfig::new(SeedColors::new("#6750A4"));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r##"{"colors":{"primary":"#6750A4"}}"##);
    }

    #[test]
    fn flags_override_config() {
        let mut config = ColorsConfig::new(SeedColors::new("#6750A4").add("brand", "#FF5722"));
        config.scheme = Some("content".into());
        config.format = Some(ColorFormat::Oklch);

        let merged = config.merge_with_flags(ConfigOverrides {
            colors: vec![
                ("primary".into(), "#0062A8".into()),
                ("secondary".into(), "#00A86B".into()),
            ],
            scheme: Some("vibrant".into()),
            ..Default::default()
        });

        assert_eq!(merged.colors.primary(), "#0062A8");
        let names: Vec<_> = merged.colors.names().collect();
        assert_eq!(names, ["primary", "brand", "secondary"]);
        assert_eq!(merged.scheme.as_deref(), Some("vibrant"));
        assert_eq!(merged.format, Some(ColorFormat::Oklch));
    }

    #[test]
    fn target_round_trips_through_str() {
        for target in [Target::Web, Target::Nativewind] {
            assert_eq!(target.to_string().parse::<Target>(), Ok(target));
        }
        assert!("ios".parse::<Target>().is_err());
    }

    #[test]
    fn default_output_depends_on_target() {
        assert_eq!(Target::Web.default_output(), PathBuf::from("src/m3-theme.css"));
        assert_eq!(Target::Nativewind.default_output(), PathBuf::from("global.css"));
    }
}
