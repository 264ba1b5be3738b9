//! Project configuration (inkfill.yaml) parsing.
//!
//! The config holds the background used to flatten transparent images and
//! the thresholds the fill engine classifies pixels with. Every key is
//! optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FillError, Result};
use crate::fill::FillPolicy;
use crate::types::Colour;

/// Default config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "inkfill.yaml";

/// Configuration loaded from inkfill.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colour painted under the image before filling.
    /// Always opaque: it is parsed as `#RRGGBB`.
    #[serde(
        default = "default_background",
        serialize_with = "serialize_colour",
        deserialize_with = "deserialize_colour"
    )]
    pub background: Colour,

    /// Border and tolerance thresholds.
    pub policy: FillPolicy,
}

fn default_background() -> Colour {
    Colour::WHITE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: default_background(),
            policy: FillPolicy::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FillError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| FillError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config to use: an explicit path must exist, otherwise
    /// `inkfill.yaml` in `dir` is used when present, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Ok((Self::load(&candidate)?, Some(candidate)))
        } else {
            Ok((Self::default(), None))
        }
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| FillError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    fn validate(&self) -> Result<()> {
        self.policy.validate()
    }
}

fn serialize_colour<S: Serializer>(colour: &Colour, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.collect_str(colour)
}

fn deserialize_colour<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Colour, D::Error> {
    let s = String::deserialize(d)?;
    Colour::from_hex(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.background, Colour::WHITE);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
background: "#FFF8E7"
policy:
  opaque_alpha: 128
  dark_channel: 80
  tolerance: 32
"##;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.background, Colour::rgb(0xFF, 0xF8, 0xE7));
        assert_eq!(
            config.policy,
            FillPolicy {
                opaque_alpha: 128,
                dark_channel: 80,
                tolerance: 32,
            }
        );
    }

    #[test]
    fn test_parse_partial_policy() {
        let config = Config::parse("policy:\n  tolerance: 20\n").unwrap();

        assert_eq!(config.policy.tolerance, 20);
        assert_eq!(config.policy.opaque_alpha, 100);
        assert_eq!(config.background, Colour::WHITE);
    }

    #[test]
    fn test_parse_rejects_bad_colour() {
        let err = Config::parse("background: white\n").unwrap_err();
        assert!(matches!(err, FillError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_zero_tolerance() {
        let err = Config::parse("policy:\n  tolerance: 0\n").unwrap_err();
        assert!(matches!(err, FillError::InvalidPolicy { .. }));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(Config::parse("policy:\n  tolerance: 300\n").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();

        assert!(yaml.contains("#FFFFFF"));
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();

        let (config, path) = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.is_none());

        std::fs::write(dir.path().join(CONFIG_FILENAME), "policy:\n  tolerance: 7\n").unwrap();
        let (config, path) = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.policy.tolerance, 7);
        assert_eq!(path, Some(dir.path().join(CONFIG_FILENAME)));

        let missing = dir.path().join("nope.yaml");
        assert!(Config::discover(Some(missing.as_path()), dir.path()).is_err());
    }
}
