//! Configuration loaded from a TOML file.
//!
//! ```toml
//! [generation]
//! grid_size = 12
//! trap_count = 20
//! max_retries = 32
//! seed = 7
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::mapgen::DEFAULT_MAX_RETRIES;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub grid_size: i32,
    pub trap_count: usize,
    /// Re-draws before falling back to repairing the last sample.
    pub max_retries: usize,
    /// Fixed RNG seed; a random one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            trap_count: 15,
            max_retries: DEFAULT_MAX_RETRIES,
            seed: None,
        }
    }
}

impl Config {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults() {
        let c = Config::load(None).unwrap();
        assert_eq!(c.generation.grid_size, 10);
        assert_eq!(c.generation.trap_count, 15);
        assert_eq!(c.generation.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(c.generation.seed, None);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let c = Config::from_toml("[generation]\ngrid_size = 20\nseed = 3\n").unwrap();
        assert_eq!(c.generation.grid_size, 20);
        assert_eq!(c.generation.seed, Some(3));
        assert_eq!(c.generation.trap_count, 15);

        let empty = Config::from_toml("").unwrap();
        assert_eq!(empty.generation.grid_size, 10);
    }

    #[test]
    fn bad_values_are_config_errors() {
        let err = Config::from_toml("[generation]\ntrap_count = \"many\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load(Some(Path::new("/nonexistent/trapgrid.toml"))).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
