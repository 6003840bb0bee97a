//! Benchmark configuration, loadable from TOML.
//!
//! ```
//! use grid_search::{Algorithm, BenchmarkConfig, Coordinate};
//!
//! let config = BenchmarkConfig::from_toml_str(r#"
//!     maps_dir = "data/maps"
//!     maps = ["corridors"]
//!     start = [1, 1]
//!     goal = [14, 30]
//!     trials = 3
//!     algorithms = ["bfs"]
//! "#).unwrap();
//!
//! assert_eq!(config.start, Coordinate::new(1, 1));
//! assert_eq!(config.algorithms, vec![Algorithm::Bfs]);
//! ```
use crate::coordinate::Coordinate;
use crate::solver::Algorithm;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which maps to benchmark, between which cells, and how often.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Directory the map names are resolved against.
    pub maps_dir: PathBuf,
    pub maps: Vec<String>,
    pub start: Coordinate,
    pub goal: Coordinate,
    /// Searches per map and algorithm.
    pub trials: u32,
    pub algorithms: Vec<Algorithm>,
}

impl Default for BenchmarkConfig {
    fn default() -> BenchmarkConfig {
        BenchmarkConfig {
            maps_dir: PathBuf::from("data/maps"),
            maps: vec!["DragonsAgeOrigins".to_owned(), "BauldersGateII".to_owned()],
            start: Coordinate::new(131, 297),
            goal: Coordinate::new(300, 300),
            trials: 5,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl BenchmarkConfig {
    pub fn from_toml_str(s: &str) -> Result<BenchmarkConfig, ConfigError> {
        let config: BenchmarkConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<BenchmarkConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        BenchmarkConfig::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Invalid("trials must be at least 1".to_owned()));
        }
        if self.maps.is_empty() {
            return Err(ConfigError::Invalid("no maps configured".to_owned()));
        }
        if self.algorithms.is_empty() {
            return Err(ConfigError::Invalid("no algorithms configured".to_owned()));
        }
        Ok(())
    }

    pub fn with_maps_dir<P: Into<PathBuf>>(mut self, maps_dir: P) -> BenchmarkConfig {
        self.maps_dir = maps_dir.into();
        self
    }

    pub fn with_maps<I, S>(mut self, maps: I) -> BenchmarkConfig
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.maps = maps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_endpoints(mut self, start: Coordinate, goal: Coordinate) -> BenchmarkConfig {
        self.start = start;
        self.goal = goal;
        self
    }

    pub fn with_trials(mut self, trials: u32) -> BenchmarkConfig {
        self.trials = trials;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> BenchmarkConfig {
        self.algorithms = algorithms;
        self
    }
}
