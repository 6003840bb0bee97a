//! Repeated timing of the solvers over a set of maps.
//!
//! Trials run one after another on a single thread so the timings are not contended. Each map is
//! loaded once and the same immutable [Grid] is shared by every trial and algorithm.
use crate::config::{BenchmarkConfig, ConfigError};
use crate::coordinate::Coordinate;
use crate::grid::Grid;
use crate::solver::{Algorithm, GridSolver};
use core::fmt;
use grid_search_maps::{MapDirectory, MapError};
use log::{info, warn};
use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;

/// Source of grids by map name.
pub trait MapLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load_map(&self, name: &str) -> Result<Grid, Self::Error>;
}

impl MapLoader for MapDirectory {
    type Error = MapError;

    fn load_map(&self, name: &str) -> Result<Grid, MapError> {
        self.load(name).map(Grid::from)
    }
}

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("could not load map {map}: {source}")]
    Load {
        map: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not write report: {0}")]
    Report(#[from] io::Error),
}

/// Averages over the trials of one algorithm on one map.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkRecord {
    pub map: String,
    pub algorithm: Algorithm,
    pub trials: u32,
    pub mean_runtime: Duration,
    pub mean_explored: f64,
    pub mean_path_length: f64,
}

impl fmt::Display for BenchmarkRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:<18} | {:<9} | Avg time: {:.4}s | Explored: {:>7.0} | Path length: {:.0}",
            self.map,
            self.algorithm.name(),
            self.mean_runtime.as_secs_f64(),
            self.mean_explored,
            self.mean_path_length
        )
    }
}

/// Runs `solver` `trials` times between the same endpoints and averages the results.
pub fn measure<S: GridSolver>(
    solver: &S,
    grid: &Grid,
    start: Coordinate,
    goal: Coordinate,
    trials: u32,
) -> (Duration, f64, f64) {
    let mut total_runtime = Duration::ZERO;
    let mut total_explored = 0usize;
    let mut total_length = 0usize;
    for _ in 0..trials {
        let result = solver.search(grid, start, goal);
        total_runtime += result.runtime;
        total_explored += result.explored;
        total_length += result.len();
    }
    let n = trials.max(1);
    (
        total_runtime / n,
        total_explored as f64 / n as f64,
        total_length as f64 / n as f64,
    )
}

/// Benchmarks every configured algorithm on every configured map, writing one report line per
/// (map, algorithm) pair to `out`. A map that fails to load aborts the run with
/// [BenchmarkError::Load].
pub fn run_benchmark<L, W>(
    config: &BenchmarkConfig,
    loader: &L,
    out: &mut W,
) -> Result<Vec<BenchmarkRecord>, BenchmarkError>
where
    L: MapLoader,
    W: Write,
{
    config.validate()?;
    writeln!(out, "=== PathFinder Benchmark ===")?;
    writeln!(
        out,
        "Running {} trials per algorithm per map...\n",
        config.trials
    )?;

    let (start, goal) = (config.start, config.goal);
    let mut records = Vec::with_capacity(config.maps.len() * config.algorithms.len());
    for map in &config.maps {
        let grid = loader
            .load_map(map)
            .map_err(|source| BenchmarkError::Load {
                map: map.clone(),
                source: Box::new(source),
            })?;
        let (rows, cols) = grid.dimensions();
        info!("Loaded {} ({}x{})", map, rows, cols);
        if !grid.is_open(start) {
            warn!("Start {} is not an open cell of {}", start, map);
        }
        if !grid.is_open(goal) {
            warn!("Goal {} is not an open cell of {}", goal, map);
        }
        if grid.reachable(start, goal) {
            info!("{} is reachable from {} on {}", goal, start, map);
        } else {
            info!("{} is not reachable from {} on {}", goal, start, map);
        }

        for &algorithm in &config.algorithms {
            let (mean_runtime, mean_explored, mean_path_length) =
                measure(&algorithm, &grid, start, goal, config.trials);
            let record = BenchmarkRecord {
                map: map.clone(),
                algorithm,
                trials: config.trials,
                mean_runtime,
                mean_explored,
                mean_path_length,
            };
            writeln!(out, "{}", record)?;
            records.push(record);
        }
    }
    Ok(records)
}
