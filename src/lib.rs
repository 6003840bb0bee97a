//! # grid_search
//!
//! Shortest paths on 4-connected occupancy grids. Two interchangeable solvers share one
//! contract: [BfsSolver](solver::bfs::BfsSolver) explores with a FIFO queue and
//! [DijkstraSolver](solver::dijkstra::DijkstraSolver) runs
//! [uniform-cost search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) with unit edge
//! costs. Both return a [PathResult] holding the path, the number of explored cells and the
//! time the search took.
//!
//! The [benchmark] module runs both solvers repeatedly over a set of maps and reports the
//! averaged statistics.
pub mod benchmark;
pub mod config;
pub mod coordinate;
pub mod grid;
mod search_context;
pub mod solver;

pub use benchmark::{run_benchmark, BenchmarkError, BenchmarkRecord, MapLoader};
pub use config::{BenchmarkConfig, ConfigError};
pub use coordinate::Coordinate;
pub use grid::{Cell, Grid, GridError};
pub use solver::{Algorithm, GridSolver, PathResult, SearchError, SearchRequest};

/// Inline capacity of the neighbour buffers, one slot per cardinal direction.
pub const N_SMALLVEC_SIZE: usize = 4;
