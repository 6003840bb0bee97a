use crate::coordinate::Coordinate;
use crate::grid::Grid;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub mod bfs;
pub mod dijkstra;

use bfs::BfsSolver;
use dijkstra::DijkstraSolver;

/// Outcome of a single search. An unreachable goal is a normal outcome with an empty path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Cells from start to goal inclusive, empty if the goal was not reached.
    pub path: Vec<Coordinate>,
    /// Number of distinct cells visited (BFS) or finalized (uniform-cost search).
    pub explored: usize,
    pub runtime: Duration,
}

impl PathResult {
    pub fn new(path: Vec<Coordinate>, explored: usize, runtime: Duration) -> PathResult {
        PathResult {
            path,
            explored,
            runtime,
        }
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of unit-cost moves along the path, [None] if no path was found.
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Coordinate),
    #[error("start {0} is blocked")]
    StartBlocked(Coordinate),
    #[error("goal {0} is outside the grid")]
    GoalOutOfBounds(Coordinate),
    #[error("goal {0} is blocked")]
    GoalBlocked(Coordinate),
}

/// A borrowed grid together with the endpoints to search between.
#[derive(Clone, Copy, Debug)]
pub struct SearchRequest<'a> {
    pub grid: &'a Grid,
    pub start: Coordinate,
    pub goal: Coordinate,
}

impl<'a> SearchRequest<'a> {
    /// Unchecked request. Endpoints that are blocked or outside the grid produce an empty path.
    pub fn new(grid: &'a Grid, start: Coordinate, goal: Coordinate) -> SearchRequest<'a> {
        SearchRequest { grid, start, goal }
    }

    /// Request whose endpoints must both be open cells.
    pub fn validated(
        grid: &'a Grid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<SearchRequest<'a>, SearchError> {
        if !grid.in_bounds(start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        if !grid.is_open(start) {
            return Err(SearchError::StartBlocked(start));
        }
        if !grid.in_bounds(goal) {
            return Err(SearchError::GoalOutOfBounds(goal));
        }
        if !grid.is_open(goal) {
            return Err(SearchError::GoalBlocked(goal));
        }
        Ok(SearchRequest { grid, start, goal })
    }
}

/// Common contract of the grid search algorithms. A search borrows the grid, owns all of its
/// scratch state and never mutates the grid, so repeated or concurrent calls are independent.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    fn search(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> PathResult;

    fn solve(&self, request: &SearchRequest) -> PathResult {
        self.search(request.grid, request.start, request.goal)
    }
}

/// The available solvers, selectable by name in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dijkstra];
}

impl GridSolver for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => BfsSolver.name(),
            Algorithm::Dijkstra => DijkstraSolver.name(),
        }
    }

    fn search(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> PathResult {
        match self {
            Algorithm::Bfs => BfsSolver.search(grid, start, goal),
            Algorithm::Dijkstra => DijkstraSolver.search(grid, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
