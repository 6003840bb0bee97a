use crate::coordinate::Coordinate;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use thiserror::Error;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Blocked,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Immutable occupancy grid. Cells are stored in a [BoolGrid] (x = column, y = row) where
/// `true` marks a blocked cell. Connected components over the 4-neighbourhood are computed once
/// on construction using a [UnionFind] structure.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: BoolGrid,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid from row-major cell data. All rows must have the same, non-zero length.
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Grid, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != cols) {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found: r.len(),
            });
        }
        let mut cells = BoolGrid::new(cols, rows.len(), false);
        for (row, r) in rows.iter().enumerate() {
            for (col, cell) in r.iter().enumerate() {
                cells.set(col as i32, row as i32, *cell == Cell::Blocked);
            }
        }
        Ok(Grid::from(cells))
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }

    pub fn cols(&self) -> usize {
        self.cells.width()
    }

    /// (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn in_bounds(&self, c: Coordinate) -> bool {
        c.row >= 0
            && c.col >= 0
            && (c.row as usize) < self.rows()
            && (c.col as usize) < self.cols()
    }

    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        if !self.in_bounds(c) {
            return None;
        }
        if self.cells.get(c.col, c.row) {
            Some(Cell::Blocked)
        } else {
            Some(Cell::Open)
        }
    }

    /// False for blocked cells and for coordinates outside the grid.
    pub fn is_open(&self, c: Coordinate) -> bool {
        self.cell(c) == Some(Cell::Open)
    }

    /// Open neighbours of `c` in the fixed order down, up, right, left. Both solvers expand in
    /// this order, which keeps their tie-breaking aligned.
    pub fn neighbors(&self, c: Coordinate) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        c.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.is_open(*n))
            .collect()
    }

    fn ix(&self, c: Coordinate) -> usize {
        c.row as usize * self.cols() + c.col as usize
    }

    /// Checks if both cells are open and on the same connected component.
    pub fn reachable(&self, start: Coordinate, goal: Coordinate) -> bool {
        self.is_open(start)
            && self.is_open(goal)
            && self.components.equiv(self.ix(start), self.ix(goal))
    }

    /// Number of open cells on the component containing `c`, zero if `c` is not open.
    pub fn component_size(&self, c: Coordinate) -> usize {
        if !self.is_open(c) {
            return 0;
        }
        let root = self.components.find(self.ix(c));
        self.open_coordinates()
            .filter(|p| self.components.find(self.ix(*p)) == root)
            .count()
    }

    pub fn open_cells(&self) -> usize {
        self.open_coordinates().count()
    }

    fn open_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.rows() as i32)
            .cartesian_product(0..self.cols() as i32)
            .map(|(row, col)| Coordinate::new(row, col))
            .filter(|c| self.is_open(*c))
    }

    /// First open cell with both row and column at least `offset`, scanning row by row.
    pub fn find_open_cell(&self, offset: usize) -> Option<Coordinate> {
        let offset = offset as i32;
        (offset..self.rows() as i32)
            .cartesian_product(offset..self.cols() as i32)
            .map(|(row, col)| Coordinate::new(row, col))
            .find(|c| self.is_open(*c))
    }

    /// Checks that every cell of the path is open and consecutive cells are 4-adjacent.
    pub fn is_valid_path(&self, path: &[Coordinate]) -> bool {
        path.iter().all(|c| self.is_open(*c))
            && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }

    fn generate_components(&mut self) {
        let (rows, cols) = self.dimensions();
        self.components = UnionFind::new(rows * cols);
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                let point = Coordinate::new(row, col);
                if !self.is_open(point) {
                    continue;
                }
                let parent_ix = self.ix(point);
                for n in [Coordinate::new(row + 1, col), Coordinate::new(row, col + 1)] {
                    if self.is_open(n) {
                        let ix = self.ix(n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
        debug!("Generated components for {}x{} grid", rows, cols);
    }
}

impl From<BoolGrid> for Grid {
    fn from(cells: BoolGrid) -> Grid {
        let mut grid = Grid {
            cells,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        grid
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() as i32 {
            let line = (0..self.cols() as i32)
                .map(|col| {
                    if self.is_open(Coordinate::new(row, col)) {
                        '.'
                    } else {
                        '@'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
