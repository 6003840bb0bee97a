use core::fmt;
use serde::{Deserialize, Serialize};

/// A grid cell addressed by row and column. Serialized as a `[row, col]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Coordinate {
        Coordinate { row, col }
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four cardinal neighbours in search order: down, up, right, left.
    pub fn neumann_neighborhood(&self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.row + 1, self.col),
            Coordinate::new(self.row - 1, self.col),
            Coordinate::new(self.row, self.col + 1),
            Coordinate::new(self.row, self.col - 1),
        ]
    }

    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Coordinate {
        Coordinate::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> (i32, i32) {
        (c.row, c.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
