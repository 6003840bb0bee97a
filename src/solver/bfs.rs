use crate::search_context::SearchContext;
use crate::{coordinate::Coordinate, grid::Grid, solver::GridSolver, solver::PathResult};
use log::debug;
use std::collections::VecDeque;
use std::time::Instant;

/// Breadth-first search. Every move costs one, so the first time the goal leaves the queue it
/// has been reached along a path with the fewest moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> PathResult {
        let before = Instant::now();
        // The start counts as visited even when it cannot be expanded.
        let mut ct: SearchContext<u32> = SearchContext::new(start);
        if !grid.is_open(start) {
            return PathResult::new(Vec::new(), ct.len(), before.elapsed());
        }
        let mut queue = VecDeque::from([(0, start, 0)]);
        while let Some((index, node, depth)) = queue.pop_front() {
            if node == goal {
                break;
            }
            for n in grid.neighbors(node) {
                if let Some(n_ix) = ct.discover(n, index, depth + 1) {
                    queue.push_back((n_ix, n, depth + 1));
                }
            }
        }
        let path = ct.reconstruct(goal);
        let result = PathResult::new(path, ct.len(), before.elapsed());
        debug!(
            "BFS {} -> {}: length {}, explored {}",
            start,
            goal,
            result.len(),
            result.explored
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests::grid_from_str;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = grid_from_str(&["."]);
        let start = Coordinate::new(0, 0);
        let result = BfsSolver.search(&grid, start, start);
        assert_eq!(result.path, vec![start]);
        assert_eq!(result.explored, 1);
    }

    /// Asserts that the optimal 4 step solution is found on an open 3x3 grid.
    #[test]
    fn solve_simple_problem() {
        let grid = grid_from_str(&["...", "...", "..."]);
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(2, 2);
        let result = BfsSolver.search(&grid, start, goal);
        assert_eq!(result.len(), 5);
        assert!(result.explored <= 9);
        assert_eq!(result.path.first(), Some(&start));
        assert_eq!(result.path.last(), Some(&goal));
        assert!(grid.is_valid_path(&result.path));
    }

    /// Down is expanded before right, so the path runs down the first column first.
    #[test]
    fn follows_neighbour_order_on_ties() {
        let grid = grid_from_str(&["..", ".."]);
        let result = BfsSolver.search(&grid, Coordinate::new(0, 0), Coordinate::new(1, 1));
        assert_eq!(
            result.path,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1)
            ]
        );
    }

    #[test]
    fn detour_around_wall() {
        // |S.@.|
        // |..@G|
        // |....|
        let grid = grid_from_str(&["..@.", "..@.", "...."]);
        let result = BfsSolver.search(&grid, Coordinate::new(0, 0), Coordinate::new(1, 3));
        assert_eq!(result.cost(), Some(6));
        assert!(grid.is_valid_path(&result.path));
    }

    #[test]
    fn unreachable_goal_explores_whole_component() {
        let grid = grid_from_str(&["...", "@@@", "..."]);
        let start = Coordinate::new(0, 1);
        let result = BfsSolver.search(&grid, start, Coordinate::new(2, 1));
        assert!(result.is_empty());
        assert_eq!(result.explored, 3);
        assert_eq!(result.explored, grid.component_size(start));
    }

    #[test]
    fn blocked_or_outside_start_only_counts_itself() {
        let grid = grid_from_str(&["@.", ".."]);
        for start in [Coordinate::new(0, 0), Coordinate::new(-1, 1)] {
            let result = BfsSolver.search(&grid, start, Coordinate::new(1, 1));
            assert!(result.is_empty());
            assert_eq!(result.explored, 1);
        }
    }

    #[test]
    fn goal_outside_grid_is_unreachable() {
        let grid = grid_from_str(&["..", ".."]);
        let result = BfsSolver.search(&grid, Coordinate::new(0, 0), Coordinate::new(5, 5));
        assert!(result.is_empty());
        assert_eq!(result.explored, 4);
    }
}
