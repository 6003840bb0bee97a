use crate::search_context::{SearchContext, SmallestCostHolder};
use crate::{coordinate::Coordinate, grid::Grid, solver::GridSolver, solver::PathResult};
use fxhash::FxHashSet;
use log::debug;
use num_traits::{One, Zero};
use std::collections::BinaryHeap;
use std::time::Instant;

/// Uniform-cost search with a unit cost for every move.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> PathResult {
        let result = uniform_cost_search(grid, start, goal, |_, _| u32::one());
        debug!(
            "Dijkstra {} -> {}: length {}, explored {}",
            start,
            goal,
            result.len(),
            result.explored
        );
        result
    }
}

/// Uniform-cost search over the open 4-neighbourhood with costs given by `move_cost`.
///
/// Improving the cost of a cell pushes a new frontier entry instead of updating the old one;
/// stale entries are skipped once their cell has been finalized. The explored count is the number
/// of finalized cells.
pub fn uniform_cost_search<C, FC>(
    grid: &Grid,
    start: Coordinate,
    goal: Coordinate,
    mut move_cost: FC,
) -> PathResult
where
    C: Zero + Ord + Copy,
    FC: FnMut(&Coordinate, &Coordinate) -> C,
{
    let before = Instant::now();
    let mut ct: SearchContext<C> = SearchContext::new(start);
    if !grid.is_open(start) {
        return PathResult::new(Vec::new(), 1, before.elapsed());
    }
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        cost: C::zero(),
        index: 0,
        node: start,
    });
    let mut finalized = FxHashSet::default();
    while let Some(SmallestCostHolder { cost, index, node }) = to_see.pop() {
        // We may have pushed a cell several times when a cheaper way to it was found.
        if !finalized.insert(index) {
            continue;
        }
        if node == goal {
            break;
        }
        for n in grid.neighbors(node) {
            let new_cost = cost + move_cost(&node, &n);
            if let Some(n_ix) = ct.relax(n, index, new_cost) {
                to_see.push(SmallestCostHolder {
                    cost: new_cost,
                    index: n_ix,
                    node: n,
                });
            }
        }
    }
    PathResult::new(ct.reconstruct(goal), finalized.len(), before.elapsed())
}
