//! Per-search scratch state shared by both solvers. A context is created fresh for each search
//! and dropped once the path has been reconstructed, so no state leaks between invocations.
use crate::coordinate::Coordinate;
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;
use std::cmp::Ordering;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index stored for the start cell.
const NO_PARENT: usize = usize::MAX;

/// Frontier entry for uniform-cost search. Orders by cost only, reversed so that
/// [BinaryHeap](std::collections::BinaryHeap) pops the cheapest entry first. Entries with equal
/// cost come out in whatever order the heap yields.
pub(crate) struct SmallestCostHolder<C> {
    pub cost: C,
    pub index: usize,
    pub node: Coordinate,
}

impl<C: PartialEq> Eq for SmallestCostHolder<C> {}

impl<C: PartialEq> PartialEq for SmallestCostHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost)
    }
}

impl<C: Ord> PartialOrd for SmallestCostHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestCostHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

/// Maps every discovered cell to its parent's index and its best known cost. The key set is the
/// set of discovered cells; the start sits at index 0.
pub(crate) struct SearchContext<C> {
    parents: FxIndexMap<Coordinate, (usize, C)>,
}

impl<C: Zero + Ord + Copy> SearchContext<C> {
    pub fn new(start: Coordinate) -> SearchContext<C> {
        let mut parents = FxIndexMap::default();
        parents.insert(start, (NO_PARENT, C::zero()));
        SearchContext { parents }
    }

    /// Number of discovered cells, including the start.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Records `node` as reached from `parent` if it has not been discovered yet. Returns the
    /// index of the newly discovered node.
    pub fn discover(&mut self, node: Coordinate, parent: usize, cost: C) -> Option<usize> {
        match self.parents.entry(node) {
            Vacant(e) => {
                let index = e.index();
                e.insert((parent, cost));
                Some(index)
            }
            Occupied(_) => None,
        }
    }

    /// Records `node` as reached from `parent` if `cost` beats its best known cost (unknown
    /// cells count as infinitely far). Returns the node's index when the entry was updated.
    pub fn relax(&mut self, node: Coordinate, parent: usize, cost: C) -> Option<usize> {
        match self.parents.entry(node) {
            Vacant(e) => {
                let index = e.index();
                e.insert((parent, cost));
                Some(index)
            }
            Occupied(mut e) => {
                if cost < e.get().1 {
                    e.insert((parent, cost));
                    Some(e.index())
                } else {
                    None
                }
            }
        }
    }

    /// Follows parent indices back from `goal` and returns `[start, ..., goal]`, or an empty
    /// path if `goal` was never discovered.
    pub fn reconstruct(&self, goal: Coordinate) -> Vec<Coordinate> {
        let Some(goal_ix) = self.parents.get_index_of(&goal) else {
            return Vec::new();
        };
        let mut path: Vec<Coordinate> = std::iter::successors(Some(goal_ix), |&i| {
            self.parents
                .get_index(i)
                .map(|(_, &(parent, _))| parent)
                .filter(|&parent| parent != NO_PARENT)
        })
        .filter_map(|i| self.parents.get_index(i).map(|(node, _)| *node))
        .collect();
        path.reverse();
        path
    }
}
