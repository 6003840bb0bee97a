use grid_search::solver::{bfs::BfsSolver, dijkstra::DijkstraSolver};
use grid_search::{Cell, Coordinate, Grid, GridSolver};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut rows = vec![vec![Cell::Open; 3]; 3];
    rows[1][1] = Cell::Blocked;
    let grid = Grid::from_cells(rows).expect("rows are rectangular");
    println!("{}", grid);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(2, 2);
    for solver in [&BfsSolver as &dyn GridSolver, &DijkstraSolver] {
        let result = solver.search(&grid, start, end);
        println!(
            "{}: explored {} cells in {:.2?}",
            solver.name(),
            result.explored,
            result.runtime
        );
        for p in &result.path {
            println!("{}", p);
        }
    }
}
