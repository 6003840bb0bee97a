/// Fuzzes both solvers by checking for many random grids that a path is found exactly when the
/// goal lies on the same connected component as the start, and that both solvers agree on its
/// length.
use grid_search::solver::{bfs::BfsSolver, dijkstra::DijkstraSolver};
use grid_search::{Cell, Coordinate, Grid, GridSolver};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, start: Coordinate, end: Coordinate) -> Grid {
    let rows: Vec<Vec<Cell>> = (0..h as i32)
        .map(|row| {
            (0..w as i32)
                .map(|col| {
                    let p = Coordinate::new(row, col);
                    if p != start && p != end && rng.gen_bool(0.4) {
                        Cell::Blocked
                    } else {
                        Cell::Open
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();
    Grid::from_cells(rows).unwrap()
}

fn visualize_grid(grid: &Grid, start: &Coordinate, end: &Coordinate) {
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let p = Coordinate::new(row, col);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_open(p) {
                print!(".");
            } else {
                print!("@");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng, start, end);
        let reachable = grid.reachable(start, end);
        let bfs = BfsSolver.search(&grid, start, end);
        let dijkstra = DijkstraSolver.search(&grid, start, end);
        // Show the grid if the solvers disagree with the components
        if bfs.found() != reachable || dijkstra.found() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(bfs.found(), reachable);
        assert_eq!(dijkstra.found(), reachable);
        if reachable {
            assert_eq!(bfs.len(), dijkstra.len());
            for result in [&bfs, &dijkstra] {
                assert!(grid.is_valid_path(&result.path));
                assert_eq!(result.path.first(), Some(&start));
                assert_eq!(result.path.last(), Some(&end));
                assert!(result.cost().unwrap() >= start.manhattan_distance(&end) as usize);
                assert!(result.explored <= grid.component_size(start));
            }
        } else {
            assert_eq!(bfs.explored, grid.component_size(start));
            assert_eq!(dijkstra.explored, grid.component_size(start));
        }
    }
}

#[test]
fn fuzz_random_endpoints() {
    const W: usize = 12;
    const H: usize = 7;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let start = Coordinate::new(rng.gen_range(0..H as i32), rng.gen_range(0..W as i32));
        let end = Coordinate::new(rng.gen_range(0..H as i32), rng.gen_range(0..W as i32));
        let grid = random_grid(W, H, &mut rng, start, end);
        let bfs = BfsSolver.search(&grid, start, end);
        let dijkstra = DijkstraSolver.search(&grid, start, end);
        assert_eq!(bfs.found(), grid.reachable(start, end));
        assert_eq!(bfs.len(), dijkstra.len());
        if start == end {
            assert_eq!(bfs.path, vec![start]);
            assert_eq!(dijkstra.path, vec![start]);
            assert_eq!(bfs.explored, 1);
            assert_eq!(dijkstra.explored, 1);
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let mut rng = StdRng::seed_from_u64(2);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(14, 19);
    let grid = random_grid(20, 15, &mut rng, start, end);
    for solver in [&BfsSolver as &dyn GridSolver, &DijkstraSolver] {
        let first = solver.search(&grid, start, end);
        for _ in 0..5 {
            let again = solver.search(&grid, start, end);
            assert_eq!(again.path, first.path);
            assert_eq!(again.explored, first.explored);
        }
    }
}
