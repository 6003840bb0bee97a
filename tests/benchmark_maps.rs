use grid_search::solver::{bfs::BfsSolver, dijkstra::DijkstraSolver};
use grid_search::{
    run_benchmark, Algorithm, BenchmarkConfig, BenchmarkError, Coordinate, GridSolver, MapLoader,
};
use grid_search_maps::{MapDirectory, MapError};

const MAPS_DIR: &str = "data/maps";

#[test]
fn bundled_maps_are_listed() {
    let maps = MapDirectory::new(MAPS_DIR);
    assert_eq!(maps.names().unwrap(), vec!["corridors", "islands"]);
}

#[test]
fn verify_solution_distance() {
    let maps = MapDirectory::new(MAPS_DIR);
    let grid = maps.load_map("corridors").unwrap();
    assert_eq!(grid.dimensions(), (16, 32));
    let scenarios = maps.scenarios("corridors").unwrap();
    assert!(!scenarios.is_empty());
    for scenario in &scenarios {
        let start = Coordinate::from(scenario.start());
        let end = Coordinate::from(scenario.goal());
        println!("Start: {start}; End: {end}; Distance: {}", scenario.distance);
        for solver in [&BfsSolver as &dyn GridSolver, &DijkstraSolver] {
            let result = solver.search(&grid, start, end);
            assert!(grid.is_valid_path(&result.path));
            assert_eq!(result.cost(), Some(scenario.distance as usize));
        }
    }
}

#[test]
fn split_map_has_no_path() {
    let maps = MapDirectory::new(MAPS_DIR);
    let grid = maps.load_map("islands").unwrap();
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(9, 15);
    for solver in [&BfsSolver as &dyn GridSolver, &DijkstraSolver] {
        let result = solver.search(&grid, start, end);
        assert!(result.is_empty());
        assert_eq!(result.explored, grid.component_size(start));
        assert_eq!(result.explored, 52);
    }
}

#[test]
fn harness_on_bundled_maps() {
    let config = BenchmarkConfig::default()
        .with_maps_dir(MAPS_DIR)
        .with_maps(["corridors", "islands"])
        .with_endpoints(Coordinate::new(0, 0), Coordinate::new(9, 15))
        .with_trials(5);
    let maps = MapDirectory::new(MAPS_DIR);
    let mut out = Vec::new();
    let records = run_benchmark(&config, &maps, &mut out).unwrap();
    assert_eq!(records.len(), 4);
    for record in &records {
        let expected = if record.map == "corridors" { 29.0 } else { 0.0 };
        assert_eq!(record.mean_path_length, expected);
    }
    let corridors_bfs = records
        .iter()
        .find(|r| r.map == "corridors" && r.algorithm == Algorithm::Bfs)
        .unwrap();
    let grid = maps.load_map("corridors").unwrap();
    let single = BfsSolver.search(&grid, config.start, config.goal);
    assert_eq!(corridors_bfs.mean_explored, single.explored as f64);
    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("corridors          | Dijkstra  | Avg time: "));
}

#[test]
fn harness_surfaces_missing_map() {
    let config = BenchmarkConfig::default()
        .with_maps_dir(MAPS_DIR)
        .with_maps(["corridors", "no_such_map"]);
    let maps = MapDirectory::new(MAPS_DIR);
    let mut out = Vec::new();
    let err = run_benchmark(&config, &maps, &mut out).unwrap_err();
    match err {
        BenchmarkError::Load { map, source } => {
            assert_eq!(map, "no_such_map");
            assert!(source.downcast_ref::<MapError>().is_some());
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn bundled_config_loads() {
    let config = BenchmarkConfig::load("benchmark.toml").unwrap();
    assert_eq!(config.maps, vec!["corridors", "islands"]);
    assert_eq!(config.goal, Coordinate::new(9, 15));
}
