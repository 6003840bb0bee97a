use grid_search::{run_benchmark, BenchmarkConfig};
use grid_search_maps::MapDirectory;
use log::info;
use std::error::Error;
use std::io;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "benchmark.toml";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = if config_path.exists() {
        info!("Reading configuration from {}", config_path.display());
        BenchmarkConfig::load(&config_path)?
    } else {
        info!("{} not found, using defaults", config_path.display());
        BenchmarkConfig::default()
    };

    let maps = MapDirectory::new(config.maps_dir.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let records = run_benchmark(&config, &maps, &mut out)?;
    info!("Finished {} benchmark entries", records.len());
    Ok(())
}
