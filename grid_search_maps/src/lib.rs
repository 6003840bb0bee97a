//! Loading of [Moving AI](https://movingai.com/benchmarks/grids.html) grid maps and scenario files.
//!
//! Maps are returned as a [BoolGrid] where `true` marks a blocked tile, indexed with x as the
//! column and y as the row.
use csv::ReaderBuilder;
use grid_util::grid::ValueGrid;
use grid_util::BoolGrid;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

const MAP_EXTENSION: &str = "map";
const SCENARIO_SUFFIX: &str = ".map.scen";

#[derive(Debug, Error)]
pub enum MapError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no `map` marker line found")]
    MissingMapMarker,

    #[error("malformed header line {line:?}")]
    Header { line: String },

    #[error("map contains no rows")]
    Empty,

    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, tile: char },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("header declares {declared_width}x{declared_height} but data is {width}x{height}")]
    DimensionMismatch {
        declared_width: usize,
        declared_height: usize,
        width: usize,
        height: usize,
    },

    #[error("could not parse scenario record: {0}")]
    Scenario(#[from] csv::Error),

    #[error("could not walk map directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Whether a tile character is blocked. Returns [None] for characters outside the map alphabet.
pub fn tile_blocked(tile: char) -> Option<bool> {
    match tile {
        '.' | 'G' | 'S' => Some(false),
        '@' | 'T' | 'O' | 'W' => Some(true),
        _ => None,
    }
}

fn parse_header_value(line: &str) -> Result<usize, MapError> {
    line.split_once(' ')
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .ok_or_else(|| MapError::Header {
            line: line.to_owned(),
        })
}

/// Parses the text of a `.map` file. Everything before the `map` marker line is treated as
/// header; `height` and `width` entries are checked against the rows that follow it.
pub fn parse_map(map_str: &str) -> Result<BoolGrid, MapError> {
    let mut lines = map_str.lines();
    let mut declared_height = None;
    let mut declared_width = None;
    let mut found_marker = false;
    for line in lines.by_ref() {
        let line = line.trim();
        let key = line.split(' ').next().unwrap_or_default().to_lowercase();
        match key.as_str() {
            "map" => {
                found_marker = true;
                break;
            }
            "height" => declared_height = Some(parse_header_value(line)?),
            "width" => declared_width = Some(parse_header_value(line)?),
            _ => {}
        }
    }
    if !found_marker {
        return Err(MapError::MissingMapMarker);
    }

    let mut rows: Vec<&str> = lines.map(str::trim_end).collect();
    while rows.last().is_some_and(|line| line.is_empty()) {
        rows.pop();
    }
    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
    let height = rows.len();
    if height == 0 || width == 0 {
        return Err(MapError::Empty);
    }
    if let (Some(declared_width), Some(declared_height)) = (declared_width, declared_height) {
        if declared_width != width || declared_height != height {
            return Err(MapError::DimensionMismatch {
                declared_width,
                declared_height,
                width,
                height,
            });
        }
    }

    let mut bool_grid: BoolGrid = BoolGrid::new(width, height, false);
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(MapError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        for (col, tile) in line.chars().enumerate() {
            let blocked = tile_blocked(tile).ok_or(MapError::UnknownTile { row, col, tile })?;
            bool_grid.set(col as i32, row as i32, blocked);
        }
    }
    debug!("Parsed {}x{} map", width, height);
    Ok(bool_grid)
}

/// Reads and parses a `.map` file.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<BoolGrid, MapError> {
    let path = path.as_ref();
    let map_str = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_map(&map_str)
}

#[allow(unused)]
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    bucket: u32,
    file_name: String,
    w: u32,
    h: u32,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    pub distance: f64,
}

impl Scenario {
    /// Start as (row, column).
    pub fn start(&self) -> (i32, i32) {
        (self.y1 as i32, self.x1 as i32)
    }
    /// Goal as (row, column).
    pub fn goal(&self) -> (i32, i32) {
        (self.y2 as i32, self.x2 as i32)
    }
}

/// Parses the text of a `.scen` file. The first line holds the format version and is skipped.
pub fn parse_scenarios(scen_str: &str) -> Result<Vec<Scenario>, MapError> {
    let remaining_data = scen_str.lines().skip(1).collect::<Vec<_>>().join("\n");
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());
    csv_reader
        .deserialize()
        .map(|record| record.map_err(MapError::from))
        .collect()
}

pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, MapError> {
    let path = path.as_ref();
    let scen_str = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_scenarios(&scen_str)
}

/// A directory of `.map` files, addressed by their path relative to the root without extension.
#[derive(Clone, Debug)]
pub struct MapDirectory {
    root: PathBuf,
}

impl MapDirectory {
    pub fn new<P: Into<PathBuf>>(root: P) -> MapDirectory {
        MapDirectory { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn map_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{MAP_EXTENSION}"))
    }

    pub fn scenario_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}{SCENARIO_SUFFIX}"))
    }

    pub fn load(&self, name: &str) -> Result<BoolGrid, MapError> {
        load_map(self.map_path(name))
    }

    pub fn scenarios(&self, name: &str) -> Result<Vec<Scenario>, MapError> {
        load_scenarios(self.scenario_path(name))
    }

    /// Names of all maps below the root, sorted.
    pub fn names(&self) -> Result<Vec<String>, MapError> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(MAP_EXTENSION)
            {
                continue;
            }
            if let Ok(rel_path) = path.with_extension("").strip_prefix(&self.root) {
                let name = rel_path
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}
