//! Loading of [Moving AI](https://movingai.com/benchmarks/grids.html) grid benchmarks: `.map`
//! files describing the obstacles and tab separated `.map.scen` files listing start and goal
//! cells together with the optimal distance between them.
//!
//! Only `@` and `O` tiles are walls. Trees (`T`), water (`W`) and swamp (`S`) are walkable like
//! plain ground, so every cell costs the same to enter.
//!
//! Maps are stored under `<root>/maps/<name>.map` and scenarios under
//! `<root>/scenarios/<name>.map.scen`, where a name such as `dao/arena` may include a
//! subdirectory.
use csv::ReaderBuilder;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use grid_util::BoolGrid;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Tiles that block movement. Every other tile is walkable.
const WALLS: [u8; 2] = [b'@', b'O'];

#[derive(Debug, Error)]
pub enum MapError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("missing or malformed `{0}` line in map header")]
    Header(&'static str),
    #[error("map row {row} has {found} tiles, expected {expected}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("map has {found} rows, expected {expected}")]
    MissingRows { expected: usize, found: usize },
    #[error("no benchmark named `{0}`")]
    UnknownBenchmark(String),
}

/// One line of a scenario file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Scenario {
    pub bucket: u32,
    pub map_name: String,
    pub map_width: u32,
    pub map_height: u32,
    pub start_x: u32,
    pub start_y: u32,
    pub goal_x: u32,
    pub goal_y: u32,
    pub optimal_length: f64,
}

impl Scenario {
    pub fn start(&self) -> Point {
        Point::new(self.start_x as i32, self.start_y as i32)
    }

    pub fn goal(&self) -> Point {
        Point::new(self.goal_x as i32, self.goal_y as i32)
    }
}

fn header_value(line: Option<&str>, key: &'static str) -> Result<usize, MapError> {
    line.and_then(|line| line.split_once(' '))
        .filter(|(k, _)| *k == key)
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .ok_or(MapError::Header(key))
}

/// Parses the contents of a `.map` file. Column `x` of row `y` in the file becomes cell `(x, y)`,
/// `true` marking a wall.
pub fn parse_map(map_str: &str) -> Result<BoolGrid, MapError> {
    let mut lines = map_str.lines();
    if !lines.next().is_some_and(|line| line.starts_with("type")) {
        return Err(MapError::Header("type"));
    }
    let height = header_value(lines.next(), "height")?;
    let width = header_value(lines.next(), "width")?;
    if lines.next().map(str::trim) != Some("map") {
        return Err(MapError::Header("map"));
    }

    let mut bool_grid = BoolGrid::new(width, height, true);
    let mut rows = 0;
    for (y, row) in lines.take(height).enumerate() {
        let tiles = row.trim_end().as_bytes();
        if tiles.len() < width {
            return Err(MapError::ShortRow {
                row: y,
                expected: width,
                found: tiles.len(),
            });
        }
        for (x, tile) in tiles.iter().take(width).enumerate() {
            bool_grid.set(x as i32, y as i32, WALLS.contains(tile));
        }
        rows += 1;
    }
    if rows < height {
        return Err(MapError::MissingRows {
            expected: height,
            found: rows,
        });
    }
    Ok(bool_grid)
}

/// Parses the contents of a `.map.scen` file, skipping the leading `version` line.
pub fn parse_scenarios(scen_str: &str) -> Result<Vec<Scenario>, MapError> {
    let data = match scen_str.split_once('\n') {
        Some((first, rest)) if first.starts_with("version") => rest,
        None if scen_str.starts_with("version") => "",
        _ => scen_str,
    };
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(data.as_bytes());
    let scenarios = csv_reader
        .deserialize()
        .collect::<Result<Vec<Scenario>, csv::Error>>()?;
    Ok(scenarios)
}

pub fn load_map(path: &Path) -> Result<BoolGrid, MapError> {
    parse_map(&fs::read_to_string(path)?)
}

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, MapError> {
    parse_scenarios(&fs::read_to_string(path)?)
}

fn map_path(root: &Path, name: &str) -> PathBuf {
    root.join("maps").join(format!("{}.map", name))
}

fn scenario_path(root: &Path, name: &str) -> PathBuf {
    root.join("scenarios").join(format!("{}.map.scen", name))
}

/// Names of all maps below `<root>/maps`, relative to it and without extension.
pub fn get_benchmark_names(root: &Path) -> Result<Vec<String>, MapError> {
    let maps = root.join("maps");
    let mut names = Vec::new();
    for entry in WalkDir::new(&maps).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "map") {
            continue;
        }
        if let Ok(rel_path) = path.with_extension("").strip_prefix(&maps) {
            let name = rel_path
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            names.push(name);
        }
    }
    Ok(names)
}

/// Loads a map together with its scenarios.
pub fn load_benchmark(root: &Path, name: &str) -> Result<(BoolGrid, Vec<Scenario>), MapError> {
    let bool_grid = load_map(&map_path(root, name))?;
    let scenarios = load_scenarios(&scenario_path(root, name))?;
    Ok((bool_grid, scenarios))
}

/// Like [load_benchmark], but first checks that the benchmark exists.
pub fn get_benchmark(root: &Path, name: &str) -> Result<(BoolGrid, Vec<Scenario>), MapError> {
    if get_benchmark_names(root)?.iter().any(|n| n == name) {
        load_benchmark(root, name)
    } else {
        Err(MapError::UnknownBenchmark(name.to_owned()))
    }
}
