//! # grid_search
//!
//! Shortest paths on a uniform-cost 8-connected grid. Straight steps cost 1 and diagonal steps
//! cost √2, and a diagonal step is never allowed to clip the corner of a wall. Two searches share
//! one best-first loop:
//!
//! - [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the full neighbourhood with a
//!   pluggable [Heuristic], which becomes Dijkstra's algorithm with the [Zero](heuristic::Zero)
//!   heuristic.
//! - [Jump Point Search](https://en.wikipedia.org/wiki/Jump_point_search), which only puts jump
//!   points in the open set and unrolls them into a step by step path afterwards.
//!
//! Every search can write [discovery events](event::DiscoveryEvent) to a caller-owned sink so
//! that it can be replayed later. [Pathfinder] bundles a grid, a start and end cell and a
//! [SearchConfig] in the way an interactive editor would use them.
pub mod astar_jps;
pub mod collections;
pub mod config;
pub mod event;
pub mod heuristic;
pub mod pathing_grid;
pub mod solver;

use core::f64::consts::SQRT_2;

use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use itertools::Itertools;
use log::debug;

pub use crate::astar_jps::Solution;
pub use crate::collections::ContainerError;
pub use crate::config::{Algorithm, ParseConfigError, SearchConfig};
pub use crate::event::{DiscoveryEvent, EventKind, EventLog, EventSink};
pub use crate::heuristic::{Heuristic, HeuristicKind};
pub use crate::pathing_grid::{GridError, PathingGrid};
pub use crate::solver::{
    astar::AstarSolver, dijkstra::DijkstraSolver, jps::JPSSolver, GridSolver,
};

/// Inline capacity of the neighbour lists, enough for a full 8-neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;
/// Cost of a horizontal or vertical step.
pub const CARDINAL_COST: f64 = 1.0;
/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = SQRT_2;

/// Turns waypoints into a path on the grid which can be followed step by step, by walking from
/// each waypoint towards the next one cell at a time. Consecutive waypoints found by JPS always
/// lie on a straight or diagonal line, so this reproduces the cells the jump passed over.
pub fn waypoints_to_path(waypoints: &[Point]) -> Vec<Point> {
    let mut path: Vec<Point> = Vec::new();
    let mut waypoints = waypoints.iter();
    let Some(&first) = waypoints.next() else {
        return path;
    };
    let mut current = first;
    path.push(current);
    for next in waypoints {
        while current != *next {
            current = Point::new(
                current.x + (next.x - current.x).signum(),
                current.y + (next.y - current.y).signum(),
            );
            path.push(current);
        }
    }
    path
}

/// Sum of the step costs along a step by step path.
pub fn path_cost(path: &[Point]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(p1, p2)| {
            if p1.x != p2.x && p1.y != p2.y {
                DIAGONAL_COST
            } else {
                CARDINAL_COST
            }
        })
        .sum()
}

/// An editable grid with a start and an end cell, searched with the configured algorithm.
///
/// The start defaults to the bottom left corner `(0, 0)` and the end to the opposite corner.
/// Walls can never be placed on either endpoint, and moving an endpoint onto a wall clears it.
/// Any edit discards the previous [Solution].
#[derive(Clone, Debug)]
pub struct Pathfinder {
    grid: PathingGrid,
    config: SearchConfig,
    start: Point,
    end: Point,
    solution: Solution,
    events: EventLog,
}

impl Pathfinder {
    /// An open grid of the given size.
    pub fn new(width: usize, height: usize) -> Pathfinder {
        Pathfinder::from_grid(PathingGrid::new(width, height, false))
    }

    /// Wraps an existing grid. Walls under the default endpoints are cleared.
    pub fn from_grid(grid: PathingGrid) -> Pathfinder {
        let start = Point::new(0, 0);
        let end = Point::new(grid.width() as i32 - 1, grid.height() as i32 - 1);
        let mut pathfinder = Pathfinder {
            grid,
            config: SearchConfig::default(),
            start,
            end,
            solution: Solution::default(),
            events: EventLog::new(),
        };
        for point in [start, end] {
            if pathfinder.grid.in_bounds(point.x, point.y) {
                pathfinder.grid.set(point.x, point.y, false);
            }
        }
        pathfinder
    }

    pub fn with_config(mut self, config: SearchConfig) -> Pathfinder {
        self.config = config;
        self
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
        self.reset();
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Moves the start. Refused (returning `false`) outside the grid or onto the end cell.
    pub fn set_start(&mut self, point: Point) -> bool {
        if point == self.end || !self.grid.in_bounds(point.x, point.y) {
            return false;
        }
        self.grid.set(point.x, point.y, false);
        self.start = point;
        self.reset();
        true
    }

    /// Moves the end. Refused (returning `false`) outside the grid or onto the start cell.
    pub fn set_end(&mut self, point: Point) -> bool {
        if point == self.start || !self.grid.in_bounds(point.x, point.y) {
            return false;
        }
        self.grid.set(point.x, point.y, false);
        self.end = point;
        self.reset();
        true
    }

    /// Places or removes a wall. Refused (returning `false`) outside the grid or on an endpoint.
    pub fn set_wall(&mut self, point: Point, blocked: bool) -> bool {
        if point == self.start || point == self.end || !self.grid.in_bounds(point.x, point.y) {
            return false;
        }
        self.grid.set(point.x, point.y, blocked);
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.solution = Solution::default();
        self.events.clear();
    }

    /// Runs the configured search from start to end. The grid is only borrowed immutably while
    /// the search runs. Events of the previous search are discarded.
    pub fn solve(&mut self) -> &Solution {
        self.events.clear();
        let SearchConfig {
            algorithm,
            heuristic,
        } = self.config;
        debug!("Solving with {} and {} heuristic", algorithm, heuristic);
        self.solution = match algorithm {
            Algorithm::AStar => AstarSolver::new(heuristic).solve(
                &self.grid,
                self.start,
                self.end,
                &mut self.events,
            ),
            Algorithm::Jps => {
                JPSSolver::new(heuristic).solve(&self.grid, self.start, self.end, &mut self.events)
            }
        };
        &self.solution
    }

    /// The last found path from start to end, empty if none was found or nothing was solved yet.
    pub fn path(&self) -> &[Point] {
        &self.solution.path
    }

    /// Length of the last found path. `0.0` both before solving and when the end is unreachable.
    pub fn path_length(&self) -> f64 {
        self.solution.length
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Events written by the last search, to be drained with [Sequence::dequeue](collections::Sequence::dequeue).
    pub fn events_mut(&mut self) -> &mut EventLog {
        &mut self.events
    }

    /// Checks the connected components, regenerating them first if walls were added.
    pub fn reachable(&mut self) -> bool {
        self.grid.update();
        self.grid.reachable(&self.start, &self.end)
    }
}
