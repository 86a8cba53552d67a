use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{CARDINAL_COST, DIAGONAL_COST, N_SMALLVEC_SIZE};

/// Offsets of the orthogonal neighbours in enumeration order: north, east, south, west.
pub const CARDINALS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
/// Offsets of the diagonal neighbours in enumeration order: north-east, south-east, south-west,
/// north-west.
pub const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("wall column {column} has {found} cells, expected {expected}")]
    RaggedWalls {
        column: usize,
        expected: usize,
        found: usize,
    },
}

/// The obstacle map searched by the solvers: a [BoolGrid] where `true` marks a wall, plus
/// connected components kept in a [UnionFind] for quick reachability queries.
///
/// Movement is 8-connected without corner cutting: a diagonal step is only possible when both
/// orthogonal cells it passes between are open.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    /// Builds a grid from a wall matrix indexed `[x][y]`.
    pub fn from_walls(walls: &[Vec<bool>]) -> Result<PathingGrid, GridError> {
        let height = walls.first().map_or(0, Vec::len);
        let mut pathing_grid = PathingGrid::new(walls.len(), height, false);
        for (x, column) in walls.iter().enumerate() {
            if column.len() != height {
                return Err(GridError::RaggedWalls {
                    column: x,
                    expected: height,
                    found: column.len(),
                });
            }
            for (y, &blocked) in column.iter().enumerate() {
                pathing_grid.grid.set(x as i32, y as i32, blocked);
            }
        }
        pathing_grid.generate_components();
        Ok(pathing_grid)
    }

    /// Wraps a grid produced elsewhere, e.g. by a map reader.
    pub fn from_bool_grid(grid: BoolGrid) -> PathingGrid {
        let mut pathing_grid = PathingGrid::new(grid.width(), grid.height(), false);
        pathing_grid.grid = grid;
        pathing_grid.generate_components();
        pathing_grid
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.index_in_bounds(x, y)
    }

    /// Whether `(x, y)` holds a wall. The cell must be in bounds.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }

    /// In bounds and not a wall.
    pub fn can_move_to_simple(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get_point(pos)
    }

    /// Whether a single step from `from` to `to` is allowed. `to` must be open and in bounds, and
    /// both orthogonal components of the move must be open, which forbids clipping wall corners.
    pub fn has_edge(&self, from: Point, to: Point) -> bool {
        debug_assert!((from.x - to.x).abs() <= 1 && (from.y - to.y).abs() <= 1);
        self.in_bounds(from.x, from.y)
            && self.can_move_to_simple(to)
            && !self.grid.get(to.x, from.y)
            && !self.grid.get(from.x, to.y)
    }

    /// Reachable neighbours of `pos`: the open orthogonal ones first, then the diagonals whose
    /// two adjacent orthogonal cells are open.
    pub fn neighborhood_points(&self, pos: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        CARDINALS
            .iter()
            .chain(DIAGONALS.iter())
            .map(|(dx, dy)| Point::new(pos.x + dx, pos.y + dy))
            .filter(|p| self.has_edge(*pos, *p))
            .collect()
    }

    /// Same as [neighborhood_points](Self::neighborhood_points) but paired with the step cost.
    pub fn neighborhood_points_and_cost(
        &self,
        pos: &Point,
    ) -> SmallVec<[(Point, f64); N_SMALLVEC_SIZE]> {
        self.neighborhood_points(pos)
            .into_iter()
            .map(|p| {
                let diagonal = p.x != pos.x && p.y != pos.y;
                (p, if diagonal { DIAGONAL_COST } else { CARDINAL_COST })
            })
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.grid.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out of bounds points are never
    /// reachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.grid.get_ix_point(start);
            let goal_ix = self.grid.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.width(),
            self.height()
        );
        let w = self.width() as i32;
        let h = self.height() as i32;
        self.components = UnionFind::new(self.grid.width() * self.grid.height());
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                let point = Point::new(x, y);
                if self.grid.get_point(point) {
                    continue;
                }
                let parent_ix = self.grid.get_ix_point(&point);
                // Edges are symmetric, so linking towards half of the neighbourhood is enough.
                for (dx, dy) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                    let n = Point::new(x + dx, y + dy);
                    if self.has_edge(point, n) {
                        let ix = self.grid.get_ix_point(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    /// Draws the grid with north (increasing y) at the top, `#` for walls and `.` for open cells.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height() as i32).rev() {
            let row = (0..self.width() as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            // Nothing is linked yet.
            components_dirty: true,
        }
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let was_blocked = self.grid.get(x, y);
        self.grid.set(x, y, blocked);
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
            return;
        }
        let p = Point::new(x, y);
        let p_ix = self.grid.get_ix_point(&p);
        for n in self.neighborhood_points(&p) {
            let n_ix = self.grid.get_ix_point(&n);
            self.components.union(p_ix, n_ix);
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
