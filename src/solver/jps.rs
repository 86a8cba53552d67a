use grid_util::point::Point;
use smallvec::SmallVec;

use crate::event::{EventKind, EventSink};
use crate::heuristic::{Heuristic, HeuristicKind};
use crate::pathing_grid::{CARDINALS, DIAGONALS};
use crate::{pathing_grid::PathingGrid, solver::GridSolver, N_SMALLVEC_SIZE};

type Direction = (i32, i32);

/// Jump point search without corner cutting. Only jump points enter the open set and each is
/// linked to the cell it was jumped from by the octile distance between them; the heuristic only
/// orders the open set.
#[derive(Clone, Debug, Default)]
pub struct JPSSolver<H = HeuristicKind> {
    pub heuristic: H,
}

impl<H: Heuristic> JPSSolver<H> {
    pub fn new(heuristic: H) -> JPSSolver<H> {
        JPSSolver { heuristic }
    }

    /// Directions worth scanning from `node` when it was reached from `parent`. The start cell has
    /// no parent and scans its whole neighbourhood.
    fn pruned_directions(
        &self,
        grid: &PathingGrid,
        parent: Option<&Point>,
        node: &Point,
    ) -> SmallVec<[Direction; N_SMALLVEC_SIZE]> {
        let candidates: SmallVec<[Direction; N_SMALLVEC_SIZE]> = match parent {
            None => CARDINALS.iter().chain(DIAGONALS.iter()).copied().collect(),
            Some(parent) => {
                let dx = (node.x - parent.x).signum();
                let dy = (node.y - parent.y).signum();
                match (dx, dy) {
                    (0, _) => [(-1, dy), (0, dy), (1, dy), (-1, 0), (1, 0)]
                        .into_iter()
                        .collect(),
                    (_, 0) => [(dx, 1), (dx, 0), (dx, -1), (0, -1), (0, 1)]
                        .into_iter()
                        .collect(),
                    _ => [(dx, 0), (dx, dy), (0, dy)].into_iter().collect(),
                }
            }
        };
        candidates
            .into_iter()
            .filter(|(dx, dy)| grid.has_edge(*node, Point::new(node.x + dx, node.y + dy)))
            .collect()
    }

    /// A straight move into `current` has a forced neighbour if one of the cells beside it is open
    /// while the cell beside `previous` on the same side is a wall. That open cell cannot be
    /// entered diagonally from `previous`, so the path has to turn at `current`.
    fn has_forced_neighbour(
        grid: &PathingGrid,
        previous: &Point,
        current: &Point,
        direction: Direction,
    ) -> bool {
        let (sx, sy) = (direction.1.abs(), direction.0.abs());
        [1, -1].into_iter().any(|side| {
            let beside = Point::new(current.x + side * sx, current.y + side * sy);
            grid.in_bounds(beside.x, beside.y)
                && grid.is_wall(previous.x + side * sx, previous.y + side * sy)
                && !grid.is_wall(beside.x, beside.y)
        })
    }

    /// Scans from `from` in `direction` one cell at a time until it reaches the goal, a cell with a
    /// forced neighbour, or a blocked step. Diagonal scans stop on any cell from which one of the
    /// two straight component scans finds a jump point. Every cell stepped onto is reported as
    /// probed.
    fn jump<F, E>(
        &self,
        grid: &PathingGrid,
        from: Point,
        direction: Direction,
        goal: &F,
        events: &mut E,
    ) -> Option<Point>
    where
        F: Fn(&Point) -> bool,
        E: EventSink + ?Sized,
    {
        let (dx, dy) = direction;
        let mut previous = from;
        loop {
            let current = Point::new(previous.x + dx, previous.y + dy);
            if !grid.has_edge(previous, current) {
                return None;
            }
            events.record(current, EventKind::Probed);
            if goal(&current) {
                return Some(current);
            }
            if dx != 0 && dy != 0 {
                if self.jump(grid, current, (dx, 0), goal, events).is_some()
                    || self.jump(grid, current, (0, dy), goal, events).is_some()
                {
                    return Some(current);
                }
            } else if Self::has_forced_neighbour(grid, &previous, &current, direction) {
                return Some(current);
            }
            previous = current;
        }
    }
}

impl<H: Heuristic> GridSolver for JPSSolver<H> {
    type Successors = SmallVec<[(Point, f64); N_SMALLVEC_SIZE]>;

    fn name(&self) -> &'static str {
        "JPS"
    }

    fn successors<F, E>(
        &self,
        grid: &PathingGrid,
        parent: Option<&Point>,
        node: &Point,
        goal: &F,
        events: &mut E,
    ) -> Self::Successors
    where
        F: Fn(&Point) -> bool,
        E: EventSink + ?Sized,
    {
        self.pruned_directions(grid, parent, node)
            .into_iter()
            .filter_map(|direction| self.jump(grid, *node, direction, goal, events))
            .map(|jump_point| (jump_point, self.cost(node, &jump_point)))
            .collect()
    }

    fn heuristic(&self, p1: &Point, p2: &Point) -> f64 {
        self.heuristic.estimate(p1, p2)
    }
}

#[cfg(test)]
mod tests {
    use grid_util::{Rect, ValueGrid};

    use super::*;
    use crate::event::{DiscoveryEvent, EventLog};
    use crate::heuristic::{Euclidean, Octile, Zero};
    use crate::solver::astar::AstarSolver;

    const EPS: f64 = 1e-2;

    #[test]
    fn equal_start_goal() {
        let pathing_grid: PathingGrid = PathingGrid::new(4, 4, false);
        let solver = JPSSolver::new(Euclidean);
        let start = Point::new(2, 1);
        let solution = solver.solve(&pathing_grid, start, start, &mut ());
        assert_eq!(solution.path, vec![start]);
        assert_eq!(solution.length, 0.0);
        assert_eq!(solution.expanded, 1);
    }

    /// Only the start and the goal are jump points on an open diagonal, and unrolling gives the
    /// same cells as A*.
    #[test]
    fn open_diagonal() {
        let pathing_grid: PathingGrid = PathingGrid::new(6, 6, false);
        let start = Point::new(0, 0);
        let end = Point::new(5, 5);
        let solver = JPSSolver::new(Euclidean);
        let solution = solver.solve(&pathing_grid, start, end, &mut ());
        assert!((solution.length - 7.07107).abs() < EPS);
        assert_eq!(solution.waypoints, vec![start, end]);
        assert_eq!(solution.expanded, 2);
        let astar_path = AstarSolver::new(Octile)
            .get_path_single_goal(&pathing_grid, start, end)
            .unwrap();
        assert_eq!(solution.path, astar_path);
    }

    #[test]
    fn straight_corridor_matches_astar() {
        let pathing_grid: PathingGrid = PathingGrid::new(9, 1, false);
        let start = Point::new(8, 0);
        let end = Point::new(1, 0);
        let solver = JPSSolver::new(Octile);
        let solution = solver.solve(&pathing_grid, start, end, &mut ());
        assert_eq!(solution.waypoints, vec![start, end]);
        assert_eq!(solution.length, 7.0);
        let astar_path = AstarSolver::new(Zero)
            .get_path_single_goal(&pathing_grid, start, end)
            .unwrap();
        assert_eq!(solution.path, astar_path);
    }

    #[test]
    fn around_a_wall() {
        let mut pathing_grid: PathingGrid = PathingGrid::new(6, 6, false);
        // Column 3, rows 0 to 4, leaving a gap at (3, 5).
        pathing_grid.set_rect(Rect::new(3, 0, 0, 4), true);
        for heuristic in [HeuristicKind::Zero, HeuristicKind::Euclidean, HeuristicKind::Octile] {
            let solver = JPSSolver::new(heuristic);
            let solution = solver.solve(&pathing_grid, Point::new(0, 0), Point::new(5, 0), &mut ());
            assert!((solution.length - 13.2426).abs() < EPS);
            assert!(solution.path.contains(&Point::new(3, 5)));
            for (p1, p2) in solution.path.iter().zip(solution.path.iter().skip(1)) {
                assert!(pathing_grid.has_edge(*p1, *p2));
            }
            assert!((solver.get_path_cost(&solution.path) - solution.length).abs() < 1e-9);
            assert!((solver.get_path_cost(&solution.waypoints) - solution.length).abs() < 1e-9);
        }
    }

    /// A wall beside the cell behind makes the cell ahead a jump point.
    #[test]
    fn forced_neighbour_stops_straight_jump() {
        // y=2 . . . . .
        // y=1 . # . . .
        // y=0 S . . . .
        let mut pathing_grid: PathingGrid = PathingGrid::new(5, 3, false);
        pathing_grid.set(1, 1, true);
        let solver = JPSSolver::new(Octile);
        let goal = |p: &Point| *p == Point::new(4, 2);
        let mut events: Vec<DiscoveryEvent> = Vec::new();
        let jump_point = solver.jump(&pathing_grid, Point::new(0, 0), (1, 0), &goal, &mut events);
        assert_eq!(jump_point, Some(Point::new(2, 0)));
        let probed: Vec<Point> = events.iter().map(|e| e.point).collect();
        assert_eq!(probed, vec![Point::new(1, 0), Point::new(2, 0)]);
        assert!(events.iter().all(|e| e.kind == EventKind::Probed));
    }

    #[test]
    fn blocked_jump_finds_nothing() {
        let mut pathing_grid: PathingGrid = PathingGrid::new(4, 4, false);
        pathing_grid.set(1, 0, true);
        let solver = JPSSolver::new(Octile);
        let goal = |p: &Point| *p == Point::new(3, 3);
        let mut events: Vec<DiscoveryEvent> = Vec::new();
        // Diagonal step clipping the wall at (1, 0).
        assert_eq!(
            solver.jump(&pathing_grid, Point::new(0, 0), (1, 1), &goal, &mut events),
            None
        );
        assert!(events.is_empty());
    }

    #[test]
    fn diagonal_stops_where_component_scan_hits_goal() {
        let pathing_grid: PathingGrid = PathingGrid::new(6, 6, false);
        let solver = JPSSolver::new(Octile);
        let goal = |p: &Point| *p == Point::new(5, 2);
        let mut events: Vec<DiscoveryEvent> = Vec::new();
        let jump_point = solver.jump(&pathing_grid, Point::new(0, 0), (1, 1), &goal, &mut events);
        assert_eq!(jump_point, Some(Point::new(2, 2)));
    }

    #[test]
    fn pruned_directions_by_travel() {
        let pathing_grid: PathingGrid = PathingGrid::new(3, 3, false);
        let solver = JPSSolver::new(Octile);
        let centre = Point::new(1, 1);
        assert_eq!(solver.pruned_directions(&pathing_grid, None, &centre).len(), 8);
        let horizontal = solver.pruned_directions(&pathing_grid, Some(&Point::new(0, 1)), &centre);
        assert_eq!(horizontal.len(), 5);
        assert!(!horizontal.contains(&(-1, 0)));
        let diagonal = solver.pruned_directions(&pathing_grid, Some(&Point::new(0, 0)), &centre);
        assert_eq!(diagonal.as_slice(), &[(1, 0), (1, 1), (0, 1)]);
    }

    #[test]
    fn events_are_probed_before_discovered() {
        let mut pathing_grid: PathingGrid = PathingGrid::new(6, 6, false);
        pathing_grid.set_rect(Rect::new(3, 0, 0, 4), true);
        let solver = JPSSolver::new(Euclidean);
        let mut events = EventLog::new();
        let solution = solver.solve(&pathing_grid, Point::new(0, 0), Point::new(5, 0), &mut events);
        assert!(solution.is_found());
        let first = events.dequeue().unwrap();
        assert_eq!(
            first,
            DiscoveryEvent {
                point: Point::new(0, 0),
                kind: EventKind::Expanded
            }
        );
        let probed = points_of_kind(&events, EventKind::Probed);
        for point in points_of_kind(&events, EventKind::Discovered) {
            assert!(probed.contains(&point));
        }
        let expanded = points_of_kind(&events, EventKind::Expanded);
        // The start was already dequeued.
        assert_eq!(expanded.len() + 1, solution.expanded);
    }

    fn points_of_kind(events: &EventLog, kind: EventKind) -> Vec<Point> {
        events
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.point)
            .collect()
    }

    #[test]
    fn enclosed_goal() {
        let mut pathing_grid: PathingGrid = PathingGrid::new(7, 7, false);
        pathing_grid.set_rect(Rect::new(3, 3, 2, 2), true);
        pathing_grid.set(4, 4, false);
        let solver = JPSSolver::new(Octile);
        let solution = solver.solve(&pathing_grid, Point::new(0, 0), Point::new(4, 4), &mut ());
        assert!(solution.path.is_empty());
        assert_eq!(solution.length, 0.0);
    }
}
