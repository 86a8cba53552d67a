use grid_util::point::Point;
use itertools::Itertools;
use log::debug;

use crate::astar_jps::{astar_jps, Solution};
use crate::event::EventSink;
use crate::heuristic::octile_distance;
use crate::{pathing_grid::PathingGrid, waypoints_to_path};

pub mod astar;
pub mod dijkstra;
pub mod jps;

/// A search over a [PathingGrid]. Implementors decide which successors an expanded cell has and
/// how the open set is ordered; the search loop itself is shared.
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Point, f64)>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Estimated remaining cost, used to order the open set.
    fn heuristic(&self, p1: &Point, p2: &Point) -> f64;

    /// Cost of moving along a straight or diagonal run from `p1` to `p2`.
    fn cost(&self, p1: &Point, p2: &Point) -> f64 {
        octile_distance(p1, p2)
    }

    /// Successors of `node` with the cost of reaching each of them from `node`. `parent` is the
    /// cell `node` was reached from, `None` for the start.
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
        E: EventSink + ?Sized;

    /// Searches for a shortest path from `start` to `goal`, writing discovery events to `events`.
    /// The grid is borrowed immutably for the whole search.
    fn solve<E>(&self, grid: &PathingGrid, start: Point, goal: Point, events: &mut E) -> Solution
    where
        E: EventSink + ?Sized,
    {
        debug!("{}: searching from {} to {}", self.name(), start, goal);
        let mut solution = astar_jps(
            grid,
            &start,
            &goal,
            |parent, node, events| {
                self.successors(grid, parent, node, &|point: &Point| *point == goal, events)
            },
            |point| self.heuristic(point, &goal),
            events,
        );
        solution.path = waypoints_to_path(&solution.waypoints);
        if solution.is_found() {
            debug!(
                "{}: found path of {} cells and length {:.5} after {} expansions",
                self.name(),
                solution.path.len(),
                solution.length,
                solution.expanded
            );
        } else {
            debug!(
                "{}: no path from {} to {} after {} expansions",
                self.name(),
                start,
                goal,
                solution.expanded
            );
        }
        solution
    }

    /// The raw waypoints (jump points) from which [get_path_single_goal](Self::get_path_single_goal) makes a path.
    fn get_waypoints_single_goal(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        let solution = self.solve(grid, start, goal, &mut ());
        solution.is_found().then_some(solution.waypoints)
    }

    /// Computes a step by step path from start to goal, both included.
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        self.get_waypoints_single_goal(grid, start, goal)
            .map(|waypoints| waypoints_to_path(&waypoints))
    }

    /// Sums the cost of every consecutive pair of points on the path.
    fn get_path_cost(&self, path: &[Point]) -> f64 {
        path.iter()
            .tuple_windows()
            .map(|(p1, p2)| self.cost(p1, p2))
            .sum()
    }
}
