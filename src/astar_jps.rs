//! The best-first search loop shared by A* and jump point search. The solvers only differ in
//! how successors of an expanded cell are generated, which is passed in as a closure that also
//! receives the parent of the cell so that JPS can prune by the direction of travel.
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use log::{trace, warn};

use crate::collections::{NodeHeap, PriorityEntry};
use crate::event::{EventKind, EventSink};
use crate::pathing_grid::PathingGrid;

/// Per-cell search bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeState {
    pub opened: bool,
    pub closed: bool,
    /// Best known cost from the start.
    pub cost: f64,
    pub parent: Option<Point>,
}

/// Bookkeeping of a single search, laid out `[x][y]` to match the grid. Allocated fresh for every
/// search and never shared between searches.
#[derive(Clone, Debug)]
pub struct SearchState {
    height: usize,
    nodes: Vec<NodeState>,
}

impl SearchState {
    pub fn new(width: usize, height: usize) -> SearchState {
        SearchState {
            height,
            nodes: vec![NodeState::default(); width * height],
        }
    }

    fn ix(&self, point: &Point) -> usize {
        point.x as usize * self.height + point.y as usize
    }

    pub fn node(&self, point: &Point) -> &NodeState {
        &self.nodes[self.ix(point)]
    }

    pub fn node_mut(&mut self, point: &Point) -> &mut NodeState {
        let ix = self.ix(point);
        &mut self.nodes[ix]
    }

    /// Follows parent pointers back from `end` and returns the visited cells from the start to
    /// `end`.
    pub fn reverse_path(&self, end: &Point) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(*end), |point| self.node(point).parent).collect();
        path.reverse();
        path
    }
}

/// Outcome of a search. The default value doubles as the "not solved yet" state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    /// Every cell from start to end inclusive, one step apart. Empty if no path exists.
    pub path: Vec<Point>,
    /// The cells linked by parent pointers: all of [path](Self::path) for A*, only the jump
    /// points for JPS.
    pub waypoints: Vec<Point>,
    /// Cost of the path, `0.0` if none was found.
    pub length: f64,
    /// Number of cells that were expanded.
    pub expanded: usize,
}

impl Solution {
    pub fn is_found(&self) -> bool {
        !self.waypoints.is_empty()
    }
}

/// Runs the search from `start` to `goal`, returning the waypoints from the parent chain and the
/// cost of reaching the goal. The path in the returned [Solution] is left empty for the caller to
/// unroll from the waypoints.
pub fn astar_jps<FN, IN, FH, E>(
    grid: &PathingGrid,
    start: &Point,
    goal: &Point,
    mut successors: FN,
    mut heuristic: FH,
    events: &mut E,
) -> Solution
where
    FN: FnMut(Option<&Point>, &Point, &mut E) -> IN,
    IN: IntoIterator<Item = (Point, f64)>,
    FH: FnMut(&Point) -> f64,
    E: EventSink + ?Sized,
{
    if !grid.can_move_to_simple(*start) || !grid.can_move_to_simple(*goal) {
        warn!(
            "Search from {} to {} has an endpoint outside the grid or on a wall",
            start, goal
        );
        return Solution::default();
    }
    let mut state = SearchState::new(grid.width(), grid.height());
    let mut to_see = NodeHeap::new();
    {
        let node = state.node_mut(start);
        node.cost = 0.0;
        node.opened = true;
    }
    to_see.push(PriorityEntry::new(*start, heuristic(start), 0.0));
    let mut expanded = 0;

    while let Some(PriorityEntry { point, .. }) = to_see.pop() {
        let node = state.node_mut(&point);
        // A cell may sit in the heap several times if a cheaper way to it was found after it
        // was pushed; only the first pop counts.
        if node.closed {
            continue;
        }
        node.closed = true;
        let (cost, parent) = (node.cost, node.parent);
        expanded += 1;
        events.record(point, EventKind::Expanded);
        trace!("Expanding {} at cost {:.3}", point, cost);

        if point == *goal {
            return Solution {
                path: Vec::new(),
                waypoints: state.reverse_path(goal),
                length: cost,
                expanded,
            };
        }

        for (successor, move_cost) in successors(parent.as_ref(), &point, &mut *events) {
            let node = state.node_mut(&successor);
            if node.closed {
                continue;
            }
            let new_cost = cost + move_cost;
            if !node.opened {
                events.record(successor, EventKind::Discovered);
            }
            if !node.opened || new_cost < node.cost {
                node.cost = new_cost;
                node.parent = Some(point);
                node.opened = true;
                to_see.push(PriorityEntry::new(
                    successor,
                    new_cost + heuristic(&successor),
                    new_cost,
                ));
            }
        }
    }
    Solution {
        expanded,
        ..Solution::default()
    }
}
