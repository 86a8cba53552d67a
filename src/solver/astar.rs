use grid_util::point::Point;
use smallvec::SmallVec;

use crate::event::EventSink;
use crate::heuristic::{Heuristic, HeuristicKind};
use crate::{pathing_grid::PathingGrid, solver::GridSolver, N_SMALLVEC_SIZE};

/// A* over the full corner-safe 8-neighbourhood, with cost 1 for straight and √2 for diagonal
/// steps.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver<H = HeuristicKind> {
    pub heuristic: H,
}

impl<H: Heuristic> AstarSolver<H> {
    pub fn new(heuristic: H) -> AstarSolver<H> {
        AstarSolver { heuristic }
    }
}

impl<H: Heuristic> GridSolver for AstarSolver<H> {
    type Successors = SmallVec<[(Point, f64); N_SMALLVEC_SIZE]>;

    fn name(&self) -> &'static str {
        "A*"
    }

    fn successors<F, E>(
        &self,
        grid: &PathingGrid,
        _parent: Option<&Point>,
        node: &Point,
        _goal: &F,
        _events: &mut E,
    ) -> Self::Successors
    where
        F: Fn(&Point) -> bool,
        E: EventSink + ?Sized,
    {
        grid.neighborhood_points_and_cost(node)
    }

    fn heuristic(&self, p1: &Point, p2: &Point) -> f64 {
        self.heuristic.estimate(p1, p2)
    }
}
