use crate::heuristic::Zero;
use crate::solver::astar::AstarSolver;

/// Uniform-cost search: A* with an estimate of 0 everywhere.
pub type DijkstraSolver = AstarSolver<Zero>;

#[cfg(test)]
mod tests {
    use grid_util::point::Point;
    use grid_util::{Rect, ValueGrid};

    use super::*;
    use crate::event::{DiscoveryEvent, EventKind};
    use crate::heuristic::Octile;
    use crate::pathing_grid::PathingGrid;
    use crate::solver::GridSolver;

    fn expanded_points(events: &[DiscoveryEvent]) -> Vec<Point> {
        events
            .iter()
            .filter(|e| e.kind == EventKind::Expanded)
            .map(|e| e.point)
            .collect()
    }

    #[test]
    fn same_length_as_informed_search() {
        let mut pathing_grid: PathingGrid = PathingGrid::new(8, 8, false);
        pathing_grid.set_rect(Rect::new(2, 1, 0, 5), true);
        pathing_grid.set_rect(Rect::new(5, 2, 0, 5), true);
        let start = Point::new(0, 7);
        let end = Point::new(7, 0);
        let dijkstra = DijkstraSolver::default().solve(&pathing_grid, start, end, &mut ());
        let astar = AstarSolver::new(Octile).solve(&pathing_grid, start, end, &mut ());
        assert!(dijkstra.is_found());
        assert!((dijkstra.length - astar.length).abs() < 1e-9);
    }

    /// Every cell the informed search expands is also expanded without an estimate.
    #[test]
    fn expands_superset() {
        let mut pathing_grid: PathingGrid = PathingGrid::new(10, 10, false);
        pathing_grid.set_rect(Rect::new(4, 0, 0, 7), true);
        let start = Point::new(0, 0);
        let end = Point::new(9, 0);
        let mut dijkstra_events: Vec<DiscoveryEvent> = Vec::new();
        let mut astar_events: Vec<DiscoveryEvent> = Vec::new();
        DijkstraSolver::default().solve(&pathing_grid, start, end, &mut dijkstra_events);
        AstarSolver::new(Octile).solve(&pathing_grid, start, end, &mut astar_events);
        let dijkstra_expanded = expanded_points(&dijkstra_events);
        let astar_expanded = expanded_points(&astar_events);
        assert!(dijkstra_expanded.len() >= astar_expanded.len());
        for point in &astar_expanded {
            assert!(dijkstra_expanded.contains(point));
        }
    }
}
