use grid_search::pathing_grid::PathingGrid;
use grid_search::solver::{astar::AstarSolver, jps::JPSSolver, GridSolver};
use grid_search::HeuristicKind;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//   E
//  #
// S
// S marks the start
// E marks the end
// The wall in the middle cannot be passed diagonally, so the path goes around it.
fn main() {
    let mut pathing_grid: PathingGrid = PathingGrid::new(3, 3, false);
    pathing_grid.set(1, 1, true);
    pathing_grid.generate_components();
    println!("{}", pathing_grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);

    let astar = AstarSolver::new(HeuristicKind::Octile);
    if let Some(path) = astar.get_path_single_goal(&pathing_grid, start, end) {
        println!("A* found a path of cost {:.3}:", astar.get_path_cost(&path));
        for p in path {
            println!("{:?}", p);
        }
    }

    let jps = JPSSolver::new(HeuristicKind::Euclidean);
    if let Some(waypoints) = jps.get_waypoints_single_goal(&pathing_grid, start, end) {
        println!("JPS jump points:");
        for p in waypoints {
            println!("{:?}", p);
        }
    }
}
