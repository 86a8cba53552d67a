use grid_search::solver::{jps::JPSSolver, GridSolver};
use grid_search::{HeuristicKind, PathingGrid};
use grid_search_benchmark::{get_benchmark_names, load_benchmark, MapError};
use std::path::PathBuf;
use std::time::{Duration, Instant};

// Runs JPS on every Moving AI benchmark below the directory given as the first argument, which
// must contain `maps/` and `scenarios/`.
fn main() -> Result<(), MapError> {
    let root = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_owned()));
    let solver = JPSSolver::new(HeuristicKind::Octile);
    let mut total_time = Duration::ZERO;
    for name in get_benchmark_names(&root)? {
        println!("Benchmark name: {}", name);
        let (bool_grid, scenarios) = load_benchmark(&root, &name)?;
        let pathing_grid = PathingGrid::from_bool_grid(bool_grid);
        let before = Instant::now();
        let mut mismatches = 0;
        for scenario in &scenarios {
            let solution = solver.solve(&pathing_grid, scenario.start(), scenario.goal(), &mut ());
            if (solution.length - scenario.optimal_length).abs() > 1e-3 {
                mismatches += 1;
            }
        }
        let elapsed = before.elapsed();
        println!(
            "\tElapsed time: {:.2?}; per scenario: {:.2?}; distance mismatches: {}",
            elapsed,
            elapsed / scenarios.len().max(1) as u32,
            mismatches
        );
        total_time += elapsed;
    }
    println!("\tTotal benchmark time: {:.2?}", total_time);
    Ok(())
}
