use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{
    pathing_grid::PathingGrid,
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver, jps::JPSSolver, GridSolver},
    EventLog, HeuristicKind,
};
use grid_search_benchmark::parse_map;
use grid_util::{grid::ValueGrid, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_QUERIES: usize = 32;

/// A random grid with 30% walls and queries between open cells.
fn random_problem(seed: u64) -> (PathingGrid, Vec<(Point, Point)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pathing_grid: PathingGrid = PathingGrid::new(N, N, false);
    for x in 0..N as i32 {
        for y in 0..N as i32 {
            pathing_grid.set(x, y, rng.gen_bool(0.3));
        }
    }
    pathing_grid.generate_components();
    let mut random_open = |grid: &PathingGrid| loop {
        let p = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if grid.can_move_to_simple(p) {
            return p;
        }
    };
    let mut queries = Vec::new();
    while queries.len() < N_QUERIES {
        let (start, end) = (random_open(&pathing_grid), random_open(&pathing_grid));
        if pathing_grid.reachable(&start, &end) {
            queries.push((start, end));
        }
    }
    (pathing_grid, queries)
}

/// Rooms separated by walls with single doors, as a text map.
fn rooms_problem() -> (PathingGrid, Vec<(Point, Point)>) {
    let size = 48;
    let mut map = format!("type octile\nheight {size}\nwidth {size}\nmap\n");
    for y in 0..size {
        let row: String = (0..size)
            .map(|x| {
                let on_wall = x % 12 == 11 || y % 12 == 11;
                let door = (x % 12 == 5 && y % 12 == 11) || (y % 12 == 5 && x % 12 == 11);
                if on_wall && !door {
                    '@'
                } else {
                    '.'
                }
            })
            .collect();
        map.push_str(&row);
        map.push('\n');
    }
    let pathing_grid = PathingGrid::from_bool_grid(parse_map(&map).unwrap());
    let queries = vec![
        (Point::new(0, 0), Point::new(46, 46)),
        (Point::new(46, 2), Point::new(3, 40)),
    ];
    (pathing_grid, queries)
}

fn bench_solver<S: GridSolver>(
    c: &mut Criterion,
    problem_name: &str,
    solver_name: &str,
    solver: &S,
    problem: &(PathingGrid, Vec<(Point, Point)>),
) {
    let (pathing_grid, queries) = problem;
    c.bench_function(format!("{problem_name}, {solver_name}").as_str(), |b| {
        b.iter(|| {
            for (start, end) in queries {
                black_box(solver.solve(pathing_grid, *start, *end, &mut ()));
            }
        })
    });
}

fn comparison_bench(c: &mut Criterion) {
    for (problem_name, problem) in [("random 64x64", random_problem(0)), ("rooms", rooms_problem())] {
        bench_solver(c, problem_name, "Dijkstra", &DijkstraSolver::default(), &problem);
        bench_solver(
            c,
            problem_name,
            "A* (octile)",
            &AstarSolver::new(HeuristicKind::Octile),
            &problem,
        );
        bench_solver(
            c,
            problem_name,
            "JPS (euclidean)",
            &JPSSolver::new(HeuristicKind::Euclidean),
            &problem,
        );
        bench_solver(
            c,
            problem_name,
            "JPS (octile)",
            &JPSSolver::new(HeuristicKind::Octile),
            &problem,
        );
    }
}

/// Cost of recording every discovery event compared to discarding them.
fn event_log_bench(c: &mut Criterion) {
    let (pathing_grid, queries) = random_problem(1);
    let solver = JPSSolver::new(HeuristicKind::Octile);
    c.bench_function("random 64x64, JPS with event log", |b| {
        b.iter(|| {
            let mut events = EventLog::new();
            for (start, end) in &queries {
                black_box(solver.solve(&pathing_grid, *start, *end, &mut events));
            }
            black_box(events.len())
        })
    });
}

criterion_group!(benches, comparison_bench, event_log_bench);
criterion_main!(benches);
