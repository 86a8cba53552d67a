use grid_search::{EventKind, Pathfinder, SearchConfig};
use grid_util::point::Point;

// Builds the 6x6 grid with a wall at x = 3 that is open only at the top, and searches it with
// the algorithm given as the first argument (e.g. `jps`, `astar:octile` or `dijkstra`).
fn main() {
    let config = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<SearchConfig>() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        None => SearchConfig::default(),
    };
    let mut pathfinder = Pathfinder::new(6, 6).with_config(config);
    pathfinder.set_end(Point::new(5, 0));
    for y in 0..5 {
        pathfinder.set_wall(Point::new(3, y), true);
    }
    println!("{}", pathfinder.grid());

    let solution = pathfinder.solve().clone();
    println!(
        "{} with {} heuristic: length {:.4}, {} cells expanded",
        config.algorithm, config.heuristic, solution.length, solution.expanded
    );
    println!("Path: {:?}", solution.path);

    let events = pathfinder.events_mut();
    let (mut discovered, mut probed) = (0, 0);
    while let Ok(event) = events.dequeue() {
        match event.kind {
            EventKind::Discovered => discovered += 1,
            EventKind::Probed => probed += 1,
            EventKind::Expanded => {}
        }
    }
    println!("{discovered} cells discovered, {probed} cells probed");
}
