//! Benchmark comparing the three search modes on weighted grids.
//!
//! Run with: cargo run --example grid_search_benchmark --release
//!
//! Each grid cell holds an entry cost in `1..=9`, with roughly one cell in
//! five blocked. The search walks from the top-left to the bottom-right corner.
//!
//! This benchmark compares:
//! - BFS (ignores cell costs, fewest steps)
//! - Dijkstra (cheapest route)
//! - A* with a Manhattan heuristic (cheapest route, fewer expansions)
//!
//! Set `RUST_LOG=debug` to see per-search summaries from the engine.

use std::time::Instant;

use aoc_search::grid::Point;
use aoc_search::search::{Edges, Goal, SearchError, SearchOptions, search};

// =============================================================================
// Grid Definition
// =============================================================================

const BLOCKED: u32 = 0;

struct CostGrid {
    cells: Vec<Vec<u32>>,
    width: i64,
    height: i64,
}

impl CostGrid {
    fn cost(&self, p: Point) -> u32 {
        self.cells[p.y as usize][p.x as usize]
    }

    fn open_neighbours(&self, p: &Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors4()
            .into_iter()
            .filter(|n| n.in_bounds(self.width, self.height) && self.cost(*n) != BLOCKED)
    }

    fn steps(&self, p: &Point) -> Vec<Point> {
        self.open_neighbours(p).collect()
    }

    fn weighted(&self, p: &Point) -> Vec<(Point, u32)> {
        self.open_neighbours(p).map(|n| (n, self.cost(n))).collect()
    }

    fn target(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }
}

/// Generate a random grid; corners are always open
fn generate_random_grid(seed: u64, size: usize) -> CostGrid {
    let mut rng = seed;
    let mut cells: Vec<Vec<u32>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
                    let roll = (rng >> 33) % 50;
                    if roll < 10 { BLOCKED } else { (roll % 9) as u32 + 1 }
                })
                .collect()
        })
        .collect();
    cells[0][0] = 1;
    cells[size - 1][size - 1] = 1;

    CostGrid {
        cells,
        width: size as i64,
        height: size as i64,
    }
}

const GRID_SIZE: usize = 120;
const NUM_GRIDS: usize = 20;

/// Distance and expansion count per grid, `None` where no route exists
type RunResults = Vec<Option<(u64, usize)>>;

fn run<F>(name: &str, grids: &[CostGrid], solve: F) -> RunResults
where
    F: Fn(&CostGrid) -> Result<(u64, usize), SearchError>,
{
    println!("Running {name}...");
    let start = Instant::now();
    let results: RunResults = grids.iter().map(|grid| solve(grid).ok()).collect();
    let elapsed = start.elapsed();

    let expanded: usize = results.iter().flatten().map(|(_, e)| e).sum();
    let solved = results.iter().flatten().count();
    println!(
        "{name:<10} {elapsed:>12?}   {solved}/{} solved, {expanded} states expanded",
        grids.len()
    );
    results
}

fn main() {
    env_logger::init();

    println!("Grid Search Benchmark");
    println!("=====================\n");

    let grids: Vec<CostGrid> = (0..NUM_GRIDS)
        .map(|i| generate_random_grid(42 + i as u64, GRID_SIZE))
        .collect();

    println!("Sample grid[0][0..8][0..8]:");
    for row in 0..8 {
        println!("  {:?}", &grids[0].cells[row][0..8]);
    }

    println!(
        "\n=== {}x{} grids, {} grids ===",
        GRID_SIZE, GRID_SIZE, NUM_GRIDS
    );

    let bfs = run("BFS", &grids, |grid| {
        let outcome = search(
            Point::new(0, 0),
            |p: &Point| p.key(),
            SearchOptions::new(
                Goal::state(grid.target()),
                Edges::unweighted(|p: &Point| grid.steps(p)),
            ),
        )?;
        Ok((outcome.distance() as u64, outcome.expanded()))
    });

    let dijkstra = run("Dijkstra", &grids, |grid| {
        let outcome = search(
            Point::new(0, 0),
            |p: &Point| p.key(),
            SearchOptions::new(
                Goal::state(grid.target()),
                Edges::weighted(|p: &Point| grid.weighted(p)),
            ),
        )?;
        Ok((outcome.distance() as u64, outcome.expanded()))
    });

    let a_star = run("A*", &grids, |grid| {
        let target = grid.target();
        let outcome = search(
            Point::new(0, 0),
            |p: &Point| p.key(),
            SearchOptions::new(
                Goal::state(target),
                Edges::a_star(
                    |p: &Point| grid.weighted(p),
                    // Every entered cell costs at least one
                    move |p: &Point| p.manhattan(target) as u32,
                ),
            ),
        )?;
        Ok((outcome.distance() as u64, outcome.expanded()))
    });

    // =========================================================================
    // Verification
    // =========================================================================
    println!("\n=== Verification ===");

    let reachable = |r: &Option<(u64, usize)>| r.is_some();
    assert!(
        bfs.iter().map(reachable).eq(dijkstra.iter().map(reachable)),
        "BFS and Dijkstra disagree on reachability"
    );

    for (i, (d, a)) in dijkstra.iter().zip(&a_star).enumerate() {
        assert_eq!(
            d.map(|(cost, _)| cost),
            a.map(|(cost, _)| cost),
            "Dijkstra and A* disagree on grid {i}"
        );
    }
    println!("Dijkstra and A* agree on every grid");

    let saved: usize = dijkstra
        .iter()
        .zip(&a_star)
        .filter_map(|(d, a)| Some(d.as_ref()?.1.saturating_sub(a.as_ref()?.1)))
        .sum();
    println!("A* saved {saved} expansions over Dijkstra");
}
