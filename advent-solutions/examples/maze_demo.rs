//! Example driving the uniform-cost search over a small ASCII maze
//!
//! Shows a hand-written [`SearchProblem`], collecting every co-optimal route
//! with `shortest_paths`, and cost-capped exploration with `distance_map`.
//!
//! Run with: cargo run --example maze_demo

use std::collections::HashSet;

use advent_solutions::utils::point::Point2;
use advent_solutions::utils::search::{
    Path, SearchProblem, Step, distance_map, shortest_path, shortest_paths,
};

// ============================================================================
// A wall maze with unit step costs
// ============================================================================

const MAZE: &str = "\
.....
.###.
...#.
.#.#.
.#...";

struct Maze {
    open: HashSet<Point2>,
    width: i64,
    height: i64,
    goal: Point2,
}

impl Maze {
    fn parse(raw: &str) -> Self {
        let mut open = HashSet::new();
        let mut width = 0;
        let mut height = 0;
        for (y, line) in raw.lines().enumerate() {
            width = line.len() as i64;
            height = y as i64 + 1;
            for (x, cell) in line.chars().enumerate() {
                if cell == '.' {
                    open.insert(Point2::new(x as i64, y as i64));
                }
            }
        }
        let goal = Point2::new(width - 1, height - 1);
        Maze {
            open,
            width,
            height,
            goal,
        }
    }

    fn render(&self, route: &HashSet<Point2>) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let here = Point2::new(x, y);
                        match (route.contains(&here), self.open.contains(&here)) {
                            (true, _) => 'o',
                            (_, true) => '.',
                            _ => '#',
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SearchProblem for Maze {
    type State = Point2;
    type Key = Point2;

    fn next_steps(&self, state: &Point2) -> Vec<Step<Point2>> {
        state
            .orthogonal_neighbors()
            .into_iter()
            .filter(|next| self.open.contains(next))
            .map(|next| Step::new(next, 1))
            .collect()
    }

    fn is_goal(&self, state: &Point2) -> bool {
        *state == self.goal
    }

    fn collapse(&self, path: &Path<Point2>) -> Point2 {
        *path.last()
    }
}

fn main() {
    println!("=== Maze Search Example ===\n");

    let maze = Maze::parse(MAZE);
    let start = Point2::new(0, 0);

    // One cheapest route; ties resolve toward the earliest-queued path.
    println!("--- Shortest route ---");
    let path = shortest_path(&maze, start).expect("maze has no exit");
    println!("cost {} over {} cells:", path.cost(), path.len());
    let route: HashSet<Point2> = path.states().into_iter().collect();
    println!("{}\n", maze.render(&route));

    // Every route that achieves the optimal cost.
    println!("--- All co-optimal routes ---");
    let ties = shortest_paths(&maze, start);
    println!("{} route(s) reach the exit at cost {}:", ties.len(), path.cost());
    for path in &ties {
        let route: HashSet<Point2> = path.states().into_iter().collect();
        println!("{}\n", maze.render(&route));
    }

    // Bounded exploration ignores the goal and maps everything nearby.
    println!("--- Cells within 3 steps of the start ---");
    let nearby = distance_map(&maze, start, Some(3));
    let route: HashSet<Point2> = nearby.keys().copied().collect();
    println!("{}", maze.render(&route));
    println!("{} cells reachable", nearby.len());
}
