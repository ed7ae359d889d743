//! Uniform-Cost Shortest Path Search
//!
//! This module finds cheapest paths through puzzle state spaces. A
//! [`SearchProblem`] describes the space: [`SearchProblem::next_steps`]
//! expands a state into outgoing [`Step`]s, [`SearchProblem::is_goal`]
//! marks terminal states, and [`SearchProblem::collapse`] reduces a
//! [`Path`] to the key paths compete on.
//!
//! # Entry Points
//!
//! - [`shortest_path`]: one cheapest path to a goal, `None` if unreachable
//! - [`shortest_paths`]: every cheapest path to a goal, for puzzles that
//!   count optimal routes (requires strictly positive step costs)
//! - [`distance_map`]: cheapest cost to every reachable key, with an
//!   optional cost limit
//!
//! # Collapse Keys
//!
//! The collapse key decides which paths are interchangeable. For a plain
//! grid walk the key is the position; when carried state matters (keys
//! collected, direction of travel), fold it into the key and otherwise
//! identical positions stop shadowing each other.
//!
//! # Example
//!
//! ```
//! use advent_solutions::utils::point::Point2;
//! use advent_solutions::utils::search::{shortest_path, FnProblem, Path, Step};
//!
//! // Cross a 3x3 grid where every move costs 1.
//! let problem = FnProblem::new(
//!     |p: &Point2| {
//!         p.orthogonal_neighbors()
//!             .into_iter()
//!             .filter(|n| (0..3).contains(&n.x) && (0..3).contains(&n.y))
//!             .map(|n| Step::new(n, 1))
//!             .collect()
//!     },
//!     |p: &Point2| *p == Point2::new(2, 2),
//!     |path: &Path<Point2>| *path.last(),
//! );
//!
//! let path = shortest_path(&problem, Point2::ORIGIN).unwrap();
//! assert_eq!(path.cost(), 4);
//! ```

mod engine;
mod problem;

pub use engine::{Path, Step, distance_map, shortest_path, shortest_paths};
pub use problem::{FnProblem, SearchProblem};

#[cfg(test)]
mod tests;
