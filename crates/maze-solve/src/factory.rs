//! Maps method names to solver callables.
//!
//! Keeps algorithm selection in one place and exposes the central list of
//! choices for surrounding tooling (CLI flags, reports).

use maze_core::Maze;
use maze_queue::QueueError;

use crate::solution::Solution;

/// A solver strategy: consumes a maze, returns a path and run statistics.
pub type Solver = fn(&Maze) -> Result<Solution, QueueError>;

/// Central registry of the available algorithms.
pub struct SolverFactory;

impl SolverFactory {
    /// Method used when no explicit choice is made.
    pub const DEFAULT: &'static str = "breadthfirst";

    /// The accepted method keys.
    pub const CHOICES: [&'static str; 4] = ["breadthfirst", "depthfirst", "dijkstra", "astar"];

    /// Resolve a method key to a display title and solver callable.
    ///
    /// Unknown keys fall back to breadth-first search.
    pub fn create(method: &str) -> (&'static str, Solver) {
        match method {
            "depthfirst" => ("Depth first search", depth_first_solver),
            "dijkstra" => ("Dijkstra's Algorithm", crate::dijkstra::dijkstra),
            "astar" => ("A-star Search", crate::astar::astar),
            _ => ("Breadth first search", breadth_first_solver),
        }
    }
}

fn breadth_first_solver(maze: &Maze) -> Result<Solution, QueueError> {
    Ok(crate::bfs::breadth_first(maze))
}

fn depth_first_solver(maze: &Maze) -> Result<Solution, QueueError> {
    Ok(crate::dfs::depth_first(maze))
}
