//! A* search: [`weighted_search`](crate::weighted_search) guided by the
//! Manhattan heuristic, which never overestimates on a 4-connected grid
//! with edge costs ≥ 1.

use maze_core::{Maze, Point};
use maze_queue::{PairingHeap, PriorityQueue, QueueError};

use crate::distance::manhattan;
use crate::observer::{NoopObserver, SearchObserver};
use crate::search::weighted_search;
use crate::solution::Solution;

/// Solve `maze` with A* over a pairing-heap frontier.
pub fn astar(maze: &Maze) -> Result<Solution, QueueError> {
    astar_observed(maze, &mut NoopObserver)
}

/// A* with visualization hooks.
pub fn astar_observed<O: SearchObserver>(
    maze: &Maze,
    observer: &mut O,
) -> Result<Solution, QueueError> {
    astar_with(maze, PairingHeap::new(), observer)
}

/// A* over a caller-chosen queue backend.
pub fn astar_with<Q, O>(maze: &Maze, queue: Q, observer: &mut O) -> Result<Solution, QueueError>
where
    Q: PriorityQueue<i32, Point>,
    O: SearchObserver,
{
    weighted_search(maze, queue, manhattan, observer)
}
