//! Dijkstra's algorithm: uniform-cost search, the zero-heuristic case of
//! [`weighted_search`](crate::weighted_search).

use maze_core::{Maze, Point};
use maze_queue::{PairingHeap, PriorityQueue, QueueError};

use crate::observer::{NoopObserver, SearchObserver};
use crate::search::weighted_search;
use crate::solution::Solution;

/// Solve `maze` with Dijkstra's algorithm over a pairing-heap frontier.
pub fn dijkstra(maze: &Maze) -> Result<Solution, QueueError> {
    dijkstra_observed(maze, &mut NoopObserver)
}

/// Dijkstra with visualization hooks.
pub fn dijkstra_observed<O: SearchObserver>(
    maze: &Maze,
    observer: &mut O,
) -> Result<Solution, QueueError> {
    dijkstra_with(maze, PairingHeap::new(), observer)
}

/// Dijkstra over a caller-chosen queue backend.
pub fn dijkstra_with<Q, O>(maze: &Maze, queue: Q, observer: &mut O) -> Result<Solution, QueueError>
where
    Q: PriorityQueue<i32, Point>,
    O: SearchObserver,
{
    weighted_search(maze, queue, |_, _| 0, observer)
}
