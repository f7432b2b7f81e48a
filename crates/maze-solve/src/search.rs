//! The generic weighted-frontier search procedure.
//!
//! Dijkstra and A* are the same algorithm with different heuristics: the
//! frontier is a min-priority queue keyed by `distance + heuristic`, and
//! improving a vertex's tentative distance either inserts it or
//! decrease-keys its live queue entry. For the priority sequence passed to
//! `decrease_key` to be strictly decreasing per vertex — which every
//! backend requires — the heuristic must be admissible and consistent;
//! the zero heuristic trivially is.

use maze_core::{Maze, Point};
use maze_queue::{Node, PriorityQueue, QueueError};

use crate::observer::SearchObserver;
use crate::solution::{SearchStats, Solution, reconstruct};

/// Sentinel distance meaning "not yet discovered".
pub const UNREACHABLE: i32 = i32::MAX;

/// Run a weighted search from `maze.start()` to `maze.end()`.
///
/// Explores until the goal is dequeued (`completed`) or the frontier
/// empties (`exhausted`, empty path). Queue faults propagate unhandled:
/// the search fails loudly rather than returning a corrupt path.
pub fn weighted_search<Q, H, O>(
    maze: &Maze,
    mut queue: Q,
    heuristic: H,
    observer: &mut O,
) -> Result<Solution, QueueError>
where
    Q: PriorityQueue<i32, Point>,
    H: Fn(Point, Point) -> i32,
    O: SearchObserver,
{
    let start = maze.start();
    let goal = maze.end();

    let mut distance = vec![UNREACHABLE; maze.len()];
    let mut parent = vec![usize::MAX; maze.len()];
    // One live queue handle per discovered-but-unexpanded vertex.
    let mut handles: Vec<Option<Node<i32, Point>>> = vec![None; maze.len()];

    let (Some(si), Some(gi)) = (maze.idx(start), maze.idx(goal)) else {
        return Ok(Solution {
            path: Vec::new(),
            stats: SearchStats {
                expanded: 0,
                path_len: 0,
                completed: false,
            },
        });
    };

    distance[si] = 0;
    handles[si] = Some(queue.insert(heuristic(start, goal), start));
    observer.frontier(start);

    let mut expanded = 0usize;
    let mut completed = false;
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while !queue.is_empty() {
        let node = queue.remove_minimum()?;
        let current = node.value();
        expanded += 1;
        observer.visit(current);

        let Some(ci) = maze.idx(current) else {
            continue;
        };
        handles[ci] = None;

        if current == goal {
            completed = true;
            break;
        }

        let current_dist = distance[ci];
        nbuf.clear();
        maze.neighbors(current, &mut nbuf);

        for &next in nbuf.iter() {
            let Some(ni) = maze.idx(next) else {
                continue;
            };
            let tentative = current_dist + maze.cost(current, next);
            if tentative < distance[ni] {
                distance[ni] = tentative;
                parent[ni] = ci;
                let priority = tentative + heuristic(next, goal);
                match handles[ni].take() {
                    Some(mut handle) => {
                        queue.decrease_key(&mut handle, priority)?;
                        handles[ni] = Some(handle);
                    }
                    None => handles[ni] = Some(queue.insert(priority, next)),
                }
                observer.frontier(next);
            }
        }
    }

    let solution = reconstruct(maze, gi, &parent, expanded, completed);
    log::debug!(
        "weighted search finished: expanded={} path_len={} completed={}",
        solution.stats.expanded,
        solution.stats.path_len,
        solution.stats.completed
    );
    Ok(solution)
}
