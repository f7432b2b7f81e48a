//! Breadth-first search: unweighted, FIFO frontier.

use std::collections::VecDeque;

use maze_core::Maze;

use crate::observer::{NoopObserver, SearchObserver};
use crate::solution::{SearchStats, Solution, reconstruct};

/// Solve `maze` by breadth-first search.
///
/// On a uniform maze the result is a shortest path; with terrain costs it
/// minimizes hops, not cost.
pub fn breadth_first(maze: &Maze) -> Solution {
    breadth_first_observed(maze, &mut NoopObserver)
}

/// Breadth-first search with visualization hooks.
pub fn breadth_first_observed<O: SearchObserver>(maze: &Maze, observer: &mut O) -> Solution {
    let start = maze.start();
    let goal = maze.end();

    let mut visited = vec![false; maze.len()];
    let mut parent = vec![usize::MAX; maze.len()];

    let (Some(si), Some(gi)) = (maze.idx(start), maze.idx(goal)) else {
        return Solution {
            path: Vec::new(),
            stats: SearchStats {
                expanded: 0,
                path_len: 0,
                completed: false,
            },
        };
    };

    let mut queue = VecDeque::new();
    visited[si] = true;
    queue.push_back(si);
    observer.frontier(start);

    let mut expanded = 0usize;
    let mut completed = false;
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        expanded += 1;
        let current = maze.point(ci);
        observer.visit(current);

        if ci == gi {
            completed = true;
            break;
        }

        nbuf.clear();
        maze.neighbors(current, &mut nbuf);
        for &next in nbuf.iter() {
            let Some(ni) = maze.idx(next) else {
                continue;
            };
            if !visited[ni] {
                visited[ni] = true;
                parent[ni] = ci;
                queue.push_back(ni);
                observer.frontier(next);
            }
        }
    }

    let solution = reconstruct(maze, gi, &parent, expanded, completed);
    log::debug!(
        "breadth-first finished: expanded={} path_len={} completed={}",
        solution.stats.expanded,
        solution.stats.path_len,
        solution.stats.completed
    );
    solution
}
