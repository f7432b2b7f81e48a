//! Depth-first search: unweighted, LIFO frontier. Finds *a* path, not a
//! shortest one.

use maze_core::Maze;

use crate::observer::{NoopObserver, SearchObserver};
use crate::solution::{SearchStats, Solution, reconstruct};

/// Solve `maze` by depth-first search.
pub fn depth_first(maze: &Maze) -> Solution {
    depth_first_observed(maze, &mut NoopObserver)
}

/// Depth-first search with visualization hooks.
pub fn depth_first_observed<O: SearchObserver>(maze: &Maze, observer: &mut O) -> Solution {
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

    let mut stack = vec![si];
    observer.frontier(start);

    let mut expanded = 0usize;
    let mut completed = false;
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = stack.pop() {
        expanded += 1;
        let current = maze.point(ci);
        observer.visit(current);

        if ci == gi {
            completed = true;
            break;
        }

        // A vertex can sit on the stack more than once; only the first
        // pop expands it.
        if visited[ci] {
            continue;
        }
        visited[ci] = true;

        nbuf.clear();
        maze.neighbors(current, &mut nbuf);
        for &next in nbuf.iter() {
            let Some(ni) = maze.idx(next) else {
                continue;
            };
            if !visited[ni] {
                parent[ni] = ci;
                stack.push(ni);
                observer.frontier(next);
            }
        }
    }

    let solution = reconstruct(maze, gi, &parent, expanded, completed);
    log::debug!(
        "depth-first finished: expanded={} path_len={} completed={}",
        solution.stats.expanded,
        solution.stats.path_len,
        solution.stats.completed
    );
    solution
}
