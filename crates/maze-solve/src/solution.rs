//! The result contract shared by every solver.

use maze_core::{Maze, Point};

/// Run statistics reported alongside a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Vertices dequeued for expansion, including start and goal.
    pub expanded: usize,
    /// Number of vertices on the returned path.
    pub path_len: usize,
    /// Whether the goal was reached.
    pub completed: bool,
}

/// A solver's answer: the start-to-goal path and its run statistics.
///
/// When the goal is unreachable, `path` is empty and
/// `stats.completed` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub path: Vec<Point>,
    pub stats: SearchStats,
}

/// Walk the predecessor table backward from the goal and package the
/// result. `usize::MAX` marks "no predecessor"; the walk stops there.
pub(crate) fn reconstruct(
    maze: &Maze,
    goal: usize,
    parent: &[usize],
    expanded: usize,
    completed: bool,
) -> Solution {
    let path = if completed {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            path.push(maze.point(ci));
            ci = parent[ci];
        }
        path.reverse();
        path
    } else {
        Vec::new()
    };
    let path_len = path.len();
    Solution {
        path,
        stats: SearchStats {
            expanded,
            path_len,
            completed,
        },
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn solution_round_trip() {
        let sol = Solution {
            path: vec![Point::new(0, 0), Point::new(0, 1)],
            stats: SearchStats {
                expanded: 2,
                path_len: 2,
                completed: true,
            },
        };
        let json = serde_json::to_string(&sol).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(sol, back);
    }
}
