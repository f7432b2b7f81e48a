//! **maze-core** — the maze graph and its geometry.
//!
//! This crate provides the types shared across the *maze* workspace: the
//! [`Point`] geometry primitive and the [`Maze`] grid graph that solvers
//! consume. A maze is a rectangle of weighted cells; every open cell is a
//! vertex, edges connect 4-adjacent open cells, and the cost of an edge is
//! the entry cost of its target cell.
//!
//! Mazes are built from ASCII art (see [`Maze::parse`]); decoding raster
//! images into grids is left to surrounding tooling.

pub mod geom;
pub mod maze;

pub use geom::Point;
pub use maze::{Maze, MazeError, WALL};
