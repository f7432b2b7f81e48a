//! The maze grid graph, built from ASCII art.
//!
//! Each character of the input maps to one cell. `#` is a wall, `.` and
//! space are open floor with entry cost 1, digits `1`–`9` are open floor
//! with that entry cost, and `S`/`E` optionally pin the entrance and exit.
//! Lines are separated by `'\n'` and must all have the same width.

use std::fmt;

use crate::geom::Point;

/// Cell value meaning "wall": no vertex, no edges.
pub const WALL: i32 = 0;

/// A rectangular maze graph.
///
/// Every open cell is a vertex; edges connect 4-adjacent open cells. The
/// cost of traversing an edge is the entry cost of its target cell, so a
/// uniform maze (all `.`) has unit edge weights.
#[derive(Debug, Clone)]
pub struct Maze {
    width: i32,
    height: i32,
    /// Entry cost per cell, row-major. [`WALL`] marks impassable cells.
    cells: Vec<i32>,
    start: Point,
    end: Point,
    count: usize,
}

impl Maze {
    /// Parse a maze from its textual form.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Without explicit `S`/`E` runes, the entrance
    /// is the first open cell of the top row and the exit the last open
    /// cell of the bottom row; if several `S` or `E` appear, the last one
    /// wins.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim();
        let mut cells = Vec::new();
        let mut width: i32 = -1;
        let mut start = None;
        let mut end = None;
        let mut y: i32 = 0;

        for line in s.lines() {
            let mut x: i32 = 0;
            for ch in line.chars() {
                let cost = match ch {
                    '#' => WALL,
                    '.' | ' ' => 1,
                    '1'..='9' => ch as i32 - '0' as i32,
                    'S' => {
                        start = Some(Point::new(x, y));
                        1
                    }
                    'E' => {
                        end = Some(Point::new(x, y));
                        1
                    }
                    _ => {
                        return Err(MazeError::InvalidRune {
                            ch,
                            pos: Point::new(x, y),
                        });
                    }
                };
                cells.push(cost);
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(MazeError::InconsistentWidth { line: y as usize });
            }
            y += 1;
        }

        let height = y;
        if width <= 0 || height == 0 {
            return Err(MazeError::MissingEntrance);
        }

        let start = match start {
            Some(p) => p,
            None => (0..width)
                .map(|x| Point::new(x, 0))
                .find(|&p| cells[p.x as usize] != WALL)
                .ok_or(MazeError::MissingEntrance)?,
        };
        let end = match end {
            Some(p) => p,
            None => (0..width)
                .rev()
                .map(|x| Point::new(x, height - 1))
                .find(|&p| cells[((height - 1) * width + p.x) as usize] != WALL)
                .ok_or(MazeError::MissingExit)?,
        };

        let count = cells.iter().filter(|&&c| c != WALL).count();

        Ok(Self {
            width,
            height,
            cells,
            start,
            end,
            count,
        })
    }

    /// Width of the maze in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the maze in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The entrance vertex.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The exit vertex.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Number of open cells (vertices) in the graph.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total number of cells, walls included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the maze has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// Entry cost of the cell at `p`, or [`WALL`] if out of range.
    #[inline]
    pub fn cell(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.cells[i],
            None => WALL,
        }
    }

    /// Whether `p` is an open cell inside the maze.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.cell(p) != WALL
    }

    /// Append the open neighbors of `p` into `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }

    /// The four cardinal neighbor slots of `p` (up, right, down, left).
    ///
    /// Absent edges — walls or out-of-range cells — are `None`.
    pub fn neighbors4(&self, p: Point) -> [Option<Point>; 4] {
        p.neighbors_4()
            .map(|n| if self.is_open(n) { Some(n) } else { None })
    }

    /// Cost of moving from `from` to the adjacent open cell `to`.
    ///
    /// Always > 0. `to` must be an open cell returned by
    /// [`neighbors`](Self::neighbors) / [`neighbors4`](Self::neighbors4).
    #[inline]
    pub fn cost(&self, _from: Point, to: Point) -> i32 {
        self.cell(to)
    }
}

/// Errors from [`Maze::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Lines have inconsistent widths.
    InconsistentWidth {
        /// Zero-based offending line.
        line: usize,
    },
    /// A character outside the maze alphabet was found.
    InvalidRune { ch: char, pos: Point },
    /// No `S` rune and no open cell in the top row.
    MissingEntrance,
    /// No `E` rune and no open cell in the bottom row.
    MissingExit,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InconsistentWidth { line } => {
                write!(f, "line {line} has a different width than the first line")
            }
            MazeError::InvalidRune { ch, pos } => {
                write!(f, "invalid character {ch:?} at {pos}")
            }
            MazeError::MissingEntrance => write!(f, "no entrance: top row has no open cell"),
            MazeError::MissingExit => write!(f, "no exit: bottom row has no open cell"),
        }
    }
}

impl std::error::Error for MazeError {}
