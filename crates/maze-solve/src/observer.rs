//! Observation hooks for streaming search progress to a visualizer.

use maze_core::Point;

/// Receives fire-and-forget events during a search.
///
/// `frontier` fires when a vertex is newly discovered or has its priority
/// improved; `visit` fires when a vertex is dequeued for expansion. An
/// observer must never influence the search outcome.
pub trait SearchObserver {
    /// A vertex entered (or moved within) the frontier.
    fn frontier(&mut self, _pos: Point) {}

    /// A vertex was dequeued and is being expanded.
    fn visit(&mut self, _pos: Point) {}
}

/// The default observer: ignores everything.
///
/// Solvers take this when no visualizer is attached, keeping the hook
/// calls free of process-wide state.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
