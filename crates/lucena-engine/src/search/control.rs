//! Search limits and the per-move deadline.

use std::time::{Duration, Instant};

/// Maximum iterative-deepening depth when only a time limit is given.
pub(crate) const MAX_DEPTH: u32 = 64;

/// Limits for one search: a depth cap, a wall-clock budget, or both.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    /// Maximum iterative-deepening depth.
    pub depth: Option<u32>,
    /// Wall-clock budget for the whole move.
    pub movetime: Option<Duration>,
}

impl SearchLimits {
    /// Limit by depth only.
    pub fn depth(depth: u32) -> Self {
        Self {
            depth: Some(depth),
            movetime: None,
        }
    }

    /// Limit by move time only.
    pub fn movetime(movetime: Duration) -> Self {
        Self {
            depth: None,
            movetime: Some(movetime),
        }
    }

    /// The deepest iteration the driver may start.
    pub(crate) fn max_depth(&self) -> u32 {
        self.depth.unwrap_or(MAX_DEPTH).clamp(1, MAX_DEPTH)
    }
}

/// Wall-clock deadline, polled only between iterative-deepening
/// iterations. An in-flight depth always runs to completion; the search
/// is cooperative, never preempted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    start: Instant,
    end: Option<Instant>,
}

impl Deadline {
    pub(crate) fn new(limits: &SearchLimits) -> Self {
        let start = Instant::now();
        Self {
            start,
            end: limits.movetime.map(|budget| start + budget),
        }
    }

    /// Whether the budget is spent.
    pub(crate) fn expired(&self) -> bool {
        match self.end {
            Some(end) => Instant::now() >= end,
            None => false,
        }
    }

    /// Time elapsed since the search started.
    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
