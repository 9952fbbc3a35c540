//! Iterative-deepening search driver.

pub mod alphabeta;
pub mod control;
pub mod ordering;
pub mod quiescence;
pub mod tt;

use std::time::Duration;

use lucena_core::{Board, Move};
use tracing::debug;

pub use control::SearchLimits;

use tt::TranspositionTable;

/// Result of a completed search.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move at the deepest completed iteration, or `None` when the
    /// position has no legal moves (mate or stalemate).
    pub best_move: Option<Move>,
    /// Score in centipawns from White's perspective.
    pub score: i32,
    /// Deepest completed iteration.
    pub depth: u32,
    /// Nodes visited across all iterations.
    pub nodes: u64,
}

/// Iterative-deepening searcher owning a transposition table.
///
/// The table persists across searches within one game and is cleared on
/// `ucinewgame`. A `Searcher` must not be shared between concurrent
/// searches; all operations are single-threaded and run to completion.
pub struct Searcher {
    pub(crate) tt: TranspositionTable,
    pub(crate) nodes: u64,
}

impl Searcher {
    /// Create a searcher with the default transposition table budget.
    pub fn new() -> Self {
        Self::with_tt_size(TranspositionTable::DEFAULT_SIZE_MB)
    }

    /// Create a searcher with a transposition table of `size_mb` MiB.
    pub fn with_tt_size(size_mb: usize) -> Self {
        Self {
            tt: TranspositionTable::new(size_mb),
            nodes: 0,
        }
    }

    /// Clear the transposition table (for `ucinewgame`).
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    /// Run iterative deepening from depth 1 up to the limit.
    ///
    /// The deadline is polled between iterations only; a started depth
    /// always completes, and on expiry the best move from the previous
    /// depth is returned. `on_iter(depth, score, nodes, elapsed, move)`
    /// runs after each completed iteration so the caller can emit UCI
    /// `info` lines.
    ///
    /// The board is mutated during the search but always restored; a
    /// completed call leaves it bit-identical to its input.
    pub fn find_best_move<F>(
        &mut self,
        board: &mut Board,
        limits: &SearchLimits,
        mut on_iter: F,
    ) -> SearchResult
    where
        F: FnMut(u32, i32, u64, Duration, Move),
    {
        let deadline = control::Deadline::new(limits);
        self.nodes = 0;
        self.tt.reset_stats();

        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=limits.max_depth() {
            // Depth 1 always runs so even an expired budget yields a move.
            if depth > 1 && deadline.expired() {
                break;
            }

            let (best_move, score) = self.search_root(board, depth);
            result = SearchResult {
                best_move,
                score,
                depth,
                nodes: self.nodes,
            };

            let Some(mv) = best_move else {
                // Terminal position: deeper iterations cannot change it.
                break;
            };
            on_iter(depth, score, self.nodes, deadline.elapsed(), mv);
        }

        let stats = self.tt.stats();
        debug!(
            hits = stats.hits,
            misses = stats.misses,
            stores = stats.stores,
            nodes = result.nodes,
            "search finished"
        );
        result
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher").field("tt", &self.tt).finish()
    }
}
