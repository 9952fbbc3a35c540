//! Alpha-beta search over the minimax tree, with transposition cut-offs.

use lucena_core::{Board, Color, Move, generate_pseudo_moves};

use crate::search::Searcher;
use crate::search::ordering::order_moves;
use crate::search::tt::Bound;

/// Unreachable bound for the alpha-beta window.
pub const INF: i32 = 1_000_000_000;

/// Base score for checkmate, offset by ply so nearer mates score better.
///
/// Far above any evaluation the material and positional terms can reach.
pub const MATE: i32 = 1_000_000;

impl Searcher {
    /// Search the root position to `depth`, returning the best move and
    /// its score.
    ///
    /// Iterates ordered pseudo-legal moves, skipping any that leave the
    /// mover's king in check. White maximizes, Black minimizes; scores
    /// are always from White's perspective. Returns `None` when no legal
    /// move exists, with the mate or stalemate score.
    pub(crate) fn search_root(&mut self, board: &mut Board, depth: u32) -> (Option<Move>, i32) {
        let us = board.side_to_move();
        let mut alpha = -INF;
        let mut beta = INF;

        let hint = self.tt.probe(board.hash()).and_then(|entry| entry.best_move);
        let mut moves = generate_pseudo_moves(board);
        order_moves(board, &mut moves, hint);

        let mut best_move = None;
        let mut best = if us == Color::White { -INF } else { INF };

        for mv in moves {
            let undo = board.make_move(mv);
            if board.is_checked(us) {
                board.undo_move(undo);
                continue;
            }
            let score = self.alpha_beta(board, depth - 1, 1, alpha, beta);
            board.undo_move(undo);

            match us {
                Color::White => {
                    if best_move.is_none() || score > best {
                        best = score;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(score);
                }
                Color::Black => {
                    if best_move.is_none() || score < best {
                        best = score;
                        best_move = Some(mv);
                    }
                    beta = beta.min(score);
                }
            }
            if alpha >= beta {
                break;
            }
        }

        if best_move.is_none() {
            best = terminal_score(board, us, 0);
        }
        (best_move, best)
    }

    /// Alpha-beta with transposition table cut-offs and hint ordering.
    ///
    /// `ply` is the distance from the root and is used only for mate
    /// distance, so the search prefers shorter mates and longer defenses.
    pub(crate) fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth == 0 {
            return self.quiescence(board, alpha, beta, 0);
        }
        self.nodes += 1;

        let alpha0 = alpha;
        let beta0 = beta;

        // The table entry is trusted for a cut-off only at sufficient
        // depth, but its move hint is worth keeping at any depth.
        let mut hint = None;
        if let Some(entry) = self.tt.probe(board.hash()) {
            hint = entry.best_move;
            if entry.depth >= depth as i32 {
                match entry.bound {
                    Bound::Exact => return entry.score,
                    Bound::LowerBound => alpha = alpha.max(entry.score),
                    Bound::UpperBound => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
        }

        let us = board.side_to_move();
        let mut moves = generate_pseudo_moves(board);
        order_moves(board, &mut moves, hint);

        let mut best_move = None;
        let mut best = if us == Color::White { -INF } else { INF };

        for mv in moves {
            let undo = board.make_move(mv);
            if board.is_checked(us) {
                board.undo_move(undo);
                continue;
            }
            let score = self.alpha_beta(board, depth - 1, ply + 1, alpha, beta);
            board.undo_move(undo);

            match us {
                Color::White => {
                    if best_move.is_none() || score > best {
                        best = score;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(score);
                }
                Color::Black => {
                    if best_move.is_none() || score < best {
                        best = score;
                        best_move = Some(mv);
                    }
                    beta = beta.min(score);
                }
            }
            if alpha >= beta {
                break;
            }
        }

        if best_move.is_none() {
            return terminal_score(board, us, ply);
        }

        let bound = if best <= alpha0 {
            Bound::UpperBound
        } else if best >= beta0 {
            Bound::LowerBound
        } else {
            Bound::Exact
        };
        self.tt.store(board.hash(), best, depth as i32, bound, best_move);

        best
    }
}

/// Score for a position with no legal moves: mate against the mover, or
/// a stalemate draw.
fn terminal_score(board: &Board, mover: Color, ply: u32) -> i32 {
    if board.is_checked(mover) {
        match mover {
            Color::White => -MATE + ply as i32,
            Color::Black => MATE - ply as i32,
        }
    } else {
        0
    }
}
