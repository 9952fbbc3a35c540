//! Move ordering: transposition-table hint first, then MVV/LVA.

use lucena_core::{Board, Move, PieceKind};

use crate::eval::material::piece_value;

/// MVV/LVA ordering score: `10 * victim - attacker`.
///
/// "Pawn takes queen" dominates "queen takes pawn" by construction.
/// Non-captures score 0. The en passant victim is a pawn even though
/// the destination square is empty.
pub(crate) fn mvv_lva(board: &Board, mv: Move) -> i32 {
    let victim = if mv.is_en_passant() {
        Some(PieceKind::Pawn)
    } else {
        board.piece_at(mv.to()).map(|piece| piece.kind)
    };
    let Some(victim) = victim else {
        return 0;
    };
    let attacker = board
        .piece_at(mv.from())
        .map(|piece| piece_value(piece.kind))
        .unwrap_or(0);
    10 * piece_value(victim) - attacker
}

/// Sort moves by MVV/LVA descending, then promote the TT hint (when it
/// is present in the list) to the front.
///
/// A stale hint that is no longer generated for this position is simply
/// not found and has no effect.
pub(crate) fn order_moves(board: &Board, moves: &mut [Move], hint: Option<Move>) {
    moves.sort_by_key(|&mv| -mvv_lva(board, mv));

    if let Some(hint) = hint
        && let Some(pos) = moves.iter().position(|&mv| mv == hint)
    {
        moves[..=pos].rotate_right(1);
    }
}
