//! Static evaluation: tapered material + piece-square terms, slider
//! mobility, passed pawns, and king safety.

pub mod king_safety;
pub mod material;
pub mod mobility;
pub mod pawns;
pub mod phase;
pub mod pst;

use lucena_core::{Board, Color, Square};

use crate::eval::material::piece_value;
use crate::eval::phase::game_phase_fraction;

/// Evaluate the position in centipawns.
///
/// Positive is good for White, negative for Black, regardless of the
/// side to move. A pure function of the board state.
pub fn evaluate(board: &Board) -> i32 {
    let gamma = game_phase_fraction(board);
    let mut score = 0i32;

    for sq in Square::all() {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        let sign = if piece.color == Color::White { 1 } else { -1 };
        score += sign * piece_value(piece.kind);
        score += sign * pst::pst_value(piece.kind, piece.color, sq, gamma);
    }

    score += mobility::evaluate_mobility(board, gamma);
    score += pawns::evaluate_passed_pawns(board);
    score += king_safety::evaluate_king_safety(board, gamma);

    score
}
