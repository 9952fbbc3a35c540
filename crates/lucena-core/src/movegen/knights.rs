//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::direction::KNIGHT_JUMPS;
use crate::square::Square;

/// Generate all pseudo-legal knight moves from `from`.
pub(super) fn generate(board: &Board, from: Square, us: Color, moves: &mut Vec<Move>) {
    for (dr, dc) in KNIGHT_JUMPS {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color == us => {}
            _ => moves.push(Move::new(from, to)),
        }
    }
}

/// Generate knight captures only.
pub(super) fn generate_captures(board: &Board, from: Square, us: Color, moves: &mut Vec<Move>) {
    for (dr, dc) in KNIGHT_JUMPS {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        if let Some(piece) = board.piece_at(to)
            && piece.color != us
        {
            moves.push(Move::new(from, to));
        }
    }
}
