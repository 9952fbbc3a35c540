//! King move generation, including castling.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::direction::CHEBYSHEV;
use crate::square::Square;

/// Generate all pseudo-legal king moves from `from`, including castling.
pub(super) fn generate(board: &Board, from: Square, us: Color, moves: &mut Vec<Move>) {
    for (dr, dc) in CHEBYSHEV {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color == us => {}
            _ => moves.push(Move::new(from, to)),
        }
    }

    generate_castles(board, from, us, moves);
}

/// Generate king captures only.
pub(super) fn generate_captures(board: &Board, from: Square, us: Color, moves: &mut Vec<Move>) {
    for (dr, dc) in CHEBYSHEV {
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

/// Emit castling moves when every precondition holds.
///
/// Castling is possible only from the king's home square, with the
/// matching king and rook "moved" flags clear, all squares strictly
/// between king and rook empty, and none of the king's current, crossed,
/// or landing squares attacked. A king in check never castles out of it.
fn generate_castles(board: &Board, from: Square, us: Color, moves: &mut Vec<Move>) {
    let home_row = us.home_row();
    if from != Square::new(home_row, 4) {
        return;
    }

    let them = us.flip();
    if board.square_attacked(from, them) {
        return;
    }

    // Kingside: rook on column 7, king lands on column 6.
    if board.castling().kingside_available(us)
        && board.piece_at(Square::new(home_row, 5)).is_none()
        && board.piece_at(Square::new(home_row, 6)).is_none()
        && !board.square_attacked(Square::new(home_row, 5), them)
        && !board.square_attacked(Square::new(home_row, 6), them)
    {
        moves.push(Move::new_castle(from, Square::new(home_row, 6)));
    }

    // Queenside: rook on column 0, king lands on column 2. The b-file
    // square must be empty but may be attacked — only the king's path
    // (d and c files) has to be safe.
    if board.castling().queenside_available(us)
        && board.piece_at(Square::new(home_row, 3)).is_none()
        && board.piece_at(Square::new(home_row, 2)).is_none()
        && board.piece_at(Square::new(home_row, 1)).is_none()
        && !board.square_attacked(Square::new(home_row, 3), them)
        && !board.square_attacked(Square::new(home_row, 2), them)
    {
        moves.push(Move::new_castle(from, Square::new(home_row, 2)));
    }
}
