//! Pawn move generation: pushes, captures, en passant, and promotions.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Promotion piece kinds in generation order.
const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// The row a pawn of `color` double-pushes from.
fn double_push_row(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Push `from`→`to`, fanning out into four promotion moves when the
/// destination is the back rank.
fn push_move(from: Square, to: Square, moves: &mut Vec<Move>) {
    if to.row() == 0 || to.row() == 7 {
        for promo in PROMOTIONS {
            moves.push(Move::new_promotion(from, to, promo));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Generate all pseudo-legal pawn moves from `from`.
pub(super) fn generate(board: &Board, from: Square, us: Color, moves: &mut Vec<Move>) {
    let dir = us.pawn_direction();

    // Single push to an empty square.
    if let Some(one) = from.offset(dir, 0)
        && board.piece_at(one).is_none()
    {
        push_move(from, one, moves);

        // Double push from the home rank when both squares are empty.
        if from.row() == double_push_row(us)
            && let Some(two) = from.offset(2 * dir, 0)
            && board.piece_at(two).is_none()
        {
            moves.push(Move::new(from, two));
        }
    }

    generate_captures_inner(board, from, us, moves);
}

/// Generate pawn captures, en passant, and (for quiescence) quiet
/// promotions from `from`.
pub(super) fn generate_captures(board: &Board, from: Square, us: Color, moves: &mut Vec<Move>) {
    let dir = us.pawn_direction();

    // Quiet promotions change material like a capture does, so the
    // capture generator includes them.
    if let Some(one) = from.offset(dir, 0)
        && (one.row() == 0 || one.row() == 7)
        && board.piece_at(one).is_none()
    {
        push_move(from, one, moves);
    }

    generate_captures_inner(board, from, us, moves);
}

/// Diagonal captures and en passant, shared by both generators.
fn generate_captures_inner(board: &Board, from: Square, us: Color, moves: &mut Vec<Move>) {
    let dir = us.pawn_direction();

    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        if let Some(target) = board.piece_at(to)
            && target.color != us
        {
            push_move(from, to, moves);
        }
    }

    if let Some(ep) = board.en_passant()
        && ep.row() == from.row() + dir
        && (ep.col() - from.col()).abs() == 1
    {
        moves.push(Move::new_en_passant(from, ep));
    }
}
