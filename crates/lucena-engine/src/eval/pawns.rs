//! Passed pawn evaluation.

use lucena_core::{Board, Color, Piece, PieceKind, Square};

/// Flat bonus for any passed pawn.
const PASSED_BASE: i32 = 10;

/// Additional bonus per rank of advancement from the starting rank.
const PASSED_PER_RANK: i32 = 15;

/// A pawn is passed when no enemy pawn sits ahead of it on its own file
/// or either adjacent file.
fn is_passed(board: &Board, sq: Square, color: Color) -> bool {
    let dir = color.pawn_direction();
    let enemy_pawn = Piece::new(PieceKind::Pawn, color.flip());

    for dc in -1i8..=1 {
        let Some(mut current) = sq.offset(0, dc) else {
            continue;
        };
        // Walk forward along the file from the pawn's rank.
        while let Some(ahead) = current.offset(dir, 0) {
            if board.piece_at(ahead) == Some(enemy_pawn) {
                return false;
            }
            current = ahead;
        }
    }
    true
}

/// Ranks advanced from the starting rank: 0 at home, 5 one step from
/// promotion.
fn advancement(sq: Square, color: Color) -> i32 {
    match color {
        Color::White => (6 - sq.row()) as i32,
        Color::Black => (sq.row() - 1) as i32,
    }
}

/// Passed pawn term from White's perspective.
pub fn evaluate_passed_pawns(board: &Board) -> i32 {
    let mut score = 0;
    for sq in Square::all() {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        if piece.kind != PieceKind::Pawn {
            continue;
        }
        if is_passed(board, sq, piece.color) {
            let bonus = PASSED_BASE + PASSED_PER_RANK * advancement(sq, piece.color);
            score += if piece.color == Color::White {
                bonus
            } else {
                -bonus
            };
        }
    }
    score
}
