//! Pseudo-legal and legal move generation.
//!
//! The per-kind emitters produce *pseudo-legal* moves: syntactically valid
//! under the piece movement rules, but possibly leaving the mover's king
//! in check. [`generate_legal_moves`] filters them by playing each move
//! and rejecting those that leave the king attacked — no board copies,
//! just make/undo.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate all pseudo-legal moves for the side to move.
pub fn generate_pseudo_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let us = board.side_to_move();

    for from in Square::all() {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if piece.color != us {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawns::generate(board, from, us, &mut moves),
            PieceKind::Knight => knights::generate(board, from, us, &mut moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliders::generate(board, from, piece.kind, us, &mut moves)
            }
            PieceKind::King => king::generate(board, from, us, &mut moves),
        }
    }

    moves
}

/// Generate pseudo-legal captures only, for quiescence search.
///
/// Emits moves whose destination holds an enemy piece, plus en passant,
/// plus promotions (promotions are included even when they do not
/// capture, since they change the evaluation as much as a capture does).
pub fn generate_captures(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    let us = board.side_to_move();

    for from in Square::all() {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if piece.color != us {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawns::generate_captures(board, from, us, &mut moves),
            PieceKind::Knight => knights::generate_captures(board, from, us, &mut moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliders::generate_captures(board, from, piece.kind, us, &mut moves)
            }
            PieceKind::King => king::generate_captures(board, from, us, &mut moves),
        }
    }

    moves
}

/// Generate all fully legal moves for the side to move.
///
/// Plays each pseudo-legal move and keeps it only when the mover's king
/// is not left in check.
pub fn generate_legal_moves(board: &mut Board) -> Vec<Move> {
    let us = board.side_to_move();
    let mut legal = generate_pseudo_moves(board);
    legal.retain(|&mv| {
        let undo = board.make_move(mv);
        let ok = !board.is_checked(us);
        board.undo_move(undo);
        ok
    });
    legal
}
