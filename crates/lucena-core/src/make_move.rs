//! Move execution and reversal with incremental Zobrist updates.

use crate::board::Board;
use crate::chess_move::{Move, MoveKind, MoveUndo};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::zobrist;

/// Home square of the kingside rook for each color.
fn rook_home_kingside(color: Color) -> Square {
    Square::new(color.home_row(), 7)
}

/// Home square of the queenside rook for each color.
fn rook_home_queenside(color: Color) -> Square {
    Square::new(color.home_row(), 0)
}

impl Board {
    /// Apply a legal move in place and return the undo record.
    ///
    /// The caller must have validated the move (the search plays only
    /// legality-filtered pseudo-legal moves); handing an ill-formed move
    /// to this function leaves the board in an undefined state.
    ///
    /// The side to move flips and the Zobrist hash is updated
    /// incrementally: old en-passant file, old castling mask, and every
    /// moved or captured piece are XORed out, and the new contributions
    /// XORed in. [`undo_move`](Board::undo_move) reverses everything
    /// bit-exactly.
    pub fn make_move(&mut self, mv: Move) -> MoveUndo {
        let us = self.side_to_move();
        let them = us.flip();
        let from = mv.from();
        let to = mv.to();
        let moved = self
            .piece_at(from)
            .expect("make_move called with empty source square");

        let undo = MoveUndo {
            mv,
            captured: None, // filled in below
            moved,
            prior_en_passant: self.en_passant(),
            prior_castling: self.castling(),
            prior_hash: self.hash(),
        };
        let mut captured = None;

        let mut hash = self.hash();

        // XOR out the old en passant contribution and castling
        // configuration before either can change.
        if let Some(col) = zobrist::ep_hash_file(self) {
            hash ^= zobrist::EN_PASSANT_FILE[col];
        }
        hash ^= zobrist::CASTLING[self.castling().rights_mask() as usize];

        self.set_en_passant(None);

        match mv.kind() {
            MoveKind::Normal => {
                if let Some(victim) = self.piece_at(to) {
                    captured = Some(victim);
                    hash ^= zobrist::PIECE_SQUARE[victim.index()][to.index()];
                }
                self.put(from, None);
                self.put(to, Some(moved));
                hash ^= zobrist::PIECE_SQUARE[moved.index()][from.index()];
                hash ^= zobrist::PIECE_SQUARE[moved.index()][to.index()];

                // A double pawn push leaves the crossed square as the
                // en passant target.
                if moved.kind == PieceKind::Pawn && (to.row() - from.row()).abs() == 2 {
                    let crossed = Square::new((from.row() + to.row()) / 2, from.col());
                    self.set_en_passant(Some(crossed));
                }
            }

            MoveKind::Promotion => {
                if let Some(victim) = self.piece_at(to) {
                    captured = Some(victim);
                    hash ^= zobrist::PIECE_SQUARE[victim.index()][to.index()];
                }
                let promoted = Piece::new(
                    mv.promotion().expect("promotion move without a piece kind"),
                    us,
                );
                self.put(from, None);
                self.put(to, Some(promoted));
                hash ^= zobrist::PIECE_SQUARE[moved.index()][from.index()];
                hash ^= zobrist::PIECE_SQUARE[promoted.index()][to.index()];
            }

            MoveKind::Castle => {
                self.put(from, None);
                self.put(to, Some(moved));
                hash ^= zobrist::PIECE_SQUARE[moved.index()][from.index()];
                hash ^= zobrist::PIECE_SQUARE[moved.index()][to.index()];

                // Destination column 6 = kingside, column 2 = queenside.
                // The rook lands on the square the king crossed.
                let (rook_from, rook_to) = if to.col() == 6 {
                    (rook_home_kingside(us), Square::new(from.row(), 5))
                } else {
                    (rook_home_queenside(us), Square::new(from.row(), 3))
                };
                let rook = Piece::new(PieceKind::Rook, us);
                self.put(rook_from, None);
                self.put(rook_to, Some(rook));
                hash ^= zobrist::PIECE_SQUARE[rook.index()][rook_from.index()];
                hash ^= zobrist::PIECE_SQUARE[rook.index()][rook_to.index()];
            }

            MoveKind::EnPassant => {
                self.put(from, None);
                self.put(to, Some(moved));
                hash ^= zobrist::PIECE_SQUARE[moved.index()][from.index()];
                hash ^= zobrist::PIECE_SQUARE[moved.index()][to.index()];

                // The captured pawn sits beside the mover, on the
                // destination file.
                let victim_sq = Square::new(from.row(), to.col());
                let victim = Piece::new(PieceKind::Pawn, them);
                captured = Some(victim);
                self.put(victim_sq, None);
                hash ^= zobrist::PIECE_SQUARE[victim.index()][victim_sq.index()];
            }
        }

        self.update_castling_flags(moved, mv, captured);

        hash ^= zobrist::CASTLING[self.castling().rights_mask() as usize];
        hash ^= zobrist::SIDE_TO_MOVE;

        // The new en passant contribution depends on whether the *new*
        // side to move can capture, so flip the side first.
        self.set_side_to_move(them);
        if let Some(col) = zobrist::ep_hash_file(self) {
            hash ^= zobrist::EN_PASSANT_FILE[col];
        }
        self.set_hash(hash);

        MoveUndo { captured, ..undo }
    }

    /// Reverse the most recent [`make_move`](Board::make_move).
    ///
    /// Restores the grid, side to move, castling flags, en passant target,
    /// and hash to exactly their pre-move values.
    pub fn undo_move(&mut self, undo: MoveUndo) {
        let mv = undo.mv;
        let from = mv.from();
        let to = mv.to();
        let us = undo.moved.color;

        match mv.kind() {
            MoveKind::Normal | MoveKind::Promotion => {
                self.put(from, Some(undo.moved));
                self.put(to, undo.captured);
            }
            MoveKind::Castle => {
                self.put(from, Some(undo.moved));
                self.put(to, None);
                let (rook_from, rook_to) = if to.col() == 6 {
                    (rook_home_kingside(us), Square::new(from.row(), 5))
                } else {
                    (rook_home_queenside(us), Square::new(from.row(), 3))
                };
                self.put(rook_to, None);
                self.put(rook_from, Some(Piece::new(PieceKind::Rook, us)));
            }
            MoveKind::EnPassant => {
                self.put(from, Some(undo.moved));
                self.put(to, None);
                self.put(Square::new(from.row(), to.col()), undo.captured);
            }
        }

        self.set_side_to_move(us);
        self.set_castling(undo.prior_castling);
        self.set_en_passant(undo.prior_en_passant);
        self.set_hash(undo.prior_hash);
    }

    /// Update the castling "has moved" flags after the piece motion.
    ///
    /// King moves and rook moves from home squares set the mover's flags;
    /// a rook captured on its home square sets the victim's flag too.
    fn update_castling_flags(&mut self, moved: Piece, mv: Move, captured: Option<Piece>) {
        let us = moved.color;

        if moved.kind == PieceKind::King {
            self.castling_mut().set_king_moved(us);
        } else if moved.kind == PieceKind::Rook {
            if mv.from() == rook_home_kingside(us) {
                self.castling_mut().set_rook_kingside_moved(us);
            } else if mv.from() == rook_home_queenside(us) {
                self.castling_mut().set_rook_queenside_moved(us);
            }
        }

        if let Some(victim) = captured
            && victim.kind == PieceKind::Rook
        {
            if mv.to() == rook_home_kingside(victim.color) {
                self.castling_mut().set_rook_kingside_moved(victim.color);
            } else if mv.to() == rook_home_queenside(victim.color) {
                self.castling_mut().set_rook_queenside_moved(victim.color);
            }
        }
    }
}
