//! King safety: pawn-shield coverage for castled kings.
//!
//! Only evaluated while enough material remains to mount an attack
//! (γ > 0.3). A king still in the center is judged by its piece-square
//! table instead; this term looks exclusively at castled positions.

use lucena_core::{Board, Color, Piece, PieceKind, Square};

/// Phase threshold below which king safety stops mattering.
const PHASE_CUTOFF: f64 = 0.3;

/// Penalty per missing pawn in the three-square shield.
const MISSING_SHIELD_PAWN_PENALTY: i32 = 15;

/// Extra penalty when the king's own file is fully open.
const OPEN_FILE_PENALTY: i32 = 25;

/// Shield penalty for one side, or 0 when its king is not castled.
fn side_penalty(board: &Board, color: Color) -> i32 {
    let king_sq = board.king_square(color);
    if king_sq.row() != color.home_row() {
        return 0;
    }

    // Columns 6-7 = castled kingside, columns 1-2 = castled queenside.
    let shield_cols: [i8; 3] = match king_sq.col() {
        6 | 7 => [5, 6, 7],
        1 | 2 => [0, 1, 2],
        _ => return 0,
    };

    let shield_row = color.home_row() + color.pawn_direction();
    let own_pawn = Piece::new(PieceKind::Pawn, color);
    let mut present = 0;
    for col in shield_cols {
        if board.piece_at(Square::new(shield_row, col)) == Some(own_pawn) {
            present += 1;
        }
    }
    let mut penalty = (3 - present) * MISSING_SHIELD_PAWN_PENALTY;

    // A fully open file in front of the king: no pawn of either color
    // anywhere on the king's file.
    let file_has_pawn = (0i8..8).any(|row| {
        matches!(
            board.piece_at(Square::new(row, king_sq.col())),
            Some(piece) if piece.kind == PieceKind::Pawn
        )
    });
    if !file_has_pawn {
        penalty += OPEN_FILE_PENALTY;
    }

    penalty
}

/// King safety term from White's perspective.
pub fn evaluate_king_safety(board: &Board, gamma: f64) -> i32 {
    if gamma <= PHASE_CUTOFF {
        return 0;
    }
    side_penalty(board, Color::Black) - side_penalty(board, Color::White)
}

#[cfg(test)]
mod tests {
    use lucena_core::Board;

    use super::evaluate_king_safety;

    #[test]
    fn intact_shield_is_neutral() {
        let board: Board = "6k1/5ppp/8/8/8/8/5PPP/6K1 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_king_safety(&board, 1.0), 0);
    }

    #[test]
    fn missing_shield_pawn_costs_fifteen() {
        // White's g-pawn is gone but g-file still holds the black pawn.
        let board: Board = "6k1/5ppp/8/8/8/8/5P1P/6K1 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_king_safety(&board, 1.0), -15);
    }

    #[test]
    fn open_file_costs_extra() {
        // No g-pawns at all: one missing shield pawn plus an open king file.
        let board: Board = "5k2/5p1p/8/8/8/8/5P1P/6K1 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_king_safety(&board, 1.0), -(15 + 25));
    }

    #[test]
    fn queenside_castle_counts_its_own_wing() {
        let board: Board = "2k5/ppp5/8/8/8/8/PP6/2K5 w - - 0 1".parse().unwrap();
        // White is missing the c2 shield pawn; Black's wing is intact.
        assert_eq!(evaluate_king_safety(&board, 1.0), -15);
    }

    #[test]
    fn central_king_is_not_judged_here() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_king_safety(&board, 1.0), 0);
    }

    #[test]
    fn endgame_phase_disables_the_term() {
        let board: Board = "6k1/5p1p/8/8/8/8/5P1P/6K1 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_king_safety(&board, 0.2), 0);
    }

    #[test]
    fn symmetric_damage_cancels() {
        let board: Board = "6k1/5p1p/8/8/8/8/5P1P/6K1 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_king_safety(&board, 1.0), 0);
    }
}
