//! FEN string parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::board::Board;
use crate::castling::CastlingFlags;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    /// Parse a FEN string.
    ///
    /// All six fields must be present; only the first four (placement,
    /// side, castling, en passant) are interpreted. The halfmove clock
    /// and fullmove number are read but ignored.
    fn from_str(fen: &str) -> Result<Board, FenError> {
        parse_fen(fen).inspect_err(|err| debug!(%fen, error = %err, "rejected FEN"))
    }
}

/// Field-by-field FEN parsing; [`FromStr`] wraps this with diagnostics.
fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let mut board = Board::empty();

    // Piece placement: ranks 8 down to 1, which matches row order.
    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let row = rank_index as i8;
        let mut col: i8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as i8;
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if col >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: col as usize + 1,
                    });
                }
                board.put(Square::new(row, col), Some(piece));
                col += 1;
            }
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col as usize,
            });
        }
    }

    // Active color.
    let side = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    };
    board.set_side_to_move(side);

    // Castling rights, normalized against the actual placement: a
    // right claimed by the FEN is void when the king or rook is not
    // on its home square.
    let castling = CastlingFlags::from_fen(fields[2])?;
    board.set_castling(normalize_castling(&board, castling));

    // En passant target: "-" or a square on rank 3 or 6.
    if fields[3] != "-" {
        let sq = Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
            found: fields[3].to_string(),
        })?;
        if sq.row() != 2 && sq.row() != 5 {
            return Err(FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            });
        }
        board.set_en_passant(Some(sq));
    }

    validate_kings(&board)?;
    board.refresh_hash();
    Ok(board)
}

/// Void any castling right whose king or rook is not on its home square.
fn normalize_castling(board: &Board, mut flags: CastlingFlags) -> CastlingFlags {
    for color in Color::ALL {
        let home_row = color.home_row();
        if board.piece_at(Square::new(home_row, 4)) != Some(Piece::new(PieceKind::King, color)) {
            flags.set_king_moved(color);
        }
        if board.piece_at(Square::new(home_row, 7)) != Some(Piece::new(PieceKind::Rook, color)) {
            flags.set_rook_kingside_moved(color);
        }
        if board.piece_at(Square::new(home_row, 0)) != Some(Piece::new(PieceKind::Rook, color)) {
            flags.set_rook_queenside_moved(color);
        }
    }
    flags
}

/// Require exactly one king per side.
fn validate_kings(board: &Board) -> Result<(), FenError> {
    for color in Color::ALL {
        let count = Square::all()
            .filter(|&sq| board.piece_at(sq) == Some(Piece::new(PieceKind::King, color)))
            .count() as u32;
        if count != 1 {
            return Err(FenError::InvalidKingCount {
                color: match color {
                    Color::White => "white",
                    Color::Black => "black",
                },
                count,
            });
        }
    }
    Ok(())
}

impl Board {
    /// Serialize the position to a FEN string.
    ///
    /// The board does not track move counters, so the last two fields are
    /// always "0 1".
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(80);

        for row in 0i8..8 {
            let mut empty_run = 0u8;
            for col in 0i8..8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            fen.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push((b'0' + empty_run) as char);
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push_str(&self.side_to_move().to_string());
        fen.push(' ');
        fen.push_str(&self.castling().to_string());
        fen.push(' ');
        match self.en_passant() {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }
        fen.push_str(" 0 1");
        fen
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::FenError;
    use crate::square::Square;

    fn roundtrip(fen: &str) {
        let board: Board = fen.parse().unwrap();
        assert_eq!(board.to_fen(), fen, "FEN roundtrip failed");
        let again: Board = board.to_fen().parse().unwrap();
        assert!(board == again);
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_FEN);
    }

    #[test]
    fn roundtrip_sicilian() {
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 1");
    }

    #[test]
    fn roundtrip_castling_subset() {
        roundtrip("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
    }

    #[test]
    fn starting_fen_matches_starting_position() {
        let parsed: Board = STARTING_FEN.parse().unwrap();
        let built = Board::starting_position();
        assert!(parsed == built);
        assert_eq!(parsed.hash(), built.hash());
    }

    #[test]
    fn parses_side_and_en_passant() {
        let board: Board = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
            .parse()
            .unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant(), Some(Square::new(5, 4)));
    }

    #[test]
    fn counters_are_read_but_ignored() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 37 99".parse().unwrap();
        assert!(board.to_fen().ends_with(" 0 1"));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w - -".parse::<Board>(),
            Err(FenError::WrongFieldCount { found: 4 })
        ));
    }

    #[test]
    fn rejects_wrong_rank_count() {
        assert!(matches!(
            "4k3/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>(),
            Err(FenError::WrongRankCount { found: 7 })
        ));
    }

    #[test]
    fn rejects_bad_rank_length() {
        assert!(matches!(
            "4k4/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>(),
            Err(FenError::BadRankLength { .. })
        ));
    }

    #[test]
    fn rejects_invalid_piece_char() {
        assert!(matches!(
            "4x3/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>(),
            Err(FenError::InvalidPieceChar { character: 'x' })
        ));
    }

    #[test]
    fn rejects_invalid_color() {
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1".parse::<Board>(),
            Err(FenError::InvalidColor { .. })
        ));
    }

    #[test]
    fn rejects_en_passant_off_rank_3_and_6() {
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1".parse::<Board>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
    }

    #[test]
    fn rejects_missing_king() {
        assert!(matches!(
            "8/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>(),
            Err(FenError::InvalidKingCount { color: "black", .. })
        ));
    }

    #[test]
    fn rejects_two_kings() {
        assert!(matches!(
            "4k2k/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>(),
            Err(FenError::InvalidKingCount { color: "black", count: 2 })
        ));
    }

    #[test]
    fn castling_rights_normalized_against_placement() {
        // The FEN claims full rights but the h1 rook is missing.
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1".parse().unwrap();
        assert!(!board.castling().kingside_available(Color::White));
        assert!(board.castling().queenside_available(Color::White));
        assert!(board.castling().kingside_available(Color::Black));
    }
}
