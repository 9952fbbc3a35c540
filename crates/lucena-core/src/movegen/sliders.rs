//! Sliding piece move generation: bishops, rooks, and queens.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::direction::{CHEBYSHEV, DIAGONAL, ORTHOGONAL};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Ray directions for a sliding piece kind.
fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Queen => &CHEBYSHEV,
        _ => unreachable!("not a sliding piece"),
    }
}

/// Generate all pseudo-legal sliding moves from `from`.
///
/// Each ray stops at the first occupied square, which is included iff it
/// holds an enemy piece.
pub(super) fn generate(
    board: &Board,
    from: Square,
    kind: PieceKind,
    us: Color,
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions(kind) {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            current = to;
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.color != us {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}

/// Generate sliding captures only: the first piece along each ray, when
/// it belongs to the enemy.
pub(super) fn generate_captures(
    board: &Board,
    from: Square,
    kind: PieceKind,
    us: Color,
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions(kind) {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            current = to;
            if let Some(piece) = board.piece_at(to) {
                if piece.color != us {
                    moves.push(Move::new(from, to));
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::{generate_captures, generate_pseudo_moves};
    use crate::square::Square;

    fn count_from(board: &Board, from: Square) -> usize {
        generate_pseudo_moves(board)
            .iter()
            .filter(|mv| mv.from() == from)
            .count()
    }

    #[test]
    fn rook_on_open_board() {
        let board: Board = "4k3/8/8/8/3R4/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(count_from(&board, Square::new(4, 3)), 14);
    }

    #[test]
    fn bishop_on_open_board() {
        let board: Board = "4k3/8/8/8/3B4/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(count_from(&board, Square::new(4, 3)), 13);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let board: Board = "4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(count_from(&board, Square::new(4, 3)), 27);
    }

    #[test]
    fn ray_stops_at_friendly_piece() {
        // Rook on d4 with a white pawn on d6: d5 is reachable, d6+ are not.
        let board: Board = "4k3/8/3P4/8/3R4/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_pseudo_moves(&board);
        assert!(moves.contains(&crate::chess_move::Move::new(
            Square::new(4, 3),
            Square::new(3, 3)
        )));
        assert!(!moves.iter().any(|mv| mv.from() == Square::new(4, 3)
            && mv.to() == Square::new(2, 3)));
    }

    #[test]
    fn ray_includes_enemy_blocker_and_stops() {
        let board: Board = "4k3/8/3p4/8/3R4/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_pseudo_moves(&board);
        assert!(moves.iter().any(|mv| mv.from() == Square::new(4, 3)
            && mv.to() == Square::new(2, 3)));
        assert!(!moves.iter().any(|mv| mv.from() == Square::new(4, 3)
            && mv.to() == Square::new(1, 3)));
    }

    #[test]
    fn capture_generator_finds_only_the_blockers() {
        let board: Board = "4k3/8/3p4/8/1n1R3p/8/8/4K3 w - - 0 1".parse().unwrap();
        let captures: Vec<_> = generate_captures(&board)
            .into_iter()
            .filter(|mv| mv.from() == Square::new(4, 3))
            .collect();
        assert_eq!(captures.len(), 3, "d6 pawn, b4 knight, h4 pawn: {captures:?}");
    }
}
