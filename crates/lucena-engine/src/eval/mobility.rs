//! Slider mobility: open-ray counting for bishops and rooks.
//!
//! Mobility counts the empty squares along each ray up to the first
//! occupied square. Rays toward the enemy weigh fully; sideways and
//! backward rays weigh half. The total scales with the game phase, since
//! piece activity matters most while there is material to attack with.

use lucena_core::{Board, Color, PieceKind, Square};

/// Weight of a ray pointed toward the enemy side.
const FORWARD_WEIGHT: f64 = 1.0;

/// Weight of a sideways or backward ray.
const OTHER_WEIGHT: f64 = 0.5;

/// Diagonal ray directions, for bishops.
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal ray directions, for rooks.
const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Count the empty squares along one ray until the first occupied square.
fn ray_length(board: &Board, from: Square, dr: i8, dc: i8) -> i32 {
    let mut count = 0;
    let mut current = from;
    while let Some(next) = current.offset(dr, dc) {
        if board.piece_at(next).is_some() {
            break;
        }
        count += 1;
        current = next;
    }
    count
}

/// Weighted ray mobility for all bishops and rooks of one side.
fn side_mobility(board: &Board, color: Color) -> f64 {
    let forward = color.pawn_direction();
    let mut total = 0.0;

    for sq in Square::all() {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        if piece.color != color {
            continue;
        }
        let rays: &[(i8, i8)] = match piece.kind {
            PieceKind::Bishop => &DIAGONAL,
            PieceKind::Rook => &ORTHOGONAL,
            _ => continue,
        };
        for &(dr, dc) in rays {
            let weight = if dr == forward {
                FORWARD_WEIGHT
            } else {
                OTHER_WEIGHT
            };
            total += weight * ray_length(board, sq, dr, dc) as f64;
        }
    }

    total
}

/// Mobility term from White's perspective, scaled by 2γ and rounded.
pub fn evaluate_mobility(board: &Board, gamma: f64) -> i32 {
    let diff = side_mobility(board, Color::White) - side_mobility(board, Color::Black);
    (2.0 * gamma * diff).round() as i32
}

#[cfg(test)]
mod tests {
    use lucena_core::Board;

    use super::evaluate_mobility;

    #[test]
    fn starting_position_is_zero() {
        let board = Board::starting_position();
        assert_eq!(evaluate_mobility(&board, 1.0), 0);
    }

    #[test]
    fn open_bishop_beats_trapped_bishop() {
        let open: Board = "4k3/8/8/8/8/8/2P1K3/2B5 w - - 0 1".parse().unwrap();
        let blocked: Board = "4k3/8/8/8/8/8/2P1K3/3B4 w - - 0 1".parse().unwrap();
        assert!(evaluate_mobility(&open, 1.0) > evaluate_mobility(&blocked, 1.0));
    }

    #[test]
    fn open_rook_beats_blocked_rook() {
        let open: Board = "4k3/8/8/4P3/3R4/8/8/4K3 w - - 0 1".parse().unwrap();
        let blocked: Board = "4k3/8/8/3P4/3R4/8/8/4K3 w - - 0 1".parse().unwrap();
        assert!(evaluate_mobility(&open, 1.0) > evaluate_mobility(&blocked, 1.0));
    }

    #[test]
    fn forward_rays_count_double() {
        // A rook on a1 sees seven forward squares; a rook on a8 sees the
        // same seven squares backward at half weight.
        let forward: Board = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1".parse().unwrap();
        let backward: Board = "R3k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert!(evaluate_mobility(&forward, 1.0) > evaluate_mobility(&backward, 1.0));
    }

    #[test]
    fn scales_with_phase() {
        let board: Board = "4k3/8/8/8/3B4/8/8/4K3 w - - 0 1".parse().unwrap();
        let full = evaluate_mobility(&board, 1.0);
        let half = evaluate_mobility(&board, 0.5);
        assert!(full > half);
        assert_eq!(evaluate_mobility(&board, 0.0), 0);
    }
}
