//! Piece-square tables with separate early-game and late-game variants.
//!
//! Tables are written from White's perspective with row 0 = rank 8, so a
//! White piece indexes by its square's row directly and a Black piece
//! mirrors with `7 - row`. Pawns use a single table; every other kind is
//! tapered between its early and late variant by the game phase.

use lucena_core::{Color, PieceKind, Square};

// Knights rot in the corners in every phase; central posts only become
// safe once the early-game skirmishing is over.
#[rustfmt::skip]
const KNIGHT_EARLY: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,   5,   5,   5,   5,   0, -30],
    [-30,   0,   5,  10,  10,   5,   0, -30],
    [-30,   0,   5,  10,  10,   5,   0, -30],
    [-30,   0,  15,   5,   5,  15,   0, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const KNIGHT_LATE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   5,   5,   5,   5, -20, -40],
    [-30,   5,  15,  15,  15,  15,   5, -30],
    [-30,   5,  20,  15,  15,  20,   5, -30],
    [-30,   5,  20,  25,  25,  20,   5, -30],
    [-30,   5,  20,  20,  20,  20,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

// Early: develop to active diagonals, fianchetto is fine, back rank is not.
#[rustfmt::skip]
const BISHOP_EARLY: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-10,  10,  10,   5,   5,  10,  10, -10],
    [-10,  10,  15,   5,   5,  15,  10, -10],
    [-10,  10,  15,   5,   5,  15,  10, -10],
    [-10,   5,  10,  10,  10,  10,   5, -10],
    [-10,  10,   0,   0,   0,   0,  10, -10],
    [-20, -10, -15, -10, -10, -15, -10, -20],
];

#[rustfmt::skip]
const BISHOP_LATE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   5,   5,   5,   5,   5,   5, -10],
    [-10,   5,  15,  15,  15,  15,   5, -10],
    [-10,   5,  15,  20,  20,  15,   5, -10],
    [-10,   5,  15,  20,  20,  15,   5, -10],
    [-10,   5,  15,  15,  15,  15,   5, -10],
    [-10,  10,   5,   5,   5,   5,  10, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

// Early: stay home, connect, take open files. Late: the 7th rank is the
// prize and central files stay valuable.
#[rustfmt::skip]
const ROOK_EARLY: [[i32; 8]; 8] = [
    [-30, -30, -30, -30, -30, -30, -30, -30],
    [-30, -30, -30, -30, -30, -30, -30, -30],
    [-30, -30, -30, -30, -30, -30, -30, -30],
    [-30, -30, -30, -30, -30, -30, -30, -30],
    [-30, -30, -30, -30, -30, -30, -30, -30],
    [-30, -30, -30, -30, -30, -30, -30, -30],
    [ -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5],
    [  0,   0,   5,  10,  10,   5,   0,   0],
];

#[rustfmt::skip]
const ROOK_LATE: [[i32; 8]; 8] = [
    [  0,   0,   5,  10,  10,   5,   0,   0],
    [ 15,  15,  20,  25,  25,  20,  15,  15],
    [  0,   0,   5,  10,  10,   5,   0,   0],
    [  0,   0,   5,  10,  10,   5,   0,   0],
    [  0,   0,   5,  10,  10,   5,   0,   0],
    [  0,   0,   5,  10,  10,   5,   0,   0],
    [  0,   0,   5,  10,  10,   5,   0,   0],
    [  0,   0,   5,  10,  10,   5,   0,   0],
];

// Early: a wandering queen gets chased with tempo. Late: centralize.
#[rustfmt::skip]
const QUEEN_EARLY: [[i32; 8]; 8] = [
    [-50, -50, -50, -50, -50, -50, -50, -50],
    [-50, -50, -50, -50, -50, -50, -50, -50],
    [-30, -30, -30, -30, -30, -30, -30, -30],
    [-20, -20, -20, -20, -20, -20, -20, -20],
    [-10, -10, -10, -10, -10, -10, -10, -10],
    [ -5,  -5,   0,   0,   0,   0,  -5,  -5],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [ -5,   0,   5,   5,   0,   5,   0,  -5],
];

#[rustfmt::skip]
const QUEEN_LATE: [[i32; 8]; 8] = [
    [-20, -10,   0,   5,   5,   0, -10, -20],
    [-10,   0,  10,  15,  15,  10,   0, -10],
    [ -5,   5,  15,  20,  20,  15,   5,  -5],
    [ -5,   5,  15,  20,  20,  15,   5,  -5],
    [ -5,   5,  10,  15,  15,  10,   5,  -5],
    [ -5,   0,  10,  10,  10,  10,   0,  -5],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [-20, -10,   0,   0,   0,   0, -10, -20],
];

// Early: leaving home before the endgame is punished hard, castled
// corners excepted. Late: an active central king wins endings.
#[rustfmt::skip]
const KING_EARLY: [[i32; 8]; 8] = [
    [-80, -80, -80, -80, -80, -80, -80, -80],
    [-80, -80, -80, -80, -80, -80, -80, -80],
    [-80, -80, -80, -80, -80, -80, -80, -80],
    [-80, -80, -80, -80, -80, -80, -80, -80],
    [-80, -80, -80, -80, -80, -80, -80, -80],
    [-60, -60, -60, -60, -60, -60, -60, -60],
    [-20, -20, -20, -40, -40, -40, -20, -20],
    [ 20,  30,  15, -30, -10, -30,  30,  20],
];

#[rustfmt::skip]
const KING_LATE: [[i32; 8]; 8] = [
    [-50, -30, -20, -20, -20, -20, -30, -50],
    [-30, -10,   0,   5,   5,   0, -10, -30],
    [-20,   0,  15,  20,  20,  15,   0, -20],
    [-20,   5,  20,  25,  25,  20,   5, -20],
    [-20,   5,  20,  25,  25,  20,   5, -20],
    [-20,   0,  15,  20,  20,  15,   0, -20],
    [  5,   5,   0,   5,   5,   0,   5,   5],
    [-50, -30, -20, -20, -20, -20, -30, -50],
];

// Pawns use one table for all phases: central control, and a nudge
// against leaving the d/e pawns unmoved to block development.
#[rustfmt::skip]
const PAWN: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 20,  20,  25,  30,  30,  25,  20,  20],
    [ 10,  10,  15,  25,  25,  15,  10,  10],
    [  5,   5,  20,  20,  20,  10,   5,   5],
    [  0,   0,   5,  10,  10,   5,   0,   0],
    [  0,   0,   0,  -5,  -5,   0,   0,   0],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

/// Interpolate between the early and late value by γ, rounding to the
/// nearest centipawn.
fn taper(early: i32, late: i32, gamma: f64) -> i32 {
    (early as f64 * gamma + late as f64 * (1.0 - gamma)).round() as i32
}

/// Piece-square bonus for a piece of `kind` and `color` on `sq`.
///
/// Black mirrors the row index; columns are symmetric in every table.
pub fn pst_value(kind: PieceKind, color: Color, sq: Square, gamma: f64) -> i32 {
    let row = match color {
        Color::White => sq.row(),
        Color::Black => 7 - sq.row(),
    } as usize;
    let col = sq.col() as usize;

    match kind {
        PieceKind::Pawn => PAWN[row][col],
        PieceKind::Knight => taper(KNIGHT_EARLY[row][col], KNIGHT_LATE[row][col], gamma),
        PieceKind::Bishop => taper(BISHOP_EARLY[row][col], BISHOP_LATE[row][col], gamma),
        PieceKind::Rook => taper(ROOK_EARLY[row][col], ROOK_LATE[row][col], gamma),
        PieceKind::Queen => taper(QUEEN_EARLY[row][col], QUEEN_LATE[row][col], gamma),
        PieceKind::King => taper(KING_EARLY[row][col], KING_LATE[row][col], gamma),
    }
}

#[cfg(test)]
mod tests {
    use lucena_core::{Color, PieceKind, Square};

    use super::pst_value;

    #[test]
    fn knight_corner_is_worst_square() {
        let corner = pst_value(PieceKind::Knight, Color::White, Square::new(7, 0), 1.0);
        for sq in Square::all() {
            assert!(pst_value(PieceKind::Knight, Color::White, sq, 1.0) >= corner);
        }
        assert_eq!(corner, -50);
    }

    #[test]
    fn black_mirrors_white() {
        for kind in PieceKind::ALL {
            for gamma in [0.0, 0.3, 1.0] {
                for sq in Square::all() {
                    let mirrored = Square::new(7 - sq.row(), sq.col());
                    assert_eq!(
                        pst_value(kind, Color::White, sq, gamma),
                        pst_value(kind, Color::Black, mirrored, gamma),
                        "{kind:?} {sq:?} gamma {gamma}"
                    );
                }
            }
        }
    }

    #[test]
    fn king_home_corner_good_early_bad_late() {
        let g1 = Square::new(7, 6);
        assert!(pst_value(PieceKind::King, Color::White, g1, 1.0) > 0);
        let center = Square::new(3, 3);
        assert!(pst_value(PieceKind::King, Color::White, center, 1.0) < 0);
        assert!(pst_value(PieceKind::King, Color::White, center, 0.0) > 0);
    }

    #[test]
    fn rook_seventh_rank_late_bonus() {
        let seventh = Square::new(1, 3);
        assert!(pst_value(PieceKind::Rook, Color::White, seventh, 0.0) > 20);
    }

    #[test]
    fn taper_is_monotonic_between_endpoints() {
        let sq = Square::new(4, 4);
        let early = pst_value(PieceKind::Queen, Color::White, sq, 1.0);
        let late = pst_value(PieceKind::Queen, Color::White, sq, 0.0);
        let mid = pst_value(PieceKind::Queen, Color::White, sq, 0.5);
        let (lo, hi) = if early < late { (early, late) } else { (late, early) };
        assert!(mid >= lo && mid <= hi);
    }
}
