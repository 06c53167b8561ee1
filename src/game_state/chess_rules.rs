//! Canonical chess-rule constants and precomputed geometry.
//!
//! Everything here is computed at compile time and shared read-only.

use crate::game_state::chess_types::{
    file_of, rank_of, square_at, CastleSide, Color, PieceClass, Square, CASTLE_KINGSIDE, CASTLE_NONE,
    CASTLE_QUEENSIDE, CastlingRights,
};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Promotion classes, in the order they are emitted.
pub const PROMOTION_CLASSES: [PieceClass; 4] = [
    PieceClass::Queen,
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
];

/// Ray offsets: N, S, W, E, NW, SE, NE, SW.
pub const DIRECTION_OFFSETS: [i8; 8] = [8, -8, -1, 1, 7, -7, 9, -9];

/// Orthogonal rays occupy the first half of [`DIRECTION_OFFSETS`].
pub const ORTHOGONAL_DIRECTIONS: std::ops::Range<usize> = 0..4;
pub const DIAGONAL_DIRECTIONS: std::ops::Range<usize> = 4..8;

/// Knight square offsets. Index arithmetic alone wraps across the a/h files,
/// so every candidate is re-checked with [`is_knight_jump`].
pub const KNIGHT_OFFSETS: [i8; 8] = [15, 17, -17, -15, 10, -6, 6, -10];

/// Number of squares from each square to the board edge along each ray.
pub static NUM_SQUARES_TO_EDGE: [[u8; 8]; 64] = compute_edge_distances();

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

const fn compute_edge_distances() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut rank = 0u8;
    while rank < 8 {
        let mut file = 0u8;
        while file < 8 {
            let north = 7 - rank;
            let south = rank;
            let west = file;
            let east = 7 - file;

            table[square_at(rank, file) as usize] = [
                north,
                south,
                west,
                east,
                min(north, west),
                min(south, east),
                min(north, east),
                min(south, west),
            ];
            file += 1;
        }
        rank += 1;
    }
    table
}

/// Square reached by moving `distance` steps along ray `direction`.
///
/// Callers must keep `distance` within [`NUM_SQUARES_TO_EDGE`].
#[inline]
pub fn ray_square(start: Square, direction: usize, distance: u8) -> Square {
    (start as i16 + DIRECTION_OFFSETS[direction] as i16 * distance as i16) as Square
}

/// True when `start -> target` is a (1, 2) or (2, 1) displacement.
#[inline]
pub fn is_knight_jump(start: Square, target: Square) -> bool {
    let dx = (file_of(start) as i8 - file_of(target) as i8).abs();
    let dy = (rank_of(start) as i8 - rank_of(target) as i8).abs();
    matches!((dx, dy), (1, 2) | (2, 1))
}

/// King start square for `color`.
#[inline]
pub const fn king_home(color: Color) -> Square {
    square_at(color.home_rank(), 4)
}

/// Rook start square for `color` on `side`.
#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => square_at(color.home_rank(), 7),
        CastleSide::Queenside => square_at(color.home_rank(), 0),
    }
}

/// Castling right tied to a rook standing on `square`, if it is a rook home.
#[inline]
pub const fn rook_home_right(color: Color, square: Square) -> CastlingRights {
    if square == rook_home(color, CastleSide::Kingside) {
        CASTLE_KINGSIDE
    } else if square == rook_home(color, CastleSide::Queenside) {
        CASTLE_QUEENSIDE
    } else {
        CASTLE_NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_distances_at_corners_and_centre() {
        // a1
        assert_eq!(NUM_SQUARES_TO_EDGE[0], [7, 0, 0, 7, 0, 0, 7, 0]);
        // h8
        assert_eq!(NUM_SQUARES_TO_EDGE[63], [0, 7, 7, 0, 0, 0, 0, 7]);
        // e4
        assert_eq!(NUM_SQUARES_TO_EDGE[28], [4, 3, 4, 3, 4, 3, 3, 3]);
    }

    #[test]
    fn home_squares() {
        assert_eq!(king_home(Color::White), 4);
        assert_eq!(king_home(Color::Black), 60);
        assert_eq!(rook_home(Color::Black, CastleSide::Queenside), 56);
        assert_eq!(rook_home_right(Color::White, 7), CASTLE_KINGSIDE);
        assert_eq!(rook_home_right(Color::White, 63), CASTLE_NONE);
    }

    #[test]
    fn knight_offsets_wrap_without_the_displacement_check() {
        // h1 + 10 lands on b3 by index arithmetic.
        assert!(!is_knight_jump(7, 17));
        assert!(is_knight_jump(7, 22));
        assert!(is_knight_jump(1, 18));
        assert!(!is_knight_jump(0, 15));
    }
}
