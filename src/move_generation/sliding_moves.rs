//! Bishop, rook and queen rays.
//!
//! Each ray is walked up to its precomputed edge distance and stops at the
//! first occupied square.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{
    ray_square, rook_home_right, DIAGONAL_DIRECTIONS, NUM_SQUARES_TO_EDGE, ORTHOGONAL_DIRECTIONS,
};
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::GenerationMode;
use crate::moves::chess_move::Move;

pub fn generate_sliding_moves(
    state: &BoardState,
    start: Square,
    class: PieceClass,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let directions = match class {
        PieceClass::Bishop => DIAGONAL_DIRECTIONS,
        PieceClass::Rook => ORTHOGONAL_DIRECTIONS,
        _ => ORTHOGONAL_DIRECTIONS.start..DIAGONAL_DIRECTIONS.end,
    };

    // A rook leaving its home square gives up that wing; a no-op once the
    // right is already gone.
    let prevents_castling = if class == PieceClass::Rook {
        rook_home_right(color, start)
    } else {
        CASTLE_NONE
    };

    for direction in directions {
        for distance in 1..=NUM_SQUARES_TO_EDGE[start as usize][direction] {
            let target = ray_square(start, direction, distance);
            let occupant = state.piece_at(target);

            if mode.allows_target(color, occupant) {
                out.push(Move::plain(start, target, color, prevents_castling));
            }

            if !occupant.is_empty() {
                break;
            }
        }
    }
}
