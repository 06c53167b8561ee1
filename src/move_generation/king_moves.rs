//! King steps and castling.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{king_home, ray_square, rook_home, NUM_SQUARES_TO_EDGE};
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::GenerationMode;
use crate::moves::chess_move::Move;

/// Files the king crosses (and lands on) when castling; must be unattacked.
const fn king_path(side: CastleSide) -> &'static [u8] {
    match side {
        CastleSide::Kingside => &[5, 6],
        CastleSide::Queenside => &[3, 2],
    }
}

/// Files between king and rook; must be empty.
const fn clearance(side: CastleSide) -> &'static [u8] {
    match side {
        CastleSide::Kingside => &[5, 6],
        CastleSide::Queenside => &[1, 2, 3],
    }
}

pub fn generate_king_moves(
    state: &BoardState,
    start: Square,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let enemy = color.opposite();

    for direction in 0..8 {
        if NUM_SQUARES_TO_EDGE[start as usize][direction] == 0 {
            continue;
        }
        let target = ray_square(start, direction, 1);

        let available = match mode {
            // Threat maps are what is being built; do not consult them.
            GenerationMode::AttackOnly => true,
            GenerationMode::Normal => {
                !state.piece_at(target).is_color(color)
                    && !state.is_square_threatened(target, enemy)
            }
        };

        if available {
            out.push(Move::plain(start, target, color, CASTLE_BOTH));
        }
    }

    // Castling is not an attacking move.
    if mode == GenerationMode::Normal {
        generate_castling_moves(state, start, color, out);
    }
}

fn generate_castling_moves(state: &BoardState, start: Square, color: Color, out: &mut Vec<Move>) {
    let enemy = color.opposite();
    let rights = state.castling_rights(color);

    if rights == CASTLE_NONE
        || start != king_home(color)
        || state.is_square_threatened(start, enemy)
    {
        return;
    }

    let rank = color.home_rank();
    for side in CastleSide::BOTH {
        if rights & side.right() == 0 {
            continue;
        }
        if !state
            .piece_at(rook_home(color, side))
            .is(color, PieceClass::Rook)
        {
            continue;
        }

        let blocked = clearance(side)
            .iter()
            .any(|&file| !state.piece_at(square_at(rank, file)).is_empty());
        if blocked {
            continue;
        }

        let attacked = king_path(side)
            .iter()
            .any(|&file| state.is_square_threatened(square_at(rank, file), enemy));
        if attacked {
            continue;
        }

        out.push(Move::castling(color, side));
    }
}
