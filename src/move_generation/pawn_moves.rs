//! Pawn pushes, captures, en passant and promotion.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::PROMOTION_CLASSES;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::GenerationMode;
use crate::moves::chess_move::Move;

#[inline]
fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let target = square as i8 + offset;
    (0..64).contains(&target).then_some(target as Square)
}

fn push_pawn_arrival(start: Square, target: Square, color: Color, out: &mut Vec<Move>) {
    if rank_of(target) == color.promotion_rank() {
        for class in PROMOTION_CLASSES {
            out.push(Move::promote(start, target, color, class));
        }
    } else {
        out.push(Move::plain(start, target, color, CASTLE_NONE));
    }
}

/// Single and double forward steps onto empty squares.
pub fn generate_pawn_pushes(state: &BoardState, start: Square, color: Color, out: &mut Vec<Move>) {
    let push = color.pawn_push();

    let Some(one_step) = offset_square(start, push) else {
        return;
    };
    if !state.piece_at(one_step).is_empty() {
        return;
    }
    push_pawn_arrival(start, one_step, color, out);

    if rank_of(start) != color.pawn_rank() {
        return;
    }
    if let Some(two_step) = offset_square(one_step, push) {
        if state.piece_at(two_step).is_empty() {
            out.push(Move::double_push(start, two_step, color));
        }
    }
}

/// Diagonal captures, including en passant.
///
/// In [`GenerationMode::AttackOnly`] both diagonals are reported whatever
/// they hold.
pub fn generate_pawn_attacks(
    state: &BoardState,
    start: Square,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let push = color.pawn_push();
    let file = file_of(start);
    let enemy = color.opposite();

    // (offset, file that cannot make this capture without wrapping)
    let diagonals = [(push - 1, 0u8), (push + 1, 7u8)];

    for (offset, blocked_file) in diagonals {
        if file == blocked_file {
            continue;
        }
        let Some(target) = offset_square(start, offset) else {
            continue;
        };

        if state.en_passant_target() == Some(target) {
            if let Some(passed_pawn) = offset_square(target, -push) {
                if state.piece_at(passed_pawn).is(enemy, PieceClass::Pawn) {
                    out.push(Move::en_passant_capture(start, target, color, passed_pawn));
                    continue;
                }
            }
        }

        match mode {
            GenerationMode::AttackOnly => {
                out.push(Move::plain(start, target, color, CASTLE_NONE));
            }
            GenerationMode::Normal => {
                if state.piece_at(target).is_color(enemy) {
                    push_pawn_arrival(start, target, color, out);
                }
            }
        }
    }
}
