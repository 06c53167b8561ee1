//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves, plays each one on a scratch copy of the
//! position, rebuilds the opponent's threat map there, and drops every move
//! that leaves the mover's king attacked. There is no separate pin logic.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::threat_map::ThreatMap;
use crate::move_generation::pseudo_legal::{
    generate_pseudo_legal_moves, generate_pseudo_legal_moves_from, GenerationMode,
};
use crate::moves::chess_move::Move;

/// Legal moves for `color` in `state`.
///
/// # Panics
/// If `color` has no king on the board.
pub fn generate_legal_moves(state: &BoardState, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    generate_pseudo_legal_moves(state, color, GenerationMode::Normal, &mut moves);

    retain_legal(state, color, &mut moves);
    moves
}

/// Legal moves of the piece standing on `start`.
pub fn generate_legal_moves_from(state: &BoardState, start: Square) -> Vec<Move> {
    let Some(color) = state.piece_at(start).color() else {
        return Vec::new();
    };
    let mut moves = generate_pseudo_legal_moves_from(state, start);
    retain_legal(state, color, &mut moves);
    moves
}

fn retain_legal(state: &BoardState, color: Color, moves: &mut Vec<Move>) {
    let king = required_king_square(state, color);
    let mut scratch = state.clone();
    moves.retain(|mv| {
        scratch.clone_from(state);
        !exposes_king(&mut scratch, mv, king)
    });
}

/// Whether playing `mv` would leave its mover's king attacked.
pub fn does_move_expose_king(state: &BoardState, mv: &Move) -> bool {
    let king = required_king_square(state, mv.color());
    let mut scratch = state.clone();
    exposes_king(&mut scratch, mv, king)
}

fn required_king_square(state: &BoardState, color: Color) -> Square {
    state
        .king_square(color)
        .unwrap_or_else(|| panic!("{color} king missing from board"))
}

/// `scratch` must equal the position `mv` was generated from; it is left
/// holding the position after `mv` with stale threat maps.
fn exposes_king(scratch: &mut BoardState, mv: &Move, king: Square) -> bool {
    scratch.place_move(mv);
    let king = if mv.start() == king { mv.target() } else { king };
    ThreatMap::build(scratch, mv.color().opposite()).is_threatened(king)
}
