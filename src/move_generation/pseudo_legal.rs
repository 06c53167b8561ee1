//! Pseudo-legal move generation entry point.
//!
//! Walks the mailbox and dispatches each piece of the requested color to its
//! per-class generator. No king-safety filtering happens here.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Piece, PieceClass, Square};
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::pawn_moves::{generate_pawn_attacks, generate_pawn_pushes};
use crate::move_generation::sliding_moves::generate_sliding_moves;
use crate::moves::chess_move::Move;

/// What the generator is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Every move a piece could structurally make.
    Normal,
    /// Every square a piece attacks, for threat maps. Pawn diagonals count
    /// even when empty and squares holding friendly pieces count as
    /// defended. Pawn pushes and castling are omitted and the opponent's
    /// threat map is never consulted.
    AttackOnly,
}

impl GenerationMode {
    /// Whether a piece of `color` may list `occupant`'s square.
    #[inline]
    pub(crate) fn allows_target(self, color: Color, occupant: Piece) -> bool {
        match self {
            GenerationMode::Normal => !occupant.is_color(color),
            GenerationMode::AttackOnly => true,
        }
    }
}

/// Append every pseudo-legal move of `color` to `out`.
pub fn generate_pseudo_legal_moves(
    state: &BoardState,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    for start in 0..64u8 {
        let piece = state.piece_at(start);
        if !piece.is_color(color) {
            continue;
        }

        match piece.class() {
            Some(class) if class.is_sliding() => {
                generate_sliding_moves(state, start, class, color, mode, out)
            }
            Some(PieceClass::Knight) => generate_knight_moves(state, start, color, mode, out),
            Some(PieceClass::Pawn) => {
                if mode == GenerationMode::Normal {
                    generate_pawn_pushes(state, start, color, out);
                }
                generate_pawn_attacks(state, start, color, mode, out);
            }
            Some(PieceClass::King) => generate_king_moves(state, start, color, mode, out),
            _ => {}
        }
    }
}

/// Pseudo-legal moves of the piece on `start`, whatever its color.
pub fn generate_pseudo_legal_moves_from(state: &BoardState, start: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(color) = state.piece_at(start).color() {
        generate_pseudo_legal_moves(state, color, GenerationMode::Normal, &mut out);
        out.retain(|mv| mv.start() == start);
    }
    out
}
