//! Standard algebraic names for resolved moves ("Nf3", "exd5", "0-0", "e8=Q+").
//!
//! Names are computed from the position *before* the move; the move is
//! replayed on a copy to decide the check marker. Checkmate is not
//! distinguished from check.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{file_of, CastleSide, PieceClass};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::square_name;

/// Algebraic name of `mv` played from `before`.
///
/// Non-pawn moves are disambiguated by the full start square when another
/// piece of the same class and color could also legally reach the target.
/// Pawn captures always carry the origin file.
pub fn move_name(before: &BoardState, mv: &Move) -> String {
    let mut out = String::new();

    match mv.castle() {
        Some(CastleSide::Kingside) => out.push_str("0-0"),
        Some(CastleSide::Queenside) => out.push_str("0-0-0"),
        None => push_piece_move(before, mv, &mut out),
    }

    let mut after = before.clone();
    after.apply_move(mv);
    if after.is_king_threatened(mv.color().opposite()) {
        out.push('+');
    }

    out
}

fn push_piece_move(before: &BoardState, mv: &Move, out: &mut String) {
    let moving = before.piece_at(mv.start());
    let is_capture = !before.piece_at(mv.target()).is_empty() || mv.is_en_passant();

    match moving.class() {
        Some(PieceClass::Pawn) | None => {
            if is_capture {
                out.push(char::from(b'a' + file_of(mv.start())));
            }
        }
        Some(class) => {
            if let Some(letter) = class.algebraic_letter() {
                out.push(letter);
            }
            if is_ambiguous(before, mv) {
                out.push_str(&square_name(mv.start()));
            }
        }
    }

    if is_capture {
        out.push('x');
    }
    out.push_str(&square_name(mv.target()));

    if let Some(class) = mv.promotion() {
        out.push('=');
        if let Some(letter) = class.algebraic_letter() {
            out.push(letter);
        }
    }
}

/// Whether another piece identical to the mover can legally reach the target.
fn is_ambiguous(before: &BoardState, mv: &Move) -> bool {
    let moving = before.piece_at(mv.start());
    if before.find_pieces(moving).len() < 2 {
        return false;
    }

    generate_legal_moves(before, mv.color()).iter().any(|other| {
        other.target() == mv.target()
            && other.start() != mv.start()
            && before.piece_at(other.start()) == moving
    })
}
