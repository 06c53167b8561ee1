//! Coordinate move text such as `e2e4` or `e7e8q`.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{Color, PieceClass};
use crate::moves::chess_move::{Move, MoveIntent};
use crate::utils::algebraic::algebraic_to_square;

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}

/// Parse coordinate text into an intent for `color`.
///
/// A trailing promotion letter is case-insensitive and must name a class a
/// pawn may promote to.
pub fn long_algebraic_to_intent(text: &str, color: Color) -> Result<MoveIntent, ChessError> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let target = algebraic_to_square(&text[2..4])?;
    let intent = MoveIntent::new(start, target, color);

    let Some(letter) = text[4..].chars().next() else {
        return Ok(intent);
    };
    match PieceClass::from_symbol(letter) {
        Some(class @ (PieceClass::Queen | PieceClass::Rook | PieceClass::Bishop | PieceClass::Knight)) => {
            Ok(intent.with_promotion(class))
        }
        _ => Err(ChessError::InvalidMoveText(text.to_owned())),
    }
}
