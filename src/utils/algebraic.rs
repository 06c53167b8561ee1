//! Square name conversions.
//!
//! Converts between algebraic coordinates (e.g., `e4`) and mailbox square
//! indices for FEN, notation, and collaborator-facing lookups.

use crate::chess_errors::SquareError;
use crate::game_state::chess_types::{file_of, rank_of, square_at, Square};

const FILE_NAMES: &[u8; 8] = b"abcdefgh";
const RANK_NAMES: &[u8; 8] = b"12345678";

/// Convert an algebraic square (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, SquareError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(SquareError::InvalidName(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(SquareError::InvalidName(square.to_owned()));
    }

    Ok(square_at(rank - b'1', file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation, checking bounds.
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, SquareError> {
    if square > 63 {
        return Err(SquareError::OutOfBounds(square));
    }
    Ok(square_name(square))
}

/// Name of an in-range square.
#[inline]
pub fn square_name(square: Square) -> String {
    let file = char::from(FILE_NAMES[file_of(square) as usize]);
    let rank = char::from(RANK_NAMES[rank_of(square) as usize & 0x7]);
    format!("{file}{rank}")
}
