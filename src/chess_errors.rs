//! Errors used throughout the rules engine.
//!
//! Parsing and move-resolution failures are recoverable and returned as
//! values. Internal invariant violations (a side without a king) are not
//! represented here: they indicate a programming error and panic.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Malformed square name or index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("invalid square name: {0:?}")]
    InvalidName(String),

    #[error("square index out of bounds: {0}")]
    OutOfBounds(Square),
}

/// Malformed Forsyth-Edwards Notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("missing {0} field in FEN")]
    MissingField(&'static str),

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    /// `rank` is the FEN rank label (8 down to 1).
    #[error("rank {rank} describes {files} files instead of 8")]
    RankWidth { rank: u8, files: usize },

    #[error("invalid empty-square count {0:?}")]
    InvalidEmptyRun(char),

    #[error("invalid piece character {0:?} in board layout")]
    InvalidPiece(char),

    #[error("invalid side-to-move field: {0:?}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character {0:?}")]
    InvalidCastling(char),

    #[error("invalid en-passant field {0:?}")]
    InvalidEnPassant(String),

    #[error("invalid {field}: {value:?}")]
    InvalidClock { field: &'static str, value: String },

    #[error("FEN has extra trailing fields")]
    ExtraFields,

    #[error("{color} has {count} kings, expected exactly one")]
    KingCount { color: Color, count: usize },
}

/// Umbrella error for collaborator-facing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    Square(#[from] SquareError),

    #[error("illegal move for {color}: {start} -> {target}")]
    IllegalMove {
        start: String,
        target: String,
        color: Color,
    },

    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
