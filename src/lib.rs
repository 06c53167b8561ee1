//! Crate root module declarations for the mailbox chess rules engine.
//!
//! This file exposes the board state and session, move representation,
//! move generation and legality filtering, and the notation helpers so
//! binaries, tests, and collaborator code can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod session;
    pub mod threat_map;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod legal_move_generator;
    pub mod pawn_moves;
    pub mod perft;
    pub mod pseudo_legal;
    pub mod sliding_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod move_notation;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult, FenError, SquareError};
pub use game_state::board_state::BoardState;
pub use game_state::session::Session;
pub use moves::chess_move::{Move, MoveIntent};
