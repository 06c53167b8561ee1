//! Game session: the live board state plus undo history.
//!
//! `Session` is the only mutator collaborators see. Candidate moves arrive
//! as [`MoveIntent`]s, are resolved against the legal move list for the side
//! to move, and are applied atomically. Each applied move pushes the prior
//! state so `unmake_move` restores it wholesale, threat maps included.

use log::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, generate_legal_moves_from,
};
use crate::moves::chess_move::{Move, MoveIntent};
use crate::utils::algebraic::square_name;
use crate::utils::fen_parser::parse_fen;
use crate::utils::move_notation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: BoardState,
    history: Vec<BoardState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session at the standard starting position.
    pub fn new() -> Self {
        Self::from_state(BoardState::starting_position())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::from_state(parse_fen(fen)?))
    }

    pub fn from_state(state: BoardState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.state.en_passant_target()
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.state.castling_rights(color)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.state.piece_at(square)
    }

    #[inline]
    pub fn is_square_threatened(&self, square: Square, attacker: Color) -> bool {
        self.state.is_square_threatened(square, attacker)
    }

    pub fn is_in_check(&self) -> bool {
        self.state.is_king_threatened(self.state.side_to_move())
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(&self.state, self.state.side_to_move())
    }

    /// Legal moves of the piece on `square`; empty unless it belongs to the
    /// side to move.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        if !self.state.piece_at(square).is_color(self.state.side_to_move()) {
            return Vec::new();
        }
        generate_legal_moves_from(&self.state, square)
    }

    /// The fully detailed legal move `intent` names, if any.
    pub fn resolve(&self, intent: &MoveIntent) -> Option<Move> {
        if intent.color != self.state.side_to_move() {
            return None;
        }
        intent.resolve(&self.legal_moves())
    }

    pub fn is_valid_move(&self, intent: &MoveIntent) -> bool {
        self.resolve(intent).is_some()
    }

    /// Resolve and apply `intent`. On failure the state is untouched.
    pub fn make_move(&mut self, intent: &MoveIntent) -> ChessResult<Move> {
        let Some(mv) = self.resolve(intent) else {
            debug!(
                "rejected {} {}{}",
                intent.color,
                square_name(intent.start),
                square_name(intent.target)
            );
            return Err(ChessError::IllegalMove {
                start: square_name(intent.start),
                target: square_name(intent.target),
                color: intent.color,
            });
        };

        self.history.push(self.state.clone());
        self.state.apply_move(&mv);
        debug!("applied {} {mv}, history depth {}", mv.color(), self.history.len());

        Ok(mv)
    }

    /// Restore the state before the last applied move. Returns `false` when
    /// there is nothing to undo.
    pub fn unmake_move(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                debug!("undid move, history depth {}", self.history.len());
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Algebraic name of `mv` played from the current position.
    pub fn move_name(&self, mv: &Move) -> String {
        move_notation::move_name(&self.state, mv)
    }

    pub fn to_fen(&self) -> String {
        self.state.to_fen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::FenError;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn intent(session: &Session, from: &str, to: &str) -> MoveIntent {
        MoveIntent::new(sq(from), sq(to), session.side_to_move())
    }

    #[test]
    fn make_and_unmake_restore_state() {
        let mut session = Session::new();
        let before = session.state().clone();

        let e4 = intent(&session, "e2", "e4");
        let mv = session.make_move(&e4).expect("e2e4 should be legal");
        assert_eq!(mv.en_passant_target(), Some(20));
        assert_eq!(session.en_passant_target(), Some(20));
        assert_eq!(session.side_to_move(), Color::Black);
        assert_eq!(session.history_len(), 1);

        assert!(session.unmake_move());
        assert_eq!(session.state(), &before);
        assert!(!session.unmake_move());
    }

    #[test]
    fn illegal_move_leaves_state_untouched() {
        let mut session = Session::new();
        let before = session.state().clone();

        let err = session
            .make_move(&intent(&session, "e2", "e5"))
            .expect_err("e2e5 is not legal");
        assert_eq!(
            err,
            ChessError::IllegalMove {
                start: "e2".to_owned(),
                target: "e5".to_owned(),
                color: Color::White,
            }
        );
        assert_eq!(session.state(), &before);
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn wrong_color_is_rejected() {
        let session = Session::new();
        let black = MoveIntent::new(sq("e7"), sq("e5"), Color::Black);
        assert!(!session.is_valid_move(&black));
        assert!(session.legal_moves_from(sq("e7")).is_empty());
        assert_eq!(session.legal_moves_from(sq("b1")).len(), 2);
    }

    #[test]
    fn promotion_defaults_to_queen_and_honors_preference() {
        let fen = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1";
        let mut session = Session::from_fen(fen).expect("FEN should parse");
        let queen = session
            .make_move(&intent(&session, "a7", "a8"))
            .expect("promotion should be legal");
        assert_eq!(queen.promotion(), Some(PieceClass::Queen));

        session.unmake_move();
        let knight = intent(&session, "a7", "a8").with_promotion(PieceClass::Knight);
        session.make_move(&knight).expect("under-promotion should be legal");
        assert_eq!(session.piece_at(sq("a8")), Piece::new(Color::White, PieceClass::Knight));
    }

    #[test]
    fn check_is_reported() {
        let session =
            Session::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").expect("FEN should parse");
        assert!(session.is_in_check());
        assert!(session.is_square_threatened(sq("e8"), Color::White));
    }

    #[test]
    fn bad_fen_is_an_error() {
        assert_eq!(
            Session::from_fen("8/8 w - -"),
            Err(ChessError::Fen(FenError::RankCount(2)))
        );
    }

    #[test]
    fn names_move_before_applying() {
        let session = Session::new();
        let mv = session
            .resolve(&intent(&session, "g1", "f3"))
            .expect("Nf3 should be legal");
        assert_eq!(session.move_name(&mv), "Nf3");
        assert_eq!(
            session.to_fen(),
            crate::game_state::chess_rules::STARTING_POSITION_FEN
        );
    }
}
