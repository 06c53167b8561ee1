//! Mailbox board state.
//!
//! `BoardState` stores the 64 square occupants plus side to move, castling
//! rights, en-passant target, clocks, and one threat map per color. Threat
//! maps are rebuilt after every applied move so they always agree with the
//! squares.

use std::fmt;

use crate::chess_errors::FenError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::threat_map::ThreatMap;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub(crate) squares: [Piece; 64],
    pub(crate) side_to_move: Color,
    /// Indexed by [`Color::index`].
    pub(crate) castling_rights: [CastlingRights; 2],
    pub(crate) en_passant_target: Option<Square>,
    /// Indexed by [`Color::index`].
    pub(crate) threat_maps: [ThreatMap; 2],
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            squares: [Piece::NONE; 64],
            side_to_move: Color::White,
            castling_rights: [CASTLE_NONE; 2],
            en_passant_target: None,
            threat_maps: [ThreatMap::EMPTY; 2],
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl BoardState {
    pub fn starting_position() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square as usize]
    }

    #[inline]
    pub fn squares(&self) -> &[Piece; 64] {
        &self.squares
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling_rights[color.index()]
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Squares attacked by `color`.
    #[inline]
    pub fn threat_map(&self, color: Color) -> ThreatMap {
        self.threat_maps[color.index()]
    }

    /// Whether `attacker` attacks `square`.
    #[inline]
    pub fn is_square_threatened(&self, square: Square, attacker: Color) -> bool {
        self.threat_maps[attacker.index()].is_threatened(square)
    }

    /// Every square holding exactly `piece`, ascending.
    pub fn find_pieces(&self, piece: Piece) -> Vec<Square> {
        (0..64u8).filter(|&sq| self.squares[sq as usize] == piece).collect()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceClass::King);
        (0..64u8).find(|&sq| self.squares[sq as usize] == king)
    }

    /// Whether `color`'s king is attacked by the opponent.
    ///
    /// # Panics
    /// If `color` has no king; every legality rule depends on locating it.
    pub fn is_king_threatened(&self, color: Color) -> bool {
        let king = self
            .king_square(color)
            .unwrap_or_else(|| panic!("{color} king missing from board"));
        self.is_square_threatened(king, color.opposite())
    }

    pub(crate) fn refresh_threat_maps(&mut self) {
        let white = ThreatMap::build(self, Color::White);
        let black = ThreatMap::build(self, Color::Black);
        self.threat_maps = [white, black];
    }

    /// Apply a resolved move and rebuild both threat maps.
    pub(crate) fn apply_move(&mut self, mv: &Move) {
        self.place_move(mv);
        self.refresh_threat_maps();
    }

    /// Apply a resolved move to squares, rights, clocks and side to move,
    /// leaving threat maps stale.
    pub(crate) fn place_move(&mut self, mv: &Move) {
        let start = mv.start() as usize;
        let target = mv.target() as usize;
        let color = mv.color();

        let resets_clock = self.squares[start].class() == Some(PieceClass::Pawn)
            || !self.squares[target].is_empty();

        self.squares[target] = self.squares[start];
        self.squares[start] = Piece::NONE;

        self.castling_rights[color.index()] &= !mv.prevents_castling();
        self.castling_rights[color.opposite().index()] &= !mv.revokes_opponent_castling();

        if let Some(secondary) = mv.secondary() {
            if let Some(to) = secondary.to {
                self.squares[to as usize] = self.squares[secondary.from as usize];
            }
            self.squares[secondary.from as usize] = Piece::NONE;
        }

        if let Some(class) = mv.promotion() {
            self.squares[target] = Piece::new(color, class);
        }

        self.en_passant_target = mv.en_passant_target();

        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = self.side_to_move.opposite();
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn starting_position_queries() {
        let state = BoardState::starting_position();
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.castling_rights(Color::White), CASTLE_BOTH);
        assert_eq!(state.castling_rights(Color::Black), CASTLE_BOTH);
        assert_eq!(state.en_passant_target(), None);
        assert_eq!(state.king_square(Color::White), Some(4));
        assert_eq!(state.king_square(Color::Black), Some(60));
        assert_eq!(
            state.find_pieces(Piece::new(Color::White, PieceClass::Knight)),
            vec![1, 6]
        );
        assert_eq!(state.find_pieces(Piece::new(Color::Black, PieceClass::Pawn)).len(), 8);
        assert!(!state.is_king_threatened(Color::White));
        assert!(!state.is_king_threatened(Color::Black));
    }

    #[test]
    fn apply_double_push_sets_en_passant_and_flips_side() {
        let mut state = BoardState::starting_position();
        state.apply_move(&Move::double_push(sq("e2"), sq("e4"), Color::White));

        assert_eq!(state.piece_at(sq("e4")), Piece::new(Color::White, PieceClass::Pawn));
        assert!(state.piece_at(sq("e2")).is_empty());
        assert_eq!(state.en_passant_target(), Some(sq("e3")));
        assert_eq!(state.side_to_move(), Color::Black);
        assert!(state.is_square_threatened(sq("d5"), Color::White));
        assert_eq!(state.threat_map(Color::White), ThreatMap::build(&state, Color::White));
        assert_eq!(state.threat_map(Color::Black), ThreatMap::build(&state, Color::Black));
    }

    #[test]
    fn apply_castle_moves_rook_and_drops_rights() {
        let mut state =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").expect("FEN should parse");
        state.apply_move(&Move::castling(Color::White, CastleSide::Queenside));

        assert_eq!(state.piece_at(sq("c1")), Piece::new(Color::White, PieceClass::King));
        assert_eq!(state.piece_at(sq("d1")), Piece::new(Color::White, PieceClass::Rook));
        assert!(state.piece_at(sq("a1")).is_empty());
        assert!(state.piece_at(sq("e1")).is_empty());
        assert_eq!(state.castling_rights(Color::White), CASTLE_NONE);
        assert_eq!(state.castling_rights(Color::Black), CASTLE_BOTH);
        assert_eq!(state.halfmove_clock(), 4);
    }

    #[test]
    fn apply_en_passant_capture_removes_pawn() {
        let mut state =
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        state.apply_move(&Move::en_passant_capture(sq("e5"), sq("d6"), Color::White, sq("d5")));

        assert_eq!(state.piece_at(sq("d6")), Piece::new(Color::White, PieceClass::Pawn));
        assert!(state.piece_at(sq("d5")).is_empty());
        assert!(state.piece_at(sq("e5")).is_empty());
        assert_eq!(state.en_passant_target(), None);
    }

    #[test]
    fn apply_promotion_overwrites_target() {
        let mut state = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        state.apply_move(&Move::promote(sq("a7"), sq("a8"), Color::White, PieceClass::Knight));
        assert_eq!(state.piece_at(sq("a8")), Piece::new(Color::White, PieceClass::Knight));
        assert!(state.piece_at(sq("a7")).is_empty());
    }

    #[test]
    fn capturing_rook_on_home_square_revokes_opponent_right() {
        let mut state =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        state.apply_move(&Move::plain(sq("h1"), sq("h8"), Color::White, CASTLE_KINGSIDE));

        assert_eq!(state.castling_rights(Color::White), CASTLE_QUEENSIDE);
        assert_eq!(state.castling_rights(Color::Black), CASTLE_QUEENSIDE);
        assert_eq!(state.halfmove_clock(), 0);
    }

    #[test]
    #[should_panic(expected = "king missing")]
    fn missing_king_is_fatal() {
        let state = BoardState::default();
        state.is_king_threatened(Color::White);
    }
}
