//! Resolved moves and the caller-facing move intent.
//!
//! A [`Move`] describes one ply completely, side effects included, and can
//! only be produced by the named constructors below. Callers that only know
//! a start/target pair describe what they want with a [`MoveIntent`], which
//! is resolved against the legal move list.

use std::fmt;

use crate::game_state::chess_rules::{rook_home, rook_home_right};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_name;

/// Secondary piece relocation carried by castling and en-passant moves.
///
/// `to == None` removes the piece on `from` (en-passant capture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecondaryMove {
    pub from: Square,
    pub to: Option<Square>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    start: Square,
    target: Square,
    color: Color,
    secondary: Option<SecondaryMove>,
    en_passant_target: Option<Square>,
    prevents_castling: CastlingRights,
    revokes_opponent_castling: CastlingRights,
    castle: Option<CastleSide>,
    promotion: Option<PieceClass>,
}

impl Move {
    fn base(start: Square, target: Square, color: Color) -> Self {
        Self {
            start,
            target,
            color,
            secondary: None,
            en_passant_target: None,
            prevents_castling: CASTLE_NONE,
            revokes_opponent_castling: rook_home_right(color.opposite(), target),
            castle: None,
            promotion: None,
        }
    }

    /// Regular move or capture. `prevents_castling` lists the mover's rights
    /// this move gives up (king moves, rooks leaving home).
    pub fn plain(
        start: Square,
        target: Square,
        color: Color,
        prevents_castling: CastlingRights,
    ) -> Self {
        Self {
            prevents_castling,
            ..Self::base(start, target, color)
        }
    }

    /// Pawn double push; the skipped square becomes the en-passant target.
    pub fn double_push(start: Square, target: Square, color: Color) -> Self {
        Self {
            en_passant_target: Some(((start as u16 + target as u16) / 2) as Square),
            ..Self::base(start, target, color)
        }
    }

    /// Pawn capturing en passant; `captured_pawn` is removed from the board.
    pub fn en_passant_capture(
        start: Square,
        target: Square,
        color: Color,
        captured_pawn: Square,
    ) -> Self {
        Self {
            secondary: Some(SecondaryMove {
                from: captured_pawn,
                to: None,
            }),
            ..Self::base(start, target, color)
        }
    }

    /// Pawn reaching the back rank and turning into `class`.
    pub fn promote(start: Square, target: Square, color: Color, class: PieceClass) -> Self {
        Self {
            promotion: Some(class),
            ..Self::base(start, target, color)
        }
    }

    /// Castling; the king lands on the g- or c-file and the rook jumps over it.
    pub fn castling(color: Color, side: CastleSide) -> Self {
        let rank = color.home_rank();
        let (king_file, rook_file) = match side {
            CastleSide::Kingside => (6, 5),
            CastleSide::Queenside => (2, 3),
        };

        Self {
            secondary: Some(SecondaryMove {
                from: rook_home(color, side),
                to: Some(square_at(rank, rook_file)),
            }),
            prevents_castling: CASTLE_BOTH,
            castle: Some(side),
            ..Self::base(square_at(rank, 4), square_at(rank, king_file), color)
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Square {
        self.target
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn secondary(&self) -> Option<SecondaryMove> {
        self.secondary
    }

    /// En-passant target the position has after this move.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn prevents_castling(&self) -> CastlingRights {
        self.prevents_castling
    }

    #[inline]
    pub fn revokes_opponent_castling(&self) -> CastlingRights {
        self.revokes_opponent_castling
    }

    #[inline]
    pub fn castle(&self) -> Option<CastleSide> {
        self.castle
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceClass> {
        self.promotion
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.secondary, Some(SecondaryMove { to: None, .. }))
    }

    /// The identifying triple a caller would use to ask for this move.
    pub fn intent(&self) -> MoveIntent {
        MoveIntent {
            start: self.start,
            target: self.target,
            color: self.color,
            promotion: self.promotion,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.start), square_name(self.target))?;
        if let Some(class) = self.promotion {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

/// Under-specified move request, e.g. a click pair from a board UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveIntent {
    pub start: Square,
    pub target: Square,
    pub color: Color,
    /// Preferred promotion class; `None` accepts the first one generated.
    pub promotion: Option<PieceClass>,
}

impl MoveIntent {
    pub fn new(start: Square, target: Square, color: Color) -> Self {
        Self {
            start,
            target,
            color,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, class: PieceClass) -> Self {
        self.promotion = Some(class);
        self
    }

    /// Coarse match on (start, target, color), narrowed by the promotion
    /// preference when one is given.
    pub fn matches(&self, mv: &Move) -> bool {
        self.start == mv.start
            && self.target == mv.target
            && self.color == mv.color
            && self.promotion.map_or(true, |class| mv.promotion == Some(class))
    }

    /// First move in `moves` this intent matches.
    pub fn resolve<'a, I>(&self, moves: I) -> Option<Move>
    where
        I: IntoIterator<Item = &'a Move>,
    {
        moves.into_iter().find(|mv| self.matches(mv)).copied()
    }
}
