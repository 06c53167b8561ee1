//! Primitive chess value types shared by every subsystem.
//!
//! Pieces use the packed mailbox encoding: a color bit (`White = 8`,
//! `Black = 16`) OR'd with a 3-bit class. Squares are plain indices where
//! `0 == a1`, `7 == h1` and `63 == h8`.

use std::fmt;

/// Board square index (`0..=63`, `rank * 8 + file`).
pub type Square = u8;

/// Per-color castling rights bitset.
pub type CastlingRights = u8;

pub const CASTLE_NONE: CastlingRights = 0;
pub const CASTLE_QUEENSIDE: CastlingRights = 1 << 0;
pub const CASTLE_KINGSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BOTH: CastlingRights = CASTLE_QUEENSIDE | CASTLE_KINGSIDE;

/// Which wing a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// The castling-rights bit this side consumes.
    #[inline]
    pub const fn right(self) -> CastlingRights {
        match self {
            CastleSide::Kingside => CASTLE_KINGSIDE,
            CastleSide::Queenside => CASTLE_QUEENSIDE,
        }
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square & 0x7
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square >> 3
}

#[inline]
pub const fn square_at(rank: u8, file: u8) -> Square {
    rank * 8 + file
}

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Color bit used in the packed piece encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 16,
        }
    }

    /// Rank the color's king and rooks start on.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank the color's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank on which the color's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Signed square offset of a single pawn step.
    #[inline]
    pub const fn pawn_push(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => -8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece class, with the discriminants of the packed encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceClass {
    King = 1,
    Pawn = 2,
    Knight = 3,
    Bishop = 4,
    Rook = 5,
    Queen = 6,
}

impl PieceClass {
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & Piece::CLASS_MASK {
            1 => Some(PieceClass::King),
            2 => Some(PieceClass::Pawn),
            3 => Some(PieceClass::Knight),
            4 => Some(PieceClass::Bishop),
            5 => Some(PieceClass::Rook),
            6 => Some(PieceClass::Queen),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(
            self,
            PieceClass::Bishop | PieceClass::Rook | PieceClass::Queen
        )
    }

    /// Letter used in algebraic notation; pawns have none.
    pub const fn algebraic_letter(self) -> Option<char> {
        match self {
            PieceClass::King => Some('K'),
            PieceClass::Pawn => None,
            PieceClass::Knight => Some('N'),
            PieceClass::Bishop => Some('B'),
            PieceClass::Rook => Some('R'),
            PieceClass::Queen => Some('Q'),
        }
    }

    /// Lowercase FEN symbol.
    pub const fn symbol(self) -> char {
        match self {
            PieceClass::King => 'k',
            PieceClass::Pawn => 'p',
            PieceClass::Knight => 'n',
            PieceClass::Bishop => 'b',
            PieceClass::Rook => 'r',
            PieceClass::Queen => 'q',
        }
    }

    /// Inverse of [`PieceClass::symbol`], case-insensitive.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'k' => Some(PieceClass::King),
            'p' => Some(PieceClass::Pawn),
            'n' => Some(PieceClass::Knight),
            'b' => Some(PieceClass::Bishop),
            'r' => Some(PieceClass::Rook),
            'q' => Some(PieceClass::Queen),
            _ => None,
        }
    }
}

impl fmt::Display for PieceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceClass::King => "King",
            PieceClass::Pawn => "Pawn",
            PieceClass::Knight => "Knight",
            PieceClass::Bishop => "Bishop",
            PieceClass::Rook => "Rook",
            PieceClass::Queen => "Queen",
        };
        f.write_str(name)
    }
}

/// Packed square occupant. `Piece::NONE` marks an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    pub const NONE: Piece = Piece(0);
    pub const CLASS_MASK: u8 = 0x7;

    #[inline]
    pub const fn new(color: Color, class: PieceClass) -> Self {
        Piece(color.bits() | class as u8)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn class(self) -> Option<PieceClass> {
        PieceClass::from_bits(self.0)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.0 & !Self::CLASS_MASK {
            8 => Some(Color::White),
            16 => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.0 & color.bits() != 0
    }

    #[inline]
    pub fn is(self, color: Color, class: PieceClass) -> bool {
        self == Piece::new(color, class)
    }

    /// FEN symbol: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> Option<char> {
        let (color, class) = (self.color()?, self.class()?);
        Some(match color {
            Color::White => class.symbol().to_ascii_uppercase(),
            Color::Black => class.symbol(),
        })
    }

    /// Human-readable name such as "White Knight"; empty for an empty square.
    pub fn name(self) -> String {
        match (self.color(), self.class()) {
            (Some(color), Some(class)) => format!("{color} {class}"),
            _ => String::new(),
        }
    }
}
