//! Per-color attack bitboards.
//!
//! A threat map is the union of every target square the pseudo-legal
//! generator reports in attack-only mode for one color. Maps are always
//! rebuilt from scratch; nothing patches them incrementally.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::pseudo_legal::{generate_pseudo_legal_moves, GenerationMode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ThreatMap(u64);

impl ThreatMap {
    pub const EMPTY: ThreatMap = ThreatMap(0);

    /// Squares attacked by `color` in `state`.
    pub fn build(state: &BoardState, color: Color) -> Self {
        let mut attacks = Vec::with_capacity(128);
        generate_pseudo_legal_moves(state, color, GenerationMode::AttackOnly, &mut attacks);

        let mut map = ThreatMap::EMPTY;
        for mv in attacks.iter().filter(|mv| mv.castle().is_none()) {
            map.set(mv.target());
        }
        map
    }

    #[inline]
    pub fn from_bits(bits: u64) -> Self {
        ThreatMap(bits)
    }

    #[inline]
    pub fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn is_threatened(self, square: Square) -> bool {
        self.0 & (1u64 << square) != 0
    }

    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Attacked squares in ascending order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let square = bits.trailing_zeros() as Square;
            bits &= bits - 1;
            Some(square)
        })
    }

    #[inline]
    fn set(&mut self, square: Square) {
        self.0 |= 1u64 << square;
    }
}
