//! Move-path enumeration for validating the generator.
//!
//! `perft` counts leaf nodes, `perft_divide` splits the count by root move,
//! and `perft_detailed` also classifies the leaf moves the way published
//! perft tables do.

use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Number of legal move sequences of length `depth` from `state`.
pub fn perft(state: &BoardState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(state, state.side_to_move());
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut child = state.clone();
    moves
        .iter()
        .map(|mv| {
            child.clone_from(state);
            child.apply_move(mv);
            perft(&child, depth - 1)
        })
        .sum()
}

/// Node count below each root move, in generation order.
pub fn perft_divide(state: &BoardState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut child = state.clone();
    generate_legal_moves(state, state.side_to_move())
        .into_iter()
        .map(|mv| {
            child.clone_from(state);
            child.apply_move(&mv);
            (mv, perft(&child, depth - 1))
        })
        .collect()
}

/// Leaf counts classified by move kind.
pub fn perft_detailed(state: &BoardState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    let mut child = state.clone();
    for mv in generate_legal_moves(state, state.side_to_move()) {
        let is_capture = !state.piece_at(mv.target()).is_empty() || mv.is_en_passant();

        child.clone_from(state);
        child.apply_move(&mv);

        if depth == 1 {
            total.nodes += 1;
            total.captures += u64::from(is_capture);
            total.en_passant += u64::from(mv.is_en_passant());
            total.castles += u64::from(mv.castle().is_some());
            total.promotions += u64::from(mv.promotion().is_some());
            total.checks += u64::from(child.is_king_threatened(child.side_to_move()));
        } else {
            total.merge(perft_detailed(&child, depth - 1));
        }
    }

    total
}
