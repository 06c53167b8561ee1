use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{is_knight_jump, KNIGHT_OFFSETS};
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::GenerationMode;
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(
    state: &BoardState,
    start: Square,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    for offset in KNIGHT_OFFSETS {
        let target = start as i8 + offset;
        if !(0..64).contains(&target) {
            continue;
        }
        let target = target as Square;

        // Reject jumps that wrapped around the a/h file.
        if !is_knight_jump(start, target) {
            continue;
        }

        if mode.allows_target(color, state.piece_at(target)) {
            out.push(Move::plain(start, target, color, CASTLE_NONE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn knight_targets(fen: &str, from: &str) -> Vec<Square> {
        let state = parse_fen(fen).expect("FEN should parse");
        let start = sq(from);
        let color = state.piece_at(start).color().expect("knight on start square");
        let mut out = Vec::new();
        generate_knight_moves(&state, start, color, GenerationMode::Normal, &mut out);
        let mut targets: Vec<_> = out.iter().map(|mv| mv.target()).collect();
        targets.sort_unstable();
        targets
    }

    #[test]
    fn corner_knight_has_two_moves() {
        assert_eq!(
            knight_targets("4k3/8/8/8/8/8/8/4K2N w - - 0 1", "h1"),
            vec![sq("f2"), sq("g3")]
        );
        assert_eq!(
            knight_targets("4k3/8/8/8/8/8/8/N3K3 w - - 0 1", "a1"),
            vec![sq("c2"), sq("b3")]
        );
    }

    #[test]
    fn edge_knight_never_wraps() {
        let targets = knight_targets("4k3/8/8/8/7N/8/8/4K3 w - - 0 1", "h4");
        assert_eq!(targets.len(), 4);
        assert!(targets.iter().all(|&t| file_of(t) >= 5));
    }

    #[test]
    fn knight_skips_friends_and_captures_enemies() {
        let targets = knight_targets("4k3/8/8/2p5/4P3/3N4/8/4K3 w - - 0 1", "d3");
        assert!(targets.contains(&sq("c5")));
        assert!(targets.contains(&sq("e5")));
        assert!(!targets.contains(&sq("e1")));
        assert_eq!(targets.len(), 7);
    }
}
