//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the mailbox for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 is printed first so White sits at the bottom.
pub fn render_game_state(state: &BoardState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            out.push(piece_to_unicode(state.piece_at(square_at(rank, file))));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    let (Some(color), Some(class)) = (piece.color(), piece.class()) else {
        return '·';
    };
    match (color, class) {
        (Color::White, PieceClass::Pawn) => '♙',
        (Color::White, PieceClass::Knight) => '♘',
        (Color::White, PieceClass::Bishop) => '♗',
        (Color::White, PieceClass::Rook) => '♖',
        (Color::White, PieceClass::Queen) => '♕',
        (Color::White, PieceClass::King) => '♔',
        (Color::Black, PieceClass::Pawn) => '♟',
        (Color::Black, PieceClass::Knight) => '♞',
        (Color::Black, PieceClass::Bishop) => '♝',
        (Color::Black, PieceClass::Rook) => '♜',
        (Color::Black, PieceClass::Queen) => '♛',
        (Color::Black, PieceClass::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::board_state::BoardState;

    #[test]
    fn renders_starting_position() {
        let text = render_game_state(&BoardState::starting_position());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn display_matches_renderer() {
        let state = BoardState::starting_position();
        assert_eq!(state.to_string(), render_game_state(&state));
    }
}
