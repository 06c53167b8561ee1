use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_name;

pub fn generate_fen(state: &BoardState) -> String {
    let board = generate_board_field(state);
    let side_to_move = match state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(
        state.castling_rights(Color::White),
        state.castling_rights(Color::Black),
    );
    let en_passant = state
        .en_passant_target()
        .map_or_else(|| "-".to_owned(), square_name);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        state.halfmove_clock(),
        state.fullmove_number()
    )
}

fn generate_board_field(state: &BoardState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            if let Some(ch) = state.piece_at(square_at(rank, file)).symbol() {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(ch);
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(white: CastlingRights, black: CastlingRights) -> String {
    let mut out = String::new();

    if (white & CASTLE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (white & CASTLE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (black & CASTLE_KINGSIDE) != 0 {
        out.push('k');
    }
    if (black & CASTLE_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
