//! FEN-to-BoardState parser.
//!
//! Builds a fully-populated board state from a Forsyth-Edwards Notation
//! string: squares, side to move, castling rights, en-passant target,
//! clocks, and freshly computed threat maps.

use log::trace;

use crate::chess_errors::FenError;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Parse a FEN string.
///
/// Placement, side to move, castling and en-passant fields are required.
/// The halfmove clock and fullmove number may be omitted and default to
/// `0` and `1`.
pub fn parse_fen(fen: &str) -> Result<BoardState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side-to-move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(FenError::ExtraFields);
    }

    let mut state = BoardState::default();

    parse_board(board_part, &mut state)?;
    validate_kings(&state)?;
    state.side_to_move = parse_side_to_move(side_part)?;
    state.castling_rights = parse_castling_rights(castling_part)?;
    state.en_passant_target = parse_en_passant_square(en_passant_part)?;
    state.halfmove_clock = parse_clock("halfmove clock", halfmove_part, 0)?;
    state.fullmove_number = parse_clock("fullmove number", fullmove_part, 1)?;

    state.refresh_threat_maps();

    trace!("parsed FEN {fen:?}, {} to move", state.side_to_move);
    Ok(state)
}

fn parse_board(board_part: &str, state: &mut BoardState) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidEmptyRun(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;

            if file >= 8 {
                return Err(FenError::RankWidth {
                    rank: board_rank + 1,
                    files: file + 1,
                });
            }

            state.squares[square_at(board_rank, file as u8) as usize] = piece;
            file += 1;
        }

        if file != 8 {
            return Err(FenError::RankWidth {
                rank: board_rank + 1,
                files: file,
            });
        }
    }

    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let class = PieceClass::from_symbol(ch)?;
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(Piece::new(color, class))
}

fn validate_kings(state: &BoardState) -> Result<(), FenError> {
    for color in Color::BOTH {
        let count = state
            .find_pieces(Piece::new(color, PieceClass::King))
            .len();
        if count != 1 {
            return Err(FenError::KingCount { color, count });
        }
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<[CastlingRights; 2], FenError> {
    let mut rights = [CASTLE_NONE; 2];
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let (color, right) = match ch {
            'K' => (Color::White, CASTLE_KINGSIDE),
            'Q' => (Color::White, CASTLE_QUEENSIDE),
            'k' => (Color::Black, CASTLE_KINGSIDE),
            'q' => (Color::Black, CASTLE_QUEENSIDE),
            _ => return Err(FenError::InvalidCastling(ch)),
        };
        rights[color.index()] |= right;
    }

    Ok(rights)
}

/// The target must sit on rank 3 or 6, behind a pawn that just advanced two.
fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| FenError::InvalidEnPassant(en_passant_part.to_owned()))?;
    if !matches!(rank_of(square), 2 | 5) {
        return Err(FenError::InvalidEnPassant(en_passant_part.to_owned()));
    }

    Ok(Some(square))
}

fn parse_clock(field: &'static str, part: Option<&str>, default: u16) -> Result<u16, FenError> {
    let Some(part) = part else {
        return Ok(default);
    };
    part.parse::<u16>().map_err(|_| FenError::InvalidClock {
        field,
        value: part.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::threat_map::ThreatMap;

    #[test]
    fn parses_starting_position() {
        let state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(state.piece_at(0), Piece::new(Color::White, PieceClass::Rook));
        assert_eq!(state.piece_at(3), Piece::new(Color::White, PieceClass::Queen));
        assert_eq!(state.piece_at(60), Piece::new(Color::Black, PieceClass::King));
        assert_eq!(state.piece_at(52), Piece::new(Color::Black, PieceClass::Pawn));
        assert!(state.piece_at(28).is_empty());
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.castling_rights(Color::White), CASTLE_BOTH);
        assert_eq!(state.castling_rights(Color::Black), CASTLE_BOTH);
        assert_eq!(state.en_passant_target(), None);
        assert_eq!(state.halfmove_clock(), 0);
        assert_eq!(state.fullmove_number(), 1);
    }

    #[test]
    fn threat_maps_are_populated() {
        let state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(state.threat_map(Color::White), ThreatMap::build(&state, Color::White));
        assert!(state.is_square_threatened(20, Color::White));
        assert!(state.is_square_threatened(44, Color::Black));
        assert!(!state.is_square_threatened(28, Color::White));
    }

    #[test]
    fn parses_rights_en_passant_and_clocks() {
        let state = parse_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w Kq d6 7 42").expect("FEN should parse");
        assert_eq!(state.castling_rights(Color::White), CASTLE_KINGSIDE);
        assert_eq!(state.castling_rights(Color::Black), CASTLE_QUEENSIDE);
        assert_eq!(state.en_passant_target(), Some(43));
        assert_eq!(state.halfmove_clock(), 7);
        assert_eq!(state.fullmove_number(), 42);
    }

    #[test]
    fn clocks_are_optional() {
        let state = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("four-field FEN should parse");
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.halfmove_clock(), 0);
        assert_eq!(state.fullmove_number(), 1);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w"),
            Err(FenError::MissingField("castling rights"))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::RankCount(7))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(FenError::RankWidth { rank: 1, files: 9 })
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1"),
            Err(FenError::RankWidth { rank: 1, files: 7 })
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K2X w - - 0 1"),
            Err(FenError::InvalidPiece('X'))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/0K6 w - - 0 1"),
            Err(FenError::InvalidEmptyRun('0'))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(FenError::InvalidSideToMove("x".to_owned()))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1"),
            Err(FenError::InvalidCastling('X'))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1"),
            Err(FenError::InvalidEnPassant("e4".to_owned()))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
            Err(FenError::InvalidClock {
                field: "halfmove clock",
                value: "x".to_owned()
            })
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra"),
            Err(FenError::ExtraFields)
        );
    }

    #[test]
    fn rejects_missing_or_extra_kings() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::KingCount {
                color: Color::Black,
                count: 0
            })
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(FenError::KingCount {
                color: Color::White,
                count: 2
            })
        );
    }
}
