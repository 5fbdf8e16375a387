//! Text rendering of a game session
//!
//! Cells are three characters wide:
//!
//! - `[♙]` the selected piece
//! - ` * ` an empty legal destination, `(♟)` a capturable piece
//! - `<♔>` a king in check
//! - ` . ` an empty square

use std::fmt::Write;

use crate::core::DisplaySettings;
use crate::game::components::{Piece, PieceColor};
use crate::game::{GameSession, Square, BOARD_SIZE};

const FILE_LABELS: [char; BOARD_SIZE as usize] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

fn glyph(piece: Piece, settings: &DisplaySettings) -> String {
    if settings.unicode_pieces {
        piece.icon().to_string()
    } else {
        piece.ascii().to_string()
    }
}

fn cell(session: &GameSession, square: Square, settings: &DisplaySettings) -> String {
    let piece = session.board().get(square);
    let selection = session.selection();

    if settings.show_highlights {
        if selection.selected_position == Some(square) {
            if let Some(piece) = piece {
                return format!("[{}]", glyph(piece, settings));
            }
        }
        if selection.can_move_to(square) {
            return match piece {
                Some(piece) => format!("({})", glyph(piece, settings)),
                None => " * ".to_string(),
            };
        }
        if session.checked_king() == Some(square) {
            if let Some(piece) = piece {
                return format!("<{}>", glyph(piece, settings));
            }
        }
    }

    match piece {
        Some(piece) => format!(" {} ", glyph(piece, settings)),
        None => " . ".to_string(),
    }
}

/// Draw the 8x8 board, White at the bottom unless `flip_board` is set
pub fn render_board(session: &GameSession, settings: &DisplaySettings) -> String {
    let mut rows: Vec<u8> = (0..BOARD_SIZE).collect();
    let mut cols: Vec<u8> = (0..BOARD_SIZE).collect();
    if settings.flip_board {
        rows.reverse();
        cols.reverse();
    }

    let files: String = cols
        .iter()
        .map(|&col| format!(" {} ", FILE_LABELS[col as usize]))
        .collect();

    let mut out = String::new();
    if settings.show_coordinates {
        let _ = writeln!(out, "   {files}");
    }

    for &row in &rows {
        let rank = BOARD_SIZE - row;
        if settings.show_coordinates {
            let _ = write!(out, "{rank}  ");
        }
        for &col in &cols {
            if let Ok(square) = Square::new(row, col) {
                out.push_str(&cell(session, square, settings));
            }
        }
        if settings.show_coordinates {
            let _ = write!(out, "  {rank}");
        }
        out.push('\n');
    }

    if settings.show_coordinates {
        let _ = writeln!(out, "   {files}");
    }
    out
}

/// Turn indicator or game-over message, followed by check and capture lines
pub fn render_status(session: &GameSession, settings: &DisplaySettings) -> String {
    let mut out = String::new();

    let game_over = session.game_over();
    if game_over.is_game_over() {
        let _ = writeln!(out, "{}", game_over.message());
    } else {
        let _ = write!(out, "{}", session.turn_indicator());
        if session.is_in_check(session.current_turn()) {
            out.push_str(" (check)");
        }
        out.push('\n');
    }

    for color in [PieceColor::White, PieceColor::Black] {
        let captured: Vec<String> = session
            .captured_pieces(color)
            .iter()
            .map(|&piece| glyph(piece, settings))
            .collect();
        if !captured.is_empty() {
            let _ = writeln!(out, "{color} captured: {}", captured.join(" "));
        }
    }

    let advantage = session.captured().material_advantage();
    if advantage != 0 {
        let leader = if advantage > 0 {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        let _ = writeln!(out, "Material: {leader} +{}", advantage.abs());
    }

    out
}

/// Numbered move list, one full move per line
pub fn render_history(session: &GameSession) -> String {
    let notations = session.move_history();
    if notations.is_empty() {
        return "No moves yet.\n".to_string();
    }

    let mut out = String::new();
    for (index, pair) in notations.chunks(2).enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, pair.join("   "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_initial_board_rendering() {
        let session = GameSession::new();
        let board = render_board(&session, &DisplaySettings::default());
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].trim(), "a  b  c  d  e  f  g  h");
        assert!(lines[1].starts_with("8   ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜"));
        assert!(lines[8].starts_with("1   ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖"));
    }

    #[test]
    fn test_ascii_flipped_board() {
        let session = GameSession::new();
        let settings = DisplaySettings {
            unicode_pieces: false,
            flip_board: true,
            show_coordinates: false,
            ..DisplaySettings::default()
        };
        let board = render_board(&session, &settings);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " R  N  B  K  Q  B  N  R ");
        assert_eq!(lines[7], " r  n  b  k  q  b  n  r ");
    }

    #[test]
    fn test_selection_highlights() {
        let mut session = GameSession::new();
        session.select(sq("e2"));
        let settings = DisplaySettings {
            show_coordinates: false,
            ..DisplaySettings::default()
        };
        let board = render_board(&session, &settings);
        let lines: Vec<&str> = board.lines().collect();

        // rank 2 is the 7th line, rank 4 the 5th
        assert_eq!(lines[6], " ♙  ♙  ♙  ♙ [♙] ♙  ♙  ♙ ");
        assert_eq!(lines[4], " .  .  .  .  *  .  .  . ");
        assert_eq!(lines[5], " .  .  .  .  *  .  .  . ");
    }

    #[test]
    fn test_status_and_history() {
        let mut session = GameSession::new();
        let settings = DisplaySettings::default();
        assert_eq!(render_status(&session, &settings), "White to move\n");
        assert_eq!(render_history(&session), "No moves yet.\n");

        session.attempt_move(sq("e2"), sq("e4"));
        session.attempt_move(sq("d7"), sq("d5"));
        session.attempt_move(sq("e4"), sq("d5"));

        assert_eq!(
            render_status(&session, &settings),
            "Black to move\nWhite captured: ♟\nMaterial: White +1\n"
        );
        assert_eq!(
            render_history(&session),
            "  1. ♙ e2→e4   ♟ d7→d5\n  2. ♙ e4→d5 x\n"
        );
    }
}
