//! Component module unit tests
//!
//! Validates the piece model (colors, glyphs, values) and the move record display
//! format consumed by the move list.

use super::*;
use crate::game::types::Square;

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

// ============================================================================
// PieceColor Tests
// ============================================================================

#[test]
fn test_piece_color_opponent() {
    assert_eq!(PieceColor::White.opponent(), PieceColor::Black);
    assert_eq!(PieceColor::Black.opponent(), PieceColor::White);
    assert_eq!(PieceColor::default(), PieceColor::White, "White moves first");
}

#[test]
fn test_pawn_direction_and_start_rows() {
    //! White pawns start on row 6 and advance toward row 0; Black mirrors this
    assert_eq!(PieceColor::White.pawn_direction(), -1);
    assert_eq!(PieceColor::Black.pawn_direction(), 1);
    assert_eq!(PieceColor::White.pawn_start_row(), 6);
    assert_eq!(PieceColor::Black.pawn_start_row(), 1);
    assert_eq!(PieceColor::White.back_row(), 7);
    assert_eq!(PieceColor::Black.back_row(), 0);
}

// ============================================================================
// Piece Tests
// ============================================================================

#[test]
fn test_piece_icons() {
    let white_king = Piece::new(PieceColor::White, PieceType::King);
    let black_pawn = Piece::new(PieceColor::Black, PieceType::Pawn);

    assert_eq!(white_king.icon(), "♔");
    assert_eq!(black_pawn.icon(), "♟");
    assert_eq!(white_king.ascii(), 'K');
    assert_eq!(black_pawn.ascii(), 'p');
}

#[test]
fn test_every_piece_has_distinct_icon() {
    let mut icons = Vec::new();
    for color in [PieceColor::White, PieceColor::Black] {
        for piece_type in PieceType::ALL {
            icons.push(Piece::new(color, piece_type).icon());
        }
    }
    icons.sort_unstable();
    icons.dedup();
    assert_eq!(icons.len(), 12);
}

#[test]
fn test_piece_values() {
    //! Verifies standard chess piece values
    assert_eq!(PieceType::Pawn.value(), 1);
    assert_eq!(PieceType::Knight.value(), 3);
    assert_eq!(PieceType::Bishop.value(), 3);
    assert_eq!(PieceType::Rook.value(), 5);
    assert_eq!(PieceType::Queen.value(), 9);
    assert_eq!(PieceType::King.value(), 0);
}

// ============================================================================
// MoveRecord Tests
// ============================================================================

#[test]
fn test_move_record_notation_quiet_move() {
    //! The move list shows `<icon> <from>→<to>`
    let record = MoveRecord {
        piece: Piece::new(PieceColor::White, PieceType::Pawn),
        from: sq("e2"),
        to: sq("e4"),
        captured: None,
        is_check: false,
        is_checkmate: false,
    };

    assert_eq!(record.notation(), "♙ e2→e4");
}

#[test]
fn test_move_record_notation_capture() {
    //! Captures get a trailing ` x`; check flags do not change the display
    let record = MoveRecord {
        piece: Piece::new(PieceColor::Black, PieceType::Knight),
        from: sq("f6"),
        to: sq("e4"),
        captured: Some(Piece::new(PieceColor::White, PieceType::Pawn)),
        is_check: true,
        is_checkmate: false,
    };

    assert_eq!(record.notation(), "♞ f6→e4 x");
}

#[test]
fn test_game_phase_terminal() {
    assert_eq!(GamePhase::default(), GamePhase::Playing);
    assert!(!GamePhase::Playing.is_terminal());
    assert!(!GamePhase::Check.is_terminal());
    assert!(GamePhase::Checkmate.is_terminal());
    assert!(GamePhase::Stalemate.is_terminal());
}
