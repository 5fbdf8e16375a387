//! Resource module unit tests
//!
//! Pure data structure tests for turn tracking, selection, move history,
//! captured pieces and the game over state, independent of the session.

use super::*;
use crate::game::components::{MoveRecord, Piece, PieceColor, PieceType};
use crate::game::types::Square;

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn piece(color: PieceColor, piece_type: PieceType) -> Piece {
    Piece::new(color, piece_type)
}

// ============================================================================
// CurrentTurn Tests
// ============================================================================

#[test]
fn test_multiple_turn_switches() {
    //! Turn alternates strictly; after N switches White moves iff N is even
    let mut turn = CurrentTurn::default();

    for n in 1..=10u32 {
        turn.switch();
        let expected = if n % 2 == 0 {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        assert_eq!(turn.color, expected, "after {n} switches");
        assert_eq!(turn.move_number, n / 2 + 1);
    }
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_selection_select_and_clear() {
    let mut selection = Selection::default();
    assert!(!selection.is_selected());

    selection.select(sq("e2"), vec![sq("e3"), sq("e4")]);
    assert!(selection.is_selected());
    assert!(selection.can_move_to(sq("e4")));
    assert!(!selection.can_move_to(sq("e5")));

    selection.clear();
    assert_eq!(selection, Selection::default());
}

// ============================================================================
// MoveHistory Tests
// ============================================================================

#[test]
fn test_move_history_records_in_order() {
    let mut history = MoveHistory::default();
    assert!(history.is_empty());
    assert!(history.last_move().is_none());

    history.add_move(MoveRecord {
        piece: piece(PieceColor::White, PieceType::Pawn),
        from: sq("e2"),
        to: sq("e4"),
        captured: None,
        is_check: false,
        is_checkmate: false,
    });
    history.add_move(MoveRecord {
        piece: piece(PieceColor::Black, PieceType::Pawn),
        from: sq("d7"),
        to: sq("d5"),
        captured: None,
        is_check: false,
        is_checkmate: false,
    });
    history.add_move(MoveRecord {
        piece: piece(PieceColor::White, PieceType::Pawn),
        from: sq("e4"),
        to: sq("d5"),
        captured: Some(piece(PieceColor::Black, PieceType::Pawn)),
        is_check: false,
        is_checkmate: false,
    });

    assert_eq!(history.len(), 3);
    assert_eq!(
        history.notations(),
        vec!["♙ e2→e4", "♟ d7→d5", "♙ e4→d5 x"]
    );
    assert_eq!(history.last_move().map(|m| m.to), Some(sq("d5")));

    history.clear();
    assert!(history.is_empty());
}

// ============================================================================
// CapturedPieces Tests
// ============================================================================

#[test]
fn test_add_capture_credits_capturing_side() {
    let mut captured = CapturedPieces::default();
    captured.add_capture(piece(PieceColor::Black, PieceType::Queen));

    assert_eq!(captured.captured_by(PieceColor::White).len(), 1);
    assert!(captured.captured_by(PieceColor::Black).is_empty());
    assert_eq!(captured.icons(PieceColor::White), vec!["♛"]);
}

#[test]
fn test_material_advantage() {
    let mut captured = CapturedPieces::default();
    assert_eq!(captured.material_advantage(), 0);

    // White captures: Queen(9), Pawn(1) = 10
    captured.add_capture(piece(PieceColor::Black, PieceType::Queen));
    captured.add_capture(piece(PieceColor::Black, PieceType::Pawn));
    // Black captures: Rook(5), Knight(3) = 8
    captured.add_capture(piece(PieceColor::White, PieceType::Rook));
    captured.add_capture(piece(PieceColor::White, PieceType::Knight));

    assert_eq!(captured.material_advantage(), 2, "White should be +2 (10-8)");

    captured.clear();
    assert_eq!(captured, CapturedPieces::default());
}

// ============================================================================
// GameOverState Tests
// ============================================================================

#[test]
fn test_game_over_from_terminal() {
    assert_eq!(
        GameOverState::from_terminal(PieceColor::White, Terminal::Checkmate),
        GameOverState::BlackWon
    );
    assert_eq!(
        GameOverState::from_terminal(PieceColor::Black, Terminal::Checkmate),
        GameOverState::WhiteWon
    );
    assert_eq!(
        GameOverState::from_terminal(PieceColor::Black, Terminal::Stalemate),
        GameOverState::Stalemate
    );
}

#[test]
fn test_game_over_messages_and_winner() {
    assert!(!GameOverState::default().is_game_over());
    assert_eq!(GameOverState::WhiteWon.message(), "White wins by checkmate!");
    assert_eq!(GameOverState::BlackWon.message(), "Black wins by checkmate!");
    assert_eq!(GameOverState::Stalemate.message(), "Stalemate! Draw.");

    assert_eq!(GameOverState::BlackWon.winner(), Some(PieceColor::Black));
    assert_eq!(GameOverState::Stalemate.winner(), None);
    assert!(GameOverState::Stalemate.is_game_over());
}
