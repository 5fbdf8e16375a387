//! Turn tracking resource
//!
//! Manages the current player's turn and move counter. This is the single
//! source of truth for whose turn it is, and only the session flips it after
//! a move has been applied.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch() → Black plays → switch() → Move 2: White plays
//! ```

use crate::game::components::PieceColor;

/// Tracks whose turn it currently is and the current move number
///
/// Move numbers follow standard chess notation: move 1 is White's first move
/// and Black's response, and the number increments only after Black moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTurn {
    pub color: PieceColor,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// Switch to the other player's turn
    pub fn switch(&mut self) {
        self.color = match self.color {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.move_number += 1;
                PieceColor::White
            }
        };
    }

    /// Text for a turn indicator, e.g. "White to move"
    pub fn indicator(&self) -> String {
        format!("{} to move", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_turn_default() {
        //! Verifies that games start with White to move on move 1
        let turn = CurrentTurn::default();
        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(turn.move_number, 1);
    }

    #[test]
    fn test_turn_switch_black_to_white() {
        //! Tests switching from Black to White increments the move number
        let mut turn = CurrentTurn {
            color: PieceColor::Black,
            move_number: 1,
        };
        turn.switch();

        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(
            turn.move_number, 2,
            "Move number should increment when Black completes their turn"
        );
    }

    #[test]
    fn test_turn_indicator() {
        let mut turn = CurrentTurn::default();
        assert_eq!(turn.indicator(), "White to move");
        turn.switch();
        assert_eq!(turn.indicator(), "Black to move");
    }
}
