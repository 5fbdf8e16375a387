//! Game over state tracking and result management
//!
//! Records how the game ended so the presentation layer can announce it.
//! The state is informational: the session does not lock input once it is
//! set, the side to move simply has no legal moves left.

use serde::{Deserialize, Serialize};

use crate::game::components::PieceColor;

/// How a finished game ended, from the point of view of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terminal {
    Checkmate,
    Stalemate,
}

/// Resource tracking the game's end state
///
/// ```text
/// Playing → WhiteWon / BlackWon / Stalemate
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// White won by checkmate
    WhiteWon,

    /// Black won by checkmate
    BlackWon,

    /// Draw by stalemate: the side to move has no legal move and is not in check
    Stalemate,
}

impl GameOverState {
    /// Result after `side_to_move` reached `terminal`
    pub fn from_terminal(side_to_move: PieceColor, terminal: Terminal) -> Self {
        match terminal {
            Terminal::Checkmate => match side_to_move {
                PieceColor::White => GameOverState::BlackWon,
                PieceColor::Black => GameOverState::WhiteWon,
            },
            Terminal::Stalemate => GameOverState::Stalemate,
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Human-readable message describing the game result
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "White wins by checkmate!",
            GameOverState::BlackWon => "Black wins by checkmate!",
            GameOverState::Stalemate => "Stalemate! Draw.",
        }
    }

    /// The winner, or `None` for draws and games in progress
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::WhiteWon => Some(PieceColor::White),
            GameOverState::BlackWon => Some(PieceColor::Black),
            GameOverState::Playing | GameOverState::Stalemate => None,
        }
    }
}
