//! Game state components

use std::fmt;

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use crate::game::types::Square;

/// Phase of the game as seen by the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GamePhase {
    /// Checkmate and stalemate leave the side to move without legal moves
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Checkmate | GamePhase::Stalemate)
    }
}

/// Move record for history, used for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    /// Whether the move left the opponent in check
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl MoveRecord {
    /// Display string: `<icon> <from>→<to>` with a trailing ` x` on captures
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}→{}", self.piece.icon(), self.from, self.to)?;
        if self.captured.is_some() {
            f.write_str(" x")?;
        }
        Ok(())
    }
}
