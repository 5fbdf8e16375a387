//! Move history tracking resource
//!
//! Keeps a chronological, append-only record of the moves played. The
//! engine never reads it back; it exists for the move list display.

use crate::game::components::MoveRecord;

/// Resource storing the move history for the current game
///
/// Index 0 is White's first move, index 1 Black's reply, and so on.
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Get the most recent move, if any
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Number of half-moves (ply) played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Display strings for every move, oldest first
    pub fn notations(&self) -> Vec<String> {
        self.moves.iter().map(MoveRecord::notation).collect()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
