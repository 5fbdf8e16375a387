//! Selection resource for tracking the selected piece

use crate::game::types::Square;

/// Currently selected square and the legal destinations highlighted for it
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_position: Option<Square>,
    pub possible_moves: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, square: Square, possible_moves: Vec<Square>) {
        self.selected_position = Some(square);
        self.possible_moves = possible_moves;
    }

    pub fn clear(&mut self) {
        self.selected_position = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_position.is_some()
    }

    pub fn can_move_to(&self, square: Square) -> bool {
        self.possible_moves.contains(&square)
    }
}
