//! Selection and pointer input handling
//!
//! Implements the two-state selection machine:
//!
//! ```text
//! AwaitingSelection --own piece--> PieceSelected(s)
//! AwaitingSelection --empty/enemy--> AwaitingSelection (no-op)
//! PieceSelected(s) --legal destination--> move applied, AwaitingSelection
//! PieceSelected(s) --other own piece--> PieceSelected(other)
//! PieceSelected(s) --anything else--> AwaitingSelection
//! ```

use tracing::debug;

use crate::game::rules;
use crate::game::session::{ClickOutcome, GameSession, MoveResult, SelectionView};
use crate::game::types::Square;

impl GameSession {
    /// Select the piece on `square` if it belongs to the side to move
    ///
    /// Any previous selection is cleared first. Returns the highlight data
    /// for an own piece and `None` otherwise.
    pub fn select(&mut self, square: Square) -> Option<SelectionView> {
        self.selection.clear();

        let Some(piece) = self.board.get(square) else {
            debug!("[INPUT] Clicked empty square {square}");
            return None;
        };
        if piece.color != self.turn.color {
            debug!("[INPUT] {piece} on {square} does not belong to the side to move");
            return None;
        }

        let highlights = rules::legal_moves(&mut self.board, piece, square);
        self.selection.select(square, highlights.clone());
        debug!(
            "[INPUT] Selected {piece} on {square} with {} legal moves",
            highlights.len()
        );

        Some(SelectionView {
            selected: square,
            highlights,
        })
    }

    /// Handle a click on `square` according to the current selection
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        let had_selection = self.selection.is_selected();

        if let Some(from) = self.selection.selected_position {
            if self.selection.can_move_to(square) {
                return ClickOutcome::Moved(self.attempt_move(from, square));
            }
        }

        match self.select(square) {
            Some(view) => ClickOutcome::Selected(view),
            None if had_selection => {
                debug!("[INPUT] Selection cleared");
                ClickOutcome::Cleared
            }
            None => ClickOutcome::Ignored,
        }
    }

    /// Start dragging the piece on `square`
    ///
    /// Only pieces of the side to move can be picked up; refusing a drag
    /// leaves the current selection untouched.
    pub fn drag_start(&mut self, square: Square) -> Option<SelectionView> {
        if self.board.get_piece_color(square) != Some(self.turn.color) {
            debug!("[INPUT] Drag refused on {square}");
            return None;
        }
        self.select(square)
    }

    /// Drop a dragged piece; an illegal drop clears the selection
    pub fn drop(&mut self, from: Square, to: Square) -> MoveResult {
        let result = self.attempt_move(from, to);
        if !result.applied {
            self.selection.clear();
        }
        result
    }
}
