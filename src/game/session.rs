//! Game session - one game's board plus its bookkeeping
//!
//! [`GameSession`] owns the [`BoardState`] exclusively. A presentation layer
//! drives it through selection and move requests (see [`crate::game::systems`])
//! and reads state back through the queries below; it never mutates the board
//! directly. Sessions are independent values, so any number can coexist.

use serde::Serialize;

use crate::game::components::{GamePhase, Piece, PieceColor};
use crate::game::resources::{
    CapturedPieces, CurrentTurn, GameOverState, MoveHistory, Selection, Terminal,
};
use crate::game::rules::{self, BoardState};
use crate::game::types::Square;

/// Highlight data for a selected piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub selected: Square,
    pub highlights: Vec<Square>,
}

/// Why a move request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveRejection {
    /// The origin square is empty
    NoPiece,
    /// The origin holds a piece of the side not on move
    WrongColor,
    /// The destination is not among the piece's legal moves
    IllegalDestination,
}

/// Outcome of a move request
///
/// `next_turn`, `in_check` and `terminal` describe the position after the
/// request, whether or not it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    pub applied: bool,
    pub captured: Option<Piece>,
    pub next_turn: PieceColor,
    pub in_check: bool,
    pub terminal: Option<Terminal>,
    pub rejection: Option<MoveRejection>,
}

/// Result of a click on a square
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ClickOutcome {
    /// An own piece is now selected
    Selected(SelectionView),
    /// The click completed a move from the selected square
    Moved(MoveResult),
    /// A previous selection was dropped
    Cleared,
    /// Nothing was selected and nothing selectable was clicked
    Ignored,
}

/// A single game: board, side to move, selection and history
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: BoardState,
    pub(crate) turn: CurrentTurn,
    pub(crate) selection: Selection,
    pub(crate) history: MoveHistory,
    pub(crate) captured: CapturedPieces,
    pub(crate) game_over: GameOverState,
    pub(crate) phase: GamePhase,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session at the standard initial position with White to move
    pub fn new() -> Self {
        tracing::info!("[GAME] New game started");
        Self::from_position(BoardState::standard(), PieceColor::White)
    }

    /// A session starting from an arbitrary position, used for puzzles and tests
    ///
    /// Positions without a king are accepted; that side is simply never in check.
    pub fn from_position(board: BoardState, side_to_move: PieceColor) -> Self {
        let mut session = Self {
            board,
            turn: CurrentTurn {
                color: side_to_move,
                move_number: 1,
            },
            selection: Selection::default(),
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
            game_over: GameOverState::default(),
            phase: GamePhase::default(),
        };
        session.update_game_phase();
        session
    }

    /// Reset to the standard initial position, clearing history, captures and selection
    pub fn new_game(&mut self) {
        self.board = BoardState::standard();
        self.turn = CurrentTurn::default();
        self.selection.clear();
        self.history.clear();
        self.captured.clear();
        self.game_over = GameOverState::Playing;
        self.phase = GamePhase::Playing;
        tracing::info!("[GAME] New game started");
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn current_turn(&self) -> PieceColor {
        self.turn.color
    }

    pub fn move_number(&self) -> u32 {
        self.turn.move_number
    }

    /// Text for a turn indicator, e.g. "White to move"
    pub fn turn_indicator(&self) -> String {
        self.turn.indicator()
    }

    pub fn is_in_check(&self, color: PieceColor) -> bool {
        rules::is_in_check(&self.board, color)
    }

    /// Square of the side-to-move's king when it is in check, for highlighting
    pub fn checked_king(&self) -> Option<Square> {
        let color = self.turn.color;
        self.board
            .find_king(color)
            .filter(|_| self.is_in_check(color))
    }

    /// Legal destinations of the piece on `square`, regardless of whose turn it is
    pub fn legal_moves(&mut self, square: Square) -> Vec<Square> {
        rules::legal_moves_from(&mut self.board, square)
    }

    pub fn is_checkmate(&mut self, color: PieceColor) -> bool {
        rules::is_checkmate(&mut self.board, color)
    }

    pub fn is_stalemate(&mut self, color: PieceColor) -> bool {
        rules::is_stalemate(&mut self.board, color)
    }

    /// Display strings of every applied move, oldest first
    pub fn move_history(&self) -> Vec<String> {
        self.history.notations()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Pieces captured by `color`, in capture order
    pub fn captured_pieces(&self, color: PieceColor) -> &[Piece] {
        self.captured.captured_by(color)
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selection.selected_position
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> GameOverState {
        self.game_over
    }

    /// Terminal condition of the side to move, if any
    pub fn terminal(&self) -> Option<Terminal> {
        match self.phase {
            GamePhase::Checkmate => Some(Terminal::Checkmate),
            GamePhase::Stalemate => Some(Terminal::Stalemate),
            GamePhase::Playing | GamePhase::Check => None,
        }
    }
}
